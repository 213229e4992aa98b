//! Command-line interface for the extractor.

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{SourceConfig, Syntax, DEFAULT_MAX_RESPONSE_SIZE};
use crate::error::Result;
use crate::extractor::{extract_markup, load_markup};
use crate::output::{render, save_output, OutputFormat};

/// Microdata Extractor - Extract HTML microdata items as JSON or YAML.
#[derive(Parser)]
#[command(name = "microdata-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract microdata from a URL, a file or stdin.
    Extract {
        /// URL of the page to fetch
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,

        /// HTML file to read ("-" reads stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Parse the input as well-formed XHTML
        #[arg(long)]
        xhtml: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum download size in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_RESPONSE_SIZE)]
        max_size: u64,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            url,
            file,
            xhtml,
            format,
            pretty,
            output,
            max_size,
        } => {
            let syntax = if xhtml { Syntax::Xhtml } else { Syntax::Html };
            let config = SourceConfig {
                url,
                html: file.as_deref().map(read_input).transpose()?,
                syntax,
                max_size,
            };
            extract_command(&config, format, pretty, output.as_deref())
        }
    }
}

/// Read markup from a file, or from stdin for "-".
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return Ok(io::read_to_string(io::stdin())?);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Execute the extract command.
fn extract_command(
    config: &SourceConfig,
    format: OutputFormat,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let markup = match &config.url {
        Some(url) => {
            eprintln!("{} {}", style("Fetching").bold(), style(url).cyan());

            let pb = ProgressBar::new_spinner();
            #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .expect("valid template"),
            );
            pb.set_message("Downloading document...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));

            let result = load_markup(config);
            pb.finish_and_clear();
            result?
        }
        None => load_markup(config)?,
    };

    let data = extract_markup(&markup, config.syntax)?;

    match output {
        Some(path) => {
            save_output(&data, format, pretty, path)?;
            eprintln!(
                "{} {} top-level item(s) to {}",
                style("Saved").green().bold(),
                data.len(),
                path.display()
            );
        }
        None => {
            println!("{}", render(&data, format, pretty)?.trim_end());
            eprintln!(
                "{} {} top-level item(s)",
                style("Extracted").green().bold(),
                data.len()
            );
        }
    }

    Ok(())
}
