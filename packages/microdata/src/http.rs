//! HTTP client wrapper for fetching documents by URL.

use std::io::Read;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{MicrodataError, Result};

/// User agent string identifying this extractor.
const USER_AGENT: &str = concat!("microdata-extractor/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download content from a URL with retry logic.
///
/// Uses exponential backoff for transient failures (network errors, 5xx
/// responses). Bodies larger than `max_size` are rejected, first by the
/// announced `Content-Length` and then while the body is read.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `max_size` - Maximum accepted body size in bytes
///
/// # Returns
/// Raw bytes of the response body
pub fn download_bytes(client: &Client, url: &str, max_size: u64) -> Result<Vec<u8>> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // 500ms, 1000ms, 2000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                // Client errors (4xx) won't succeed on retry
                let response = response.error_for_status().map_err(|source| {
                    MicrodataError::Download {
                        url: url.to_string(),
                        source,
                    }
                })?;

                if let Some(size) = response.content_length() {
                    check_size(url, size, max_size)?;
                }
                return read_limited(response, url, max_size);
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(MicrodataError::Download {
                    url: url.to_string(),
                    source: e,
                });
            }
        }
    }

    Err(MicrodataError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

/// Read a body, stopping one byte past `max_size` so an unannounced
/// oversized body is never held in memory in full.
fn read_limited<R: Read>(reader: R, url: &str, max_size: u64) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut body)?;
    check_size(url, body.len() as u64, max_size)?;
    Ok(body)
}

fn check_size(url: &str, size: u64, limit: u64) -> Result<()> {
    if size > limit {
        return Err(MicrodataError::ResponseTooLarge {
            url: url.to_string(),
            size,
            limit,
        });
    }
    Ok(())
}

/// Decode a response body as UTF-8, replacing invalid sequences.
///
/// # Arguments
/// * `bytes` - Raw body
/// * `what` - Description used in the warning when decoding is lossy
pub fn bytes_to_string(bytes: &[u8], what: &str) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid UTF-8 in {what}, replacing invalid sequences");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
