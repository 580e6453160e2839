//! Outbound HTTP for a single fetch.
//!
//! Uses the curl crate (libcurl). One [`Session`] wraps one easy handle, so
//! the landing page request and the PDF request share connection reuse and
//! an in-memory cookie jar. Runs in the current thread; call from
//! `spawn_blocking` if used from async code.

mod headers;

pub use headers::{header_lines, BROWSER_HEADERS};

use std::io::{self, Write};
use std::time::Duration;

/// Failure of one request made through a [`Session`].
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Curl reported an error (DNS, connect, timeout, TLS, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u32 },
    /// The body sink rejected a chunk; the transfer was aborted.
    #[error("writing body of {url} failed: {source}")]
    Sink {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Browser-like curl session.
pub struct Session {
    easy: curl::easy::Easy,
}

impl Session {
    pub fn new(
        user_agent: &str,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.useragent(user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(connect_timeout)?;
        easy.timeout(timeout)?;
        // Empty path turns on the cookie engine without reading a file.
        easy.cookie_file("")?;

        let mut list = curl::easy::List::new();
        for line in header_lines() {
            list.append(&line)?;
        }
        easy.http_headers(list)?;

        Ok(Self { easy })
    }

    /// GET `url` and return the body as text (invalid UTF-8 replaced).
    pub fn get_text(&mut self, url: &str) -> Result<String, HttpError> {
        let mut body = Vec::new();
        self.get_into(url, &mut body)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// GET `url`, writing each body chunk to `sink` as it arrives.
    /// Returns the number of bytes written.
    pub fn get_into<W: Write>(&mut self, url: &str, sink: &mut W) -> Result<u64, HttpError> {
        let transport = |source| HttpError::Transport {
            url: url.to_string(),
            source,
        };

        self.easy.url(url).map_err(transport)?;
        self.easy.get(true).map_err(transport)?;

        let mut written = 0u64;
        let mut sink_error: Option<io::Error> = None;
        let performed = {
            let mut transfer = self.easy.transfer();
            transfer
                .write_function(|data| match sink.write_all(data) {
                    Ok(()) => {
                        written += data.len() as u64;
                        Ok(data.len())
                    }
                    Err(e) => {
                        sink_error = Some(e);
                        Ok(0) // abort transfer
                    }
                })
                .map_err(transport)?;
            transfer.perform()
        };

        if let Some(source) = sink_error {
            return Err(HttpError::Sink {
                url: url.to_string(),
                source,
            });
        }
        performed.map_err(transport)?;

        let status = self.easy.response_code().map_err(transport)?;
        if !(200..300).contains(&status) {
            return Err(HttpError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(written)
    }
}
