//! Minimal HTTP/1.1 server standing in for the luach site in integration tests.
//!
//! Serves a landing page at `/` and one PDF body at a configurable path;
//! everything else is 404. Every request is recorded so tests can assert
//! which requests were (or were not) made.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub landing_html: String,
    /// Status line for `/` (e.g. "500 Internal Server Error").
    pub landing_status: &'static str,
    /// Path the PDF is served under (e.g. "/files/issue-123.pdf").
    pub pdf_path: String,
    pub pdf_body: Vec<u8>,
    /// Optional `Set-Cookie` value sent with the landing page.
    pub set_cookie: Option<String>,
    /// Pause between the two halves of the PDF body, so concurrent
    /// downloads overlap.
    pub pdf_stall: Option<Duration>,
}

impl SiteOptions {
    pub fn new(landing_html: impl Into<String>, pdf_path: &str, pdf_body: Vec<u8>) -> Self {
        Self {
            landing_html: landing_html.into(),
            landing_status: "200 OK",
            pdf_path: pdf_path.to_string(),
            pdf_body,
            set_cookie: None,
            pdf_stall: None,
        }
    }
}

/// One request as seen by the server. Header names are lowercased.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub headers: HashMap<String, String>,
}

pub struct PageServer {
    base_url: String,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl PageServer {
    /// Base URL with trailing slash, e.g. "http://127.0.0.1:12345/".
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL without trailing slash.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn hits(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(opts: SiteOptions) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let log = Arc::new(Mutex::new(Vec::new()));
    let opts = Arc::new(opts);
    let server_log = Arc::clone(&log);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            let log = Arc::clone(&server_log);
            thread::spawn(move || handle(stream, &opts, &log));
        }
    });
    PageServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        log,
    }
}

/// A port with nothing listening on it.
pub fn closed_port_url() -> String {
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").expect("bind");
        l.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &SiteOptions, log: &Mutex<Vec<Recorded>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf).into_owned();
    let Some(recorded) = parse_request(&request) else {
        return;
    };
    let path = recorded.path.clone();
    log.lock().unwrap().push(recorded);

    let is_pdf = path == opts.pdf_path;
    let (status, content_type, body, cookie): (&str, &str, &[u8], Option<&str>) = if path == "/" {
        (
            opts.landing_status,
            "text/html; charset=utf-8",
            opts.landing_html.as_bytes(),
            opts.set_cookie.as_deref(),
        )
    } else if is_pdf {
        ("200 OK", "application/pdf", &opts.pdf_body, None)
    } else {
        ("404 Not Found", "text/plain", b"not found", None)
    };

    let cookie_header = cookie
        .map(|c| format!("Set-Cookie: {}\r\n", c))
        .unwrap_or_default();
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status,
        content_type,
        body.len(),
        cookie_header
    );
    let _ = stream.write_all(head.as_bytes());
    match opts.pdf_stall.filter(|_| is_pdf) {
        Some(stall) => {
            let (first, rest) = body.split_at(body.len() / 2);
            let _ = stream.write_all(first);
            let _ = stream.flush();
            thread::sleep(stall);
            let _ = stream.write_all(rest);
        }
        None => {
            let _ = stream.write_all(body);
        }
    }
}

fn parse_request(request: &str) -> Option<Recorded> {
    let mut lines = request.lines();
    let first = lines.next()?;
    let mut parts = first.split_whitespace();
    let _method = parts.next()?;
    let target = parts.next()?;
    let path = target.split('?').next().unwrap_or(target).to_string();
    let mut headers = HashMap::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }
    Some(Recorded { path, headers })
}
