//! Per-request log lines returned to HTTP callers.

use chrono::Local;

/// Timestamped messages collected while handling one request. Each line is
/// also emitted as a tracing event.
#[derive(Debug, Default, Clone)]
pub struct LogTrail {
    lines: Vec<String>,
}

impl LogTrail {
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        self.lines.push(format!("[{}] {}", stamp, message));
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_timestamped_in_order() {
        let mut trail = LogTrail::default();
        trail.push("first");
        trail.push(String::from("second"));
        let lines = trail.into_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
        // "[YYYY-mm-dd HH:MM:SS] "
        assert_eq!(lines[0].find(']'), Some(20));
    }
}
