//! Append-only event log
//!
//! One line per event: `[timestamp] [actor] message`. The actor is the
//! authenticated username, or `System` for events with no session (failed
//! logins, bootstrap). Write failures never abort the operation that
//! produced the event; they are reported through tracing instead.

use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

const SYSTEM_ACTOR: &str = "System";

#[derive(Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Record an event, attributed to `actor` or to `System` when none.
    pub fn record(&self, actor: Option<&str>, message: &str) {
        let line = format_line(Utc::now(), actor, message);
        if let Err(e) = self.append(&line) {
            tracing::warn!("could not write audit log {}: {}", self.path.display(), e);
        }
    }

    fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

fn format_line(timestamp: DateTime<Utc>, actor: Option<&str>, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        actor.unwrap_or(SYSTEM_ACTOR),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn line_carries_timestamp_actor_and_message() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
        assert_eq!(
            format_line(ts, Some("admin"), "Book registered: Dune"),
            "[2026-03-14 15:09:26] [admin] Book registered: Dune\n"
        );
    }

    #[test]
    fn actor_defaults_to_system() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
        assert_eq!(
            format_line(ts, None, "Failed login attempt for 'ghost'"),
            "[2026-03-14 15:09:26] [System] Failed login attempt for 'ghost'\n"
        );
    }

    #[test]
    fn record_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");
        let log = AuditLog::new(&path);

        log.record(Some("admin"), "first");
        log.record(None, "second");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[admin] first"));
        assert!(lines[1].ends_with("[System] second"));
    }
}
