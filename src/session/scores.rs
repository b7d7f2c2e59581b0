//! Append-only score log
//!
//! One line per finished session:
//! `<unix seconds> | <handle> | score=<score> | level=<level>`

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RunnerError};

const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub timestamp: u64,
    pub handle: String,
    pub score: u32,
    pub level: u32,
}

impl ScoreEntry {
    /// Entry stamped with the current time
    pub fn now(handle: impl Into<String>, score: u32, level: u32) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            timestamp,
            handle: handle.into(),
            score,
            level,
        }
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}score={}{sep}level={}",
            self.timestamp,
            self.handle,
            self.score,
            self.level,
            sep = SEPARATOR
        )
    }
}

impl FromStr for ScoreEntry {
    type Err = RunnerError;

    fn from_str(line: &str) -> Result<Self> {
        let malformed = || RunnerError::Config(format!("malformed score line '{}'", line));

        // the handle is free text and may itself contain the separator
        let (timestamp, rest) = line.split_once(SEPARATOR).ok_or_else(malformed)?;
        let mut tail = rest.rsplitn(3, SEPARATOR);
        let (Some(level), Some(score), Some(handle)) = (tail.next(), tail.next(), tail.next())
        else {
            return Err(malformed());
        };

        let number = |field: &str, key: &str| -> Result<u32> {
            field
                .trim()
                .strip_prefix(key)
                .and_then(|v| v.parse().ok())
                .ok_or_else(malformed)
        };

        Ok(Self {
            timestamp: timestamp.trim().parse().map_err(|_| malformed())?,
            handle: handle.to_string(),
            score: number(score, "score=")?,
            level: number(level, "level=")?,
        })
    }
}

/// Score file handle
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, creating the file if needed
    pub fn append(&self, entry: &ScoreEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }

    /// Every well-formed entry; a missing file reads as empty
    pub fn read(&self) -> Result<Vec<ScoreEntry>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            match line.parse::<ScoreEntry>() {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!("skipping score line: {}", e),
            }
        }
        Ok(entries)
    }

    /// Highest scores first, at most `limit`
    pub fn top(&self, limit: usize) -> Result<Vec<ScoreEntry>> {
        let mut entries = self.read()?;
        entries.sort_by(|a, b| b.score.cmp(&a.score).then(b.level.cmp(&a.level)));
        entries.truncate(limit);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log(name: &str) -> ScoreLog {
        let path = std::env::temp_dir().join(format!(
            "neon_runner_{}_{}.txt",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        ScoreLog::new(path)
    }

    #[test]
    fn test_entry_line_format() {
        let entry = ScoreEntry {
            timestamp: 1_700_000_000,
            handle: "zer0".into(),
            score: 315,
            level: 4,
        };
        assert_eq!(entry.to_string(), "1700000000 | zer0 | score=315 | level=4");
        assert_eq!(entry.to_string().parse::<ScoreEntry>().unwrap(), entry);
    }

    #[test]
    fn test_handle_containing_separator_survives() {
        let entry = ScoreEntry {
            timestamp: 1,
            handle: "neo | one".into(),
            score: 5,
            level: 2,
        };
        let line = entry.to_string();
        assert_eq!(line, "1 | neo | one | score=5 | level=2");
        assert_eq!(line.parse::<ScoreEntry>().unwrap(), entry);

        let log = temp_log("separator");
        log.append(&entry).unwrap();
        assert_eq!(log.read().unwrap(), vec![entry]);
        let _ = std::fs::remove_file(log.path());
    }

    #[test]
    fn test_malformed_line_rejected() {
        assert!("garbage".parse::<ScoreEntry>().is_err());
        assert!("1 | a | score=x | level=1".parse::<ScoreEntry>().is_err());
    }

    #[test]
    fn test_append_then_read() {
        let log = temp_log("append");
        log.append(&ScoreEntry::now("a", 20, 1)).unwrap();
        log.append(&ScoreEntry::now("b", 400, 5)).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(log.path())
            .and_then(|mut f| writeln!(f, "not a score"))
            .unwrap();
        log.append(&ScoreEntry::now("c", 95, 2)).unwrap();

        let entries = log.read().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].handle, "a");

        let top: Vec<_> = log.top(2).unwrap().into_iter().map(|e| e.handle).collect();
        assert_eq!(top, vec!["b", "c"]);

        let _ = std::fs::remove_file(log.path());
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let log = temp_log("missing");
        assert!(log.read().unwrap().is_empty());
    }
}
