//! Commit record
//!
//! Commits are immutable history entries stored as text under `commits/<id>`:
//!
//! ```text
//! <author>
//! <%Y%m%d%H%M%S timestamp>
//! parent <id of the previous commit on the branch>
//!
//! <message>
//!
//! ```
//!
//! The `parent` header line is absent for the first commit of a line of history.
//! Everything after the first blank line is the message, verbatim.
//! The id itself is the file name and is not repeated in the content.

use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::errors::RepositoryError;
use bytes::Bytes;
use chrono::{NaiveDateTime, Timelike};
use std::io::BufRead;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const READABLE_TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y";
const PARENT_PREFIX: &str = "parent ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    parent: Option<CommitId>,
    author: String,
    timestamp: NaiveDateTime,
    message: String,
}

impl Commit {
    pub fn new(
        parent: Option<CommitId>,
        author: String,
        timestamp: NaiveDateTime,
        message: String,
    ) -> Self {
        Commit {
            parent,
            author,
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            message,
        }
    }

    pub fn parent(&self) -> Option<&CommitId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn timestamp(&self) -> &NaiveDateTime {
        &self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Timestamp as shown by `log`, e.g. `Fri Mar 1 12:00:00 2024`
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(READABLE_TIMESTAMP_FORMAT).to_string()
    }

    fn corrupt(line: usize, reason: impl Into<String>) -> anyhow::Error {
        RepositoryError::CorruptRecord {
            file: String::from("commit"),
            line,
            reason: reason.into(),
        }
        .into()
    }

    /// Optional `parent` header line, then the blank line opening the message
    fn split_parent_header(rest: &str) -> anyhow::Result<(Option<CommitId>, &str)> {
        if let Some(body) = rest.strip_prefix('\n') {
            return Ok((None, body));
        }

        let (line, body) = rest
            .split_once('\n')
            .ok_or_else(|| Self::corrupt(3, "missing blank line before message"))?;
        let parent = line
            .strip_prefix(PARENT_PREFIX)
            .ok_or_else(|| Self::corrupt(3, format!("expected a parent or a blank line, found '{line}'")))?;
        let parent = CommitId::try_parse(parent.to_string())
            .map_err(|e| Self::corrupt(3, format!("invalid parent '{parent}': {e}")))?;
        let body = body
            .strip_prefix('\n')
            .ok_or_else(|| Self::corrupt(4, "missing blank line before message"))?;

        Ok((Some(parent), body))
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content = format!(
            "{}\n{}\n",
            self.author,
            self.timestamp.format(TIMESTAMP_FORMAT)
        );

        if let Some(parent) = &self.parent {
            content.push_str(&format!("{PARENT_PREFIX}{parent}\n"));
        }
        content.push_str(&format!("\n{}\n\n", self.message));

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut parts = content.splitn(3, '\n');
        let author = parts
            .next()
            .filter(|author| !author.is_empty())
            .ok_or_else(|| Self::corrupt(1, "missing author"))?;
        let timestamp = parts
            .next()
            .ok_or_else(|| Self::corrupt(2, "missing timestamp"))?;
        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .map_err(|e| Self::corrupt(2, format!("invalid timestamp '{timestamp}': {e}")))?;
        let rest = parts
            .next()
            .ok_or_else(|| Self::corrupt(3, "missing blank line before message"))?;
        let (parent, body) = Self::split_parent_header(rest)?;

        Ok(Commit {
            parent,
            author: author.to_string(),
            timestamp,
            message: body.trim_end_matches('\n').to_string(),
        })
    }
}
