//! Timestamp identifiers for commits, snapshots and stashes
//!
//! An id is the local time of its creation rendered as `%Y%m%d%H%M%S.%6f`
//! (e.g. `20240301120000.000042`). The rendering is fixed width, so sorting ids
//! as strings sorts them chronologically, and "latest" is simply the maximum.
//!
//! Ids are handed out by `CommitId::generate`, which never returns an id lower than
//! or equal to the latest one already issued: when the clock has not advanced past
//! it (fast scripted use, a pinned clock) the new id is the latest plus one
//! microsecond.

use anyhow::Context;
use chrono::{NaiveDateTime, TimeDelta, Timelike};

const COMMIT_ID_FORMAT: &str = "%Y%m%d%H%M%S%.6f";
const COMMIT_ID_LENGTH: usize = 21;
const SHORT_ID_LENGTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId {
    id: String,
    timestamp: NaiveDateTime,
}

impl CommitId {
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            anyhow::bail!("Invalid commit ID length: {}", id.len());
        }

        let timestamp = NaiveDateTime::parse_from_str(&id, COMMIT_ID_FORMAT)
            .with_context(|| format!("Invalid commit ID: {id}"))?;

        Ok(Self { id, timestamp })
    }

    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        let timestamp = timestamp
            .with_nanosecond(timestamp.nanosecond() / 1_000 * 1_000)
            .unwrap_or(timestamp);

        Self {
            id: timestamp.format(COMMIT_ID_FORMAT).to_string(),
            timestamp,
        }
    }

    /// Issue a new id for `now`, strictly greater than `latest`
    pub fn generate(now: NaiveDateTime, latest: Option<&CommitId>) -> Self {
        let candidate = Self::from_timestamp(now);

        match latest {
            Some(latest) if *latest >= candidate => {
                log::debug!("clock did not advance past {latest}, bumping id");
                latest.successor()
            }
            _ => candidate,
        }
    }

    pub fn successor(&self) -> Self {
        Self::from_timestamp(self.timestamp + TimeDelta::microseconds(1))
    }

    pub fn timestamp(&self) -> &NaiveDateTime {
        &self.timestamp
    }

    /// Last seven digits of the id, the part that distinguishes close commits
    pub fn to_short_id(&self) -> String {
        let digits = self.id.replace('.', "");
        digits[digits.len() - SHORT_ID_LENGTH..].to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
