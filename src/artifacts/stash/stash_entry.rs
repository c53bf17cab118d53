use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::object::Packable;
use crate::errors::RepositoryError;
use bytes::Bytes;
use derive_new::new;

const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StashEntry {
    stash_id: CommitId,
    branch: BranchName,
    short_id: String,
    message: String,
}

impl StashEntry {
    pub fn stash_id(&self) -> &CommitId {
        &self.stash_id
    }

    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn short_id(&self) -> &str {
        &self.short_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parse(record: &str, line: usize) -> anyhow::Result<Self> {
        let corrupt = |reason: String| RepositoryError::CorruptRecord {
            file: String::from("stashes"),
            line,
            reason,
        };

        let fields = record.splitn(FIELD_COUNT, ' ').collect::<Vec<_>>();
        let [stash_id, branch, short_id, message] = fields[..] else {
            return Err(corrupt(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            ))
            .into());
        };

        Ok(StashEntry {
            stash_id: CommitId::try_parse(stash_id.to_string())
                .map_err(|e| corrupt(e.to_string()))?,
            branch: BranchName::try_parse(branch.to_string())
                .map_err(|e| corrupt(e.to_string()))?,
            short_id: short_id.to_string(),
            message: message.to_string(),
        })
    }
}

impl Packable for StashEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(Bytes::from(format!(
            "{} {} {} {}\n",
            self.stash_id, self.branch, self.short_id, self.message
        )))
    }
}

impl std::fmt::Display for StashEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stash@{{{}}}: WIP on {}: {} {}",
            self.stash_id, self.branch, self.short_id, self.message
        )
    }
}
