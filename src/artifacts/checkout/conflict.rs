use std::collections::BTreeMap;
use std::path::PathBuf;

/// Detected conflicts grouped by type, reported in type order
pub type ConflictsSet = BTreeMap<ConflictType, Vec<PathBuf>>;

#[derive(Debug)]
pub struct ConflictMessage {
    pub header: &'static str,
    pub footer: &'static str,
}

impl From<&ConflictType> for ConflictMessage {
    fn from(value: &ConflictType) -> Self {
        match value {
            ConflictType::StaleFile => Self {
                header: "Your local changes to the following files would be overwritten by checkout:",
                footer: "Please commit your changes or stash them before you switch branches.",
            },
            ConflictType::UntrackedOverwritten => Self {
                header: "The following untracked working tree files would be overwritten by checkout:",
                footer: "Please move or remove them before you switch branches.",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConflictType {
    /// Tracked path whose working or staged content diverges from the last commit
    StaleFile,
    /// Untracked path the target snapshot would write over
    UntrackedOverwritten,
}
