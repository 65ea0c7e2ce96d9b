use serde::{Deserialize, Serialize};

/// Which record collection a bulk update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Job,
    Advisory,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Job => write!(f, "job"),
            RecordKind::Advisory => write!(f, "advisory"),
        }
    }
}
