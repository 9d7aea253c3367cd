use crate::schema_diff::ChangeKind;
use serde::Serialize;

/// One difference between two versions of a schema.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub description: String,
    /// Whether the change can invalidate queries that were valid against the
    /// old schema.
    pub breaking: bool,
}
impl ChangeRecord {
    pub(crate) fn breaking(kind: ChangeKind, description: String) -> Self {
        Self {
            kind,
            description,
            breaking: true,
        }
    }

    pub(crate) fn non_breaking(kind: ChangeKind, description: String) -> Self {
        Self {
            kind,
            description,
            breaking: false,
        }
    }
}
impl std::fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.description)
    }
}
