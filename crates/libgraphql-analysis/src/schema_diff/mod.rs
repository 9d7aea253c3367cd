mod change_kind;
mod change_record;
mod schema_comparator;

pub use change_kind::ChangeKind;
pub use change_record::ChangeRecord;
pub use schema_comparator::SchemaComparator;

use crate::Schema;

/// Lists every difference between `old` and `new`.
pub fn compare(old: &Schema, new: &Schema) -> Vec<ChangeRecord> {
    SchemaComparator::new(old, new).compare()
}
