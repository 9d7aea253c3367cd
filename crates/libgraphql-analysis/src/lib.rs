//! Static analysis over GraphQL type systems.
//!
//! Given a [`Schema`](schema::Schema) built from SDL, this crate can:
//!
//!   * Validate that overlapping fields in a query document are mergeable
//!     ([`validation::FieldsWillMergeValidator`]).
//!   * Diff two versions of a schema and classify each difference as
//!     breaking or non-breaking ([`schema_diff::SchemaComparator`]).
//!   * Render a schema back into canonical SDL ([`printer::SchemaPrinter`]).

pub mod ast;
pub mod file_reader;
pub mod loc;
pub mod named_ref;
pub mod printer;
pub mod schema;
pub mod schema_diff;
pub mod types;
pub mod validation;
mod value;

pub use schema::Schema;
pub use value::Value;
