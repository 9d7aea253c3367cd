mod description;
mod schema_printer;

pub use schema_printer::SchemaPrinter;

use crate::Schema;

/// Renders the schema's own directives and types as SDL.
pub fn print_schema(schema: &Schema) -> String {
    SchemaPrinter::new(schema).print()
}

/// Renders the built-in directives and the introspection types as SDL.
pub fn print_introspection_schema(schema: &Schema) -> String {
    SchemaPrinter::new(schema).print_introspection()
}

#[cfg(test)]
mod tests;
