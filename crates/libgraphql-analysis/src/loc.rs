use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: Option<P>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.as_ref().to_path_buf()),
            line: pos.line,
        }
    }
}

/// Where some part of a [`Schema`](crate::Schema) came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    /// Types and directives that every schema carries implicitly (built-in
    /// scalars, `@skip`/`@include`/`@deprecated`, and introspection types).
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SourceLocation {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::GraphQLBuiltIn)
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
