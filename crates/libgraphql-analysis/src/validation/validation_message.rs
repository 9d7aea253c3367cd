use serde::Serialize;

/// A line/column position within a query document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MessageLocation {
    pub line: usize,
    pub column: usize,
}
impl std::convert::From<graphql_parser::Pos> for MessageLocation {
    fn from(pos: graphql_parser::Pos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}

/// A problem found while statically validating a query document against a
/// [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationMessage {
    pub(crate) message: String,
    pub(crate) locations: Vec<MessageLocation>,
    #[serde(rename = "fields")]
    pub(crate) path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) code: Option<String>,
}
impl ValidationMessage {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn locations(&self) -> &Vec<MessageLocation> {
        &self.locations
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Response keys leading from the operation root to the selection the
    /// message is about.
    pub fn path(&self) -> &Vec<String> {
        &self.path
    }
}
impl std::fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        for (i, location) in self.locations.iter().enumerate() {
            let sep = if i == 0 { " at " } else { ", " };
            write!(f, "{sep}{}:{}", location.line, location.column)?;
        }
        Ok(())
    }
}
