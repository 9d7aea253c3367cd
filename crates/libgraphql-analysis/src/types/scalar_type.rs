use crate::loc;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars). The five
/// built-in scalars (`Boolean`, `Float`, `ID`, `Int`, `String`) are
/// represented as [`ScalarType`]s with a
/// [`SourceLocation::GraphQLBuiltIn`](loc::SourceLocation::GraphQLBuiltIn)
/// location.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
