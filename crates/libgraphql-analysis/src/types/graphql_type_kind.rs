use crate::types::GraphQLType;

/// The closed set of kinds a [`GraphQLType`] can have.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    /// Indicates whether values of this kind may appear in input positions
    /// (parameters and input-object fields).
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }

    /// Indicates whether values of this kind may appear in output positions
    /// (fields of objects and interfaces).
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        value.kind()
    }
}
