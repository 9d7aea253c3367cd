use crate::ast;

/// The places a [`Directive`](crate::types::Directive) may be applied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}
impl DirectiveLocation {
    /// The SDL spelling of this location (e.g. `FIELD_DEFINITION`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }

    /// The camel-cased spelling of this location (e.g. `FieldDefinition`).
    pub fn camel_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                    None => String::new(),
                }
            })
            .collect()
    }
}
impl std::convert::From<&ast::schema::DirectiveLocation> for DirectiveLocation {
    fn from(value: &ast::schema::DirectiveLocation) -> Self {
        use ast::schema::DirectiveLocation as AstLocation;
        match value {
            AstLocation::ArgumentDefinition => Self::ArgumentDefinition,
            AstLocation::Enum => Self::Enum,
            AstLocation::EnumValue => Self::EnumValue,
            AstLocation::Field => Self::Field,
            AstLocation::FieldDefinition => Self::FieldDefinition,
            AstLocation::FragmentDefinition => Self::FragmentDefinition,
            AstLocation::FragmentSpread => Self::FragmentSpread,
            AstLocation::InlineFragment => Self::InlineFragment,
            AstLocation::InputFieldDefinition => Self::InputFieldDefinition,
            AstLocation::InputObject => Self::InputObject,
            AstLocation::Interface => Self::Interface,
            AstLocation::Mutation => Self::Mutation,
            AstLocation::Object => Self::Object,
            AstLocation::Query => Self::Query,
            AstLocation::Scalar => Self::Scalar,
            AstLocation::Schema => Self::Schema,
            AstLocation::Subscription => Self::Subscription,
            AstLocation::Union => Self::Union,
            AstLocation::VariableDefinition => Self::VariableDefinition,
        }
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
