use crate::loc;
use crate::types::DeprecationState;
use crate::types::NamedGraphQLTypeRef;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}

impl EnumValue {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`EnumValue`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// `None` when the value is not deprecated, `Some("")` when it is marked
    /// `@deprecated` without a reason.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::from(&self.deprecation_reason)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of the [`EnumType`](crate::types::EnumType) to which this value belongs.
    pub fn enum_type_name(&self) -> &str {
        self.type_ref.name()
    }

    /// The name of this [`EnumValue`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
