use serde::Serialize;

/// The category of a [`ChangeRecord`](crate::schema_diff::ChangeRecord).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    TypeRemoved,
    TypeAdded,
    TypeKindChanged,
    TypeDescriptionChanged,
    EnumValueRemoved,
    EnumValueAdded,
    EnumValueDescriptionChanged,
    EnumValueDeprecated,
    UnionMemberRemoved,
    UnionMemberAdded,
    DirectiveRemoved,
    DirectiveAdded,
    DirectiveDescriptionChanged,
    DirectiveArgumentDescriptionChanged,
    DirectiveArgumentRemoved,
    DirectiveArgumentAdded,
    DirectiveLocationAdded,
    DirectiveLocationRemoved,
    InputFieldRemoved,
    InputFieldAdded,
    InputFieldDescriptionChanged,
    ObjectTypeInterfaceAdded,
    ObjectTypeInterfaceRemoved,
    FieldRemoved,
    FieldAdded,
}
impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeRemoved => "TYPE_REMOVED",
            Self::TypeAdded => "TYPE_ADDED",
            Self::TypeKindChanged => "TYPE_KIND_CHANGED",
            Self::TypeDescriptionChanged => "TYPE_DESCRIPTION_CHANGED",
            Self::EnumValueRemoved => "ENUM_VALUE_REMOVED",
            Self::EnumValueAdded => "ENUM_VALUE_ADDED",
            Self::EnumValueDescriptionChanged => "ENUM_VALUE_DESCRIPTION_CHANGED",
            Self::EnumValueDeprecated => "ENUM_VALUE_DEPRECATED",
            Self::UnionMemberRemoved => "UNION_MEMBER_REMOVED",
            Self::UnionMemberAdded => "UNION_MEMBER_ADDED",
            Self::DirectiveRemoved => "DIRECTIVE_REMOVED",
            Self::DirectiveAdded => "DIRECTIVE_ADDED",
            Self::DirectiveDescriptionChanged => "DIRECTIVE_DESCRIPTION_CHANGED",
            Self::DirectiveArgumentDescriptionChanged => "DIRECTIVE_ARGUMENT_DESCRIPTION_CHANGED",
            Self::DirectiveArgumentRemoved => "DIRECTIVE_ARGUMENT_REMOVED",
            Self::DirectiveArgumentAdded => "DIRECTIVE_ARGUMENT_ADDED",
            Self::DirectiveLocationAdded => "DIRECTIVE_LOCATION_ADDED",
            Self::DirectiveLocationRemoved => "DIRECTIVE_LOCATION_REMOVED",
            Self::InputFieldRemoved => "INPUT_FIELD_REMOVED",
            Self::InputFieldAdded => "INPUT_FIELD_ADDED",
            Self::InputFieldDescriptionChanged => "INPUT_FIELD_DESCRIPTION_CHANGED",
            Self::ObjectTypeInterfaceAdded => "OBJECT_TYPE_INTERFACE_ADDED",
            Self::ObjectTypeInterfaceRemoved => "OBJECT_TYPE_INTERFACE_REMOVED",
            Self::FieldRemoved => "FIELD_REMOVED",
            Self::FieldAdded => "FIELD_ADDED",
        }
    }
}
impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
