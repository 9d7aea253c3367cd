mod deprecation_state;
mod directive;
mod directive_location;
mod enum_type;
mod enum_value;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod interface_type;
mod list_type_annotation;
mod named_graphql_type_ref;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod type_builder;
mod type_validator;
mod types_map_builder;
mod union_type;

pub use deprecation_state::DeprecationState;
pub use directive::BUILTIN_DIRECTIVE_NAMES;
pub use directive::Directive;
pub use directive_location::DirectiveLocation;
pub use enum_type::EnumType;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_graphql_type_ref::NamedGraphQLTypeRef;
pub use named_type_annotation::NamedTypeAnnotation;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub(crate) use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use type_builder::SdlSource;
pub(crate) use type_builder::TypeBuilderHelpers;
pub(crate) use type_validator::check_parameter;
pub(crate) use type_validator::TypeValidator;
pub use types_map_builder::BUILTIN_SCALAR_NAMES;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
