use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Represents a fully typechecked and immutable GraphQL schema.
///
/// All cross-type references inside a [`Schema`] are by name and resolve
/// against [`Schema::all_types()`].
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, Directive>`] containing all directives
    /// defined within this [`Schema`], in declaration order.
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`], in declaration order.
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like the
    /// `String` scalar and the `__Schema` introspection type.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// GraphQL [defines an object type named "Mutation" as the _default_
    /// Mutation type ](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema { ... }` block may name a different type instead.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_ref().map(|named_ref| named_ref.name())
    }

    /// Names of the concrete object types that a value of the `type_name`
    /// type could be at runtime:
    ///
    ///   * An object type is only ever itself.
    ///   * An interface is any object type that implements it, directly or
    ///     through another interface.
    ///   * A union is any of its members.
    ///
    /// Any other kind of type (or an unknown name) has no possible types.
    pub fn possible_type_names(&self, type_name: &str) -> Vec<&str> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => vec![obj_type.name()],

            Some(GraphQLType::Interface(_)) => {
                self.types.values()
                    .filter_map(|type_| type_.as_object())
                    .filter(|obj_type| {
                        self.implements_interface(
                            obj_type.interface_names(),
                            type_name,
                            &mut HashSet::new(),
                        )
                    })
                    .map(|obj_type| obj_type.name())
                    .collect()
            },

            Some(GraphQLType::Union(union_type)) => union_type.member_names(),

            Some(GraphQLType::Enum(_))
                | Some(GraphQLType::InputObject(_))
                | Some(GraphQLType::Scalar(_))
                | None => vec![],
        }
    }

    fn implements_interface<'a>(
        &'a self,
        interface_names: Vec<&'a str>,
        target_name: &str,
        visited: &mut HashSet<&'a str>,
    ) -> bool {
        for iface_name in interface_names {
            if iface_name == target_name {
                return true;
            }
            if !visited.insert(iface_name) {
                continue;
            }
            if let Some(iface_type) = self.types.get(iface_name)
                && self.implements_interface(
                    iface_type.interface_names(),
                    target_name,
                    visited,
                ) {
                return true;
            }
        }
        false
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// GraphQL [defines an object type named "Query" as the _default_ Query
    /// type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema { ... }` block may name a different type instead.
    pub fn query_type(&self) -> &GraphQLType {
        self.query_type.deref(self)
            .expect("type is present in schema")
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.name()
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_ref().map(|named_ref| named_ref.name())
    }
}
