/// SDL for the directives and introspection types that every schema carries
/// implicitly.
pub(super) const BUILTIN_SDL: &str = r#"
"Ignore this part of the query if `if` is true"
directive @skip(
  "Skipped when true."
  if: Boolean!
) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

"Include this part of the query if `if` is true"
directive @include(
  "Included when true."
  if: Boolean!
) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

"Marks an element of a GraphQL schema as no longer supported."
directive @deprecated(
  "Explains why this element was deprecated, usually also including a suggestion for how to access supported similar data. Formatted in [Markdown](https://daringfireball.net/projects/markdown/)."
  reason: String! = "No longer supported"
) on FIELD_DEFINITION | ENUM_VALUE

"A query directive in this schema"
type __Directive {
  name: String!
  description: String
  args: [__InputValue!]!
  locations: [__DirectiveLocation!]!
  onOperation: Boolean! @deprecated(reason: "Moved to 'locations' field")
  onFragment: Boolean! @deprecated(reason: "Moved to 'locations' field")
  onField: Boolean! @deprecated(reason: "Moved to 'locations' field")
}

"Parts of the query where a directive may be located"
enum __DirectiveLocation {
  QUERY
  MUTATION
  SUBSCRIPTION
  FIELD
  FIELD_DEFINITION
  FRAGMENT_DEFINITION
  FRAGMENT_SPREAD
  INLINE_FRAGMENT
  ENUM_VALUE
}

"A possible value for an Enum"
type __EnumValue {
  name: String!
  description: String
  deprecationReason: String
  isDeprecated: Boolean!
}

"Field on a GraphQL type"
type __Field {
  name: String!
  description: String
  type: __Type!
  isDeprecated: Boolean!
  args: [__InputValue!]!
  deprecationReason: String
}

"An input for a field or InputObject"
type __InputValue {
  name: String!
  description: String
  type: __Type!
  defaultValue: String
}

"A GraphQL schema"
type __Schema {
  types: [__Type!]!
  directives: [__Directive!]!
  queryType: __Type!
  mutationType: __Type
  subscriptionType: __Type
}

"A type in the GraphQL schema"
type __Type {
  name: String
  description: String
  kind: __TypeKind!
  fields(includeDeprecated: Boolean = false): [__Field!]
  ofType: __Type
  inputFields: [__InputValue!]
  possibleTypes: [__Type!]
  enumValues(includeDeprecated: Boolean = false): [__EnumValue!]
  interfaces: [__Type!]
}

"The kinds of types in this GraphQL system"
enum __TypeKind {
  SCALAR
  OBJECT
  INTERFACE
  UNION
  ENUM
  INPUT_OBJECT
  LIST
  NON_NULL
}
"#;
