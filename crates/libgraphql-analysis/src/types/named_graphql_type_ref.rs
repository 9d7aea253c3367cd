use crate::named_ref::NamedRef;
use crate::types::GraphQLType;

pub type NamedGraphQLTypeRef = NamedRef<GraphQLType>;
