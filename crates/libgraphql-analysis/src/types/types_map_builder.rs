use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use crate::types::TypeValidator;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Names of the scalar types every schema carries.
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "String",
    "Boolean",
    "Int",
    "Float",
    "ID",
];

#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub(crate) fn new() -> Self {
        Self {
            types: BUILTIN_SCALAR_NAMES.iter().map(|name| (
                name.to_string(),
                GraphQLType::Scalar(ScalarType::builtin(name)),
            )).collect(),
        }
    }

    /// Registers a newly defined type. A definition may replace a built-in
    /// scalar of the same name, but no other previously defined type.
    pub(crate) fn add_new_type(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name().to_string();
        if let Some(conflicting_type) = self.types.get(type_name.as_str()) {
            let overrides_builtin_scalar =
                conflicting_type.is_builtin()
                && conflicting_type.as_scalar().is_some();
            if !overrides_builtin_scalar {
                return Err(SchemaBuildError::DuplicateTypeDefinition {
                    type_name,
                    def1: conflicting_type.def_location().clone(),
                    def2: type_.def_location().clone(),
                });
            }
            log::debug!("Overriding the built-in `{type_name}` scalar.");
        }

        self.types.insert(type_name, type_);
        Ok(())
    }

    pub(crate) fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    pub(crate) fn into_types_map(self) -> Result<IndexMap<String, GraphQLType>> {
        // Final validation of all types together.
        let mut errors = vec![];
        for type_ in self.types.values() {
            errors.append(&mut TypeValidator::new(type_, &self.types).validate());
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }

    pub(crate) fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
