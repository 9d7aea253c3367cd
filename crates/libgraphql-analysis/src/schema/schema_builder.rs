use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::builtins::BUILTIN_SDL;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::check_parameter;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::SdlSource;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use crate::types::BUILTIN_DIRECTIVE_NAMES;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}
impl GraphQLOperationType {
    fn default_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

/// A type extension that is held until all type definitions are loaded.
#[derive(Debug)]
struct PendingTypeExtension {
    content: Arc<str>,
    ext: ast::schema::TypeExtension,
    file_path: PathBuf,
}

/// Utility for building a [Schema] from one or more SDL documents.
///
/// ```
/// use libgraphql_analysis::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")?
///     .build()?;
/// assert_eq!(schema.query_type_name(), "Query");
/// # Ok::<(), libgraphql_analysis::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<PendingTypeExtension>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.load_builtins()?;

        for pending_ext in std::mem::take(&mut self.pending_extensions) {
            let src = SdlSource::new(
                Some(pending_ext.file_path.as_path()),
                &pending_ext.content,
            );
            self.visit_ast_type_extension(&src, pending_ext.ext)?;
        }

        let mut directive_errors: Vec<TypeValidationError> = vec![];
        for directive in self.directive_defs.values() {
            for param in directive.params().values() {
                directive_errors.append(&mut check_parameter(
                    param,
                    self.types_map_builder.types(),
                ));
            }
        }

        let types = match self.types_map_builder.into_types_map() {
            Ok(types) if directive_errors.is_empty() => types,
            Ok(_) => return Err(SchemaBuildError::TypeValidationErrors {
                errors: directive_errors,
            }),
            Err(SchemaBuildError::TypeValidationErrors { mut errors }) => {
                errors.append(&mut directive_errors);
                return Err(SchemaBuildError::TypeValidationErrors { errors });
            },
            Err(err) => return Err(err),
        };

        let query_type = Self::resolve_operation_type(
            &types,
            GraphQLOperationType::Query,
            self.query_type.take(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;

        let mutation_type = Self::resolve_operation_type(
            &types,
            GraphQLOperationType::Mutation,
            self.mutation_type.take(),
        )?;

        let subscription_type = Self::resolve_operation_type(
            &types,
            GraphQLOperationType::Subscription,
            self.subscription_type.take(),
        )?;

        log::debug!(
            "Built a schema with {} types and {} directives.",
            types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            query_type,
            mutation_type,
            subscription_type,
            types,
        })
    }

    /// Parses the implicitly-defined directives and introspection types and
    /// adds them to the schema. The built-in directives come first, except
    /// where the schema defined its own directive with the same name.
    fn load_builtins(&mut self) -> Result<()> {
        let src = SdlSource::builtin(BUILTIN_SDL);
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(BUILTIN_SDL)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: PathBuf::from("builtin://"),
                    err: err.to_string(),
                })?.into_static();

        let mut builtin_directives = IndexMap::new();
        for def in ast_doc.definitions {
            match def {
                ast::schema::Definition::DirectiveDefinition(directive_def) => {
                    if !self.directive_defs.contains_key(directive_def.name.as_str()) {
                        let directive = Self::directive_from_ast(&src, directive_def);
                        builtin_directives.insert(directive.name.to_string(), directive);
                    }
                },

                ast::schema::Definition::TypeDefinition(type_def) =>
                    self.visit_ast_type_def(&src, type_def)?,

                ast::schema::Definition::SchemaDefinition(_)
                    | ast::schema::Definition::TypeExtension(_) => (),
            }
        }

        builtin_directives.extend(std::mem::take(&mut self.directive_defs));
        self.directive_defs = builtin_directives;
        Ok(())
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };
        log::debug!("Loading schema definitions from {file_path:?}.");

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        let shared_content: Arc<str> = Arc::from(content);
        let src = SdlSource::new(Some(file_path.as_path()), content);
        for def in ast_doc.definitions {
            if let ast::schema::Definition::TypeExtension(ext) = def {
                self.pending_extensions.push(PendingTypeExtension {
                    content: shared_content.clone(),
                    ext,
                    file_path: file_path.to_owned(),
                });
            } else {
                self.visit_ast_def(&src, def)?;
            }
        }

        Ok(self)
    }

    fn directive_from_ast(
        src: &SdlSource<'_>,
        def: ast::schema::DirectiveDefinition,
    ) -> Directive {
        Directive {
            def_location: src.location(def.position),
            description: src.description(&def.description, def.position),
            locations: def.locations.iter().map(DirectiveLocation::from).collect(),
            params: TypeBuilderHelpers::parameters_from_ast(src, &def.arguments),
            repeatable: def.repeatable,
            name: def.name,
        }
    }

    fn resolve_operation_type(
        types: &IndexMap<String, GraphQLType>,
        operation: GraphQLOperationType,
        declared: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        if let Some(declared) = declared {
            return match types.get(declared.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(NamedGraphQLTypeRef::new(
                    declared.type_name,
                    declared.def_location,
                ))),
                _ => Err(SchemaBuildError::InvalidOperationType {
                    operation,
                    location: declared.def_location,
                    type_name: declared.type_name,
                }),
            };
        }

        let default_name = operation.default_type_name();
        Ok(match types.get(default_name) {
            Some(GraphQLType::Object(obj_type)) => Some(NamedGraphQLTypeRef::new(
                default_name,
                obj_type.def_location().clone(),
            )),
            _ => None,
        })
    }

    fn visit_ast_def(
        &mut self,
        src: &SdlSource<'_>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(src, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(src, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(src, type_ext),
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(src, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        src: &SdlSource<'_>,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = src.location(def.position);

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location,
                directive_name: def.name.to_string(),
            });
        }

        if let Some(existing_def) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: existing_def.def_location().clone(),
                location2: def_location,
            });
        }

        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            log::debug!(
                "The built-in `@{}` directive is replaced by a schema definition.",
                def.name,
            );
        }

        let directive = Self::directive_from_ast(src, def);
        self.directive_defs.insert(directive.name.to_string(), directive);
        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        src: &SdlSource<'_>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let declared_types = [
            (GraphQLOperationType::Query, &schema_def.query),
            (GraphQLOperationType::Mutation, &schema_def.mutation),
            (GraphQLOperationType::Subscription, &schema_def.subscription),
        ];

        for (operation, type_name) in declared_types {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: src.location(schema_def.position),
                type_name: type_name.to_string(),
            };
            let slot = match operation {
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let operation_types = [
            (GraphQLOperationType::Query, &self.query_type),
            (GraphQLOperationType::Mutation, &self.mutation_type),
            (GraphQLOperationType::Subscription, &self.subscription_type),
        ];
        for (i, (operation1, type1)) in operation_types.iter().enumerate() {
            for (operation2, type2) in operation_types.iter().skip(i + 1) {
                if let (Some(type1), Some(type2)) = (type1, type2)
                    && type1.type_name == type2.type_name {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: type1.type_name.to_owned(),
                        operation1: *operation1,
                        operation1_loc: type1.def_location.to_owned(),
                        operation2: *operation2,
                        operation2_loc: type2.def_location.to_owned(),
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        src: &SdlSource<'_>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (type_name, position) = match &type_def {
            TypeDefinition::Enum(def) => (&def.name, def.position),
            TypeDefinition::InputObject(def) => (&def.name, def.position),
            TypeDefinition::Interface(def) => (&def.name, def.position),
            TypeDefinition::Object(def) => (&def.name, def.position),
            TypeDefinition::Scalar(def) => (&def.name, def.position),
            TypeDefinition::Union(def) => (&def.name, def.position),
        };
        let def_location = src.location(position);
        if !src.is_builtin() && type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location,
                type_name: type_name.to_string(),
            });
        }

        let type_ = match type_def {
            TypeDefinition::Enum(def) => {
                let mut values = IndexMap::new();
                TypeBuilderHelpers::enum_values_from_ast(
                    src,
                    def.name.as_str(),
                    &def_location,
                    &mut values,
                    &def.values,
                )?;
                GraphQLType::Enum(EnumType {
                    description: src.description(&def.description, def.position),
                    def_location,
                    name: def.name,
                    values,
                })
            },

            TypeDefinition::InputObject(def) => {
                let mut fields = IndexMap::new();
                TypeBuilderHelpers::input_fields_from_ast(
                    src,
                    def.name.as_str(),
                    &mut fields,
                    &def.fields,
                )?;
                GraphQLType::InputObject(InputObjectType {
                    description: src.description(&def.description, def.position),
                    def_location,
                    fields,
                    name: def.name,
                })
            },

            TypeDefinition::Interface(def) => {
                let data = Self::object_or_interface_data_from_ast(
                    src,
                    def_location,
                    def.name,
                    src.description(&def.description, def.position),
                    &def.implements_interfaces,
                    &def.fields,
                    /* is_interface = */ true,
                )?;
                GraphQLType::Interface(InterfaceType(data))
            },

            TypeDefinition::Object(def) => {
                let data = Self::object_or_interface_data_from_ast(
                    src,
                    def_location,
                    def.name,
                    src.description(&def.description, def.position),
                    &def.implements_interfaces,
                    &def.fields,
                    /* is_interface = */ false,
                )?;
                GraphQLType::Object(ObjectType(data))
            },

            TypeDefinition::Scalar(def) => GraphQLType::Scalar(ScalarType {
                description: src.description(&def.description, def.position),
                def_location,
                name: def.name,
            }),

            TypeDefinition::Union(def) => {
                let mut members = IndexMap::new();
                Self::add_union_members(
                    def.name.as_str(),
                    &def_location,
                    &mut members,
                    &def.types,
                )?;
                GraphQLType::Union(UnionType {
                    description: src.description(&def.description, def.position),
                    def_location,
                    members,
                    name: def.name,
                })
            },
        };

        self.types_map_builder.add_new_type(type_)
    }

    fn object_or_interface_data_from_ast(
        src: &SdlSource<'_>,
        def_location: loc::SourceLocation,
        name: String,
        description: Option<String>,
        ast_interfaces: &[String],
        ast_fields: &[ast::schema::Field],
        is_interface: bool,
    ) -> Result<ObjectOrInterfaceTypeData> {
        let mut data = ObjectOrInterfaceTypeData {
            def_location,
            description,
            fields: IndexMap::new(),
            interfaces: vec![],
            name,
        };
        Self::add_interfaces(&mut data, ast_interfaces, is_interface)?;
        TypeBuilderHelpers::object_fielddefs_from_ast(
            src,
            data.name.as_str(),
            &mut data.fields,
            ast_fields,
        )?;
        Ok(data)
    }

    fn add_interfaces(
        data: &mut ObjectOrInterfaceTypeData,
        ast_interfaces: &[String],
        is_interface: bool,
    ) -> Result<()> {
        for iface_name in ast_interfaces {
            if is_interface && *iface_name == data.name {
                return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                    def_location: data.def_location.clone(),
                    interface_name: iface_name.to_string(),
                });
            }
            if data.interfaces.iter().any(|iface_ref| iface_ref.name() == iface_name) {
                return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                    def_location: data.def_location.clone(),
                    duplicated_interface_name: iface_name.to_string(),
                    type_name: data.name.to_string(),
                });
            }
            data.interfaces.push(NamedGraphQLTypeRef::new(
                iface_name,
                data.def_location.clone(),
            ));
        }
        Ok(())
    }

    fn add_union_members(
        union_name: &str,
        def_location: &loc::SourceLocation,
        members: &mut IndexMap<String, NamedGraphQLTypeRef>,
        ast_members: &[String],
    ) -> Result<()> {
        for member_name in ast_members {
            if members.contains_key(member_name.as_str()) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    type_name: union_name.to_string(),
                    member_name: member_name.to_string(),
                    location: def_location.clone(),
                });
            }
            members.insert(member_name.to_string(), NamedGraphQLTypeRef::new(
                member_name,
                def_location.clone(),
            ));
        }
        Ok(())
    }

    fn visit_ast_type_extension(
        &mut self,
        src: &SdlSource<'_>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position, ext_kind) = match &ext {
            TypeExtension::Enum(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Enum),
            TypeExtension::InputObject(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::InputObject),
            TypeExtension::Interface(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Interface),
            TypeExtension::Object(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Object),
            TypeExtension::Scalar(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Scalar),
            TypeExtension::Union(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Union),
        };
        let extension_loc = src.location(position);

        let Some(type_) = self.types_map_builder.get_type_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_type_loc: extension_loc,
            });
        };

        match (type_, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                TypeBuilderHelpers::enum_values_from_ast(
                    src,
                    enum_type.name.as_str(),
                    &enum_type.def_location,
                    &mut enum_type.values,
                    &ext.values,
                ),

            (GraphQLType::InputObject(input_type), TypeExtension::InputObject(ext)) =>
                TypeBuilderHelpers::input_fields_from_ast(
                    src,
                    input_type.name.as_str(),
                    &mut input_type.fields,
                    &ext.fields,
                ),

            (GraphQLType::Interface(InterfaceType(data)), TypeExtension::Interface(ext)) => {
                Self::add_interfaces(data, &ext.implements_interfaces, true)?;
                TypeBuilderHelpers::object_fielddefs_from_ast(
                    src,
                    data.name.as_str(),
                    &mut data.fields,
                    &ext.fields,
                )
            },

            (GraphQLType::Object(ObjectType(data)), TypeExtension::Object(ext)) => {
                Self::add_interfaces(data, &ext.implements_interfaces, false)?;
                TypeBuilderHelpers::object_fielddefs_from_ast(
                    src,
                    data.name.as_str(),
                    &mut data.fields,
                    &ext.fields,
                )
            },

            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => Ok(()),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                Self::add_union_members(
                    union_type.name.as_str(),
                    &extension_loc,
                    &mut union_type.members,
                    &ext.types,
                ),

            (type_, _) => Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: type_.kind(),
                extension_kind: ext_kind,
                extension_loc,
            }),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name: `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error(
        "Multiple enum values with the same name were defined on the \
        `{enum_name}` enum type"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        enum_def_location: loc::SourceLocation,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
    },

    #[error(
        "Multiple fields named `{type_name}.{field_name}` were defined on a \
        single type"
    )]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple definitions of the {operation:?} root operation type were defined")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` union specifies `{member_name}` as a member \
        multiple times"
    )]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: loc::SourceLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SourceLocation,
    },

    #[error("Custom directive names must not start with `__`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`")]
    InvalidDunderPrefixedParamName {
        def_location: loc::SourceLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` {} type with a {} type extension",
        type_kind.name(),
        extension_kind.name(),
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_loc: loc::SourceLocation,
    },

    #[error(
        "The {operation:?} root operation type is declared as `{type_name}`, \
        which is not an object type defined in the schema"
    )]
    InvalidOperationType {
        operation: GraphQLOperationType,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SourceLocation,
        interface_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1:?} and {operation2:?} root operation are defined with \
        the same GraphQL type, but this is not allowed in GraphQL. All root \
        operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: GraphQLOperationType,
        operation1_loc: loc::SourceLocation,
        operation2: GraphQLOperationType,
        operation2_loc: loc::SourceLocation,
    },

    #[error("Error parsing schema from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

/// Represents the location where a root operation type was assigned in the
/// schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
