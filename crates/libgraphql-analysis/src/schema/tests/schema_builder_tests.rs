use crate::loc;
use crate::schema::GraphQLOperationType;
use crate::schema::NamedTypeDefLocation;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::BUILTIN_SCALAR_NAMES;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn str_location(str_idx: usize, line: usize, col: usize) -> loc::SourceLocation {
    loc::SourceLocation::Schema(loc::FilePosition {
        col,
        file: Some(PathBuf::from(format!("str://{str_idx}"))),
        line,
    })
}

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();

        assert_eq!(schema.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);
    }

    #[test]
    fn load_empty_query_type_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .build()?;

        assert_eq!(schema.query_type_name(), "Query");
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());
        assert_eq!(schema.query_type().def_location(), &str_location(0, 1, 1));
        assert_eq!(schema.query_type().fields().map(|fields| fields.len()), Some(0));

        Ok(())
    }

    #[test]
    fn load_all_default_operation_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation\n",
                "type Query\n",
                "type Subscription",
            ))?
            .build()?;

        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(schema.subscription_type_name(), Some("Subscription"));
        assert_eq!(
            schema.mutation_type().map(|type_| type_.def_location()),
            Some(&str_location(0, 1, 1)),
        );

        Ok(())
    }

    #[test]
    fn default_root_names_must_be_object_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query\nenum Mutation { A }")?
            .build()?;

        assert!(schema.mutation_type().is_none());

        Ok(())
    }

    #[test]
    fn load_invalid_schema_syntax() {
        let result = SchemaBuilder::new()
            .load_str(None, "this is not valid syntax");

        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { file, .. })
                if file == PathBuf::from("str://0"),
        ));
    }

    #[test]
    fn separately_loaded_strs_are_numbered() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: A }")?
            .load_str(None, "type A { b: Int }")?
            .build()?;

        assert_eq!(
            schema.get_type("A").map(|type_| type_.def_location()),
            Some(&str_location(1, 1, 1)),
        );

        Ok(())
    }

    #[test]
    fn load_missing_file() {
        let result = SchemaBuilder::new()
            .load_file("/this/file/does/not/exist.graphql");

        assert!(matches!(result, Err(SchemaBuildError::SchemaFileReadError(_))));
    }
}

mod builtins {
    use super::*;

    #[test]
    fn scalars_directives_and_introspection_types_are_present() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .build()?;

        for scalar_name in BUILTIN_SCALAR_NAMES {
            let scalar = schema.get_type(scalar_name).expect("builtin scalar is defined");
            assert_eq!(scalar.kind(), GraphQLTypeKind::Scalar);
            assert!(scalar.is_builtin());
        }

        assert_eq!(
            schema.all_directives().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
            vec!["skip", "include", "deprecated"],
        );
        assert!(schema.all_directives().values().all(|directive| directive.is_builtin()));

        let schema_type = schema.get_type("__Schema").expect("__Schema is defined");
        assert_eq!(schema_type.def_location(), &loc::SourceLocation::GraphQLBuiltIn);
        assert_eq!(
            schema.get_type("__TypeKind").map(|type_| type_.kind()),
            Some(GraphQLTypeKind::Enum),
        );

        // 5 scalars + Query + 8 introspection types
        assert_eq!(schema.all_types().len(), 14);

        Ok(())
    }

    #[test]
    fn builtin_scalars_may_be_redefined() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "\"Text\"\nscalar String\ntype Query { a: String }")?
            .build()?;

        let string_type = schema.get_type("String").expect("String is defined");
        assert!(!string_type.is_builtin());
        assert_eq!(string_type.description(), Some("Text"));

        Ok(())
    }

    #[test]
    fn builtin_directives_may_be_redefined() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @deprecated(why: String) on FIELD_DEFINITION\n",
                "type Query { a: Int }\n",
            ))?
            .build()?;

        assert_eq!(
            schema.all_directives().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
            vec!["skip", "include", "deprecated"],
        );
        let deprecated = schema.directive("deprecated").expect("@deprecated is defined");
        assert_eq!(deprecated.def_location(), &str_location(0, 1, 1));
        assert_eq!(
            deprecated.params().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
            vec!["why"],
        );

        Ok(())
    }

    #[test]
    fn user_types_may_not_use_dunder_names() {
        let result = SchemaBuilder::new()
            .load_str(None, "type __Query { a: Int }");

        assert_eq!(result.unwrap_err(), SchemaBuildError::InvalidDunderPrefixedTypeName {
            def_location: str_location(0, 1, 1),
            type_name: "__Query".to_string(),
        });
    }

    #[test]
    fn user_directives_may_not_use_dunder_names() {
        let result = SchemaBuilder::new()
            .load_str(None, "directive @__hidden on FIELD");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName { directive_name, .. })
                if directive_name == "__hidden",
        ));
    }
}

mod descriptions {
    use super::*;

    #[test]
    fn comment_lines_describe_the_following_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "# The root\n",
                "# of all queries\n",
                "type Query {\n",
                "  # Says hello\n",
                "  hello: String\n",
                "\n",
                "  goodbye: String # trailing comments describe nothing\n",
                "}\n",
            ))?
            .build()?;

        let query_type = schema.query_type();
        assert_eq!(query_type.description(), Some("The root\nof all queries"));

        let fields = query_type.fields().expect("Query has fields");
        assert_eq!(fields["hello"].description(), Some("Says hello"));
        assert_eq!(fields["goodbye"].description(), None);

        Ok(())
    }

    #[test]
    fn string_descriptions_win_over_comments() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "# Ignored\n",
                "\"The root\"\n",
                "type Query { a: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().description(), Some("The root"));

        Ok(())
    }
}

mod schema_block {
    use super::*;

    #[test]
    fn custom_root_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Root, mutation: Writes }\n",
                "type Root { a: Int }\n",
                "type Writes { b: Int }\n",
                "type Mutation { c: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type_name(), "Root");
        assert_eq!(schema.mutation_type_name(), Some("Writes"));
        assert_eq!(schema.subscription_type_name(), None);

        Ok(())
    }

    #[test]
    fn root_type_must_be_an_object_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Root }\ninput Root { a: Int }\n")
            .and_then(|builder| builder.build());

        assert_eq!(result.unwrap_err(), SchemaBuildError::InvalidOperationType {
            operation: GraphQLOperationType::Query,
            location: str_location(0, 1, 1),
            type_name: "Root".to_string(),
        });
    }

    #[test]
    fn root_types_must_be_unique() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Root, subscription: Root }\ntype Root { a: Int }\n");

        assert_eq!(result.unwrap_err(), SchemaBuildError::NonUniqueOperationTypes {
            reused_type_name: "Root".to_string(),
            operation1: GraphQLOperationType::Query,
            operation1_loc: str_location(0, 1, 1),
            operation2: GraphQLOperationType::Subscription,
            operation2_loc: str_location(0, 1, 1),
        });
    }

    #[test]
    fn root_types_may_only_be_declared_once() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: A }\nschema { query: B }\n");

        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateOperationDefinition {
            operation: GraphQLOperationType::Query,
            location1: NamedTypeDefLocation {
                def_location: str_location(0, 1, 1),
                type_name: "A".to_string(),
            },
            location2: NamedTypeDefLocation {
                def_location: str_location(0, 2, 1),
                type_name: "B".to_string(),
            },
        });
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extensions_apply_regardless_of_load_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "extend type Query implements Node { extra: Int }\n",
                "extend enum Color { BLUE }\n",
                "extend union Shape = Square\n",
            ))?
            .load_str(None, concat!(
                "interface Node { extra: Int }\n",
                "type Query { a: Int }\n",
                "enum Color { RED }\n",
                "type Circle { r: Float }\n",
                "type Square { s: Float }\n",
                "union Shape = Circle\n",
            ))?
            .build()?;

        let query_type = schema.query_type();
        assert_eq!(
            query_type.fields().map(|fields| fields.keys().map(|name| name.as_str()).collect::<Vec<_>>()),
            Some(vec!["a", "extra"]),
        );
        assert_eq!(query_type.interface_names(), vec!["Node"]);
        assert_eq!(
            schema.get_type("Color")
                .and_then(|type_| type_.enum_values())
                .map(|values| values.keys().map(|name| name.as_str()).collect::<Vec<_>>()),
            Some(vec!["RED", "BLUE"]),
        );
        assert_eq!(
            schema.get_type("Shape").map(|type_| type_.union_member_names()),
            Some(vec!["Circle", "Square"]),
        );

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query\nextend type Missing { a: Int }\n")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));
    }

    #[test]
    fn extension_of_a_different_kind() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query\nextend enum Query { A }\n")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: GraphQLTypeKind::Object,
                extension_kind: GraphQLTypeKind::Enum,
                ..
            }) if type_name == "Query",
        ));
    }

    #[test]
    fn extension_may_not_redefine_a_field() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nextend type Query { a: String }\n")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { type_name, field_name, .. })
                if type_name == "Query" && field_name == "a",
        ));
    }
}

mod definition_errors {
    use super::*;

    #[test]
    fn duplicate_type_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query\ntype Query\n");

        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Query".to_string(),
            def1: str_location(0, 1, 1),
            def2: str_location(0, 2, 1),
        });
    }

    #[test]
    fn duplicate_type_definition_across_strs() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query")
            .and_then(|builder| builder.load_str(None, "enum Query { A }"));

        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Query".to_string(),
            def1: str_location(0, 1, 1),
            def2: str_location(1, 1, 1),
        });
    }

    #[test]
    fn duplicate_directive_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "directive @a on FIELD\ndirective @a on QUERY\n");

        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateDirectiveDefinition {
            directive_name: "a".to_string(),
            location1: str_location(0, 1, 1),
            location2: str_location(0, 2, 1),
        });
    }

    #[test]
    fn duplicate_enum_value() {
        let result = SchemaBuilder::new()
            .load_str(None, "enum Color { RED RED }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateEnumValueDefinition { enum_name, .. })
                if enum_name == "Color",
        ));
    }

    #[test]
    fn self_implementing_interface() {
        let result = SchemaBuilder::new()
            .load_str(None, "interface Node implements Node { id: ID }");

        assert_eq!(result.unwrap_err(), SchemaBuildError::InvalidSelfImplementingInterface {
            def_location: str_location(0, 1, 1),
            interface_name: "Node".to_string(),
        });
    }

    #[test]
    fn duplicate_union_member() {
        let result = SchemaBuilder::new()
            .load_str(None, "type A { a: Int }\nunion U = A | A\n");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicatedUnionMember { type_name, member_name, .. })
                if type_name == "U" && member_name == "A",
        ));
    }
}

mod type_validation {
    use super::*;

    fn validation_errors(sdl: &str) -> Vec<TypeValidationError> {
        let result = SchemaBuilder::new()
            .load_str(None, sdl)
            .and_then(|builder| builder.build());

        match result {
            Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
            other => panic!("Expected type-validation errors, got {other:?}"),
        }
    }

    #[test]
    fn undefined_field_type() {
        let errors = validation_errors("type Query { a: Missing }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::UndefinedTypeName { undefined_type_name, .. }
                if undefined_type_name == "Missing",
        ));
    }

    #[test]
    fn union_members_must_be_object_types() {
        let errors = validation_errors(concat!(
            "type Query { a: Int }\n",
            "enum Color { RED }\n",
            "union U = Query | Color\n",
        ));

        assert_eq!(errors, vec![TypeValidationError::InvalidUnionMemberTypeKind {
            location: str_location(0, 3, 1),
            union_type_name: "U".to_string(),
            invalid_member_type_name: "Color".to_string(),
            invalid_member_type_kind: GraphQLTypeKind::Enum,
        }]);
    }

    #[test]
    fn output_fields_may_not_use_input_types() {
        let errors = validation_errors("input In { a: Int }\ntype Query { a: In }\n");

        assert!(matches!(
            &errors[..],
            [TypeValidationError::InvalidOutputFieldWithInputType { input_type_name, .. }]
                if input_type_name == "In",
        ));
    }

    #[test]
    fn input_fields_may_not_use_output_types() {
        let errors = validation_errors("type Query { a: Int }\ninput In { q: Query }\n");

        assert!(matches!(
            &errors[..],
            [TypeValidationError::InvalidInputFieldWithOutputType { invalid_type_name, .. }]
                if invalid_type_name == "Query",
        ));
    }

    #[test]
    fn parameters_may_not_use_output_types() {
        let errors = validation_errors("type Query { a(q: Query): Int }");

        assert!(matches!(
            &errors[..],
            [TypeValidationError::InvalidParameterWithOutputOnlyType { parameter_name, .. }]
                if parameter_name == "q",
        ));
    }

    #[test]
    fn directive_parameters_are_checked() {
        let errors = validation_errors("type Query { a: Int }\ndirective @tag(name: Missing) on FIELD\n");

        assert!(matches!(
            &errors[..],
            [TypeValidationError::UndefinedTypeName { undefined_type_name, .. }]
                if undefined_type_name == "Missing",
        ));
    }

    #[test]
    fn implemented_types_must_be_interfaces() {
        let errors = validation_errors(concat!(
            "type Base { a: Int }\n",
            "type Query implements Base & Unknown { a: Int }\n",
        ));

        assert_eq!(errors.len(), 2);
        assert!(matches!(
            &errors[0],
            TypeValidationError::ImplementsNonInterfaceType { non_interface_type_name, .. }
                if non_interface_type_name == "Base",
        ));
        assert!(matches!(
            &errors[1],
            TypeValidationError::ImplementsUndefinedInterface { undefined_interface_name, .. }
                if undefined_interface_name == "Unknown",
        ));
    }
}
