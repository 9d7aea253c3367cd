use crate::ast;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::validation::FieldsWillMergeValidator;
use crate::validation::MessageLocation;
use crate::validation::ValidationMessage;
use crate::Schema;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const PETS_SCHEMA: &str = r#"
type Query {
  dog: Dog
  cat: Cat
  pet: Pet
  toy: Toy
}

enum PetCommand {
  SIT
  HEEL
  JUMP
  DOWN
}

enum ToySize {
  SMALL
  LARGE
}

interface Pet {
  name(surname: Boolean = false): String!
  nickname: String
  toys: [Toy!]!
}

type Dog implements Pet {
  name(surname: Boolean = false): String!
  nickname: String
  doesKnowCommand(dogCommand: PetCommand): Boolean!
  barkVolume: Int!
  toys: [Toy!]!
}

type Cat implements Pet {
  name(surname: Boolean = false): String!
  nickname: String
  doesKnowCommand(catCommand: PetCommand): Boolean!
  meowVolume: Int!
  toys: [Toy!]!
}

type Toy {
  name: String!
  size: ToySize!
  image(maxWidth: Int!): String!
}
"#;

const BOXES_SCHEMA: &str = r#"
type Query {
  someBox: SomeBox
  connection: Connection
}

type Edge {
  id: ID
  name: String
}

interface SomeBox {
  deepBox: SomeBox
  unrelatedField: String
}

type StringBox implements SomeBox {
  scalar: String
  deepBox: StringBox
  unrelatedField: String
  listStringBox: [StringBox]
  stringBox: StringBox
  intBox: IntBox
}

type IntBox implements SomeBox {
  scalar: Int
  deepBox: IntBox
  unrelatedField: String
  listStringBox: [StringBox]
  stringBox: StringBox
  intBox: IntBox
}

interface NonNullStringBox1 {
  scalar: String!
}

type NonNullStringBox1Impl implements SomeBox & NonNullStringBox1 {
  scalar: String!
  unrelatedField: String
  deepBox: SomeBox
}

interface NonNullStringBox2 {
  scalar: String!
}

type NonNullStringBox2Impl implements SomeBox & NonNullStringBox2 {
  scalar: String!
  unrelatedField: String
  deepBox: SomeBox
}

type Connection {
  edges: [Edge]
}
"#;

fn build_schema(sdl: &str) -> Result<Schema> {
    SchemaBuilder::new()
        .load_str(None, sdl)?
        .build()
}

fn validate(schema: &Schema, query: &str) -> Vec<ValidationMessage> {
    let document = ast::query::parse(query).unwrap();
    FieldsWillMergeValidator::new(schema, &document).validate()
}

fn error_messages(schema: &Schema, query: &str) -> Vec<String> {
    validate(schema, query)
        .iter()
        .map(|msg| msg.message().to_string())
        .collect()
}

mod mergeable_selections {
    use super::*;

    #[test]
    fn unique_fields() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        assert!(error_messages(&schema, "{ dog { name nickname } }").is_empty());
        Ok(())
    }

    #[test]
    fn identical_fields() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        assert!(error_messages(&schema, "{ dog { name name } }").is_empty());
        Ok(())
    }

    #[test]
    fn identical_fields_with_identical_args() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              dog {
                doesKnowCommand(dogCommand: SIT)
                doesKnowCommand(dogCommand: SIT)
              }
            }
        "#;
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }

    #[test]
    fn identical_fields_with_identical_variables() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            query($dogCommand: PetCommand) {
              dog {
                doesKnowCommand(dogCommand: $dogCommand)
                doesKnowCommand(dogCommand: $dogCommand)
              }
            }
        "#;
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }

    #[test]
    fn argument_order_is_ignored() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { f(a: Int, b: Int): Int }\n",
        ))?;
        assert!(error_messages(&schema, "{ f(a: 1, b: 2) f(b: 2, a: 1) }").is_empty());
        Ok(())
    }

    #[test]
    fn identical_aliases_and_fields() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = "{ dog { otherName: name otherName: name } }";
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }

    #[test]
    fn different_args_with_different_aliases() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              dog {
                knowsSit: doesKnowCommand(dogCommand: SIT)
                knowsDown: doesKnowCommand(dogCommand: DOWN)
              }
            }
        "#;
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }

    #[test]
    fn different_directives_are_ignored() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              dog {
                nameIfTrue: name @include(if: true)
                nameIfFalse: name @include(if: false)
                name @include(if: true)
                name @include(if: false)
              }
            }
        "#;
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }

    #[test]
    fn same_alias_allowed_on_disjoint_fragment_types() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              pet {
                ... on Dog {
                  name
                }
                ... on Cat {
                  name: nickname
                }
              }
            }
        "#;
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }

    #[test]
    fn fragments_on_types_without_implementors_never_conflict() -> Result<()> {
        let schema = build_schema(r#"
            type Query {
              pet: Pet
            }

            interface Pet {
              name: String
              nickname: String
            }

            type Dog implements Pet {
              name: String
              nickname: String
            }

            interface Stray {
              name: String
            }
        "#)?;
        let query = r#"
            {
              pet {
                ... on Stray {
                  x: name
                }
                x: nickname
              }
            }
        "#;
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }

    #[test]
    fn compatible_return_shapes_on_different_return_types() -> Result<()> {
        let schema = build_schema(BOXES_SCHEMA)?;
        let query = r#"
            {
              someBox {
                ... on SomeBox {
                  deepBox {
                    unrelatedField
                  }
                }
                ... on StringBox {
                  deepBox {
                    unrelatedField
                  }
                }
              }
            }
        "#;
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }

    #[test]
    fn cyclic_and_unknown_fragments_terminate() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              dog {
                ...A
                ...Unknown
              }
            }

            fragment A on Dog {
              name
              ...B
            }

            fragment B on Dog {
              nickname
              ...A
            }
        "#;
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }
}

mod field_conflicts {
    use super::*;

    #[test]
    fn same_aliases_with_different_field_targets() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        assert_eq!(
            error_messages(&schema, "{ dog { fido: name fido: nickname } }"),
            vec!["Field 'fido' has a field conflict: name or nickname?"],
        );
        Ok(())
    }

    #[test]
    fn alias_masking_direct_field_access() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        assert_eq!(
            error_messages(&schema, "{ dog { name: nickname name } }"),
            vec!["Field 'name' has a field conflict: nickname or name?"],
        );
        Ok(())
    }

    #[test]
    fn conflict_message_carries_locations_path_and_code() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = concat!(
            "{\n",
            "  dog {\n",
            "    fido: name\n",
            "    fido: nickname\n",
            "  }\n",
            "}\n",
        );

        let messages = validate(&schema, query);
        assert_eq!(messages.len(), 1);
        let message = &messages[0];
        assert_eq!(message.code(), Some("fieldConflict"));
        assert_eq!(message.path(), &vec!["dog".to_string(), "fido".to_string()]);
        assert_eq!(message.locations(), &vec![
            MessageLocation { line: 3, column: 5 },
            MessageLocation { line: 4, column: 5 },
        ]);

        let json = serde_json::to_value(message).unwrap();
        assert_eq!(json, serde_json::json!({
            "message": "Field 'fido' has a field conflict: name or nickname?",
            "locations": [
                {"line": 3, "column": 5},
                {"line": 4, "column": 5}
            ],
            "fields": ["dog", "fido"],
            "code": "fieldConflict"
        }));

        Ok(())
    }

    #[test]
    fn encounters_conflict_in_fragments() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              pet {
                ...A
                ...B
                name
              }
            }

            fragment A on Dog {
              x: name
            }

            fragment B on Dog {
              x: nickname
              name: nickname
            }
        "#;
        assert_eq!(error_messages(&schema, query), vec![
            "Field 'x' has a field conflict: name or nickname?",
            "Field 'name' has a field conflict: nickname or name?",
        ]);
        Ok(())
    }

    #[test]
    fn reports_each_conflict_once() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { f1: Type f2: Type f3: Type }\n",
            "type Type { a: String b: String c: String }\n",
        ))?;
        let query = r#"
            {
              f1 {
                ...A
                ...B
              }
              f2 {
                ...B
                ...A
              }
              f3 {
                ...A
                ...B
                x: c
              }
            }
            fragment A on Type {
              x: a
            }
            fragment B on Type {
              x: b
            }
        "#;
        assert_eq!(
            error_messages(&schema, query),
            vec!["Field 'x' has a field conflict: a or b?"],
        );
        Ok(())
    }

    #[test]
    fn deep_conflict() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              dog {
                x: name
              }

              dog {
                x: nickname
              }
            }
        "#;
        assert_eq!(
            error_messages(&schema, query),
            vec!["Field 'x' has a field conflict: name or nickname?"],
        );
        Ok(())
    }

    #[test]
    fn deep_conflict_with_multiple_issues() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              dog {
                x: name
                y: barkVolume
              }

              dog {
                x: nickname
                y: doesKnowCommand
              }
            }
        "#;
        assert_eq!(error_messages(&schema, query), vec![
            "Field 'x' has a field conflict: name or nickname?",
            "Field 'y' has a field conflict: barkVolume or doesKnowCommand?",
        ]);
        Ok(())
    }

    #[test]
    fn very_deep_conflict() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              dog {
                toys {
                  x: name
                }
              }

              dog {
                toys {
                  x: size
                }
              }
            }
        "#;
        let messages = validate(&schema, query);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message(), "Field 'x' has a field conflict: name or size?");
        assert_eq!(messages[0].path(), &vec![
            "dog".to_string(),
            "toys".to_string(),
            "x".to_string(),
        ]);
        Ok(())
    }

    #[test]
    fn reports_when_a_non_exclusive_follows_an_exclusive() -> Result<()> {
        let schema = build_schema(BOXES_SCHEMA)?;
        let query = r#"
            {
              someBox {
                ... on IntBox {
                  deepBox {
                    ...X
                  }
                }
              }
              someBox {
                ... on StringBox {
                  deepBox {
                    ...Y
                  }
                }
              }
              memoed: someBox {
                ... on IntBox {
                  deepBox {
                    ...X
                  }
                }
              }
              memoed: someBox {
                ... on StringBox {
                  deepBox {
                    ...Y
                  }
                }
              }
              other: someBox {
                ...X
              }
              other: someBox {
                ...Y
              }
            }
            fragment X on SomeBox {
              scalar
            }
            fragment Y on SomeBox {
              scalar: unrelatedField
            }
        "#;
        assert!(error_messages(&schema, query).contains(
            &"Field 'scalar' has a field conflict: scalar or unrelatedField?".to_string(),
        ));
        Ok(())
    }
}

mod argument_conflicts {
    use super::*;

    #[test]
    fn conflicting_args_value_and_var() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            query ($dogCommand: PetCommand) {
              dog {
                doesKnowCommand(dogCommand: SIT)
                doesKnowCommand(dogCommand: $dogCommand)
              }
            }
        "#;
        assert_eq!(error_messages(&schema, query), vec![
            r#"Field 'doesKnowCommand' has an argument conflict: {"dogCommand":"SIT"} or {"dogCommand":"$dogCommand"}?"#,
        ]);
        Ok(())
    }

    #[test]
    fn conflicting_args_two_vars() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            query ($varOne: PetCommand, $varTwo: PetCommand) {
              dog {
                doesKnowCommand(dogCommand: $varOne)
                doesKnowCommand(dogCommand: $varTwo)
              }
            }
        "#;
        assert_eq!(error_messages(&schema, query), vec![
            r#"Field 'doesKnowCommand' has an argument conflict: {"dogCommand":"$varOne"} or {"dogCommand":"$varTwo"}?"#,
        ]);
        Ok(())
    }

    #[test]
    fn second_adds_an_argument() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = "{ dog { doesKnowCommand doesKnowCommand(dogCommand: HEEL) } }";
        assert_eq!(error_messages(&schema, query), vec![
            r#"Field 'doesKnowCommand' has an argument conflict: {} or {"dogCommand":"HEEL"}?"#,
        ]);
        Ok(())
    }

    #[test]
    fn second_missing_an_argument() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = "{ dog { doesKnowCommand(dogCommand: SIT) doesKnowCommand } }";
        assert_eq!(error_messages(&schema, query), vec![
            r#"Field 'doesKnowCommand' has an argument conflict: {"dogCommand":"SIT"} or {}?"#,
        ]);
        Ok(())
    }

    #[test]
    fn conflicting_args() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              dog {
                doesKnowCommand(dogCommand: SIT)
                doesKnowCommand(dogCommand: HEEL)
              }
            }
        "#;

        let messages = validate(&schema, query);
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].message(),
            r#"Field 'doesKnowCommand' has an argument conflict: {"dogCommand":"SIT"} or {"dogCommand":"HEEL"}?"#,
        );
        assert_eq!(messages[0].code(), Some("argumentConflict"));
        Ok(())
    }

    #[test]
    fn conflicting_arg_values() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = "{ toy { image(maxWidth: 10) image(maxWidth: 20) } }";
        assert_eq!(error_messages(&schema, query), vec![
            r#"Field 'image' has an argument conflict: {"maxWidth":"10"} or {"maxWidth":"20"}?"#,
        ]);
        Ok(())
    }

    #[test]
    fn allows_different_args_where_no_conflict_is_possible() -> Result<()> {
        let schema = build_schema(PETS_SCHEMA)?;
        let query = r#"
            {
              pet {
                ... on Dog {
                  name(surname: true)
                }
                ... on Cat {
                  name
                }
              }
            }
        "#;
        assert!(error_messages(&schema, query).is_empty());
        Ok(())
    }
}
