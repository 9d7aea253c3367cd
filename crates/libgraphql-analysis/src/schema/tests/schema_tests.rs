use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::Schema;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const ZOO_SCHEMA: &str = r#"
interface Named { name: String }
interface Animal implements Named { name: String }
interface Unused { x: Int }

type Cat implements Animal & Named { name: String }
type Dog implements Animal & Named { name: String }
type Keeper implements Named { name: String }

union Resident = Dog | Cat | Keeper
enum Diet { MEAT PLANTS }
input Feeding { diet: Diet }

type Query {
  residents: [Resident]
  feed(feeding: Feeding): Boolean
}
"#;

fn zoo_schema() -> Result<Schema> {
    SchemaBuilder::new()
        .load_str(None, ZOO_SCHEMA)?
        .build()
}

mod possible_type_names {
    use super::*;

    #[test]
    fn object_type_is_its_own_possible_type() -> Result<()> {
        let schema = zoo_schema()?;

        assert_eq!(schema.possible_type_names("Cat"), vec!["Cat"]);

        Ok(())
    }

    #[test]
    fn interface_includes_direct_and_transitive_implementors() -> Result<()> {
        let schema = zoo_schema()?;

        assert_eq!(schema.possible_type_names("Animal"), vec!["Cat", "Dog"]);
        assert_eq!(schema.possible_type_names("Named"), vec!["Cat", "Dog", "Keeper"]);
        assert!(schema.possible_type_names("Unused").is_empty());

        Ok(())
    }

    #[test]
    fn transitive_implementation_without_direct_declaration() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "interface Base { id: ID }\n",
                "interface Middle implements Base { id: ID }\n",
                "type Leaf implements Middle { id: ID }\n",
                "type Query { leaf: Leaf }\n",
            ))?
            .build()?;

        assert_eq!(schema.possible_type_names("Base"), vec!["Leaf"]);

        Ok(())
    }

    #[test]
    fn union_members_in_declaration_order() -> Result<()> {
        let schema = zoo_schema()?;

        assert_eq!(schema.possible_type_names("Resident"), vec!["Dog", "Cat", "Keeper"]);

        Ok(())
    }

    #[test]
    fn other_kinds_and_unknown_names_have_none() -> Result<()> {
        let schema = zoo_schema()?;

        assert!(schema.possible_type_names("Diet").is_empty());
        assert!(schema.possible_type_names("Feeding").is_empty());
        assert!(schema.possible_type_names("String").is_empty());
        assert!(schema.possible_type_names("Nope").is_empty());

        Ok(())
    }
}

mod lookups {
    use super::*;

    #[test]
    fn types_keep_definition_order() -> Result<()> {
        let schema = zoo_schema()?;

        let user_type_names =
            schema.all_types()
                .values()
                .filter(|type_| !type_.is_builtin())
                .map(|type_| type_.name())
                .collect::<Vec<_>>();
        assert_eq!(user_type_names, vec![
            "Named",
            "Animal",
            "Unused",
            "Cat",
            "Dog",
            "Keeper",
            "Resident",
            "Diet",
            "Feeding",
            "Query",
        ]);

        Ok(())
    }

    #[test]
    fn directive_lookup() -> Result<()> {
        let schema = zoo_schema()?;

        let skip = schema.directive("skip").expect("@skip is defined");
        assert!(!skip.is_repeatable());
        assert_eq!(
            skip.locations().iter().map(|loc| loc.as_str()).collect::<Vec<_>>(),
            vec!["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
        );
        assert!(schema.directive("nope").is_none());

        Ok(())
    }

    #[test]
    fn schemas_built_from_the_same_sdl_are_equal() -> Result<()> {
        assert_eq!(zoo_schema()?, zoo_schema()?);

        Ok(())
    }
}
