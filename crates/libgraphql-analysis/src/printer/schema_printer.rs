use crate::printer::description::print_description;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::types::BUILTIN_SCALAR_NAMES;
use crate::value::quote_string;
use crate::Value;
use indexmap::IndexMap;

/// Renders a [`Schema`] as canonical SDL text.
///
/// Output is deterministic for a given schema: the `schema { ... }` block
/// first, then directive definitions, then type definitions, each separated
/// by a blank line. Descriptions are printed as `#` comments.
#[derive(Debug)]
pub struct SchemaPrinter<'schema> {
    schema: &'schema Schema,
}
impl<'schema> SchemaPrinter<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    /// Prints every directive and type defined by the schema itself, with
    /// types sorted by name. The built-in directives, built-in scalars, and
    /// introspection types are left out.
    pub fn print(&self) -> String {
        let mut types: Vec<&GraphQLType> =
            self.schema.all_types()
                .values()
                .filter(|type_| {
                    !is_introspection_type_name(type_.name())
                    && !BUILTIN_SCALAR_NAMES.contains(&type_.name())
                })
                .collect();
        types.sort_by(|a, b| a.name().cmp(b.name()));

        let directives: Vec<&Directive> =
            self.schema.all_directives()
                .values()
                .filter(|directive| !directive.is_builtin())
                .collect();

        self.print_filtered(directives, types)
    }

    /// Prints only the built-in directives and the introspection types, in
    /// declaration order.
    pub fn print_introspection(&self) -> String {
        let types: Vec<&GraphQLType> =
            self.schema.all_types()
                .values()
                .filter(|type_| is_introspection_type_name(type_.name()))
                .collect();

        let directives: Vec<&Directive> =
            self.schema.all_directives()
                .values()
                .filter(|directive| directive.is_builtin())
                .collect();

        self.print_filtered(directives, types)
    }

    fn print_filtered(
        &self,
        directives: Vec<&Directive>,
        types: Vec<&GraphQLType>,
    ) -> String {
        log::trace!(
            "Printing {} directives and {} types.",
            directives.len(),
            types.len(),
        );

        let mut definitions = vec![self.print_schema_definition()];
        definitions.extend(directives.into_iter().map(|d| self.print_directive(d)));
        definitions.extend(types.into_iter().map(|t| self.print_type(t)));
        definitions.join("\n\n")
    }

    fn print_schema_definition(&self) -> String {
        let operations = [
            ("query", Some(self.schema.query_type_name())),
            ("mutation", self.schema.mutation_type_name()),
            ("subscription", self.schema.subscription_type_name()),
        ];

        let mut output = "schema {\n".to_string();
        for (operation, type_name) in operations {
            if let Some(type_name) = type_name {
                output.push_str(&format!("  {operation}: {type_name}\n"));
            }
        }
        output.push('}');
        output
    }

    fn print_directive(&self, directive: &Directive) -> String {
        let locations =
            directive.locations()
                .iter()
                .map(|location| location.as_str())
                .collect::<Vec<_>>()
                .join(" | ");

        format!(
            "{}directive @{}{}{} on {locations}",
            print_description(directive.description(), "", true),
            directive.name(),
            self.print_args(directive.params(), ""),
            if directive.is_repeatable() { " repeatable" } else { "" },
        )
    }

    fn print_type(&self, type_: &GraphQLType) -> String {
        match type_ {
            GraphQLType::Enum(enum_type) => self.print_enum_type(enum_type),

            GraphQLType::InputObject(input_type) =>
                self.print_input_object_type(input_type),

            GraphQLType::Interface(iface_type) => self.print_object_or_interface(
                "interface",
                iface_type.name(),
                iface_type.description(),
                iface_type.interface_names(),
                iface_type.fields(),
            ),

            GraphQLType::Object(obj_type) => self.print_object_or_interface(
                "type",
                obj_type.name(),
                obj_type.description(),
                obj_type.interface_names(),
                obj_type.fields(),
            ),

            GraphQLType::Scalar(scalar_type) => self.print_scalar_type(scalar_type),

            GraphQLType::Union(union_type) => self.print_union_type(union_type),
        }
    }

    fn print_enum_type(&self, enum_type: &EnumType) -> String {
        let values =
            enum_type.values()
                .values()
                .enumerate()
                .map(|(i, value)| format!(
                    "{}  {}{}",
                    print_description(value.description(), "  ", i == 0),
                    value.name(),
                    print_deprecated(value.deprecation_state()),
                ))
                .collect::<Vec<_>>();

        format!(
            "{}enum {}{}",
            print_description(enum_type.description(), "", true),
            enum_type.name(),
            print_block(values),
        )
    }

    fn print_input_object_type(&self, input_type: &InputObjectType) -> String {
        let fields =
            input_type.fields()
                .values()
                .enumerate()
                .map(|(i, field)| format!(
                    "{}  {}",
                    print_description(field.description(), "  ", i == 0),
                    self.print_input_value(field),
                ))
                .collect::<Vec<_>>();

        format!(
            "{}input {}{}",
            print_description(input_type.description(), "", true),
            input_type.name(),
            print_block(fields),
        )
    }

    fn print_object_or_interface(
        &self,
        keyword: &str,
        name: &str,
        description: Option<&str>,
        interface_names: Vec<&str>,
        fields: &IndexMap<String, Field>,
    ) -> String {
        let implementations =
            if interface_names.is_empty() {
                String::new()
            } else {
                format!(" implements {}", interface_names.join(" & "))
            };

        format!(
            "{}{keyword} {name}{implementations}{}",
            print_description(description, "", true),
            print_block(self.print_fields(fields)),
        )
    }

    fn print_scalar_type(&self, scalar_type: &ScalarType) -> String {
        format!(
            "{}scalar {}",
            print_description(scalar_type.description(), "", true),
            scalar_type.name(),
        )
    }

    fn print_union_type(&self, union_type: &UnionType) -> String {
        let members = union_type.member_names();
        let members =
            if members.is_empty() {
                String::new()
            } else {
                format!(" = {}", members.join(" | "))
            };

        format!(
            "{}union {}{members}",
            print_description(union_type.description(), "", true),
            union_type.name(),
        )
    }

    fn print_fields(&self, fields: &IndexMap<String, Field>) -> Vec<String> {
        fields.values()
            .enumerate()
            .map(|(i, field)| format!(
                "{}  {}{}: {}{}",
                print_description(field.description(), "  ", i == 0),
                field.name(),
                self.print_args(field.parameters(), "  "),
                field.type_annotation(),
                print_deprecated(field.deprecation_state()),
            ))
            .collect()
    }

    /// Arguments print on one line unless at least one of them has a
    /// description, in which case each argument gets its own line.
    fn print_args(
        &self,
        params: &IndexMap<String, Parameter>,
        indentation: &str,
    ) -> String {
        if params.is_empty() {
            return String::new();
        }

        if params.values().all(|param| param.description().is_none()) {
            let args =
                params.values()
                    .map(|param| self.print_input_value(param))
                    .collect::<Vec<_>>()
                    .join(", ");
            return format!("({args})");
        }

        let arg_indentation = format!("  {indentation}");
        let args =
            params.values()
                .enumerate()
                .map(|(i, param)| format!(
                    "{}{arg_indentation}{}",
                    print_description(param.description(), &arg_indentation, i == 0),
                    self.print_input_value(param),
                ))
                .collect::<Vec<_>>()
                .join("\n");
        format!("(\n{args}\n{indentation})")
    }

    fn print_input_value(&self, param: &Parameter) -> String {
        let default_value =
            param.default_value()
                .map(|value| format!(
                    " = {}",
                    self.print_value(value, param.type_annotation()),
                ))
                .unwrap_or_default();

        format!("{}: {}{default_value}", param.name(), param.type_annotation())
    }

    /// Renders a default value according to the type it is a value of.
    fn print_value(&self, value: &Value, type_annot: &TypeAnnotation) -> String {
        if let Value::Null = value {
            return "null".to_string();
        }

        match type_annot {
            TypeAnnotation::List(list_annot) => match value {
                Value::List(items) => format!(
                    "[{}]",
                    items.iter()
                        .map(|item| self.print_value(item, list_annot.inner()))
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                // A single value is accepted in place of a list of one.
                item => format!("[{}]", self.print_value(item, list_annot.inner())),
            },

            TypeAnnotation::Named(named_annot) =>
                self.print_named_value(value, named_annot.type_name()),
        }
    }

    fn print_named_value(&self, value: &Value, type_name: &str) -> String {
        match (type_name, value) {
            ("Float", Value::Float(float)) => format!("{float:?}"),
            ("Float", Value::Int(int)) => format!("{:?}", *int as f64),
            ("Int", Value::Int(int)) => int.to_string(),
            ("Int", Value::Float(float)) => (float.trunc() as i64).to_string(),
            ("Boolean", Value::Boolean(bool)) => bool.to_string(),
            ("ID" | "String", Value::String(str)) => quote_string(str),
            ("ID" | "String", other) => quote_string(&other.to_string()),
            ("Boolean" | "Float" | "Int", other) => other.to_string(),

            (_, value) => match self.schema.get_type(type_name) {
                Some(GraphQLType::Enum(_)) => match value {
                    Value::Enum(name) | Value::String(name) => name.to_string(),
                    other => other.to_string(),
                },

                Some(GraphQLType::InputObject(input_type)) => match value {
                    Value::Object(entries) =>
                        self.print_input_object_value(input_type, entries),
                    other => other.to_string(),
                },

                Some(GraphQLType::Scalar(_)) => match value {
                    Value::String(str) => quote_string(str),
                    other => quote_string(&other.to_string()),
                },

                Some(GraphQLType::Interface(_))
                    | Some(GraphQLType::Object(_))
                    | Some(GraphQLType::Union(_))
                    | None => value.to_string(),
            },
        }
    }

    /// Entries print in the order the input type declares its fields.
    fn print_input_object_value(
        &self,
        input_type: &InputObjectType,
        entries: &IndexMap<String, Value>,
    ) -> String {
        let declared =
            input_type.fields()
                .values()
                .filter_map(|field| {
                    let value = entries.get(field.name())?;
                    Some(format!(
                        "{}: {}",
                        field.name(),
                        self.print_value(value, field.type_annotation()),
                    ))
                });
        let undeclared =
            entries.iter()
                .filter(|(name, _)| !input_type.fields().contains_key(name.as_str()))
                .map(|(name, value)| format!("{name}: {value}"));

        let fields = declared.chain(undeclared).collect::<Vec<_>>().join(", ");
        format!("{{ {fields} }}")
    }
}

fn is_introspection_type_name(name: &str) -> bool {
    name.starts_with("__")
}

fn print_block(lines: Vec<String>) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        format!(" {{\n{}\n}}", lines.join("\n"))
    }
}

fn print_deprecated(deprecation_state: DeprecationState<'_>) -> String {
    match deprecation_state {
        DeprecationState::NotDeprecated => String::new(),
        DeprecationState::Deprecated("") => " @deprecated".to_string(),
        DeprecationState::Deprecated(reason) =>
            format!(" @deprecated(reason: {})", quote_string(reason)),
    }
}
