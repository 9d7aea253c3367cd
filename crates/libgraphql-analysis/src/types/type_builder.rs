use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The SDL text a set of AST definitions was parsed from.
///
/// graphql_parser drops `#` comments while tokenizing, so descriptions
/// written as comments are recovered from the raw source lines.
pub(crate) struct SdlSource<'a> {
    builtin: bool,
    file_path: Option<&'a Path>,
    lines: Vec<&'a str>,
}
impl<'a> SdlSource<'a> {
    pub(crate) fn builtin(content: &'a str) -> Self {
        Self {
            builtin: true,
            file_path: None,
            lines: content.lines().collect(),
        }
    }

    pub(crate) fn new(file_path: Option<&'a Path>, content: &'a str) -> Self {
        Self {
            builtin: false,
            file_path,
            lines: content.lines().collect(),
        }
    }

    /// Indicates whether this source holds the implicitly-defined parts of
    /// every schema.
    pub(crate) fn is_builtin(&self) -> bool {
        self.builtin
    }

    /// Resolve the description of the element at `pos`.
    ///
    /// A string description always wins. Otherwise, an uninterrupted run of
    /// `#` comment lines directly above the element is used, provided the
    /// element starts its own line.
    pub(crate) fn description(
        &self,
        ast_description: &Option<String>,
        pos: graphql_parser::Pos,
    ) -> Option<String> {
        if ast_description.is_some() {
            return ast_description.clone();
        }

        let line_idx = pos.line.checked_sub(1)?;
        let line = self.lines.get(line_idx)?;
        let starts_line = line.chars()
            .take(pos.column.saturating_sub(1))
            .all(|ch| ch.is_whitespace() || ch == ',');
        if !starts_line {
            return None;
        }

        let mut comment_lines = vec![];
        for line in self.lines[..line_idx].iter().rev() {
            let Some(comment) = line.trim_start().strip_prefix('#') else {
                break;
            };
            let comment = comment.trim_end_matches('\r');
            comment_lines.push(comment.strip_prefix(' ').unwrap_or(comment));
        }

        if comment_lines.is_empty() {
            None
        } else {
            comment_lines.reverse();
            Some(comment_lines.join("\n"))
        }
    }

    pub(crate) fn file_position(&self, pos: graphql_parser::Pos) -> loc::FilePosition {
        loc::FilePosition::from_pos(self.file_path, pos)
    }

    pub(crate) fn location(&self, pos: graphql_parser::Pos) -> loc::SourceLocation {
        if self.builtin {
            loc::SourceLocation::GraphQLBuiltIn
        } else {
            self.file_position(pos).into()
        }
    }
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    /// The `reason` given to an `@deprecated` annotation, if one is present.
    /// An annotation without a (string) reason yields an empty reason.
    pub(crate) fn deprecation_reason_from_ast(
        directives: &[ast::schema::Directive],
    ) -> Option<String> {
        let annot = directives.iter().find(|annot| annot.name == "deprecated")?;
        let reason = annot.arguments.iter()
            .find(|(arg_name, _)| arg_name == "reason")
            .and_then(|(_, value)| match value {
                ast::schema::Value::String(reason) => Some(reason.to_string()),
                _ => None,
            });
        Some(reason.unwrap_or_default())
    }

    pub(crate) fn enum_values_from_ast(
        src: &SdlSource<'_>,
        enum_name: &str,
        enum_def_location: &loc::SourceLocation,
        existing_values: &mut IndexMap<String, EnumValue>,
        ast_values: &[ast::schema::EnumValue],
    ) -> Result<()> {
        for ast_value in ast_values {
            let value_loc = src.location(ast_value.position);
            if let Some(existing_value) = existing_values.get(ast_value.name.as_str()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: enum_name.to_string(),
                    enum_def_location: enum_def_location.clone(),
                    value_def1: existing_value.def_location.clone(),
                    value_def2: value_loc,
                });
            }

            existing_values.insert(ast_value.name.to_string(), EnumValue {
                deprecation_reason: Self::deprecation_reason_from_ast(
                    &ast_value.directives,
                ),
                description: src.description(
                    &ast_value.description,
                    ast_value.position,
                ),
                def_location: value_loc,
                name: ast_value.name.to_string(),
                type_ref: NamedGraphQLTypeRef::new(
                    enum_name,
                    enum_def_location.clone(),
                ),
            });
        }
        Ok(())
    }

    pub(crate) fn input_fields_from_ast(
        src: &SdlSource<'_>,
        type_name: &str,
        existing_fields: &mut IndexMap<String, Parameter>,
        ast_fields: &[ast::schema::InputValue],
    ) -> Result<()> {
        for ast_field in ast_fields {
            let input_field = Self::parameter_from_ast(src, ast_field);
            if let Some(existing_field) = existing_fields.get(ast_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: ast_field.name.to_string(),
                    field_def1: existing_field.def_location.clone(),
                    field_def2: input_field.def_location,
                });
            }
            existing_fields.insert(ast_field.name.to_string(), input_field);
        }
        Ok(())
    }

    pub(crate) fn object_fielddefs_from_ast(
        src: &SdlSource<'_>,
        type_name: &str,
        existing_fields: &mut IndexMap<String, Field>,
        ast_fields: &[ast::schema::Field],
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field_loc = src.location(ast_field.position);
            if !src.is_builtin() && ast_field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: field_loc,
                    field_name: ast_field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = existing_fields.get(ast_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: ast_field.name.to_string(),
                    field_def1: existing_field.def_location.clone(),
                    field_def2: field_loc,
                });
            }

            for ast_param in &ast_field.arguments {
                if !src.is_builtin() && ast_param.name.starts_with("__") {
                    return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                        def_location: src.location(ast_param.position),
                        field_name: ast_field.name.to_string(),
                        param_name: ast_param.name.to_string(),
                        type_name: type_name.to_string(),
                    });
                }
            }

            existing_fields.insert(ast_field.name.to_string(), Field {
                deprecation_reason: Self::deprecation_reason_from_ast(
                    &ast_field.directives,
                ),
                description: src.description(
                    &ast_field.description,
                    ast_field.position,
                ),
                name: ast_field.name.to_string(),
                parameters: Self::parameters_from_ast(src, &ast_field.arguments),
                parent_type: NamedGraphQLTypeRef::new(
                    type_name,
                    field_loc.clone(),
                ),
                // graphql_parser doesn't give us a location for the
                // field-definition's type.
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_loc,
                    &ast_field.field_type,
                ),
                def_location: field_loc,
            });
        }
        Ok(())
    }

    pub(crate) fn parameter_from_ast(
        src: &SdlSource<'_>,
        input_val: &ast::schema::InputValue,
    ) -> Parameter {
        let input_val_loc = src.location(input_val.position);
        Parameter {
            default_value: input_val.default_value.as_ref().map(Value::from_ast),
            description: src.description(
                &input_val.description,
                input_val.position,
            ),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(
                &input_val_loc,
                &input_val.value_type,
            ),
            def_location: input_val_loc,
        }
    }

    pub(crate) fn parameters_from_ast(
        src: &SdlSource<'_>,
        input_vals: &[ast::schema::InputValue],
    ) -> IndexMap<String, Parameter> {
        input_vals.iter().map(|input_val| (
            input_val.name.to_string(),
            Self::parameter_from_ast(src, input_val),
        )).collect()
    }
}
