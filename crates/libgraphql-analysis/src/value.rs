use crate::ast;
use indexmap::IndexMap;

/// A literal value as written in a schema (default values) or in a query
/// document (field arguments).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    VarRef(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::schema::Value) -> Self {
        use graphql_parser::query::Value as AstValue;
        match ast_value {
            AstValue::Variable(var_name) =>
                Value::VarRef(var_name.clone()),

            AstValue::Int(value) =>
                Value::Int(value.as_i64().unwrap_or_default()),

            AstValue::Float(value) =>
                Value::Float(*value),

            AstValue::String(value) =>
                Value::String(value.clone()),

            AstValue::Boolean(value) =>
                Value::Boolean(*value),

            AstValue::Null =>
                Value::Null,

            AstValue::Enum(value) =>
                Value::Enum(value.clone()),

            AstValue::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            AstValue::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),
        }
    }
}

/// Formats the value as a GraphQL literal.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(name) => write!(f, "{name}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Object(entries) => {
                if entries.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, " }}")
            },
            Self::String(value) => write!(f, "{}", quote_string(value)),
            Self::VarRef(name) => write!(f, "${name}"),
        }
    }
}

/// Renders `value` as a double-quoted GraphQL string literal.
pub(crate) fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0C}' => quoted.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                quoted.push_str(&format!("\\u{:04X}", ch as u32));
            },
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
