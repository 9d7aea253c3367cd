use crate::loc;
use crate::types::DirectiveLocation;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Names of the directives every schema carries unless it defines its own
/// directive with the same name.
pub const BUILTIN_DIRECTIVE_NAMES: [&str; 3] = [
    "skip",
    "include",
    "deprecated",
];

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) params: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl Directive {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Indicates whether this is one of the directives named by
    /// [`BUILTIN_DIRECTIVE_NAMES`] (whether injected or redefined by the
    /// schema).
    pub fn is_builtin(&self) -> bool {
        BUILTIN_DIRECTIVE_NAMES.contains(&self.name.as_str())
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// The locations this directive may be applied to, in declaration order.
    pub fn locations(&self) -> &Vec<DirectiveLocation> {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn params(&self) -> &IndexMap<String, Parameter> {
        &self.params
    }
}
