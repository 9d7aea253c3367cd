use crate::ast;
use crate::validation::ValidationMessage;
use crate::Schema;
use crate::Value;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

/// The concrete object types a selection could be resolved against at one
/// level of the query. `None` when that can't be known (e.g. the parent type
/// is undefined).
type PossibleTypes = Option<Rc<BTreeSet<String>>>;

/// Collected fields, grouped by response key in the order they were found.
type FieldGroups<'doc> = IndexMap<String, Vec<CollectedField<'doc>>>;

#[derive(Debug)]
struct CollectedField<'doc> {
    field: &'doc ast::query::Field,
    fragments_on_path: Rc<HashSet<&'doc str>>,
    parent_type_name: Option<String>,
    /// One entry per level from the operation root down to (and including)
    /// the selection set this field was collected from.
    scopes: Vec<PossibleTypes>,
}
impl CollectedField<'_> {
    /// Two fields can never land on the same response object if, at some
    /// level, they are constrained to disjoint sets of object types.
    fn is_exclusive_with(&self, other: &CollectedField<'_>) -> bool {
        self.scopes.iter()
            .zip(other.scopes.iter())
            .any(|(scope_a, scope_b)| match (scope_a, scope_b) {
                (Some(types_a), Some(types_b)) => types_a.is_disjoint(types_b),
                _ => false,
            })
    }

    fn response_key(&self) -> &str {
        self.field.alias.as_deref().unwrap_or(self.field.name.as_str())
    }
}

/// Checks that all fields selected under the same response key (at every
/// depth of every operation) can be merged into one response value.
///
/// Two selections conflict when they name different fields or pass different
/// arguments, unless they can never apply to the same concrete object.
/// Directives are not considered.
#[derive(Debug)]
pub struct FieldsWillMergeValidator<'schema, 'doc> {
    document: &'doc ast::query::Document,
    fragments: HashMap<&'doc str, &'doc ast::query::FragmentDefinition>,
    messages: Vec<ValidationMessage>,
    reported: HashSet<(usize, String)>,
    schema: &'schema Schema,
}
impl<'schema, 'doc> FieldsWillMergeValidator<'schema, 'doc> {
    pub fn new(
        schema: &'schema Schema,
        document: &'doc ast::query::Document,
    ) -> Self {
        let fragments =
            document.definitions
                .iter()
                .filter_map(|def| match def {
                    ast::query::Definition::Fragment(frag_def) =>
                        Some((frag_def.name.as_str(), frag_def)),
                    ast::query::Definition::Operation(_) => None,
                })
                .collect();

        Self {
            document,
            fragments,
            messages: vec![],
            reported: HashSet::new(),
            schema,
        }
    }

    pub fn validate(mut self) -> Vec<ValidationMessage> {
        use ast::query::OperationDefinition;

        let document = self.document;
        let schema = self.schema;
        for def in &document.definitions {
            let ast::query::Definition::Operation(op_def) = def else {
                continue;
            };

            let (root_type_name, selection_set) = match op_def {
                OperationDefinition::SelectionSet(selection_set) =>
                    (Some(schema.query_type_name()), selection_set),
                OperationDefinition::Query(query) =>
                    (Some(schema.query_type_name()), &query.selection_set),
                OperationDefinition::Mutation(mutation) =>
                    (schema.mutation_type_name(), &mutation.selection_set),
                OperationDefinition::Subscription(subscription) =>
                    (schema.subscription_type_name(), &subscription.selection_set),
            };

            let root_scope = root_type_name.and_then(|name| self.possible_types(name));
            let mut groups = FieldGroups::new();
            self.collect_fields(
                selection_set,
                root_type_name,
                &[root_scope],
                &Rc::new(HashSet::new()),
                &mut groups,
            );
            self.check_groups(groups, &[]);
        }

        log::debug!(
            "Found {} field merge conflict(s) in the document.",
            self.messages.len(),
        );
        self.messages
    }

    fn check_groups(&mut self, groups: FieldGroups<'doc>, path: &[String]) {
        for (response_key, fields) in groups {
            if let Some(message) = self.find_conflict(&response_key, &fields, path) {
                if self.reported.insert((path.len(), response_key)) {
                    log::trace!("{message}");
                    self.messages.push(message);
                }
                continue;
            }

            let mut child_groups = FieldGroups::new();
            for collected in &fields {
                if collected.field.selection_set.items.is_empty() {
                    continue;
                }
                let return_type_name = self.return_type_name(collected);
                let mut scopes = collected.scopes.clone();
                scopes.push(self.child_scope(return_type_name));
                self.collect_fields(
                    &collected.field.selection_set,
                    return_type_name,
                    &scopes,
                    &collected.fragments_on_path,
                    &mut child_groups,
                );
            }

            if !child_groups.is_empty() {
                let mut child_path = path.to_vec();
                child_path.push(response_key);
                self.check_groups(child_groups, &child_path);
            }
        }
    }

    fn child_scope(&self, return_type_name: Option<&str>) -> PossibleTypes {
        self.possible_types(return_type_name?)
            .filter(|types| !types.is_empty())
    }

    /// Gathers every field of `selection_set` into `groups`, expanding inline
    /// fragments and fragment spreads in place.
    fn collect_fields(
        &self,
        selection_set: &'doc ast::query::SelectionSet,
        parent_type_name: Option<&str>,
        scopes: &[PossibleTypes],
        fragments_on_path: &Rc<HashSet<&'doc str>>,
        groups: &mut FieldGroups<'doc>,
    ) {
        use ast::query::Selection;
        use ast::query::TypeCondition;

        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let collected = CollectedField {
                        field,
                        fragments_on_path: fragments_on_path.clone(),
                        parent_type_name: parent_type_name.map(str::to_string),
                        scopes: scopes.to_vec(),
                    };
                    groups.entry(collected.response_key().to_string())
                        .or_default()
                        .push(collected);
                },

                Selection::InlineFragment(inline_frag) => match &inline_frag.type_condition {
                    Some(TypeCondition::On(type_name)) => self.collect_fields(
                        &inline_frag.selection_set,
                        Some(type_name.as_str()),
                        &self.narrow_scopes(scopes, type_name),
                        fragments_on_path,
                        groups,
                    ),

                    None => self.collect_fields(
                        &inline_frag.selection_set,
                        parent_type_name,
                        scopes,
                        fragments_on_path,
                        groups,
                    ),
                },

                Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name.as_str();
                    if fragments_on_path.contains(fragment_name) {
                        continue;
                    }
                    let Some(frag_def) = self.fragments.get(fragment_name).copied() else {
                        log::trace!("Ignoring spread of unknown fragment `{fragment_name}`.");
                        continue;
                    };

                    let mut frag_path = (**fragments_on_path).clone();
                    frag_path.insert(frag_def.name.as_str());

                    let TypeCondition::On(type_name) = &frag_def.type_condition;
                    self.collect_fields(
                        &frag_def.selection_set,
                        Some(type_name.as_str()),
                        &self.narrow_scopes(scopes, type_name),
                        &Rc::new(frag_path),
                        groups,
                    );
                },
            }
        }
    }

    /// Compares every pair of fields in a response-key group in document
    /// order and describes the first conflict found.
    fn find_conflict(
        &self,
        response_key: &str,
        fields: &[CollectedField<'doc>],
        path: &[String],
    ) -> Option<ValidationMessage> {
        for (i, field_a) in fields.iter().enumerate() {
            for field_b in &fields[i + 1..] {
                if field_a.is_exclusive_with(field_b) {
                    continue;
                }

                let (message, code) =
                    if field_a.field.name != field_b.field.name {
                        (format!(
                            "Field '{response_key}' has a field conflict: {} or {}?",
                            field_a.field.name,
                            field_b.field.name,
                        ), "fieldConflict")
                    } else {
                        let args_a = argument_map(field_a.field);
                        let args_b = argument_map(field_b.field);
                        if args_a == args_b {
                            continue;
                        }
                        (format!(
                            "Field '{response_key}' has an argument conflict: {} or {}?",
                            render_arguments(&args_a),
                            render_arguments(&args_b),
                        ), "argumentConflict")
                    };

                let mut conflict_path = path.to_vec();
                conflict_path.push(response_key.to_string());
                return Some(ValidationMessage {
                    message,
                    locations: vec![
                        field_a.field.position.into(),
                        field_b.field.position.into(),
                    ],
                    path: conflict_path,
                    code: Some(code.to_string()),
                });
            }
        }
        None
    }

    /// Restricts the innermost scope to the possible types of a fragment's
    /// type condition. An unknown type condition leaves the scope as-is. A
    /// condition with no possible types empties it, since such a fragment
    /// never applies.
    fn narrow_scopes(
        &self,
        scopes: &[PossibleTypes],
        type_condition: &str,
    ) -> Vec<PossibleTypes> {
        let mut narrowed = scopes.to_vec();
        if let Some(condition_types) = self.possible_types(type_condition)
            && let Some(scope) = narrowed.last_mut() {
            let next = match scope.as_ref() {
                Some(current_types) => Rc::new(
                    current_types.intersection(&condition_types)
                        .cloned()
                        .collect()
                ),
                None => condition_types,
            };
            *scope = Some(next);
        }
        narrowed
    }

    fn possible_types(&self, type_name: &str) -> PossibleTypes {
        self.schema.get_type(type_name)?;
        Some(Rc::new(
            self.schema.possible_type_names(type_name)
                .into_iter()
                .map(str::to_string)
                .collect()
        ))
    }

    fn return_type_name(&self, collected: &CollectedField<'doc>) -> Option<&'schema str> {
        let schema: &'schema Schema = self.schema;
        match collected.field.name.as_str() {
            "__typename" => return Some("String"),
            "__schema" => return Some("__Schema"),
            "__type" => return Some("__Type"),
            _ => (),
        }

        let parent_type = schema.get_type(collected.parent_type_name.as_deref()?)?;
        let field = parent_type.fields()?.get(collected.field.name.as_str())?;
        Some(field.type_annotation().innermost_type_name())
    }
}

fn argument_map(field: &ast::query::Field) -> IndexMap<String, Value> {
    field.arguments
        .iter()
        .map(|(name, value)| (name.to_string(), Value::from_ast(value)))
        .collect()
}

/// Renders arguments as a compact JSON object of stringified values.
fn render_arguments(args: &IndexMap<String, Value>) -> String {
    let rendered: IndexMap<&str, String> =
        args.iter()
            .map(|(name, value)| (name.as_str(), match value {
                Value::String(str) => str.to_string(),
                other => other.to_string(),
            }))
            .collect();
    serde_json::to_string(&rendered).unwrap_or_default()
}
