use crate::schema_diff::ChangeKind;
use crate::schema_diff::ChangeRecord;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::UnionType;
use crate::Schema;
use indexmap::IndexMap;

/// Computes the structural difference between two versions of a [`Schema`].
///
/// Everything is compared by name: types, fields, enum values, union
/// members, interfaces, directives, directive locations and arguments. Each
/// property is checked independently, so one element can produce several
/// [`ChangeRecord`]s.
///
/// Records come out grouped: removed types, added types, changes within
/// types present in both schemas, then directive changes.
#[derive(Debug)]
pub struct SchemaComparator<'a> {
    changes: Vec<ChangeRecord>,
    new: &'a Schema,
    old: &'a Schema,
}
impl<'a> SchemaComparator<'a> {
    pub fn new(old: &'a Schema, new: &'a Schema) -> Self {
        Self {
            changes: vec![],
            new,
            old,
        }
    }

    pub fn compare(mut self) -> Vec<ChangeRecord> {
        self.find_changes_in_types();
        self.find_changes_in_schema_roots();
        self.find_changes_in_directives();

        log::debug!(
            "Found {} change(s) ({} breaking).",
            self.changes.len(),
            self.changes.iter().filter(|change| change.breaking).count(),
        );
        self.changes
    }

    fn find_changes_in_types(&mut self) {
        let old_types = self.old.all_types();
        let new_types = self.new.all_types();

        for type_name in old_types.keys() {
            if !new_types.contains_key(type_name) {
                self.changes.push(ChangeRecord::breaking(
                    ChangeKind::TypeRemoved,
                    format!("`{type_name}` type was removed"),
                ));
            }
        }

        for type_name in new_types.keys() {
            if !old_types.contains_key(type_name) {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::TypeAdded,
                    format!("`{type_name}` type was added"),
                ));
            }
        }

        for (type_name, old_type) in old_types {
            let Some(new_type) = new_types.get(type_name) else {
                continue;
            };

            if old_type.kind() != new_type.kind() {
                self.changes.push(ChangeRecord::breaking(
                    ChangeKind::TypeKindChanged,
                    format!(
                        "`{type_name}` changed from an {} type to a {} type",
                        old_type.kind().name(),
                        new_type.kind().name(),
                    ),
                ));
                continue;
            }

            self.find_changes_in_type(old_type, new_type);
        }
    }

    fn find_changes_in_type(&mut self, old_type: &GraphQLType, new_type: &GraphQLType) {
        match (old_type, new_type) {
            (GraphQLType::Enum(old_enum), GraphQLType::Enum(new_enum)) =>
                self.find_changes_in_enum_type(old_enum, new_enum),

            (GraphQLType::InputObject(old_input), GraphQLType::InputObject(new_input)) =>
                self.find_changes_in_input_object_type(old_input, new_input),

            (GraphQLType::Interface(old_iface), GraphQLType::Interface(new_iface)) =>
                self.find_changes_in_fields(
                    new_iface.name(),
                    old_iface.fields(),
                    new_iface.fields(),
                ),

            (GraphQLType::Object(old_obj), GraphQLType::Object(new_obj)) =>
                self.find_changes_in_object_type(old_obj, new_obj),

            (GraphQLType::Scalar(_), GraphQLType::Scalar(_)) => (),

            (GraphQLType::Union(old_union), GraphQLType::Union(new_union)) =>
                self.find_changes_in_union_type(old_union, new_union),

            (old_type, new_type) => unreachable!(
                "`{}` cannot be compared as both an {} type and a {} type",
                old_type.name(),
                old_type.kind().name(),
                new_type.kind().name(),
            ),
        }

        if old_type.description() != new_type.description() {
            self.changes.push(ChangeRecord::non_breaking(
                ChangeKind::TypeDescriptionChanged,
                format!("`{}` type description is changed", new_type.name()),
            ));
        }
    }

    fn find_changes_in_enum_type(&mut self, old_type: &EnumType, new_type: &EnumType) {
        let enum_name = new_type.name();
        let old_values = old_type.values();
        let new_values = new_type.values();

        for value_name in old_values.keys() {
            if !new_values.contains_key(value_name) {
                self.changes.push(ChangeRecord::breaking(
                    ChangeKind::EnumValueRemoved,
                    format!("Enum value `{value_name}` was removed from enum `{enum_name}`"),
                ));
            }
        }

        for value_name in new_values.keys() {
            if !old_values.contains_key(value_name) {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::EnumValueAdded,
                    format!("Enum value `{value_name}` was added to enum `{enum_name}`"),
                ));
            }
        }

        for (value_name, old_value) in old_values {
            let Some(new_value) = new_values.get(value_name) else {
                continue;
            };

            if old_value.description() != new_value.description() {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::EnumValueDescriptionChanged,
                    format!("`{enum_name}.{value_name}` description changed"),
                ));
            }

            // Any change in reason counts, including un-deprecating.
            if old_value.deprecation_reason() != new_value.deprecation_reason() {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::EnumValueDeprecated,
                    format!("Enum value `{value_name}` was deprecated in enum `{enum_name}`"),
                ));
            }
        }
    }

    fn find_changes_in_fields(
        &mut self,
        type_name: &str,
        old_fields: &IndexMap<String, Field>,
        new_fields: &IndexMap<String, Field>,
    ) {
        for field_name in old_fields.keys() {
            if !new_fields.contains_key(field_name) {
                self.changes.push(ChangeRecord::breaking(
                    ChangeKind::FieldRemoved,
                    format!("Field `{field_name}` was removed from `{type_name}` type"),
                ));
            }
        }

        for field_name in new_fields.keys() {
            if !old_fields.contains_key(field_name) {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::FieldAdded,
                    format!("Field `{field_name}` was added to `{type_name}` type"),
                ));
            }
        }

        for (field_name, old_field) in old_fields {
            if let Some(new_field) = new_fields.get(field_name) {
                self.find_changes_in_field(old_field, new_field);
            }
        }
    }

    /// Changes to a field's type or arguments are not reported.
    fn find_changes_in_field(&mut self, _old_field: &Field, _new_field: &Field) {}

    fn find_changes_in_input_object_type(
        &mut self,
        old_type: &InputObjectType,
        new_type: &InputObjectType,
    ) {
        let type_name = new_type.name();
        let old_fields = old_type.fields();
        let new_fields = new_type.fields();

        for field_name in old_fields.keys() {
            if !new_fields.contains_key(field_name) {
                self.changes.push(ChangeRecord::breaking(
                    ChangeKind::InputFieldRemoved,
                    format!("Input field `{field_name}` was removed from `{type_name}` type"),
                ));
            }
        }

        for (field_name, new_field) in new_fields {
            if !old_fields.contains_key(field_name) {
                self.changes.push(ChangeRecord {
                    kind: ChangeKind::InputFieldAdded,
                    description: format!(
                        "Input field `{field_name}` was added to `{type_name}` type",
                    ),
                    breaking: new_field.is_required(),
                });
            }
        }

        for (field_name, old_field) in old_fields {
            let Some(new_field) = new_fields.get(field_name) else {
                continue;
            };

            if old_field.description() != new_field.description() {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::InputFieldDescriptionChanged,
                    format!("`{type_name}.{field_name}` description is changed"),
                ));
            }

            self.find_changes_in_input_value(old_field, new_field);
        }
    }

    /// Changes to an input value's type or default value are not reported.
    fn find_changes_in_input_value(&mut self, _old_value: &Parameter, _new_value: &Parameter) {}

    fn find_changes_in_object_type(&mut self, old_type: &ObjectType, new_type: &ObjectType) {
        let type_name = new_type.name();
        let old_ifaces = old_type.interface_names();
        let new_ifaces = new_type.interface_names();

        // Dropping an interface is reported, but not as breaking.
        for iface_name in &old_ifaces {
            if !new_ifaces.contains(iface_name) {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::ObjectTypeInterfaceRemoved,
                    format!("`{type_name}` object type no longer implements `{iface_name}` interface"),
                ));
            }
        }

        for iface_name in &new_ifaces {
            if !old_ifaces.contains(iface_name) {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::ObjectTypeInterfaceAdded,
                    format!("`{type_name}` object type now implements `{iface_name}` interface"),
                ));
            }
        }

        self.find_changes_in_fields(type_name, old_type.fields(), new_type.fields());
    }

    fn find_changes_in_union_type(&mut self, old_type: &UnionType, new_type: &UnionType) {
        let union_name = new_type.name();
        let old_members = old_type.member_names();
        let new_members = new_type.member_names();

        for member_name in &old_members {
            if !new_members.contains(member_name) {
                self.changes.push(ChangeRecord::breaking(
                    ChangeKind::UnionMemberRemoved,
                    format!("`{member_name}` type was removed from union `{union_name}`"),
                ));
            }
        }

        for member_name in &new_members {
            if !old_members.contains(member_name) {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::UnionMemberAdded,
                    format!("`{member_name}` type was added to union `{union_name}`"),
                ));
            }
        }
    }

    /// Reassigning the query, mutation or subscription root is not reported.
    fn find_changes_in_schema_roots(&mut self) {}

    fn find_changes_in_directives(&mut self) {
        let old_directives = self.old.all_directives();
        let new_directives = self.new.all_directives();

        for directive_name in old_directives.keys() {
            if !new_directives.contains_key(directive_name) {
                self.changes.push(ChangeRecord::breaking(
                    ChangeKind::DirectiveRemoved,
                    format!("`{directive_name}` directive was removed"),
                ));
            }
        }

        for directive_name in new_directives.keys() {
            if !old_directives.contains_key(directive_name) {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::DirectiveAdded,
                    format!("`{directive_name}` directive was added"),
                ));
            }
        }

        for (directive_name, old_directive) in old_directives {
            let Some(new_directive) = new_directives.get(directive_name) else {
                continue;
            };

            if old_directive.description() != new_directive.description() {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::DirectiveDescriptionChanged,
                    format!("`{directive_name}` directive description is changed"),
                ));
            }

            self.find_changes_in_directive_locations(old_directive, new_directive);
            self.find_changes_in_directive_args(old_directive, new_directive);
        }
    }

    fn find_changes_in_directive_locations(
        &mut self,
        old_directive: &Directive,
        new_directive: &Directive,
    ) {
        let directive_name = new_directive.name();
        let old_locations = old_directive.locations();
        let new_locations = new_directive.locations();

        for location in old_locations {
            if !new_locations.contains(location) {
                self.changes.push(ChangeRecord::breaking(
                    ChangeKind::DirectiveLocationRemoved,
                    format!(
                        "`{}` directive location removed from `{directive_name}` directive",
                        location.camel_name(),
                    ),
                ));
            }
        }

        for location in new_locations {
            if !old_locations.contains(location) {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::DirectiveLocationAdded,
                    format!(
                        "`{}` directive location added to `{directive_name}` directive",
                        location.camel_name(),
                    ),
                ));
            }
        }
    }

    fn find_changes_in_directive_args(
        &mut self,
        old_directive: &Directive,
        new_directive: &Directive,
    ) {
        let directive_name = new_directive.name();
        let old_params = old_directive.params();
        let new_params = new_directive.params();

        for param_name in old_params.keys() {
            if !new_params.contains_key(param_name) {
                self.changes.push(ChangeRecord::breaking(
                    ChangeKind::DirectiveArgumentRemoved,
                    format!("Argument `{param_name}` was removed from `{directive_name}` directive"),
                ));
            }
        }

        for (param_name, new_param) in new_params {
            if !old_params.contains_key(param_name) {
                self.changes.push(ChangeRecord {
                    kind: ChangeKind::DirectiveArgumentAdded,
                    description: format!(
                        "Argument `{param_name}` was added to `{directive_name}` directive",
                    ),
                    breaking: new_param.is_required(),
                });
            }
        }

        for (param_name, old_param) in old_params {
            let Some(new_param) = new_params.get(param_name) else {
                continue;
            };

            if old_param.description() != new_param.description() {
                self.changes.push(ChangeRecord::non_breaking(
                    ChangeKind::DirectiveArgumentDescriptionChanged,
                    format!("`{directive_name}({param_name})` description is changed"),
                ));
            }

            self.find_changes_in_input_value(old_param, new_param);
        }
    }
}
