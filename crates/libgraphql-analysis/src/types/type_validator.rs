use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Checks that every type reference made by a single [`GraphQLType`]
/// resolves, and resolves to a kind of type that is allowed in that
/// position.
pub(crate) struct TypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a GraphQLType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> TypeValidator<'a> {
    pub(crate) fn new(
        type_: &'a GraphQLType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub(crate) fn validate(mut self) -> Vec<TypeValidationError> {
        match self.type_ {
            GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),

            GraphQLType::InputObject(input_type) => {
                for input_field in input_type.fields().values() {
                    self.check_input_field(input_type.name(), input_field);
                }
            },

            GraphQLType::Interface(_) | GraphQLType::Object(_) => {
                self.check_interfaces();
                if let Some(fields) = self.type_.fields() {
                    for field in fields.values() {
                        self.check_output_field(field);
                    }
                }
            },

            GraphQLType::Union(union_type) => {
                for (member_name, member_ref) in union_type.members.iter() {
                    match self.types_map.get(member_name) {
                        Some(GraphQLType::Object(_)) => (),
                        Some(member_type) => self.errors.push(
                            TypeValidationError::InvalidUnionMemberTypeKind {
                                location: member_ref.ref_location().clone(),
                                union_type_name: union_type.name().to_string(),
                                invalid_member_type_name: member_name.to_string(),
                                invalid_member_type_kind: member_type.kind(),
                            }
                        ),
                        None => self.errors.push(
                            TypeValidationError::UndefinedTypeName {
                                ref_location: member_ref.ref_location().clone(),
                                undefined_type_name: member_name.to_string(),
                            }
                        ),
                    }
                }
            },
        }

        self.errors
    }

    fn check_input_field(&mut self, parent_type_name: &str, input_field: &Parameter) {
        let type_name = input_field.type_annotation().innermost_type_name();
        match self.types_map.get(type_name) {
            Some(field_type) if !field_type.kind().is_input_type() =>
                self.errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                    def_location: input_field.def_location().clone(),
                    field_name: input_field.name().to_string(),
                    invalid_type_name: type_name.to_string(),
                    parent_type_name: parent_type_name.to_string(),
                }),
            Some(_) => (),
            None => self.errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: input_field.def_location().clone(),
                undefined_type_name: type_name.to_string(),
            }),
        }
    }

    fn check_interfaces(&mut self) {
        for iface_name in self.type_.interface_names() {
            match self.types_map.get(iface_name) {
                Some(GraphQLType::Interface(_)) => (),
                Some(_) => self.errors.push(
                    TypeValidationError::ImplementsNonInterfaceType {
                        type_name: self.type_.name().to_string(),
                        non_interface_type_name: iface_name.to_string(),
                        loc: self.type_.def_location().clone(),
                    }
                ),
                None => self.errors.push(
                    TypeValidationError::ImplementsUndefinedInterface {
                        type_name: self.type_.name().to_string(),
                        undefined_interface_name: iface_name.to_string(),
                        loc: self.type_.def_location().clone(),
                    }
                ),
            }
        }
    }

    fn check_output_field(&mut self, field: &Field) {
        let type_name = field.type_annotation().innermost_type_name();
        match self.types_map.get(type_name).map(GraphQLTypeKind::from) {
            Some(kind) if !kind.is_output_type() =>
                self.errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                    def_location: field.def_location().clone(),
                    field_name: field.name().to_string(),
                    input_type_name: type_name.to_string(),
                    parent_type_name: self.type_.name().to_string(),
                }),
            Some(_) => (),
            None => self.errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: field.def_location().clone(),
                undefined_type_name: type_name.to_string(),
            }),
        }

        for param in field.parameters().values() {
            self.errors.append(&mut check_parameter(param, self.types_map));
        }
    }
}

/// Checks that a parameter's type is defined and may be used as an input.
pub(crate) fn check_parameter(
    param: &Parameter,
    types_map: &IndexMap<String, GraphQLType>,
) -> Vec<TypeValidationError> {
    let type_name = param.type_annotation().innermost_type_name();
    match types_map.get(type_name) {
        Some(param_type) if !param_type.kind().is_input_type() =>
            vec![TypeValidationError::InvalidParameterWithOutputOnlyType {
                def_location: param.def_location().clone(),
                parameter_name: param.name().to_string(),
                outputonly_type_name: type_name.to_string(),
            }],
        Some(_) => vec![],
        None => vec![TypeValidationError::UndefinedTypeName {
            ref_location: param.def_location().clone(),
            undefined_type_name: type_name.to_string(),
        }],
    }
}
