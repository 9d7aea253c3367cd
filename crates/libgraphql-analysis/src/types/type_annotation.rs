use crate::ast;
use crate::loc;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type for a [`Field`](crate::types::Field) or
/// [`Parameter`](crate::types::Parameter).
///
/// Non-nullability is a flag on each layer rather than a wrapper of its own,
/// so a doubly-wrapped non-null type cannot be expressed. Equality is
/// structural and disregards where the annotation was written.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`TypeAnnotation`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List(annot) => annot.inner().def_location(),
            Self::Named(annot) => annot.type_ref().ref_location(),
        }
    }

    pub(crate) fn from_ast_type(
        def_location: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
    ) -> Self {
        Self::from_ast_type_impl(def_location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        def_location: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner: Box::new(Self::from_ast_type_impl(
                        def_location,
                        inner,
                        true,
                    )),
                    nullable,
                }),

            ast::schema::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_ref: NamedGraphQLTypeRef::new(
                        name,
                        def_location.clone(),
                    ),
                }),

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(def_location, inner, false),
        }
    }

    /// The [`NamedTypeAnnotation`] found after unwrapping every list layer.
    pub fn innermost_named_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(annot) => annot.inner().innermost_named_annotation(),
            Self::Named(annot) => annot,
        }
    }

    /// The name of the type found after unwrapping every list layer (e.g.
    /// `User` for `[User!]!`).
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_annotation().type_name()
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable,
            Self::Named(annot) => annot.nullable,
        }
    }

    /// Indicates whether this annotation is non-null.
    pub fn is_required(&self) -> bool {
        !self.is_nullable()
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(annot) => write!(f, "[{}]", annot.inner())?,
            Self::Named(annot) => write!(f, "{}", annot.type_name())?,
        }
        if self.is_required() {
            write!(f, "!")?;
        }
        Ok(())
    }
}
