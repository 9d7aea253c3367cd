use crate::loc;
use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store (`TResource::Source`)
/// without holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the source.
///
/// As a more concrete example, [crate::types::UnionType] stores its members
/// as `NamedRef<crate::types::GraphQLType>`s which are looked up by name in
/// the [crate::Schema]'s type table. This allows the schema to hold mutually
/// recursive types without any self-references.
#[derive(Clone, Debug)]
pub struct NamedRef<TResource: DerefByName> {
    name: String,
    phantom: PhantomData<fn() -> TResource>,
    ref_location: loc::SourceLocation,
}
impl<TResource: DerefByName> NamedRef<TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TResource::Source,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

// Two references are the same reference if they name the same resource; where
// each one was written down is irrelevant.
impl<TResource: DerefByName> std::cmp::PartialEq for NamedRef<TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of NamedRef<T> for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, ref_location: loc::SourceLocation) -> NamedRef<Self> {
        NamedRef::<Self>::new(name, ref_location)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No resource named `{0}` is defined")]
    DanglingReference(String),
}
