/// Whether a field or enum value is deprecated and, if so, with what reason.
#[derive(Clone, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    /// The reason is the empty string when `@deprecated` was applied without
    /// one.
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

impl<'a> std::convert::From<&'a Option<String>> for DeprecationState<'a> {
    fn from(value: &'a Option<String>) -> DeprecationState<'a> {
        match value {
            Some(reason) => DeprecationState::Deprecated(reason.as_str()),
            None => DeprecationState::NotDeprecated,
        }
    }
}
