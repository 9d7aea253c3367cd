mod fields_will_merge_validator;
mod validation_message;

pub use fields_will_merge_validator::FieldsWillMergeValidator;
pub use validation_message::MessageLocation;
pub use validation_message::ValidationMessage;

#[cfg(test)]
mod tests;
