use crate::domain::UserField;
use crate::domain::generators::{random_email, random_phone_number};
use serde_json::{Map, Value};

/// JSON body for a create-user call.
///
/// Fields are stored as raw JSON values so scenarios can drop or mistype
/// any of them on purpose.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct NewUserPayload(Map<String, Value>);

impl NewUserPayload {
    pub fn new(first_name: &str, last_name: &str, phone_number: u64, email_id: &str) -> Self {
        Self::default()
            .with_value(UserField::FirstName, first_name)
            .with_value(UserField::LastName, last_name)
            .with_value(UserField::PhoneNumber, phone_number)
            .with_value(UserField::EmailId, email_id)
    }

    /// A well-typed payload with a fresh phone number and email.
    pub fn valid() -> Self {
        Self::new(
            "Test",
            "User",
            random_phone_number(),
            &random_email("test.user"),
        )
    }

    pub fn with_value(mut self, field: UserField, value: impl Into<Value>) -> Self {
        self.0.insert(field.as_str().to_string(), value.into());
        self
    }

    pub fn without(mut self, field: UserField) -> Self {
        self.0.remove(field.as_str());
        self
    }

    pub fn get(&self, field: UserField) -> Option<&Value> {
        self.0.get(field.as_str())
    }
}
