mod generators;
mod new_user_payload;
mod user_field;

pub use generators::{random_email, random_phone_number, random_string};
pub use new_user_payload::NewUserPayload;
pub use user_field::UserField;
