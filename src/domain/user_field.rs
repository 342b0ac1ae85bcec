/// The fields the create-user endpoint requires in its JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    FirstName,
    LastName,
    PhoneNumber,
    EmailId,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::PhoneNumber,
        UserField::EmailId,
    ];

    /// The JSON key used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::FirstName => "firstName",
            UserField::LastName => "lastName",
            UserField::PhoneNumber => "phoneNumber",
            UserField::EmailId => "emailId",
        }
    }
}

impl AsRef<str> for UserField {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
