//! Registered user records.

use serde::Serialize;

use crate::store::codec::truncate;
use crate::store::{FieldReader, FieldWriter, FixedRecord};

/// Width of the full name field in bytes.
pub const FULLNAME_WIDTH: usize = 20;
/// Width of the address field in bytes.
pub const ADDRESS_WIDTH: usize = 20;
/// Width of the phone number field in bytes.
pub const PHONE_WIDTH: usize = 11;
/// Width of the email field in bytes.
pub const EMAIL_WIDTH: usize = 20;
/// Width of the username field in bytes.
pub const USERNAME_WIDTH: usize = 20;
/// Width of the password field in bytes.
pub const PASSWORD_WIDTH: usize = 20;

/// A registered user.
///
/// Username and phone number are unique among stored users. The password is
/// kept as plain text; comparisons go through
/// [`CredentialCheck`](crate::auth::CredentialCheck).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Full name.
    pub fullname: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Login name.
    pub username: String,
    /// Login password.
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Create a user, truncating every field to its stored width.
    #[must_use]
    pub fn new(
        fullname: &str,
        address: &str,
        phone: &str,
        email: &str,
        username: &str,
        password: &str,
    ) -> Self {
        Self {
            fullname: fullname.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
        .fit()
    }

    /// Truncate every field to what the record file can hold.
    #[must_use]
    pub fn fit(mut self) -> Self {
        for field in UserField::ALL {
            let value = field.get(&self).to_string();
            field.apply(&mut self, &value);
        }
        self
    }

    /// True if `identifier` is this user's username, phone number or email.
    ///
    /// The identifier is cut to each field's stored width first, so input
    /// longer than the field still matches what registration kept.
    #[must_use]
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.username == truncate(identifier, USERNAME_WIDTH)
            || self.phone == truncate(identifier, PHONE_WIDTH)
            || self.email == truncate(identifier, EMAIL_WIDTH)
    }
}

impl FixedRecord for User {
    const KIND: &'static str = "user";
    const SIZE: usize =
        FULLNAME_WIDTH + ADDRESS_WIDTH + PHONE_WIDTH + EMAIL_WIDTH + USERNAME_WIDTH + PASSWORD_WIDTH;

    fn encode(&self, out: &mut FieldWriter<'_>) {
        out.text(&self.fullname, FULLNAME_WIDTH);
        out.text(&self.address, ADDRESS_WIDTH);
        out.text(&self.phone, PHONE_WIDTH);
        out.text(&self.email, EMAIL_WIDTH);
        out.text(&self.username, USERNAME_WIDTH);
        out.text(&self.password, PASSWORD_WIDTH);
    }

    fn decode(input: &mut FieldReader<'_>) -> Self {
        Self {
            fullname: input.text(FULLNAME_WIDTH),
            address: input.text(ADDRESS_WIDTH),
            phone: input.text(PHONE_WIDTH),
            email: input.text(EMAIL_WIDTH),
            username: input.text(USERNAME_WIDTH),
            password: input.text(PASSWORD_WIDTH),
        }
    }
}

/// A user field that can be changed after registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    /// Full name.
    FullName,
    /// Postal address.
    Address,
    /// Phone number.
    Phone,
    /// Email address.
    Email,
    /// Username.
    Username,
    /// Password.
    Password,
}

impl UserField {
    /// Every field, in menu order.
    pub const ALL: [Self; 6] = [
        Self::FullName,
        Self::Address,
        Self::Phone,
        Self::Email,
        Self::Username,
        Self::Password,
    ];

    /// Map a 1-based menu choice to a field.
    #[must_use]
    pub fn from_menu(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    /// Stored width of this field in bytes.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            Self::FullName => FULLNAME_WIDTH,
            Self::Address => ADDRESS_WIDTH,
            Self::Phone => PHONE_WIDTH,
            Self::Email => EMAIL_WIDTH,
            Self::Username => USERNAME_WIDTH,
            Self::Password => PASSWORD_WIDTH,
        }
    }

    /// Current value of this field.
    #[must_use]
    pub fn get(self, user: &User) -> &str {
        match self {
            Self::FullName => &user.fullname,
            Self::Address => &user.address,
            Self::Phone => &user.phone,
            Self::Email => &user.email,
            Self::Username => &user.username,
            Self::Password => &user.password,
        }
    }

    /// Overwrite this field, truncated to its width.
    pub fn apply(self, user: &mut User, value: &str) {
        let value = truncate(value, self.width()).to_string();
        match self {
            Self::FullName => user.fullname = value,
            Self::Address => user.address = value,
            Self::Phone => user.phone = value,
            Self::Email => user.email = value,
            Self::Username => user.username = value,
            Self::Password => user.password = value,
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullName => write!(f, "Full Name"),
            Self::Address => write!(f, "Address"),
            Self::Phone => write!(f, "Contact"),
            Self::Email => write!(f, "Email"),
            Self::Username => write!(f, "Username"),
            Self::Password => write!(f, "Password"),
        }
    }
}
