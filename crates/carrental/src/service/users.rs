//! Registration, login and user management.

use tracing::{debug, info};

use crate::auth::CredentialCheck;
use crate::error::{Error, Result};
use crate::models::user::{PASSWORD_WIDTH, PHONE_WIDTH, USERNAME_WIDTH};
use crate::models::{User, UserField};
use crate::store::codec::truncate;

use super::Service;

/// Everything collected on the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// The new user.
    pub user: User,
    /// The password typed a second time.
    pub password_confirmation: String,
}

impl<C: CredentialCheck> Service<C> {
    /// Fail if `phone` already belongs to a stored user.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the phone number is taken, or a store
    /// error if the user file cannot be read.
    pub fn check_phone_available(&self, phone: &str) -> Result<()> {
        let phone = truncate(phone, PHONE_WIDTH);
        if self.users.find_first(|u| u.phone == phone)?.is_some() {
            return Err(Error::validation(
                "Phone number already registered. Please use a different number.",
            ));
        }
        Ok(())
    }

    /// Fail if `username` is already taken.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the username is taken, or a store error
    /// if the user file cannot be read.
    pub fn check_username_available(&self, username: &str) -> Result<()> {
        let username = truncate(username, USERNAME_WIDTH);
        if self.users.find_first(|u| u.username == username)?.is_some() {
            return Err(Error::validation(
                "Username already taken. Please choose a different username.",
            ));
        }
        Ok(())
    }

    fn check_capacity(&self) -> Result<()> {
        if let Some(max) = self.max_users {
            if self.users.count()? >= max {
                return Err(Error::validation(format!(
                    "User limit of {max} reached. No more accounts can be registered."
                )));
            }
        }
        Ok(())
    }

    /// Store a new user and bump the registration counter.
    ///
    /// Returns the counter value after this registration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a duplicate phone number or username,
    /// mismatched passwords, an empty username or password, or when the user
    /// limit is reached. Returns a store error if the user or counter file
    /// cannot be written.
    pub fn register(&self, registration: Registration) -> Result<u64> {
        let Registration {
            user,
            password_confirmation,
        } = registration;
        let user = user.fit();

        if user.username.is_empty() || user.password.is_empty() {
            return Err(Error::validation("Username and password are required."));
        }
        self.check_capacity()?;
        self.check_phone_available(&user.phone)?;
        self.check_username_available(&user.username)?;
        if user.password != truncate(&password_confirmation, PASSWORD_WIDTH) {
            return Err(Error::validation("Passwords do not match. Please try again."));
        }

        self.users.append(&user)?;
        let sequence = self.counter.load().saturating_add(1);
        self.counter.save(sequence)?;

        info!("Registered user '{}' (#{})", user.username, sequence);
        Ok(sequence)
    }

    /// Log in with a username, phone number or email plus password.
    ///
    /// Returns `None` when no stored user matches.
    ///
    /// # Errors
    ///
    /// Returns a store error if the user file cannot be read.
    pub fn authenticate_user(&self, identifier: &str, password: &str) -> Result<Option<User>> {
        let password = truncate(password, PASSWORD_WIDTH);
        let found = self.users.find_first(|u| {
            u.matches_identifier(identifier) && self.credentials.verify(&u.password, password)
        })?;

        match &found {
            Some((_, user)) => info!("User '{}' logged in", user.username),
            None => debug!("Login failed for '{}'", identifier),
        }
        Ok(found.map(|(_, user)| user))
    }

    /// Check the built-in admin login.
    #[must_use]
    pub fn authenticate_admin(&self, username: &str, password: &str) -> bool {
        let ok = self.admin.matches(&self.credentials, username, password);
        if ok {
            info!("Administrator logged in");
        }
        ok
    }

    /// All stored users in file order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the user file cannot be read.
    pub fn list_users(&self) -> Result<Vec<User>> {
        self.users.load_all()
    }

    /// Look up a user by username.
    ///
    /// # Errors
    ///
    /// Returns a store error if the user file cannot be read.
    pub fn find_user(&self, username: &str) -> Result<Option<User>> {
        let username = truncate(username, USERNAME_WIDTH);
        Ok(self
            .users
            .find_first(|u| u.username == username)?
            .map(|(_, user)| user))
    }

    /// Change one field of the user named `username`.
    ///
    /// Returns the updated record. A new username or phone number must not
    /// belong to another user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such user, a validation
    /// error for an empty or duplicate value, or a store error.
    pub fn update_user(&self, username: &str, field: UserField, value: &str) -> Result<User> {
        let username = truncate(username, USERNAME_WIDTH);
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::validation(format!("{field} must not be empty")));
        }

        let stored = truncate(value, field.width());
        match field {
            UserField::Username if stored != username => self.check_username_available(stored)?,
            UserField::Phone => {
                let taken = self
                    .users
                    .find_first(|u| u.phone == stored && u.username != username)?;
                if taken.is_some() {
                    return Err(Error::validation(
                        "Phone number already registered. Please use a different number.",
                    ));
                }
            }
            _ => {}
        }

        let (_, user) = self
            .users
            .update_in_place(|u| u.username == username, |u| field.apply(u, value))?;
        info!("Updated {} of user '{}'", field, username);
        Ok(user)
    }

    /// Remove the user named `username`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such user, or a store error.
    pub fn remove_user(&self, username: &str) -> Result<()> {
        let username = truncate(username, USERNAME_WIDTH);
        if self.users.delete_where(|u| u.username == username)? == 0 {
            return Err(Error::NotFound { entity: "user" });
        }
        info!("Removed user '{}'", username);
        Ok(())
    }
}
