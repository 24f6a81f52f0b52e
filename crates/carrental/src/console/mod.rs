//! Interactive console session.
//!
//! The session is a small state machine: the main menu leads to
//! registration, a user login or the admin login, and a successful login
//! opens the matching dashboard until logout. Every change goes through
//! [`Service`]; this module only asks questions and prints answers.

mod admin;
pub mod display;
pub mod forms;
mod prompt;
mod user;

use tracing::{debug, warn};

use crate::auth::{CredentialCheck, PlainText};
use crate::error::{Error, Result};
use crate::service::Service;

pub use prompt::{Prompter, TerminalPrompter};

const MAIN_MENU: &str = "\n=== Car Rental System ===\n\
                         1. Register\n\
                         2. Login\n\
                         3. Admin Login\n\
                         4. Exit";

/// One interactive run of the console, from the main menu to exit.
#[derive(Debug)]
pub struct Session<'a, P, C = PlainText> {
    service: &'a Service<C>,
    prompter: P,
}

impl<'a, P: Prompter, C: CredentialCheck> Session<'a, P, C> {
    /// Create a session over `service` that talks through `prompter`.
    #[must_use]
    pub fn new(service: &'a Service<C>, prompter: P) -> Self {
        Self { service, prompter }
    }

    /// Give back the prompter.
    #[must_use]
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Run the main menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written or a record file
    /// cannot be written while registering. Other failures are shown and the
    /// session carries on.
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(Error::InputClosed) => {
                debug!("Console input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        self.prompter.clear()?;
        loop {
            self.prompter.say(MAIN_MENU)?;
            match self.prompter.choose("Enter your choice: ", 4)? {
                1 => self.register()?,
                2 => self.login()?,
                3 => self.admin_login()?,
                _ => {
                    self.prompter.say("Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    /// Registration with review and repeat. Store failures end the session.
    fn register(&mut self) -> Result<()> {
        loop {
            let mut registration = forms::registration_form(&mut self.prompter, self.service)?;
            loop {
                self.prompter.say("\nReview User Data:")?;
                self.prompter
                    .say(&display::user_details(&registration.user))?;
                if self.prompter.confirm("Is the data correct? (y/n): ")? {
                    break;
                }
                registration = forms::registration_form(&mut self.prompter, self.service)?;
            }

            match self.service.register(registration) {
                Ok(total) => self.prompter.say(&format!(
                    "User data has been registered successfully. Total users registered: {total}"
                ))?,
                Err(e) if e.is_validation() => self.prompter.say(&e.to_string())?,
                Err(e) => return Err(e),
            }

            if !self
                .prompter
                .confirm("Do you want to register another account? (y/n): ")?
            {
                return Ok(());
            }
        }
    }

    fn login(&mut self) -> Result<()> {
        let identifier = self
            .prompter
            .read_required("Enter Username, Contact or Email: ")?;
        let password = self.prompter.read_secret("Enter Password: ")?;

        match self.service.authenticate_user(&identifier, &password) {
            Ok(Some(user)) => self.user_dashboard(user),
            Ok(None) => self.prompter.say("Invalid credentials. Please try again."),
            Err(e) => self.report(e),
        }
    }

    fn admin_login(&mut self) -> Result<()> {
        let username = self.prompter.read_line("Enter Admin Username: ")?;
        let password = self.prompter.read_secret("Enter Admin Password: ")?;

        if self.service.authenticate_admin(username.trim(), &password) {
            self.admin_dashboard()
        } else {
            self.prompter
                .say("Invalid admin credentials. Please try again.")
        }
    }

    /// Show a failed operation and carry on. Closed input still ends the
    /// session.
    fn report(&mut self, err: Error) -> Result<()> {
        match err {
            Error::InputClosed => Err(err),
            Error::Validation(_) | Error::NotFound { .. } | Error::Date { .. } => {
                self.prompter.say(&err.to_string())
            }
            other => {
                warn!("Operation failed: {}", other);
                self.prompter.say(&format!("Error: {other}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{corolla, create_test_service, registration};

    type Scripted = TerminalPrompter<&'static [u8], Vec<u8>>;

    fn run_script<C: CredentialCheck>(service: &Service<C>, script: &'static str) -> String {
        let prompter: Scripted = TerminalPrompter::new(script.as_bytes(), Vec::new(), true);
        let mut session = Session::new(service, prompter);
        session.run().unwrap();
        String::from_utf8(session.into_prompter().into_output()).unwrap()
    }

    #[test]
    fn test_register_login_rent_history_logout() {
        let (_dir, service) = create_test_service();
        service.add_car(corolla()).unwrap();

        let script = "1\n\
                      Rohan Shilpakar\nKathmandu\n9800000001\nrohan@example.com\n\
                      rohan\nsecret\nsecret\n\
                      y\nn\n\
                      2\nrohan\nsecret\n\
                      2\n1\n2024-01-01\n2024-01-05\ny\n\
                      3\n\
                      5\n\
                      4\n";
        let out = run_script(&service, script);

        assert!(out.starts_with("\x1bc"));
        assert!(out.contains("Review User Data:"));
        assert!(out.contains("registered successfully. Total users registered: 1"));
        assert!(out.contains("=== Welcome, Rohan Shilpakar ==="));
        assert!(out.contains("Total cost: 182.00"));
        assert!(out.contains("Rental confirmed! Your rental ID is CR"));
        assert!(out.contains("Logged out."));
        assert!(out.ends_with("Goodbye!\n"));

        let history = service.rental_history(Some("rohan")).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].car.model, "Corolla");
        assert!(out.contains(&history[0].rental_id));
        assert!(service.list_available_cars().unwrap().is_empty());
    }

    #[test]
    fn test_rejected_review_collects_again() {
        let (_dir, service) = create_test_service();

        let script = "1\n\
                      Wrong Name\nKathmandu\n9800000001\nr@example.com\nrohan\npw\npw\n\
                      n\n\
                      Right Name\nKathmandu\n9800000001\nr@example.com\nrohan\npw\npw\n\
                      y\nn\n4\n";
        run_script(&service, script);

        let users = service.list_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].fullname, "Right Name");
    }

    #[test]
    fn test_invalid_login() {
        let (_dir, service) = create_test_service();
        service.register(registration("rohan", "9800000001")).unwrap();

        let out = run_script(&service, "2\nrohan\nwrong\n3\nadmin\nnope\n4\n");
        assert!(out.contains("Invalid credentials."));
        assert!(out.contains("Invalid admin credentials."));
    }

    #[test]
    fn test_bad_dates_keep_session_alive() {
        let (_dir, service) = create_test_service();
        service.register(registration("rohan", "9800000001")).unwrap();
        service.add_car(corolla()).unwrap();

        let script = "2\nrohan\npass123\n\
                      2\n1\n2024-01-05\n2024-01-01\n\
                      2\n1\n2024/01/01\n2024-01-02\n\
                      1\n5\n4\n";
        let out = run_script(&service, script);

        assert_eq!(out.matches("invalid date").count(), 2);
        assert!(out.contains("Corolla"));
        assert!(service.rental_history(None).unwrap().is_empty());
        assert_eq!(service.list_available_cars().unwrap().len(), 1);
    }

    #[test]
    fn test_input_closed_ends_session() {
        let (_dir, service) = create_test_service();
        let out = run_script(&service, "2\nrohan\n");
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn test_report_keeps_input_closed() {
        let (_dir, service) = create_test_service();
        let prompter: Scripted = TerminalPrompter::new(&b""[..], Vec::new(), false);
        let mut session = Session::new(&service, prompter);

        assert!(session.report(Error::validation("nope")).is_ok());
        assert!(session.report(Error::internal("bug")).is_ok());
        assert!(matches!(
            session.report(Error::InputClosed),
            Err(Error::InputClosed)
        ));

        let out = String::from_utf8(session.into_prompter().into_output()).unwrap();
        assert!(out.contains("nope"));
        assert!(out.contains("Error: internal error: bug"));
    }
}
