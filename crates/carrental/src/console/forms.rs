//! Input forms: registration, new cars and single-field edits.

use std::sync::LazyLock;

use regex::Regex;

use crate::auth::CredentialCheck;
use crate::error::{Error, Result};
use crate::models::{Car, CarField, CarUpdate, User, UserField};
use crate::service::{Registration, Service};

use super::Prompter;

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,10}$").expect("valid phone pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern")
});

/// Check the shape of a value typed for `field`.
///
/// Phone numbers are digits with an optional leading `+`, short enough to
/// fit the stored field. Emails need one `@` and a dot in the domain.
///
/// # Errors
///
/// Returns a validation error describing what is wrong.
pub fn check_user_field(field: UserField, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::validation(format!("{field} must not be empty")));
    }
    match field {
        UserField::Phone if !PHONE.is_match(value) => Err(Error::validation(
            "Contact must be 7 to 10 digits, optionally starting with +",
        )),
        UserField::Email if !EMAIL.is_match(value) => {
            Err(Error::validation("Email must look like name@example.com"))
        }
        _ => Ok(()),
    }
}

/// Read a value for `field` until it passes [`check_user_field`].
///
/// # Errors
///
/// Returns an error if input fails.
pub fn read_user_field<P: Prompter + ?Sized>(
    prompter: &mut P,
    field: UserField,
    prompt: &str,
) -> Result<String> {
    loop {
        let value = if field == UserField::Password {
            prompter.read_secret(prompt)?
        } else {
            prompter.read_line(prompt)?
        };
        match check_user_field(field, &value) {
            Ok(()) => return Ok(value.trim().to_string()),
            Err(e) => prompter.say(&e.to_string())?,
        }
    }
}

/// Read a password twice until both entries agree.
///
/// # Errors
///
/// Returns an error if input fails.
pub fn read_new_password<P: Prompter + ?Sized>(prompter: &mut P) -> Result<String> {
    loop {
        let password = read_user_field(prompter, UserField::Password, "Enter New Password: ")?;
        let again = prompter.read_secret("Retype the password for verification: ")?;
        if password == again.trim() {
            return Ok(password);
        }
        prompter.say("Passwords do not match. Please try again.")?;
    }
}

/// Collect a new account, asking again for a contact number or username
/// that is already taken.
///
/// # Errors
///
/// Returns a store error if the user file cannot be read, or an input error.
pub fn registration_form<P, C>(prompter: &mut P, service: &Service<C>) -> Result<Registration>
where
    P: Prompter + ?Sized,
    C: CredentialCheck,
{
    let fullname = read_user_field(prompter, UserField::FullName, "Enter Full Name: ")?;
    let address = read_user_field(prompter, UserField::Address, "Enter Address: ")?;
    let phone = loop {
        let phone = read_user_field(prompter, UserField::Phone, "Enter Contact: ")?;
        match service.check_phone_available(&phone) {
            Ok(()) => break phone,
            Err(e) if e.is_validation() => prompter.say(&e.to_string())?,
            Err(e) => return Err(e),
        }
    };
    let email = read_user_field(prompter, UserField::Email, "Enter Email: ")?;

    prompter.say(&format!(
        "Thank you for providing your information, {fullname}"
    ))?;
    prompter.say("Now you can set your Username and Password for further process")?;

    let username = loop {
        let username = read_user_field(prompter, UserField::Username, "Enter New Username: ")?;
        match service.check_username_available(&username) {
            Ok(()) => break username,
            Err(e) if e.is_validation() => prompter.say(&e.to_string())?,
            Err(e) => return Err(e),
        }
    };
    let password = read_new_password(prompter)?;

    Ok(Registration {
        user: User::new(&fullname, &address, &phone, &email, &username, &password),
        password_confirmation: password,
    })
}

/// Read text for `field` until it parses, returning the trimmed text.
///
/// # Errors
///
/// Returns an error if input fails.
pub fn read_car_value<P: Prompter + ?Sized>(prompter: &mut P, field: CarField) -> Result<String> {
    let prompt = match field {
        CarField::Availability => format!("Enter {field} (yes/no): "),
        _ => format!("Enter {field}: "),
    };
    loop {
        let value = prompter.read_line(&prompt)?;
        match CarUpdate::parse(field, &value) {
            Ok(_) => return Ok(value.trim().to_string()),
            Err(e) => prompter.say(&e.to_string())?,
        }
    }
}

/// Collect a new car. New cars start out available.
///
/// # Errors
///
/// Returns an error if input fails.
pub fn car_form<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Car> {
    let mut car = Car::new("", "", 0, 0.0, 1, 0.0, "");
    for field in CarField::ALL {
        if field == CarField::Availability {
            continue;
        }
        let value = read_car_value(prompter, field)?;
        CarUpdate::parse(field, &value)?.apply(&mut car);
    }
    Ok(car)
}

#[cfg(test)]
mod tests {
    use super::super::TerminalPrompter;
    use super::*;
    use crate::service::test_support::{create_test_service, registration};

    fn prompter(input: &str) -> TerminalPrompter<&[u8], Vec<u8>> {
        TerminalPrompter::new(input.as_bytes(), Vec::new(), false)
    }

    #[test]
    fn test_check_user_field() {
        assert!(check_user_field(UserField::Phone, "9800000001").is_ok());
        assert!(check_user_field(UserField::Phone, "+977980000").is_ok());
        assert!(check_user_field(UserField::Phone, "98-000").is_err());
        assert!(check_user_field(UserField::Phone, "123").is_err());
        assert!(check_user_field(UserField::Email, "a@b.co").is_ok());
        assert!(check_user_field(UserField::Email, "not-an-email").is_err());
        assert!(check_user_field(UserField::Address, "  ").is_err());
        assert!(check_user_field(UserField::Address, "Lalitpur").is_ok());
    }

    #[test]
    fn test_registration_form_reprompts_taken_values() {
        let (_dir, service) = create_test_service();
        service.register(registration("rohan", "9800000001")).unwrap();

        let input = "Sita Sharma\nBhaktapur\nabc\n9800000001\n9800000002\nsita@example.com\n\
                     rohan\nsita\npw1\npw2\npw1\npw1\n";
        let mut p = prompter(input);
        let reg = registration_form(&mut p, &service).unwrap();

        assert_eq!(reg.user.fullname, "Sita Sharma");
        assert_eq!(reg.user.phone, "9800000002");
        assert_eq!(reg.user.username, "sita");
        assert_eq!(reg.user.password, "pw1");
        assert_eq!(reg.password_confirmation, "pw1");

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Contact must be"));
        assert!(out.contains("Phone number already registered"));
        assert!(out.contains("Username already taken"));
        assert!(out.contains("Passwords do not match"));
    }

    #[test]
    fn test_car_form() {
        let input = "Civic\nHonda\nlast year\n2021\n52.25\n0\n5\n16.5\nRed\n";
        let mut p = prompter(input);
        let car = car_form(&mut p).unwrap();

        assert_eq!(car, Car::new("Civic", "Honda", 2021, 52.25, 5, 16.5, "Red"));
    }

    #[test]
    fn test_read_car_value_reprompts() {
        let mut p = prompter("perhaps\n no \n");
        assert_eq!(read_car_value(&mut p, CarField::Availability).unwrap(), "no");

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Availability must be yes or no"));
    }
}
