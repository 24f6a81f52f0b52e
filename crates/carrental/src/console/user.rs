//! The dashboard shown after a user logs in.

use crate::auth::CredentialCheck;
use crate::error::Result;
use crate::models::{User, UserField};

use super::{display, forms, Prompter, Session};

const USER_MENU: &str = "1. View Available Cars\n\
                         2. Rent a Car\n\
                         3. My Rental History\n\
                         4. Account Settings\n\
                         5. Logout";

impl<P: Prompter, C: CredentialCheck> Session<'_, P, C> {
    pub(super) fn user_dashboard(&mut self, mut user: User) -> Result<()> {
        self.prompter.clear()?;
        loop {
            self.prompter
                .say(&format!("\n=== Welcome, {} ===", user.fullname))?;
            self.prompter.say(USER_MENU)?;

            let result = match self.prompter.choose("Enter your choice: ", 5)? {
                1 => self.show_available_cars(),
                2 => self.rent_car(&user),
                3 => self.show_rentals(Some(&user.username)),
                4 => self.account_settings(&mut user),
                _ => return self.prompter.say("Logged out."),
            };
            if let Err(e) = result {
                self.report(e)?;
            }
        }
    }

    fn show_available_cars(&mut self) -> Result<()> {
        let cars = self.service.list_available_cars()?;
        if cars.is_empty() {
            return self.prompter.say("No cars are available for rent.");
        }
        self.prompter.say(&display::car_table(&cars))
    }

    fn rent_car(&mut self, user: &User) -> Result<()> {
        let cars = self.service.list_available_cars()?;
        if cars.is_empty() {
            return self.prompter.say("No cars are available for rent.");
        }
        self.prompter.say(&display::car_table(&cars))?;

        let prompt = format!("Select a car (1-{}, 0 to cancel): ", cars.len());
        let Some(selection) = self.prompter.choose_or_cancel(&prompt, cars.len())? else {
            return self.prompter.say("Rental cancelled.");
        };
        let pickup = self
            .prompter
            .read_required("Enter pickup date (YYYY-MM-DD): ")?;
        let ret = self
            .prompter
            .read_required("Enter return date (YYYY-MM-DD): ")?;

        let quote = self.service.quote_rental(selection, &pickup, &ret)?;
        self.prompter.say(&display::quote_summary(&quote))?;
        if !self.prompter.confirm("Confirm rental? (y/n): ")? {
            return self.prompter.say("Rental cancelled.");
        }

        let rental = self.service.confirm_rental(&user.username, &quote)?;
        self.prompter.say(&format!(
            "Rental confirmed! Your rental ID is {}.",
            rental.rental_id
        ))
    }

    pub(super) fn show_rentals(&mut self, username: Option<&str>) -> Result<()> {
        let rentals = self.service.rental_history(username)?;
        if rentals.is_empty() {
            return self.prompter.say("No rentals recorded.");
        }
        self.prompter.say(&display::rental_table(&rentals))
    }

    fn account_settings(&mut self, user: &mut User) -> Result<()> {
        self.prompter.say("\nAccount Settings:")?;
        for (i, field) in UserField::ALL.iter().enumerate() {
            let value = match field {
                UserField::Password => "********",
                _ => field.get(user),
            };
            self.prompter
                .say(&format!("{}. {}: {}", i + 1, field, value))?;
        }
        let back = UserField::ALL.len() + 1;
        self.prompter.say(&format!("{back}. Back"))?;

        let choice = self.prompter.choose("Select a field to update: ", back)?;
        let Some(field) = UserField::from_menu(choice) else {
            return Ok(());
        };

        let value = self.read_user_value(field)?;
        *user = self.service.update_user(&user.username, field, &value)?;
        self.prompter.say(&format!("{field} updated."))
    }

    /// Read a new value for one user field. Passwords are typed twice.
    pub(super) fn read_user_value(&mut self, field: UserField) -> Result<String> {
        match field {
            UserField::Password => forms::read_new_password(&mut self.prompter),
            _ => forms::read_user_field(
                &mut self.prompter,
                field,
                &format!("Enter new {field}: "),
            ),
        }
    }
}
