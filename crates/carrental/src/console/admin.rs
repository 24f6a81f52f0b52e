//! The administrator dashboard: catalog, accounts and the rental log.

use crate::auth::CredentialCheck;
use crate::error::Result;
use crate::models::{Car, CarField, User, UserField};

use super::{display, forms, Prompter, Session};

const ADMIN_MENU: &str = "\n=== Admin Dashboard ===\n\
                          1. View Cars\n\
                          2. Manage Cars\n\
                          3. View Users\n\
                          4. Manage Users\n\
                          5. Rental Log\n\
                          6. Exit";

const CAR_MENU: &str = "1. Update Car\n2. Remove Car\n3. Add Car\n4. Back";

const USER_MENU: &str = "1. Update User\n2. Remove User\n3. Add User\n4. Back";

impl<P: Prompter, C: CredentialCheck> Session<'_, P, C> {
    pub(super) fn admin_dashboard(&mut self) -> Result<()> {
        self.prompter.clear()?;
        loop {
            self.prompter.say(ADMIN_MENU)?;
            let result = match self.prompter.choose("Enter your choice: ", 6)? {
                1 => self.show_cars(),
                2 => self.manage_cars(),
                3 => self.show_users(),
                4 => self.manage_users(),
                5 => self.rental_log(),
                _ => return self.prompter.say("Leaving admin dashboard."),
            };
            if let Err(e) = result {
                self.report(e)?;
            }
        }
    }

    fn show_cars(&mut self) -> Result<()> {
        let cars = self.service.list_cars()?;
        if cars.is_empty() {
            return self.prompter.say("No cars in the catalog.");
        }
        self.prompter.say(&display::car_table(&cars))
    }

    fn show_users(&mut self) -> Result<()> {
        let users = self.service.list_users()?;
        if users.is_empty() {
            return self.prompter.say("No registered users.");
        }
        self.prompter.say(&display::user_table(&users))
    }

    fn manage_cars(&mut self) -> Result<()> {
        self.prompter.say(CAR_MENU)?;
        match self.prompter.choose("Enter your choice: ", 4)? {
            1 => self.update_car(),
            2 => self.remove_car(),
            3 => {
                let car = forms::car_form(&mut self.prompter)?;
                self.service.add_car(car)?;
                self.prompter.say("Car added.")
            }
            _ => Ok(()),
        }
    }

    /// List the catalog and let the admin pick one car. Returns its 0-based
    /// index and the car as listed, or `None` if the catalog is empty or the
    /// admin backs out.
    fn pick_car(&mut self) -> Result<Option<(usize, Car)>> {
        let cars = self.service.list_cars()?;
        if cars.is_empty() {
            self.prompter.say("No cars in the catalog.")?;
            return Ok(None);
        }
        self.prompter.say(&display::car_table(&cars))?;
        let prompt = format!("Select a car (1-{}, 0 to cancel): ", cars.len());
        let Some(choice) = self.prompter.choose_or_cancel(&prompt, cars.len())? else {
            return Ok(None);
        };
        Ok(cars.into_iter().nth(choice - 1).map(|car| (choice - 1, car)))
    }

    fn update_car(&mut self) -> Result<()> {
        let Some((_, car)) = self.pick_car()? else {
            return Ok(());
        };

        for (i, field) in CarField::ALL.iter().enumerate() {
            self.prompter.say(&format!("{}. {}", i + 1, field))?;
        }
        let choice = self
            .prompter
            .choose("Select a field to update: ", CarField::ALL.len())?;
        let Some(field) = CarField::from_menu(choice) else {
            return Ok(());
        };

        let value = forms::read_car_value(&mut self.prompter, field)?;
        self.service.update_car(&car.model, field, &value)?;
        self.prompter.say(&format!("{field} of '{}' updated.", car.model))
    }

    fn remove_car(&mut self) -> Result<()> {
        let Some((index, car)) = self.pick_car()? else {
            return Ok(());
        };
        if !self
            .prompter
            .confirm(&format!("Remove '{}'? (y/n): ", car.model))?
        {
            return Ok(());
        }

        self.service.remove_car(index, &car.model)?;
        self.prompter.say(&format!("Car '{}' removed.", car.model))
    }

    fn manage_users(&mut self) -> Result<()> {
        self.prompter.say(USER_MENU)?;
        match self.prompter.choose("Enter your choice: ", 4)? {
            1 => self.update_user(),
            2 => self.remove_user(),
            3 => self.register(),
            _ => Ok(()),
        }
    }

    fn pick_user(&mut self) -> Result<Option<User>> {
        let users = self.service.list_users()?;
        if users.is_empty() {
            self.prompter.say("No registered users.")?;
            return Ok(None);
        }
        self.prompter.say(&display::user_table(&users))?;
        let prompt = format!("Select a user (1-{}, 0 to cancel): ", users.len());
        let Some(choice) = self.prompter.choose_or_cancel(&prompt, users.len())? else {
            return Ok(None);
        };
        Ok(users.into_iter().nth(choice - 1))
    }

    fn update_user(&mut self) -> Result<()> {
        let Some(user) = self.pick_user()? else {
            return Ok(());
        };

        for (i, field) in UserField::ALL.iter().enumerate() {
            self.prompter.say(&format!("{}. {}", i + 1, field))?;
        }
        let choice = self
            .prompter
            .choose("Select a field to update: ", UserField::ALL.len())?;
        let Some(field) = UserField::from_menu(choice) else {
            return Ok(());
        };

        let value = self.read_user_value(field)?;
        self.service.update_user(&user.username, field, &value)?;
        self.prompter
            .say(&format!("{field} of '{}' updated.", user.username))
    }

    fn remove_user(&mut self) -> Result<()> {
        let Some(user) = self.pick_user()? else {
            return Ok(());
        };
        if !self
            .prompter
            .confirm(&format!("Remove user '{}'? (y/n): ", user.username))?
        {
            return Ok(());
        }

        self.service.remove_user(&user.username)?;
        self.prompter
            .say(&format!("User '{}' removed.", user.username))
    }

    fn rental_log(&mut self) -> Result<()> {
        let filter = self
            .prompter
            .read_line("Filter by username (leave blank for all): ")?;
        let filter = filter.trim();
        self.show_rentals((!filter.is_empty()).then_some(filter))
    }
}

#[cfg(test)]
mod tests {
    use crate::console::{Session, TerminalPrompter};
    use crate::models::Car;
    use crate::service::test_support::{corolla, create_test_service, registration};
    use crate::service::Service;

    fn run(service: &Service, script: &'static str) -> String {
        let prompter = TerminalPrompter::new(script.as_bytes(), Vec::new(), false);
        let mut session = Session::new(service, prompter);
        session.run().unwrap();
        String::from_utf8(session.into_prompter().into_output()).unwrap()
    }

    fn swift() -> Car {
        Car::new("Swift", "Suzuki", 2019, 30.0, 4, 18.5, "Blue")
    }

    #[test]
    fn test_admin_adds_car() {
        let (_dir, service) = create_test_service();

        let script = "3\nadmin\nadmin\n\
                      2\n3\nCivic\nHonda\n2021\n52.25\n5\n16.5\nRed\n\
                      1\n6\n4\n";
        let out = run(&service, script);

        assert!(out.contains("Car added."));
        assert!(out.contains("Civic"));
        assert_eq!(
            service.list_cars().unwrap(),
            vec![Car::new("Civic", "Honda", 2021, 52.25, 5, 16.5, "Red")]
        );
    }

    #[test]
    fn test_admin_updates_and_removes_car() {
        let (_dir, service) = create_test_service();
        service.add_car(corolla()).unwrap();
        service.add_car(swift()).unwrap();

        let script = "3\nadmin\nadmin\n\
                      2\n1\n2\n4\n33.5\n\
                      2\n2\n1\ny\n\
                      6\n4\n";
        let out = run(&service, script);

        assert!(out.contains("Rental Rate of 'Swift' updated."));
        assert!(out.contains("Car 'Corolla' removed."));
        let cars = service.list_cars().unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].model, "Swift");
        assert!((cars[0].daily_rate - 33.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_admin_manages_users() {
        let (_dir, service) = create_test_service();
        service.register(registration("rohan", "9800000001")).unwrap();
        service.register(registration("rudra", "9800000002")).unwrap();

        let script = "3\nadmin\nadmin\n\
                      4\n1\n2\n2\nPokhara\n\
                      4\n2\n1\ny\n\
                      3\n6\n4\n";
        let out = run(&service, script);

        assert!(out.contains("Address of 'rudra' updated."));
        assert!(out.contains("User 'rohan' removed."));
        let users = service.list_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].address, "Pokhara");
    }

    #[test]
    fn test_admin_adds_user_through_registration() {
        let (_dir, service) = create_test_service();

        let script = "3\nadmin\nadmin\n\
                      4\n3\nSita Sharma\nBhaktapur\n9800000003\nsita@example.com\nsita\npw\npw\ny\nn\n\
                      6\n4\n";
        run(&service, script);

        assert!(service.find_user("sita").unwrap().is_some());
    }

    #[test]
    fn test_rental_log_filter() {
        let (_dir, service) = create_test_service();
        service.add_car(corolla()).unwrap();
        service.add_car(swift()).unwrap();
        let first = service
            .rent_car("rohan", 1, "2024-01-01", "2024-01-02")
            .unwrap();
        let second = service
            .rent_car("rudra", 1, "2024-01-01", "2024-01-02")
            .unwrap();

        let out = run(&service, "3\nadmin\nadmin\n5\nrudra\n5\nnobody\n6\n4\n");
        assert!(out.contains(&second.rental_id));
        assert!(!out.contains(&first.rental_id));
        assert!(out.contains("No rentals recorded."));
    }

    #[test]
    fn test_cancel_picking_car_or_user() {
        let (_dir, service) = create_test_service();
        service.add_car(corolla()).unwrap();
        service.register(registration("rohan", "9800000001")).unwrap();

        // Back out of update car, remove car, update user and remove user
        let script = "3\nadmin\nadmin\n\
                      2\n1\n0\n2\n2\n0\n\
                      4\n1\n0\n4\n2\n0\n\
                      6\n4\n";
        let out = run(&service, script);

        assert!(out.contains("Select a car (1-1, 0 to cancel): "));
        assert!(out.contains("Select a user (1-1, 0 to cancel): "));
        assert!(!out.contains("Select a field to update"));
        assert!(!out.contains("Invalid choice"));
        assert_eq!(service.list_cars().unwrap(), vec![corolla()]);
        assert_eq!(service.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_with_empty_catalog() {
        let (_dir, service) = create_test_service();

        let out = run(&service, "3\nadmin\nadmin\n2\n2\n6\n4\n");
        assert!(out.contains("No cars in the catalog."));
    }
}
