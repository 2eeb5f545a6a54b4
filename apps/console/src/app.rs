use crate::error::ConsoleError;
use crate::form::{self, Outcome};
use crate::menu::{Command, MENU, MENU_PROMPT};
use crate::render::{animal_line, item_line};
use std::ops::ControlFlow;
use zoo::clinic::AdmissionPolicy;
use zoo::kernel::terminal::Terminal;
use zoo::registry::{Admission, Zoo};

/// The interactive menu loop over a registry.
#[derive(Debug)]
pub struct App<P: AdmissionPolicy, T> {
    zoo: Zoo<P>,
    terminal: T,
}

impl<P: AdmissionPolicy, T: Terminal> App<P, T> {
    pub const fn new(zoo: Zoo<P>, terminal: T) -> Self {
        Self { zoo, terminal }
    }

    /// Runs until the user picks "Exit" or input ends.
    ///
    /// # Errors
    /// Returns [`ConsoleError`] when the terminal fails or the registry
    /// reports an error.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        tracing::debug!(items = self.zoo.item_count(), "Console started");

        loop {
            self.terminal.say(MENU)?;
            let Some(input) = self.terminal.prompt(MENU_PROMPT)? else {
                tracing::debug!("Input closed, leaving the console");
                return Ok(());
            };

            let flow = match Command::parse(&input) {
                Some(Command::AddAnimal) => self.add_animal()?,
                Some(Command::Report) => self.report()?,
                Some(Command::PettingZoo) => self.petting_zoo()?,
                Some(Command::Inventory) => self.inventory()?,
                Some(Command::Exit) => {
                    self.terminal.say("Goodbye.")?;
                    ControlFlow::Break(())
                },
                None => {
                    self.terminal.say("Unknown command, try again.")?;
                    ControlFlow::Continue(())
                },
            };

            if flow.is_break() {
                return Ok(());
            }
        }
    }

    #[must_use]
    pub const fn zoo(&self) -> &Zoo<P> {
        &self.zoo
    }

    pub fn into_parts(self) -> (Zoo<P>, T) {
        (self.zoo, self.terminal)
    }

    fn add_animal(&mut self) -> Result<ControlFlow<()>, ConsoleError> {
        let animal = match form::ask_animal(&mut self.terminal)? {
            Outcome::Filled(animal) => animal,
            Outcome::Invalid(reason) => {
                self.terminal.say(&reason.to_string())?;
                return Ok(ControlFlow::Continue(()));
            },
            Outcome::Closed => return Ok(ControlFlow::Break(())),
        };

        match self.zoo.register_animal(animal)? {
            Admission::Admitted(id) => self.terminal.say(&format!("Animal added to the zoo (#{id})"))?,
            Admission::Denied(_) => self.terminal.say("The vet clinic refused admission")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn report(&mut self) -> Result<ControlFlow<()>, ConsoleError> {
        self.terminal.say(&self.zoo.report().to_string())?;
        Ok(ControlFlow::Continue(()))
    }

    fn petting_zoo(&mut self) -> Result<ControlFlow<()>, ConsoleError> {
        let lines: Vec<String> = self.zoo.contact_eligible().into_iter().map(animal_line).collect();
        if lines.is_empty() {
            self.terminal.say("No animals are eligible for the petting zoo.")?;
        }
        for line in &lines {
            self.terminal.say(line)?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn inventory(&mut self) -> Result<ControlFlow<()>, ConsoleError> {
        let items = self.zoo.items().iter().map(item_line);
        let animals = self.zoo.animals().iter().map(animal_line);
        for line in items.chain(animals) {
            self.terminal.say(&line)?;
        }
        Ok(ControlFlow::Continue(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoo::clinic::{ScriptedClinic, Verdict};
    use zoo::domain::config::ZooConfig;
    use zoo::kernel::terminal::BufferedTerminal;

    fn session<P: AdmissionPolicy>(policy: P, input: &str) -> (Zoo<P>, String) {
        let zoo = zoo::init(&ZooConfig::default(), policy).unwrap();
        let mut app = App::new(zoo, BufferedTerminal::new(input.as_bytes(), Vec::new()));
        app.run().unwrap();
        let (zoo, terminal) = app.into_parts();
        (zoo, terminal.output())
    }

    #[test]
    fn adds_and_reports_animals() {
        let (zoo, out) = session(Verdict::Approve, "1\nrabbit\nBugs\n8\n12\n1\nwolf\nAkela\n15\n2\n5\n");

        assert_eq!(zoo.animal_count(), 2);
        assert!(out.contains("Animal added to the zoo (#2)"));
        assert!(out.contains("Animal added to the zoo (#3)"));
        assert!(out.contains("Animals: 2\nItems: 2\nFood consumption: 23 kg/day\n"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn refused_animal_is_reported() {
        let (zoo, out) = session(ScriptedClinic::new([false]), "1\ntiger\nShere Khan\n20\n2\n5\n");

        assert_eq!(zoo.animal_count(), 0);
        assert!(out.contains("The vet clinic refused admission"));
        assert!(out.contains("Animals: 0\n"));
    }

    #[test]
    fn petting_zoo_lists_kind_animals_only() {
        let (_, out) = session(Verdict::Approve, "3\n1\nmonkey\nGeorge\n5\n9\n1\nwolf\nAkela\n15\n3\n5\n");

        assert!(out.contains("No animals are eligible for the petting zoo."));
        assert!(out.contains("Monkey - George - #2\n"));
        assert!(!out.contains("Wolf - Akela"));
    }

    #[test]
    fn inventory_lists_items_then_animals() {
        let (_, out) = session(Verdict::Approve, "1\nwolf\nAkela\n15\n4\n");

        assert!(out.contains("Table - inv. #0\nComputer - inv. #1\nWolf - Akela - #2\n"));
    }

    #[test]
    fn bad_input_returns_to_the_menu() {
        let (zoo, out) = session(Verdict::Approve, "9\n1\ndragon\n1\nwolf\nAkela\nlots\n5\n");

        assert_eq!(zoo.animal_count(), 0);
        assert!(out.contains("Unknown command, try again."));
        assert!(out.contains("Unknown animal kind."));
        assert!(out.contains("Invalid food amount, expected a non-negative whole number."));
        assert_eq!(out.matches(MENU).count(), 4);
    }

    #[test]
    fn end_of_input_exits_quietly() {
        let (_, out) = session(Verdict::Approve, "1\nrabbit\n");
        assert!(!out.contains("Goodbye."));
        assert_eq!(out.matches(MENU).count(), 1);
    }
}
