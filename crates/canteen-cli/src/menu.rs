//! The numbered menu loop.

use std::io::{self, BufRead, Write};

use console::style;
use log::warn;

use canteen_core::session::{Command, Session};

use crate::prompt::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Remove,
    UpdateAvailability,
    Sale,
    Exit,
}

impl MenuChoice {
    const ALL: [(Self, &'static str); 5] = [
        (Self::Add, "Add Snack"),
        (Self::Remove, "Remove Snack"),
        (Self::UpdateAvailability, "Update Availability"),
        (Self::Sale, "Make Sale"),
        (Self::Exit, "Exit"),
    ];

    fn from_number(n: i64) -> Option<Self> {
        let index = usize::try_from(n.checked_sub(1)?).ok()?;
        Self::ALL.get(index).map(|(choice, _)| *choice)
    }
}

/// What the user asked for on one pass through the menu.
enum Step {
    Run(Command),
    Invalid,
    Exit,
}

/// Run the menu until the user exits or the input ends.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    loop {
        match next_step(prompter)? {
            Step::Run(command) => match session.apply(command) {
                Ok(report) => prompter.say(report.message())?,
                Err(e) => {
                    warn!("save failed: {e}");
                    prompter.say(format!("Could not save inventory: {e}"))?;
                }
            },
            Step::Invalid => prompter.say("Invalid choice. Please select a valid option.")?,
            Step::Exit => break,
        }
    }
    prompter.say("Exiting...")
}

fn next_step<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> io::Result<Step> {
    p.say("")?;
    p.say(style("Canteen Management System").bold())?;
    for (n, (_, label)) in MenuChoice::ALL.iter().enumerate() {
        p.say(format!("{}. {label}", n + 1))?;
    }

    let Some(choice) = p.int("Enter your choice: ")? else {
        return Ok(Step::Exit);
    };
    let Some(choice) = MenuChoice::from_number(choice) else {
        return Ok(Step::Invalid);
    };

    let command = match choice {
        MenuChoice::Add => {
            let Some(id) = p.int("Enter Snack ID: ")? else {
                return Ok(Step::Exit);
            };
            let Some(name) = p.line("Enter Snack Name: ")? else {
                return Ok(Step::Exit);
            };
            let Some(price) = p.price("Enter Snack Price: ")? else {
                return Ok(Step::Exit);
            };
            Command::Add { id, name, price }
        }
        MenuChoice::Remove => {
            let Some(id) = p.int("Enter Snack ID to remove: ")? else {
                return Ok(Step::Exit);
            };
            Command::Remove { id }
        }
        MenuChoice::UpdateAvailability => {
            let Some(id) = p.int("Enter Snack ID to update availability: ")? else {
                return Ok(Step::Exit);
            };
            let Some(available) = p.yes_no("Is the snack available? (yes/no): ")? else {
                return Ok(Step::Exit);
            };
            Command::SetAvailability { id, available }
        }
        MenuChoice::Sale => {
            let Some(id) = p.int("Enter Snack ID sold: ")? else {
                return Ok(Step::Exit);
            };
            Command::Sell { id }
        }
        MenuChoice::Exit => return Ok(Step::Exit),
    };
    Ok(Step::Run(command))
}
