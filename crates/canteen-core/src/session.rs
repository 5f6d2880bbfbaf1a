//! A running canteen session: load once, apply commands, save after each one.

use log::info;

use crate::config::{is_valid_price, CanteenConfig, Snack};
use crate::error::StorageError;
use crate::inventory::{not_found_message, Inventory, Outcome, SaleOutcome};
use crate::sales::SalesRecord;
use crate::storage;

/// A user action against the inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { id: i64, name: String, price: f64 },
    Remove { id: i64 },
    SetAvailability { id: i64, available: bool },
    Sell { id: i64 },
}

/// What a [`Command`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Added(Snack),
    Removed { id: i64, outcome: Outcome },
    AvailabilityUpdated { id: i64, outcome: Outcome },
    Sale { id: i64, outcome: SaleOutcome },
}

impl Report {
    /// The notice shown to the user.
    pub fn message(&self) -> String {
        match self {
            Self::Added(snack) => format!("Snack added: {snack}"),
            Self::Removed { id, outcome } => match outcome {
                Outcome::Applied => format!("Snack with ID {id} removed from inventory."),
                Outcome::NotFound => not_found_message(*id),
            },
            Self::AvailabilityUpdated { id, outcome } => match outcome {
                Outcome::Applied => format!("Availability of snack with ID {id} updated."),
                Outcome::NotFound => not_found_message(*id),
            },
            Self::Sale { id, outcome } => outcome.message(*id),
        }
    }
}

pub struct Session {
    config: CanteenConfig,
    inventory: Inventory,
    sales: SalesRecord,
}

impl Session {
    /// Load the inventory named by `config`.
    ///
    /// Only fails when `config.strict_load` is set; otherwise an unreadable or
    /// corrupt file yields an empty inventory.
    pub fn open(config: CanteenConfig) -> Result<Self, StorageError> {
        let inventory = if config.strict_load {
            storage::try_load(&config.db_path)?
        } else {
            storage::load(&config.db_path)
        };
        info!(
            "opened {} with {} snacks",
            config.db_path.display(),
            inventory.len()
        );
        Ok(Self::with_inventory(config, inventory))
    }

    pub fn with_inventory(config: CanteenConfig, inventory: Inventory) -> Self {
        Self {
            config,
            inventory,
            sales: SalesRecord::new(),
        }
    }

    /// Apply `command` in memory, then save the whole inventory.
    ///
    /// The inventory is saved even when the command found nothing to change.
    /// If the save fails the in-memory change is kept and the error returned.
    /// An add with an unstorable price is rejected before anything changes.
    pub fn apply(&mut self, command: Command) -> Result<Report, StorageError> {
        if let Command::Add { id, price, .. } = &command {
            if !is_valid_price(*price) {
                return Err(StorageError::InvalidPrice {
                    path: self.config.db_path.clone(),
                    id: *id,
                    price: *price,
                });
            }
        }

        let report = match command {
            Command::Add { id, name, price } => {
                Report::Added(self.inventory.add(id, name, price).clone())
            }
            Command::Remove { id } => Report::Removed {
                id,
                outcome: self.inventory.remove(id),
            },
            Command::SetAvailability { id, available } => Report::AvailabilityUpdated {
                id,
                outcome: self.inventory.set_availability(id, available),
            },
            Command::Sell { id } => Report::Sale {
                id,
                outcome: self.inventory.sell(id, &mut self.sales),
            },
        };

        self.save()?;
        Ok(report)
    }

    pub fn save(&self) -> Result<(), StorageError> {
        storage::save(&self.inventory, &self.config.db_path)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn sales(&self) -> &SalesRecord {
        &self.sales
    }

    pub fn config(&self) -> &CanteenConfig {
        &self.config
    }
}
