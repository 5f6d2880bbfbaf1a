//! Canteen Core — Snack inventory and sales tracking for a single canteen.
//!
//! This crate holds the inventory model and its operations, the per-run sales
//! record, and the JSON file the inventory is persisted to between runs.

pub mod config;
pub mod error;
pub mod inventory;
pub mod sales;
pub mod session;
pub mod storage;

pub use config::{CanteenConfig, Sale, Snack, DEFAULT_DB_PATH};
pub use error::StorageError;
pub use inventory::{Inventory, Outcome, SaleOutcome};
pub use sales::SalesRecord;
pub use session::{Command, Report, Session};
