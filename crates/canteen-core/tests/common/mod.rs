//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use canteen_core::config::CanteenConfig;
use canteen_core::inventory::Inventory;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Scratch storage
// ---------------------------------------------------------------------------

/// A temporary directory with a `db.json` path inside it.
pub struct Scratch {
    pub dir: TempDir,
    pub db_path: PathBuf,
}

pub fn scratch() -> Scratch {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("db.json");
    Scratch { dir, db_path }
}

impl Scratch {
    /// Write raw text to the db file.
    pub fn write(&self, contents: &str) {
        std::fs::write(&self.db_path, contents).expect("write db file");
    }

    pub fn read(&self) -> String {
        std::fs::read_to_string(&self.db_path).expect("read db file")
    }

    pub fn config(&self) -> CanteenConfig {
        CanteenConfig {
            db_path: self.db_path.clone(),
            ..Default::default()
        }
    }

    pub fn strict_config(&self) -> CanteenConfig {
        CanteenConfig {
            strict_load: true,
            ..self.config()
        }
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Three snacks, the second one already sold out.
pub fn stocked_inventory() -> Inventory {
    let mut inv = Inventory::new();
    inv.add(1, "Chips", 1.50);
    inv.add(2, "Chocolate Bar", 0.99);
    inv.add(3, "Masala Tea", 0.25);
    inv.set_availability(2, false);
    inv
}

pub fn ids(inv: &Inventory) -> Vec<i64> {
    inv.iter().map(|s| s.id).collect()
}
