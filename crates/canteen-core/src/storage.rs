//! JSON persistence for the inventory.
//!
//! The file is a single object mapping each snack id (as a string key) to the
//! snack record. It is always read and written whole.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use crate::config::Snack;
use crate::error::StorageError;
use crate::inventory::Inventory;

/// Load the inventory, reporting any failure.
///
/// A missing file is not a failure: it yields an empty inventory.
pub fn try_load(path: impl AsRef<Path>) -> Result<Inventory, StorageError> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("{} does not exist, starting empty", path.display());
        return Ok(Inventory::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: BTreeMap<String, Snack> =
        serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut inventory = Inventory::new();
    for (key, snack) in records {
        if key.trim().parse::<i64>().ok() != Some(snack.id) {
            warn!(
                "record under key {key:?} has id {}, keeping it under its id",
                snack.id
            );
        }
        let id = snack.id;
        if inventory.insert(snack).is_some() {
            warn!("duplicate records for snack {id}, keeping the last one");
        }
    }
    debug!("loaded {} snacks from {}", inventory.len(), path.display());
    Ok(inventory)
}

/// Load the inventory, falling back to an empty one if the file is unreadable
/// or corrupt. The discarded data is only reported through the log.
pub fn load(path: impl AsRef<Path>) -> Inventory {
    try_load(path).unwrap_or_else(|e| {
        warn!("{e}; starting with an empty inventory");
        Inventory::new()
    })
}

/// Write the whole inventory to `path`, replacing any existing file.
///
/// Nothing is written if any snack has a price that would not load back.
pub fn save(inventory: &Inventory, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    if let Some(bad) = inventory.iter().find(|s| !s.has_valid_price()) {
        return Err(StorageError::InvalidPrice {
            path: path.to_path_buf(),
            id: bad.id,
            price: bad.price,
        });
    }
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    inventory
        .as_map()
        .serialize(&mut ser)
        .map_err(|e| io_err(std::io::Error::other(e)))?;

    std::fs::write(path, buf).map_err(io_err)?;
    debug!("saved {} snacks to {}", inventory.len(), path.display());
    Ok(())
}
