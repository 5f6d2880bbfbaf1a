//! Session orchestration: load at start, save after every command.

mod common;

use canteen_core::error::StorageError;
use canteen_core::session::{Command, Report, Session};
use canteen_core::storage::try_load;
use canteen_core::{Outcome, SaleOutcome};
use common::*;
use pretty_assertions::assert_eq;

fn add(id: i64, name: &str, price: f64) -> Command {
    Command::Add {
        id,
        name: name.to_string(),
        price,
    }
}

#[test]
fn open_without_file_starts_empty() {
    let s = scratch();
    let session = Session::open(s.config()).unwrap();
    assert!(session.inventory().is_empty());
    assert!(session.sales().is_empty());
    assert!(!s.db_path.exists(), "opening alone must not write");
}

#[test]
fn every_command_is_persisted() {
    let s = scratch();
    let mut session = Session::open(s.config()).unwrap();

    session.apply(add(1, "Chips", 1.5)).unwrap();
    assert_eq!(try_load(&s.db_path).unwrap(), *session.inventory());

    session.apply(Command::Sell { id: 1 }).unwrap();
    assert!(!try_load(&s.db_path).unwrap().get(1).unwrap().available);

    session
        .apply(Command::SetAvailability {
            id: 1,
            available: true,
        })
        .unwrap();
    assert!(try_load(&s.db_path).unwrap().get(1).unwrap().available);

    session.apply(Command::Remove { id: 1 }).unwrap();
    assert!(try_load(&s.db_path).unwrap().is_empty());
}

#[test]
fn not_found_still_saves() {
    let s = scratch();
    let mut session = Session::open(s.config()).unwrap();
    let report = session.apply(Command::Remove { id: 42 }).unwrap();

    assert_eq!(
        report,
        Report::Removed {
            id: 42,
            outcome: Outcome::NotFound
        }
    );
    assert_eq!(report.message(), "Snack with ID 42 not found in inventory.");
    assert_eq!(s.read(), "{}");
}

#[test]
fn state_survives_reopen_but_sales_do_not() {
    let s = scratch();
    {
        let mut session = Session::open(s.config()).unwrap();
        session.apply(add(1, "Chips", 1.5)).unwrap();
        session.apply(add(2, "Tea", 0.5)).unwrap();
        session.apply(Command::Sell { id: 2 }).unwrap();
        assert_eq!(session.sales().len(), 1);
    }

    let reopened = Session::open(s.config()).unwrap();
    assert_eq!(ids(reopened.inventory()), vec![1, 2]);
    assert!(!reopened.inventory().get(2).unwrap().available);
    assert!(reopened.sales().is_empty());
}

#[test]
fn sale_report_carries_snapshot() {
    let s = scratch();
    let mut session = Session::open(s.config()).unwrap();
    session.apply(add(1, "Chips", 1.5)).unwrap();

    let report = session.apply(Command::Sell { id: 1 }).unwrap();
    let Report::Sale {
        outcome: SaleOutcome::Sold(sale),
        ..
    } = &report
    else {
        panic!("expected a sale, got {report:?}");
    };
    assert_eq!(sale.snack.name, "Chips");
    assert_eq!(
        report.message(),
        "Sale recorded: Chips (ID: 1) - Price: 1.5 - Availability: No"
    );

    let again = session.apply(Command::Sell { id: 1 }).unwrap();
    assert_eq!(again.message(), "Sorry, this snack is not available.");
    assert_eq!(session.sales().len(), 1);
}

#[test]
fn lenient_open_recovers_from_corrupt_file() {
    let s = scratch();
    s.write("not json at all");
    let session = Session::open(s.config()).unwrap();
    assert!(session.inventory().is_empty());
}

#[test]
fn strict_open_reports_corrupt_file() {
    let s = scratch();
    s.write("not json at all");
    let err = Session::open(s.strict_config()).err().unwrap();
    assert!(matches!(err, StorageError::Parse { .. }));
    assert_eq!(s.read(), "not json at all", "strict mode must not overwrite");
}

#[test]
fn add_with_unstorable_price_changes_nothing() {
    let s = scratch();
    let mut session = Session::open(s.config()).unwrap();
    session.apply(add(1, "Chips", 1.5)).unwrap();
    let saved = s.read();

    let err = session.apply(add(2, "Broken", f64::NAN)).unwrap_err();
    assert!(matches!(err, StorageError::InvalidPrice { id: 2, .. }));
    assert!(!session.inventory().contains(2));
    assert_eq!(s.read(), saved);

    // Later commands still save normally.
    session.apply(Command::Sell { id: 1 }).unwrap();
    assert_eq!(try_load(&s.db_path).unwrap().len(), 1);
}

#[test]
fn save_failure_keeps_in_memory_change() {
    let s = scratch();
    // A directory where the file should be makes every write fail.
    std::fs::create_dir(&s.db_path).unwrap();
    let mut session = Session::with_inventory(s.config(), Default::default());

    let err = session.apply(add(1, "Chips", 1.5)).unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
    assert!(session.inventory().contains(1));
}
