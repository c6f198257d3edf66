//! In-memory SQLite database layer for adsorption material data.
//!
//! This crate is the dataset loader for the sorbent explorer: it loads CSV
//! data into an in-memory SQLite database and reads it back as an immutable
//! [`sorb_core::Dataset`] for the dashboard and the CLI.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data embedded via `include_str!` in the dashboard, read from disk by the CLI
//!
//! # Usage
//!
//! ```rust
//! use sorb_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_materials(
//!     "gas,material,henry,henry_error,loading_error,loading_isotherms,henry_isotherms,loading_1\n\
//!      nitrogen,Zeolite 13X,9.5,1.2,0.05,11,7,0.3\n",
//! )
//! .unwrap();
//!
//! let gases = db.query_gases().unwrap();
//! assert_eq!(gases[0].gas, "nitrogen");
//! let dataset = db.query_dataset().unwrap();
//! assert!(!dataset.is_empty());
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding material properties.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_materials`]
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_materials(
            "gas,material,henry,henry_error,loading_error,loading_isotherms,henry_isotherms,loading_1\nA,m1,1,0.1,0.1,3,3,1\n",
        )
        .unwrap();
        let gases = db2.query_gases().unwrap();
        assert_eq!(gases.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_gases().unwrap().is_empty(), "New database should have no gases");
        assert!(db.query_dataset().unwrap().is_empty());
    }
}
