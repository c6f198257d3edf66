//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// - `materials` - one row per (gas, material) with the scalar properties.
///   The implicit `rowid` records load order, which the dataset preserves.
/// - `loadings` - amount adsorbed per (gas, material, pressure step), with
///   steps numbered from 0.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS materials (
        gas TEXT NOT NULL,
        material TEXT NOT NULL,
        henry REAL NOT NULL,
        henry_error REAL NOT NULL,
        loading_error REAL NOT NULL,
        loading_isotherms REAL NOT NULL,
        henry_isotherms REAL NOT NULL,
        PRIMARY KEY (gas, material)
    );
    CREATE INDEX IF NOT EXISTS idx_materials_gas ON materials(gas);

    CREATE TABLE IF NOT EXISTS loadings (
        gas TEXT NOT NULL,
        material TEXT NOT NULL,
        step INTEGER NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (gas, material, step)
    );
    "#
}
