//! Typed query methods for reading the adsorption data back out.
//!
//! Materials come back in load order (`rowid`), which is the iteration order
//! the derived views preserve.

use crate::models::GasInfo;
use crate::Database;
use rusqlite::params;
use sorb_core::{Dataset, GasId, MaterialRecord};

impl Database {
    /// List gases in order of first appearance, with their material counts.
    pub fn query_gases(&self) -> anyhow::Result<Vec<GasInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT gas, COUNT(*) AS material_count, MIN(rowid) AS first_seen
             FROM materials
             GROUP BY gas
             ORDER BY first_seen",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(GasInfo {
                    gas: row.get(0)?,
                    material_count: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[SORB] query: query_gases returned {} gases", rows.len());
        Ok(rows)
    }

    /// All material records of one gas, in load order.
    pub fn query_materials(&self, gas: &str) -> anyhow::Result<Vec<MaterialRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT material, henry, henry_error, loading_error, loading_isotherms, henry_isotherms
             FROM materials
             WHERE gas = ?1
             ORDER BY rowid",
        )?;
        let mut loadings_stmt = conn.prepare(
            "SELECT value FROM loadings
             WHERE gas = ?1 AND material = ?2
             ORDER BY step",
        )?;

        let mut records = stmt
            .query_map(params![gas], |row| {
                Ok(MaterialRecord {
                    gas: GasId::new(gas),
                    material: row.get(0)?,
                    loading: Vec::new(),
                    henry: row.get(1)?,
                    henry_error: row.get(2)?,
                    loading_error: row.get(3)?,
                    loading_isotherms: row.get(4)?,
                    henry_isotherms: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        for record in &mut records {
            record.loading = loadings_stmt
                .query_map(params![gas, record.material], |row| row.get(0))?
                .collect::<Result<Vec<f64>, _>>()?;
        }
        log::debug!(
            "[SORB] query: query_materials({}) returned {} records",
            gas,
            records.len()
        );
        Ok(records)
    }

    /// Number of pressure steps available for every material.
    ///
    /// Returns 0 for an empty database.
    pub fn query_pressure_steps(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let steps: Option<i64> = conn.query_row(
            "SELECT MIN(steps) FROM (
                SELECT COUNT(*) AS steps FROM loadings GROUP BY gas, material
             )",
            [],
            |row| row.get(0),
        )?;
        Ok(steps.unwrap_or(0) as usize)
    }

    /// Read the whole database into an immutable [`Dataset`].
    pub fn query_dataset(&self) -> anyhow::Result<Dataset> {
        let mut dataset = Dataset::new();
        for info in self.query_gases()? {
            for record in self.query_materials(&info.gas)? {
                dataset.insert(record)?;
            }
        }
        log::info!(
            "[SORB] query: dataset built with {} gases",
            dataset.gases().count()
        );
        Ok(dataset)
    }
}
