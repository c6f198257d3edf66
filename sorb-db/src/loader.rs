//! CSV data loading for populating the in-memory SQLite database.
//!
//! # CSV Format
//!
//! Header row required; columns are matched by name, in any order:
//!
//! ```text
//! gas,material,henry,henry_error,loading_error,loading_isotherms,henry_isotherms,loading_1,loading_2,loading_3
//! carbon dioxide,Zeolite 13X,1450.0,120.0,0.21,14,9,2.9,4.1,4.8
//! ```
//!
//! `loading_N` columns hold the amount adsorbed at pressure step `N`
//! (one-based in the header, stored zero-based). At least one is required.

use crate::Database;
use rusqlite::params;
use sorb_core::{GasId, MaterialRecord};

const REQUIRED_COLUMNS: [&str; 7] = [
    "gas",
    "material",
    "henry",
    "henry_error",
    "loading_error",
    "loading_isotherms",
    "henry_isotherms",
];

/// Column positions resolved from the header row.
struct Columns {
    required: [usize; 7],
    /// Loading column positions ordered by pressure step.
    loadings: Vec<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));

        let mut required = [0usize; 7];
        for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = match find(name) {
                Some(i) => i,
                None => anyhow::bail!("materials CSV is missing column '{}'", name),
            };
        }

        let mut loadings: Vec<(u32, usize)> = headers
            .iter()
            .enumerate()
            .filter_map(|(i, h)| {
                let step = h.trim().to_ascii_lowercase();
                let step = step.strip_prefix("loading_")?.parse::<u32>().ok()?;
                Some((step, i))
            })
            .collect();
        if loadings.is_empty() {
            anyhow::bail!("materials CSV has no loading_N columns");
        }
        loadings.sort_unstable();

        Ok(Self {
            required,
            loadings: loadings.into_iter().map(|(_, i)| i).collect(),
        })
    }
}

impl Database {
    /// Load material properties from a CSV string.
    ///
    /// Rows with an empty gas or material, a non-numeric or non-finite value
    /// in any numeric column, or a negative error or isotherm count are
    /// skipped. A (gas, material) pair seen again updates
    /// the earlier row in place, keeping its load position.
    pub fn load_materials(&self, csv_data: &str) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let columns = Columns::from_headers(rdr.headers()?)?;
        let tx = conn.transaction()?;

        let mut count = 0u32;
        let mut skipped = 0u32;
        {
            let mut upsert = tx.prepare(
                "INSERT INTO materials
                 (gas, material, henry, henry_error, loading_error, loading_isotherms, henry_isotherms)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(gas, material) DO UPDATE SET
                    henry = excluded.henry,
                    henry_error = excluded.henry_error,
                    loading_error = excluded.loading_error,
                    loading_isotherms = excluded.loading_isotherms,
                    henry_isotherms = excluded.henry_isotherms",
            )?;
            let mut clear_loadings =
                tx.prepare("DELETE FROM loadings WHERE gas = ?1 AND material = ?2")?;
            let mut insert_loading = tx.prepare(
                "INSERT INTO loadings (gas, material, step, value) VALUES (?1, ?2, ?3, ?4)",
            )?;

            for result in rdr.records() {
                let r = result?;
                let field = |i: usize| r.get(i).unwrap_or("").trim();
                let number = |i: usize| field(i).parse::<f64>().ok();

                let [gas_i, material_i, scalar_i @ ..] = columns.required;
                let gas = field(gas_i);
                let material = field(material_i);
                if gas.is_empty() || material.is_empty() {
                    skipped += 1;
                    continue;
                }

                let scalars: Option<Vec<f64>> = scalar_i.iter().map(|&i| number(i)).collect();
                let loadings: Option<Vec<f64>> =
                    columns.loadings.iter().map(|&i| number(i)).collect();
                let (Some(scalars), Some(loadings)) = (scalars, loadings) else {
                    log::debug!("[SORB] loader: skipping non-numeric row {} / {}", gas, material);
                    skipped += 1;
                    continue;
                };

                let record = MaterialRecord {
                    gas: GasId::new(gas),
                    material: material.to_string(),
                    loading: loadings,
                    henry: scalars[0],
                    henry_error: scalars[1],
                    loading_error: scalars[2],
                    loading_isotherms: scalars[3],
                    henry_isotherms: scalars[4],
                };
                if let Err(e) = record.validate() {
                    log::debug!("[SORB] loader: skipping row: {}", e);
                    skipped += 1;
                    continue;
                }

                upsert.execute(params![
                    gas,
                    material,
                    record.henry,
                    record.henry_error,
                    record.loading_error,
                    record.loading_isotherms,
                    record.henry_isotherms
                ])?;
                clear_loadings.execute(params![gas, material])?;
                for (step, value) in record.loading.iter().enumerate() {
                    insert_loading.execute(params![gas, material, step as i64, value])?;
                }
                count += 1;
            }
        }
        tx.commit()?;

        log::info!(
            "[SORB] loader: Loaded {} materials, skipped {} invalid rows",
            count,
            skipped
        );
        Ok(())
    }
}
