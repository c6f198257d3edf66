//! In-memory adsorption dataset keyed by gas and material.
//!
//! A [`Dataset`] is built once by the loader and only read afterwards. Each
//! gas owns a [`GasTable`] that keeps materials in insertion order, because
//! the derived views follow the first gas's order when intersecting tables.

use crate::error::{Result, SorbError};
use crate::gas::GasId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One (gas, material) measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub gas: GasId,
    /// Material name, unique within its gas table.
    pub material: String,
    /// Amount adsorbed (mmol/g) at each discrete pressure step.
    pub loading: Vec<f64>,
    /// Initial Henry constant.
    pub henry: f64,
    /// Reported uncertainty of the loading values.
    pub loading_error: f64,
    /// Reported uncertainty of the Henry constant.
    pub henry_error: f64,
    /// Number of isotherms backing the loading values.
    pub loading_isotherms: f64,
    /// Number of isotherms backing the Henry constant.
    pub henry_isotherms: f64,
}

impl MaterialRecord {
    /// Check the record before it enters a dataset.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(SorbError::InvalidRecord(format!(
                "{} ({}): {}",
                self.material, self.gas, reason
            )))
        };

        if self.gas.as_str().trim().is_empty() {
            return invalid("empty gas name");
        }
        if self.material.trim().is_empty() {
            return invalid("empty material name");
        }
        if self.loading.is_empty() {
            return invalid("no pressure steps");
        }
        if self.loading.iter().any(|v| !v.is_finite()) {
            return invalid("non-finite loading");
        }
        let scalars = [
            ("henry", self.henry),
            ("loading_error", self.loading_error),
            ("henry_error", self.henry_error),
            ("loading_isotherms", self.loading_isotherms),
            ("henry_isotherms", self.henry_isotherms),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return invalid(&format!("non-finite {}", name));
            }
        }
        for (name, value) in &scalars[1..] {
            if *value < 0.0 {
                return invalid(&format!("negative {}", name));
            }
        }
        Ok(())
    }

    /// Loading at a pressure step, or `PressureStepOutOfRange`.
    pub fn loading_at(&self, step: usize) -> Result<f64> {
        self.loading
            .get(step)
            .copied()
            .ok_or_else(|| SorbError::PressureStepOutOfRange {
                gas: self.gas.to_string(),
                material: self.material.clone(),
                step,
                available: self.loading.len(),
            })
    }
}

/// All materials measured for one gas, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct GasTable {
    gas: GasId,
    records: Vec<MaterialRecord>,
    index: HashMap<String, usize>,
}

impl GasTable {
    fn new(gas: GasId) -> Self {
        Self {
            gas,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn gas(&self) -> &GasId {
        &self.gas
    }

    pub fn get(&self, material: &str) -> Option<&MaterialRecord> {
        self.index.get(material).map(|&i| &self.records[i])
    }

    pub fn contains(&self, material: &str) -> bool {
        self.index.contains_key(material)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Mapping from gas to its material table. Gases keep insertion order too.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    tables: Vec<GasTable>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from records, failing on the first invalid or
    /// duplicate record.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = MaterialRecord>,
    {
        let mut dataset = Self::new();
        for record in records {
            dataset.insert(record)?;
        }
        Ok(dataset)
    }

    /// Validate and append a record to its gas table.
    pub fn insert(&mut self, record: MaterialRecord) -> Result<()> {
        record.validate()?;

        let position = match self.tables.iter().position(|t| t.gas == record.gas) {
            Some(position) => position,
            None => {
                self.tables.push(GasTable::new(record.gas.clone()));
                self.tables.len() - 1
            }
        };
        let table = &mut self.tables[position];

        if table.contains(&record.material) {
            return Err(SorbError::DuplicateMaterial {
                gas: record.gas.to_string(),
                material: record.material,
            });
        }
        table
            .index
            .insert(record.material.clone(), table.records.len());
        table.records.push(record);
        Ok(())
    }

    /// The table of a gas, or `UnknownGas`.
    pub fn table(&self, gas: &GasId) -> Result<&GasTable> {
        self.tables
            .iter()
            .find(|t| &t.gas == gas)
            .ok_or_else(|| SorbError::UnknownGas(gas.to_string()))
    }

    pub fn contains_gas(&self, gas: &GasId) -> bool {
        self.tables.iter().any(|t| &t.gas == gas)
    }

    pub fn record(&self, gas: &GasId, material: &str) -> Option<&MaterialRecord> {
        self.table(gas).ok().and_then(|t| t.get(material))
    }

    pub fn gases(&self) -> impl Iterator<Item = &GasId> {
        self.tables.iter().map(|t| &t.gas)
    }

    pub fn tables(&self) -> impl Iterator<Item = &GasTable> {
        self.tables.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
