//! Query result model structs.

use serde::Serialize;

/// A gas present in the database with the number of materials measured.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GasInfo {
    pub gas: String,
    pub material_count: usize,
}
