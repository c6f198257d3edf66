//! Gas identifiers, gas pairs and the axis labels derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known adsorbate species used by the default presets.
pub const CARBON_DIOXIDE: &str = "carbon dioxide";
pub const NITROGEN: &str = "nitrogen";
pub const METHANE: &str = "methane";
pub const ETHANE: &str = "ethane";
pub const ETHENE: &str = "ethene";

/// Name of an adsorbate species, e.g. `"carbon dioxide"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasId(String);

impl GasId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GasId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for GasId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The two species compared across the charts. `gas1` is plotted on the
/// x-axes, `gas2` on the y-axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasPair {
    pub gas1: GasId,
    pub gas2: GasId,
}

impl GasPair {
    pub fn new(gas1: impl Into<GasId>, gas2: impl Into<GasId>) -> Self {
        Self {
            gas1: gas1.into(),
            gas2: gas2.into(),
        }
    }

    /// Axis labels for the loading and Henry charts of this pair.
    pub fn axis_labels(&self) -> AxisLabels {
        AxisLabels {
            loading_x: format!("{} (mmol/g)", self.gas1),
            loading_y: format!("{} (mmol/g)", self.gas2),
            henry_x: format!("{} (dimensionless)", self.gas1),
            henry_y: format!("{} (dimensionless)", self.gas2),
        }
    }
}

/// Axis titles for both charts, recomputed whenever the gas pair changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub loading_x: String,
    pub loading_y: String,
    pub henry_x: String,
    pub henry_y: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels_follow_gas_names() {
        let pair = GasPair::new(CARBON_DIOXIDE, NITROGEN);
        let labels = pair.axis_labels();
        assert_eq!(labels.loading_x, "carbon dioxide (mmol/g)");
        assert_eq!(labels.loading_y, "nitrogen (mmol/g)");
        assert_eq!(labels.henry_x, "carbon dioxide (dimensionless)");
        assert_eq!(labels.henry_y, "nitrogen (dimensionless)");
    }

    #[test]
    fn gas_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&GasId::new(METHANE)).unwrap();
        assert_eq!(json, "\"methane\"");
    }
}
