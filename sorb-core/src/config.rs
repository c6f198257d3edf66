//! Dashboard configuration: gas-pair presets and the pressure slider range.

use crate::error::{Result, SorbError};
use crate::gas::{GasPair, CARBON_DIOXIDE, ETHANE, ETHENE, METHANE, NITROGEN};
use serde::{Deserialize, Serialize};

/// A labelled gas pair offered by the gas-pair radio group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasPairPreset {
    pub label: String,
    #[serde(flatten)]
    pub pair: GasPair,
}

impl GasPairPreset {
    pub fn new(label: &str, gas1: &str, gas2: &str) -> Self {
        Self {
            label: label.to_string(),
            pair: GasPair::new(gas1, gas2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub presets: Vec<GasPairPreset>,
    /// Number of discrete pressure steps exposed by the slider.
    pub pressure_steps: usize,
    pub default_preset: usize,
    pub default_step: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            presets: vec![
                GasPairPreset::new("CO2 / N2", CARBON_DIOXIDE, NITROGEN),
                GasPairPreset::new("CO2 / CH4", CARBON_DIOXIDE, METHANE),
                GasPairPreset::new("C2H6 / C2H4", ETHANE, ETHENE),
            ],
            pressure_steps: 3,
            default_preset: 0,
            default_step: 0,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SorbError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.presets.is_empty() {
            return Err(SorbError::InvalidConfig("no gas pair presets".to_string()));
        }
        if self.pressure_steps == 0 {
            return Err(SorbError::InvalidConfig(
                "pressure_steps must be at least 1".to_string(),
            ));
        }
        if self.default_preset >= self.presets.len() {
            return Err(SorbError::InvalidConfig(format!(
                "default_preset {} out of range for {} presets",
                self.default_preset,
                self.presets.len()
            )));
        }
        if self.default_step >= self.pressure_steps {
            return Err(SorbError::InvalidConfig(format!(
                "default_step {} out of range for {} steps",
                self.default_step, self.pressure_steps
            )));
        }
        Ok(())
    }

    pub fn preset(&self, index: usize) -> Result<&GasPairPreset> {
        self.presets
            .get(index)
            .ok_or(SorbError::UnknownGasPair(index))
    }
}
