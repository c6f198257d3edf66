//! Reading the materials CSV and dashboard configuration from disk.

use crate::{DatasetArgs, PairArgs};
use anyhow::Context;
use flate2::read::GzDecoder;
use log::info;
use sorb_core::{ControlPanel, DashboardConfig, Dataset, GasPairPreset};
use sorb_db::Database;
use std::io::Read;
use std::rc::Rc;

/// Decode materials CSV bytes, gunzipping them first when `gzipped`.
pub fn decode_materials(bytes: &[u8], gzipped: bool) -> anyhow::Result<String> {
    if !gzipped {
        return String::from_utf8(bytes.to_vec()).context("materials CSV is not UTF-8");
    }
    let mut text = String::new();
    GzDecoder::new(bytes)
        .read_to_string(&mut text)
        .context("failed to decompress materials CSV")?;
    Ok(text)
}

/// Read a materials CSV from `path`; `.gz` files are decompressed.
pub fn read_materials(path: &str) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path))?;
    decode_materials(&bytes, path.ends_with(".gz"))
}

/// Load the materials CSV into an in-memory database.
pub fn open_database(path: &str) -> anyhow::Result<Database> {
    let csv_data = read_materials(path)?;
    let db = Database::new()?;
    db.load_materials(&csv_data)?;
    Ok(db)
}

/// Read the dashboard configuration, or derive one from the data.
///
/// Without a config file the default presets are used and the slider spans
/// every pressure step the dataset provides.
pub fn load_config(path: Option<&str>, db: &Database) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(path) => {
            let json =
                std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
            let config = DashboardConfig::from_json(&json)
                .with_context(|| format!("invalid dashboard config {}", path))?;
            info!("[SORB] cmd: loaded config from {}", path);
            Ok(config)
        }
        None => {
            let mut config = DashboardConfig::default();
            let steps = db.query_pressure_steps()?;
            if steps > 0 {
                config.pressure_steps = steps;
            }
            Ok(config)
        }
    }
}

/// Point the configuration at the requested gas pair and 1-based pressure.
pub fn apply_selection(
    mut config: DashboardConfig,
    pair: &PairArgs,
    pressure: usize,
) -> anyhow::Result<DashboardConfig> {
    match (pair.preset, pair.gas1.as_deref(), pair.gas2.as_deref()) {
        (Some(preset), _, _) => config.default_preset = preset,
        (None, Some(gas1), Some(gas2)) => {
            let label = format!("{} / {}", gas1, gas2);
            config.presets = vec![GasPairPreset::new(&label, gas1, gas2)];
            config.default_preset = 0;
        }
        _ => {}
    }
    config.default_step = pressure
        .checked_sub(1)
        .context("pressure positions start at 1")?;
    config.validate()?;
    Ok(config)
}

/// Load everything a subcommand needs and build the control panel.
pub fn open_panel(
    dataset: &DatasetArgs,
    pair: &PairArgs,
    pressure: usize,
) -> anyhow::Result<ControlPanel> {
    let db = open_database(&dataset.materials_csv)?;
    let config = load_config(dataset.config.as_deref(), &db)?;
    let config = apply_selection(config, pair, pressure)?;
    let data: Dataset = db.query_dataset()?;
    info!(
        "[SORB] cmd: loaded {} gases from {}",
        data.gases().count(),
        dataset.materials_csv
    );
    Ok(ControlPanel::new(Rc::new(data), config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn plain_bytes_pass_through() {
        let text = decode_materials(b"gas,material\n", false).unwrap();
        assert_eq!(text, "gas,material\n");
    }

    #[test]
    fn gzipped_bytes_are_decompressed() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"gas,material\nCO2,ZIF-8\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let text = decode_materials(&compressed, true).unwrap();
        assert_eq!(text, "gas,material\nCO2,ZIF-8\n");
    }

    #[test]
    fn garbage_gzip_is_an_error() {
        assert!(decode_materials(b"not gzip", true).is_err());
    }

    #[test]
    fn explicit_gases_replace_presets() {
        let pair = PairArgs {
            preset: None,
            gas1: Some("A".to_string()),
            gas2: Some("B".to_string()),
        };
        let config = apply_selection(DashboardConfig::default(), &pair, 2).unwrap();
        assert_eq!(config.presets.len(), 1);
        assert_eq!(config.presets[0].label, "A / B");
        assert_eq!(config.default_preset, 0);
        assert_eq!(config.default_step, 1);
    }

    #[test]
    fn preset_index_is_checked() {
        let pair = PairArgs {
            preset: Some(7),
            ..PairArgs::default()
        };
        assert!(apply_selection(DashboardConfig::default(), &pair, 1).is_err());
    }

    #[test]
    fn pressure_is_one_based() {
        let config = DashboardConfig::default();
        assert!(apply_selection(config.clone(), &PairArgs::default(), 0).is_err());
        assert!(apply_selection(config.clone(), &PairArgs::default(), 4).is_err());
        let config = apply_selection(config, &PairArgs::default(), 3).unwrap();
        assert_eq!(config.default_step, 2);
    }

    #[test]
    fn pressure_steps_follow_the_data() {
        let db = Database::new().unwrap();
        db.load_materials(
            "gas,material,henry,henry_error,loading_error,loading_isotherms,henry_isotherms,loading_1,loading_2,loading_3,loading_4\n\
             CO2,ZIF-8,1.0,0.1,0.1,2,2,0.5,0.8,1.0,1.2\n",
        )
        .unwrap();
        let config = load_config(None, &db).unwrap();
        assert_eq!(config.pressure_steps, 4);
    }
}
