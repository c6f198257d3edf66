//! Subcommands that print what the dashboard would show.

use crate::input::{open_database, open_panel};
use crate::output::{open_output, write_capacity, write_json, write_view};
use crate::{DatasetArgs, OutputFormat, PairArgs};
use anyhow::Context;
use log::{info, warn};

/// List gases in load order with their material counts.
pub fn run_gases(dataset: &DatasetArgs) -> anyhow::Result<()> {
    let db = open_database(&dataset.materials_csv)?;
    let gases = db.query_gases()?;
    let steps = db.query_pressure_steps()?;

    println!("{:<24} {:>9}", "gas", "materials");
    for gas in &gases {
        println!("{:<24} {:>9}", gas.gas, gas.material_count);
    }
    println!("pressure steps: {}", steps);
    Ok(())
}

pub fn run_view(
    dataset: &DatasetArgs,
    pair: &PairArgs,
    pressure: usize,
    format: OutputFormat,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let panel = open_panel(dataset, pair, pressure)?;
    let labels = panel.axis_labels();
    info!(
        "[SORB] cmd: {} vs {} at pressure {} ({} materials)",
        labels.loading_x,
        labels.loading_y,
        pressure,
        panel.view().len()
    );
    if panel.view().is_empty() {
        warn!("[SORB] cmd: the two gases have no materials in common");
    }
    write_view(panel.view(), format, open_output(output)?)
}

/// Select one point and print its error-bar overlay columns.
///
/// A stale index clears the selection, so the columns come out empty.
pub fn run_overlay(
    dataset: &DatasetArgs,
    pair: &PairArgs,
    pressure: usize,
    index: usize,
) -> anyhow::Result<()> {
    let mut panel = open_panel(dataset, pair, pressure)?;
    panel.select_point(Some(index));
    if panel.overlay().is_empty() {
        warn!(
            "[SORB] cmd: index {} is out of range for a view of {} materials",
            index,
            panel.view().len()
        );
    }
    write_json(&panel.overlay().columns(), std::io::stdout().lock())
}

pub fn run_capacity(
    dataset: &DatasetArgs,
    pair: &PairArgs,
    (low, high): (usize, usize),
    format: OutputFormat,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let low_step = low.checked_sub(1).context("pressure positions start at 1")?;
    let high_step = high.checked_sub(1).context("pressure positions start at 1")?;
    let panel = open_panel(dataset, pair, 1)?;
    let capacity = panel.working_capacity(low_step, high_step)?;
    write_capacity(&capacity, format, open_output(output)?)
}

/// Select one point and print the selected-material panel contents.
pub fn run_details(
    dataset: &DatasetArgs,
    pair: &PairArgs,
    pressure: usize,
    index: usize,
) -> anyhow::Result<()> {
    let mut panel = open_panel(dataset, pair, pressure)?;
    panel.select_point(Some(index));
    let details = panel.selected_details().with_context(|| {
        format!(
            "index {} is out of range for a view of {} materials",
            index,
            panel.view().len()
        )
    })?;
    write_json(&details, std::io::stdout().lock())
}
