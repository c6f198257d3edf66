//! CSV and JSON writers for derived views.

use crate::OutputFormat;
use anyhow::Context;
use serde::Serialize;
use sorb_core::{DerivedView, WorkingCapacityView};
use std::io::Write;

/// Open the output destination: a file when `path` is given, else stdout.
pub fn open_output(path: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                std::fs::File::create(path).with_context(|| format!("failed to create {}", path))?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

/// One view row per material, columns in chart order.
pub fn write_view_csv<W: Write>(view: &DerivedView, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["label", "x0", "y0", "x1", "y1", "z0", "z1"])?;
    for i in 0..view.len() {
        wtr.write_record([
            view.labels[i].clone(),
            view.x0[i].to_string(),
            view.y0[i].to_string(),
            view.x1[i].to_string(),
            view.y1[i].to_string(),
            view.z0[i].to_string(),
            view.z1[i].to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_capacity_csv<W: Write>(view: &WorkingCapacityView, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["label", "gas1", "gas2"])?;
    for (label, (x, y)) in view.labels.iter().zip(view.x.iter().zip(&view.y)) {
        wtr.write_record([label.clone(), x.to_string(), y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(value: &T, mut writer: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn write_view<W: Write>(view: &DerivedView, format: OutputFormat, writer: W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => write_view_csv(view, writer),
        OutputFormat::Json => write_json(view, writer),
    }
}

pub fn write_capacity<W: Write>(
    view: &WorkingCapacityView,
    format: OutputFormat,
    writer: W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => write_capacity_csv(view, writer),
        OutputFormat::Json => write_json(view, writer),
    }
}
