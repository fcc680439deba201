use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::model::Record;

/// One CSV row, with the same column headings as the records table.
#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Type 1")]
    primary_type: &'a str,
    #[serde(rename = "Type 2")]
    secondary_type: Option<&'a str>,
    #[serde(rename = "Previous Evolution")]
    prior_form: Option<&'a str>,
    #[serde(rename = "Next Evolution")]
    next_form: Option<&'a str>,
    #[serde(rename = "Total Stats")]
    total_stats: u32,
    #[serde(rename = "HP")]
    hp: u32,
    #[serde(rename = "Attack")]
    attack: u32,
    #[serde(rename = "Defense")]
    defense: u32,
    #[serde(rename = "Sp. Attack")]
    sp_attack: u32,
    #[serde(rename = "Sp. Defense")]
    sp_defense: u32,
    #[serde(rename = "Speed")]
    speed: u32,
}

impl<'a> From<&'a Record> for ExportRow<'a> {
    fn from(r: &'a Record) -> Self {
        let stats = r.stats();
        ExportRow {
            name: &r.name,
            primary_type: &r.primary_type,
            secondary_type: r.secondary_type.as_deref(),
            prior_form: r.prior_form.as_deref(),
            next_form: r.next_form.as_deref(),
            total_stats: r.total_stats(),
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            sp_attack: stats.sp_attack,
            sp_defense: stats.sp_defense,
            speed: stats.speed,
        }
    }
}

/// Write `records` as CSV in their current order. Absent values become
/// empty cells.
pub fn write_csv<W: Write>(records: &[&Record], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        wtr.serialize(ExportRow::from(*r))
            .with_context(|| format!("writing row for {}", r.name))?;
    }
    wtr.flush().context("flushing CSV output")?;
    Ok(())
}

/// Write `records` to a CSV file at `path`.
pub fn save_csv(records: &[&Record], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(records, file)
}
