use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::models::COLUMNS;
use crate::store::RecordStore;

pub const SHEET_NAME: &str = "LinkedIn Jobs";
pub const MAX_COLUMN_WIDTH: usize = 50;
const SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRow {
    pub title: String,
    pub company: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub companies: usize,
    pub locations: usize,
    pub sample: Vec<SampleRow>,
}

impl Summary {
    pub fn from_store(store: &RecordStore) -> Self {
        let records = store.records();
        let companies: HashSet<&str> = records.iter().map(|r| r.company.as_str()).collect();
        let locations: HashSet<&str> = records.iter().map(|r| r.location.as_str()).collect();
        let sample = records
            .iter()
            .take(SAMPLE_SIZE)
            .map(|r| SampleRow {
                title: r.title.clone(),
                company: r.company.clone(),
                location: r.location.clone(),
            })
            .collect();

        Self {
            total: records.len(),
            companies: companies.len(),
            locations: locations.len(),
            sample,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return writeln!(f, "No data collected");
        }

        writeln!(f, "\n=== COLLECTION SUMMARY ===")?;
        writeln!(f, "Total jobs: {}", self.total)?;
        writeln!(f, "Companies: {}", self.companies)?;
        writeln!(f, "Locations: {}", self.locations)?;
        writeln!(f, "\nSample data:")?;
        writeln!(f, "{:<4} {:<35} {:<25} {:<25}", "", "TITLE", "COMPANY", "LOCATION")?;
        writeln!(f, "{}", "-".repeat(90))?;
        for (i, row) in self.sample.iter().enumerate() {
            writeln!(
                f,
                "{:<4} {:<35} {:<25} {:<25}",
                i,
                truncate(&row.title, 33),
                truncate(&row.company, 23),
                truncate(&row.location, 23)
            )?;
        }
        Ok(())
    }
}

/// Writes one header row plus one row per record, columns sized to content up to 50.
pub fn export_xlsx(store: &RecordStore, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in store.records().iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in record.values().iter().enumerate() {
            worksheet.write_string(row, col as u16, *value)?;
            widths[col] = widths[col].max(value.chars().count());
        }
    }

    for (col, width) in widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, column_width(*width) as f64)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn column_width(longest: usize) -> usize {
    (longest + 2).min(MAX_COLUMN_WIDTH)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
