use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::AvailabilityTable;
use crate::configurator::domain::{BuildStyle, FinishVariant, Storeys};

/// Failure while importing an availability table.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error("unable to open availability table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed availability table: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {line}: '{value}' is not a finish variant")]
    UnknownVariant { line: u64, value: String },
    #[error("row {line}: {build_style}/{storeys} must allow the default finish")]
    MissingDefault {
        line: u64,
        build_style: BuildStyle,
        storeys: Storeys,
    },
    #[error("row {line}: duplicate entry for {build_style}/{storeys}")]
    DuplicateEntry {
        line: u64,
        build_style: BuildStyle,
        storeys: Storeys,
    },
}

#[derive(Debug, Deserialize)]
struct AvailabilityRow {
    build_style: BuildStyle,
    storeys: Storeys,
    variants: String,
}

pub(super) fn load_path(path: &Path) -> Result<AvailabilityTable, AvailabilityError> {
    let file = File::open(path)?;
    let table = load_reader(file)?;
    info!(path = %path.display(), "loaded finish availability table");
    Ok(table)
}

pub(super) fn load_reader<R: Read>(reader: R) -> Result<AvailabilityTable, AvailabilityError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = BTreeMap::new();

    for (index, record) in csv_reader.deserialize::<AvailabilityRow>().enumerate() {
        let row = record?;
        // header occupies line 1
        let line = index as u64 + 2;
        let variants = parse_variants(&row.variants, line)?;

        if !variants.contains(&FinishVariant::Default) {
            return Err(AvailabilityError::MissingDefault {
                line,
                build_style: row.build_style,
                storeys: row.storeys,
            });
        }

        match entries.entry((row.build_style, row.storeys)) {
            Entry::Occupied(_) => {
                return Err(AvailabilityError::DuplicateEntry {
                    line,
                    build_style: row.build_style,
                    storeys: row.storeys,
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(variants);
            }
        }
    }

    let table = AvailabilityTable::from_entries(entries);
    for (build_style, storeys) in table.missing_entries() {
        warn!(%build_style, %storeys, "availability table has no entry for pair");
    }

    Ok(table)
}

fn parse_variants(raw: &str, line: u64) -> Result<BTreeSet<FinishVariant>, AvailabilityError> {
    raw.split('|')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse::<FinishVariant>()
                .map_err(|_| AvailabilityError::UnknownVariant {
                    line,
                    value: value.to_string(),
                })
        })
        .collect()
}
