//! Semicolon-delimited table loading.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::records::types::{Catalog, CatalogItem, StaffMember};

/// Field separator used by every lookup file.
pub const DELIMITER: u8 = b';';

const CATALOG_FIELDS: usize = 6;
const ROSTER_FIELDS: usize = 2;

/// Errors that make a lookup file unusable.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be read or is not valid delimited text.
    #[error("malformed data in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A data row carries fewer fields than the table needs.
    #[error("line {line} of {path:?} has {found} fields, expected at least {expected}")]
    ShortRecord {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },
}

/// Parse a price, falling back to `0.0` when the text is not a finite number.
///
/// The fallback is silent on purpose: a bad price must not drop the item.
pub fn parse_price(raw: &str) -> f64 {
    parse_finite(raw).unwrap_or(0.0)
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse().ok().filter(|price: &f64| price.is_finite())
}

/// Load the goods catalog.
///
/// The first line is a header and is skipped. Rows may vary in length but need
/// at least six fields. A code seen twice keeps the later row.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let mut reader = open(path, true)?;
    let mut catalog = Catalog::new();

    for result in reader.records() {
        let record = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        check_len(path, &record, CATALOG_FIELDS)?;

        let raw_price = &record[5];
        if parse_finite(raw_price).is_none() {
            tracing::debug!(code = &record[0], raw = raw_price, "Unparsable price, using 0");
        }

        let item = CatalogItem {
            code: record[0].to_string(),
            article: record[1].to_string(),
            group_code: record[2].to_string(),
            is_group: &record[3] == "1",
            name: record[4].to_string(),
            price: parse_price(raw_price),
        };

        catalog.insert(item.code.clone(), item);
    }

    tracing::info!(path = ?path, items = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

/// Load a staff roster sorted by name.
///
/// Every row must have as many fields as the header.
pub fn load_roster(path: &Path) -> Result<Vec<StaffMember>, LoadError> {
    let mut reader = open(path, false)?;
    let mut roster = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        check_len(path, &record, ROSTER_FIELDS)?;

        roster.push(StaffMember {
            code: record[0].to_string(),
            name: record[1].to_string(),
        });
    }

    roster.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::info!(path = ?path, members = roster.len(), "Roster loaded");
    Ok(roster)
}

fn open(path: &Path, flexible: bool) -> Result<csv::Reader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(flexible)
        .from_reader(file);

    let header = reader.headers().map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = ?path, header = ?header, "Skipping header line");

    Ok(reader)
}

fn check_len(path: &Path, record: &StringRecord, expected: usize) -> Result<(), LoadError> {
    if record.len() < expected {
        return Err(LoadError::ShortRecord {
            path: path.to_path_buf(),
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            found: record.len(),
            expected,
        });
    }
    Ok(())
}
