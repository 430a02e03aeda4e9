//! Reads campus records from headerless CSV files.
//!
//! Building files hold `name,id,x,y` rows, pathway files `id1,id2` rows.
//! Fields are trimmed and blank lines skipped. There is no comment syntax:
//! a leading `#` is part of the building name.

use crate::campus::records::{BuildingRecord, PathwayRecord};
use crate::error::{MapError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn require_fields(record: &StringRecord, expected: usize, source_name: &str) -> Result<()> {
    if record.len() < expected {
        return Err(MapError::MalformedRecord {
            source_name: source_name.to_string(),
            line: line_of(record),
            reason: format!("expected {} fields, found {}", expected, record.len()),
        });
    }
    Ok(())
}

fn int_field(record: &StringRecord, i: usize, what: &str, source_name: &str) -> Result<i32> {
    let raw = record.get(i).unwrap_or_default();
    raw.parse().map_err(|_| MapError::MalformedRecord {
        source_name: source_name.to_string(),
        line: line_of(record),
        reason: format!("{} '{}' is not an integer", what, raw),
    })
}

/// Parses `name,id,x,y` rows. `source_name` only labels error messages.
pub fn read_buildings<R: Read>(reader: R, source_name: &str) -> Result<Vec<BuildingRecord>> {
    let mut buildings = Vec::new();
    for result in csv_reader(reader).records() {
        let record = result?;
        require_fields(&record, 4, source_name)?;
        buildings.push(BuildingRecord {
            name: record.get(0).unwrap_or_default().to_string(),
            id: int_field(&record, 1, "building id", source_name)?,
            x: int_field(&record, 2, "x coordinate", source_name)?,
            y: int_field(&record, 3, "y coordinate", source_name)?,
        });
    }
    debug!("parsed {} building records from {}", buildings.len(), source_name);
    Ok(buildings)
}

/// Parses `id1,id2` rows.
pub fn read_pathways<R: Read>(reader: R, source_name: &str) -> Result<Vec<PathwayRecord>> {
    let mut pathways = Vec::new();
    for result in csv_reader(reader).records() {
        let record = result?;
        require_fields(&record, 2, source_name)?;
        pathways.push(PathwayRecord {
            from: int_field(&record, 0, "building id", source_name)?,
            to: int_field(&record, 1, "building id", source_name)?,
        });
    }
    debug!("parsed {} pathway records from {}", pathways.len(), source_name);
    Ok(pathways)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| MapError::ReadingFile {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_buildings_file(path: &Path) -> Result<Vec<BuildingRecord>> {
    let buildings = read_buildings(open(path)?, &path.display().to_string())?;
    info!("read {} buildings from {}", buildings.len(), path.display());
    Ok(buildings)
}

pub fn read_pathways_file(path: &Path) -> Result<Vec<PathwayRecord>> {
    let pathways = read_pathways(open(path)?, &path.display().to_string())?;
    info!("read {} pathways from {}", pathways.len(), path.display());
    Ok(pathways)
}
