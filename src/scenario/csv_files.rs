use crate::campus::loader::{read_buildings_file, read_pathways_file};
use crate::campus::records::CampusRecords;
use crate::error::Result;
use crate::scenario::scenario::Scenario;
use std::path::PathBuf;

/// Campus read from a building file and a pathway file.
pub struct CsvScenario {
    nodes: PathBuf,
    edges: PathBuf,
}

impl CsvScenario {
    pub fn new(nodes: impl Into<PathBuf>, edges: impl Into<PathBuf>) -> Self {
        Self {
            nodes: nodes.into(),
            edges: edges.into(),
        }
    }

    /// Campus name taken from the building file's stem.
    fn campus_name(&self) -> String {
        self.nodes
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Scenario for CsvScenario {
    fn describe(&self) -> String {
        format!("{} and {}", self.nodes.display(), self.edges.display())
    }

    fn records(&self) -> Result<CampusRecords> {
        Ok(CampusRecords {
            name: self.campus_name(),
            buildings: read_buildings_file(&self.nodes)?,
            pathways: read_pathways_file(&self.edges)?,
        })
    }
}
