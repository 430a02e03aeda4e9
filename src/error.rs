use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MapError {
    #[error("no building with id {0}")]
    UnknownBuildingId(i32),
    #[error("no building named '{0}'")]
    UnknownBuildingName(String),
    #[error("building {0} is not on the map")]
    NotOnMap(String),
    #[error("no pathway leads from {from} to {to}")]
    MissingEdge { from: String, to: String },
    #[error("no route exists from {from} to {to}")]
    NoRouteExists { from: String, to: String },
    #[error("pathway {from} -> {to} references unknown building id {missing}")]
    DanglingPathway { from: i32, to: i32, missing: i32 },
    #[error("adjacency names {0}, which is not a registered building")]
    UnregisteredBuilding(String),
    #[error("a {columns}x{rows} grid does not fit on the map")]
    GridTooLarge { columns: usize, rows: usize },
    #[error("building id {0} is used by more than one record")]
    DuplicateBuildingId(i32),
    #[error("{source_name} line {line}: {reason}")]
    MalformedRecord {
        source_name: String,
        line: u64,
        reason: String,
    },
    #[error("could not read {path}: {source}")]
    ReadingFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Coarse classification callers branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    NoRouteExists,
    MalformedInput,
    Io,
}

impl MapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MapError::UnknownBuildingId(_)
            | MapError::UnknownBuildingName(_)
            | MapError::NotOnMap(_)
            | MapError::MissingEdge { .. } => ErrorKind::NotFound,
            MapError::NoRouteExists { .. } => ErrorKind::NoRouteExists,
            MapError::DanglingPathway { .. }
            | MapError::UnregisteredBuilding(_)
            | MapError::GridTooLarge { .. }
            | MapError::DuplicateBuildingId(_)
            | MapError::MalformedRecord { .. } => ErrorKind::MalformedInput,
            MapError::ReadingFile { .. } => ErrorKind::Io,
            MapError::Csv(e) if e.is_io_error() => ErrorKind::Io,
            MapError::Csv(_) => ErrorKind::MalformedInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(ErrorKind::NotFound, MapError::UnknownBuildingId(4).kind());
        assert_eq!(
            ErrorKind::NoRouteExists,
            MapError::NoRouteExists {
                from: "a".into(),
                to: "b".into()
            }
            .kind()
        );
        assert_eq!(
            ErrorKind::MalformedInput,
            MapError::DanglingPathway {
                from: 1,
                to: 9,
                missing: 9
            }
            .kind()
        );
    }

    #[test]
    fn test_messages_name_the_culprit() {
        let e = MapError::MalformedRecord {
            source_name: "nodes.csv".into(),
            line: 3,
            reason: "expected 4 fields, found 2".into(),
        };
        assert_eq!("nodes.csv line 3: expected 4 fields, found 2", e.to_string());
        assert_eq!(
            "no building named 'Gym'",
            MapError::UnknownBuildingName("Gym".into()).to_string()
        );
    }
}
