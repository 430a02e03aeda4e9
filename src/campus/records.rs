/// Raw building row: `name,id,x,y`. An empty name marks an intersection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildingRecord {
    pub name: String,
    pub id: i32,
    pub x: i32,
    pub y: i32,
}

impl BuildingRecord {
    pub fn new(name: impl Into<String>, id: i32, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            id,
            x,
            y,
        }
    }
}

/// Undirected pathway between two building ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathwayRecord {
    pub from: i32,
    pub to: i32,
}

impl PathwayRecord {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }
}

/// Everything needed to build a campus map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampusRecords {
    pub name: String,
    pub buildings: Vec<BuildingRecord>,
    pub pathways: Vec<PathwayRecord>,
}
