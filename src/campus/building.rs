use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A place on the campus map.
///
/// Buildings with an empty name are pathway intersections: they take part in
/// routing but are never offered to users as a destination.
#[derive(Clone, Debug)]
pub struct Building {
    id: i32,
    name: String,
    x: i32,
    y: i32,
}

impl Building {
    pub fn new(name: impl Into<String>, id: i32, x: i32, y: i32) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn is_intersection(&self) -> bool {
        self.name.is_empty()
    }

    /// Straight-line distance in map units.
    pub fn distance_to(&self, other: &Building) -> f64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        ((dx * dx + dy * dy) as f64).sqrt()
    }
}

// Identity is id + name; coordinates are payload.
impl PartialEq for Building {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Building {}

impl Hash for Building {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.id.hash(state);
    }
}

impl Ord for Building {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Building {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_intersection() {
            write!(f, "intersection #{}", self.id)
        } else {
            f.write_str(&self.name)
        }
    }
}
