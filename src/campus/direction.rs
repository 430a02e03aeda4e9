use std::fmt;

/// One of eight 45° compass sectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    const CLOCKWISE: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Sector of a bearing measured clockwise from north.
    ///
    /// Each sector is centred on its heading and owns its lower boundary, so
    /// 22.5° is already `NorthEast` and 337.5° is `North` again.
    pub fn from_bearing(degrees: f64) -> Self {
        let degrees = degrees.rem_euclid(360.0);
        let sector = ((degrees + 22.5) / 45.0).floor() as usize % 8;
        Self::CLOCKWISE[sector]
    }

    pub fn between(from: (i32, i32), to: (i32, i32)) -> Self {
        Self::from_bearing(bearing(from, to))
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::North => "↑",
            Direction::NorthEast => "↗",
            Direction::East => "→",
            Direction::SouthEast => "↘",
            Direction::South => "↓",
            Direction::SouthWest => "↙",
            Direction::West => "←",
            Direction::NorthWest => "↖",
        }
    }
}

/// Bearing from `from` to `to` in degrees in `[0, 360)`, clockwise from
/// north. Map y coordinates grow southwards.
pub fn bearing(from: (i32, i32), to: (i32, i32)) -> f64 {
    let dx = f64::from(to.0) - f64::from(from.0);
    let dy = f64::from(to.1) - f64::from(from.1);
    (dy.atan2(dx).to_degrees() - 270.0).rem_euclid(360.0)
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::NorthEast => "NorthEast",
            Direction::East => "East",
            Direction::SouthEast => "SouthEast",
            Direction::South => "South",
            Direction::SouthWest => "SouthWest",
            Direction::West => "West",
            Direction::NorthWest => "NorthWest",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compass_points() {
        let origin = (10, 10);
        assert_eq!(Direction::North, Direction::between(origin, (10, 0)));
        assert_eq!(Direction::NorthEast, Direction::between(origin, (20, 0)));
        assert_eq!(Direction::East, Direction::between(origin, (20, 10)));
        assert_eq!(Direction::SouthEast, Direction::between(origin, (20, 20)));
        assert_eq!(Direction::South, Direction::between(origin, (10, 20)));
        assert_eq!(Direction::SouthWest, Direction::between(origin, (0, 20)));
        assert_eq!(Direction::West, Direction::between(origin, (0, 10)));
        assert_eq!(Direction::NorthWest, Direction::between(origin, (0, 0)));
    }

    #[test]
    fn test_bearing_normalized() {
        assert_relative_eq!(0.0, bearing((0, 0), (0, -5)), epsilon = 1e-9);
        assert_relative_eq!(90.0, bearing((0, 0), (5, 0)), epsilon = 1e-9);
        assert_relative_eq!(270.0, bearing((0, 0), (-5, 0)), epsilon = 1e-9);
        assert_relative_eq!(315.0, bearing((0, 0), (-5, -5)), epsilon = 1e-9);
        for target in [(-3, -7), (-7, -3), (-1, -100)] {
            let b = bearing((0, 0), target);
            assert!((0.0..360.0).contains(&b), "{b} out of range");
        }
    }

    #[test]
    fn test_sector_boundaries_are_inclusive_lower_bounds() {
        let boundaries = [
            (22.5, Direction::NorthEast),
            (67.5, Direction::East),
            (112.5, Direction::SouthEast),
            (157.5, Direction::South),
            (202.5, Direction::SouthWest),
            (247.5, Direction::West),
            (292.5, Direction::NorthWest),
            (337.5, Direction::North),
        ];
        for (degrees, expected) in boundaries {
            assert_eq!(expected, Direction::from_bearing(degrees), "at {degrees}");
        }

        let just_below = [
            (22.4, Direction::North),
            (67.4, Direction::NorthEast),
            (112.4, Direction::East),
            (157.4, Direction::SouthEast),
            (202.4, Direction::South),
            (247.4, Direction::SouthWest),
            (292.4, Direction::West),
            (337.4, Direction::NorthWest),
        ];
        for (degrees, expected) in just_below {
            assert_eq!(expected, Direction::from_bearing(degrees), "at {degrees}");
        }
    }

    #[test]
    fn test_bearing_outside_range_wraps() {
        assert_eq!(Direction::North, Direction::from_bearing(360.0));
        assert_eq!(Direction::NorthWest, Direction::from_bearing(-45.0));
        assert_eq!(Direction::East, Direction::from_bearing(450.0));
    }

    #[test]
    fn test_display_names() {
        assert_eq!("NorthEast", Direction::NorthEast.to_string());
        assert_eq!("South", Direction::South.to_string());
    }
}
