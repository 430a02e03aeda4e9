use crate::campus::records::{BuildingRecord, CampusRecords, PathwayRecord};
use crate::error::Result;
use crate::scenario::scenario::Scenario;
use log::debug;

/// Small fixed campus, handy for demos and tests.
pub struct BasicScenario;

impl Scenario for BasicScenario {
    fn describe(&self) -> String {
        "built-in demo campus".to_string()
    }

    fn records(&self) -> Result<CampusRecords> {
        let buildings = vec![
            BuildingRecord::new("Library", 1, 100, 100),
            BuildingRecord::new("Student Union", 2, 300, 100),
            BuildingRecord::new("Science Hall", 3, 500, 120),
            BuildingRecord::new("Gymnasium", 4, 520, 380),
            BuildingRecord::new("Dining Hall", 5, 280, 400),
            BuildingRecord::new("Admissions", 6, 80, 360),
            BuildingRecord::new("Observatory", 7, 700, 60),
            BuildingRecord::new("", 10, 300, 250),
            BuildingRecord::new("", 11, 500, 250),
            BuildingRecord::new("", 12, 100, 250),
        ];

        let pathways = [
            (1, 2),
            (2, 3),
            (3, 7),
            (1, 12),
            (12, 6),
            (12, 10),
            (10, 2),
            (10, 5),
            (10, 11),
            (11, 3),
            (11, 4),
            (5, 4),
            (6, 5),
        ]
        .into_iter()
        .map(|(a, b)| PathwayRecord::new(a, b))
        .collect::<Vec<PathwayRecord>>();

        debug!(
            "demo campus has {} buildings and {} pathways",
            buildings.len(),
            pathways.len()
        );

        Ok(CampusRecords {
            name: "Riverside College".into(),
            buildings,
            pathways,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::direction::Direction;
    use approx::assert_relative_eq;

    #[test]
    fn test_demo_campus_routes() {
        let map = BasicScenario.build().unwrap();
        assert_eq!("Riverside College", map.name());
        assert_eq!(7, map.all_buildings().len());

        let library = map.building_by_name("Library").unwrap();
        let gym = map.building_by_name("Gymnasium").unwrap();

        // Library → Student Union → Science Hall → #11 → Gymnasium
        let route = map.find_route(library, gym).unwrap();
        let ids: Vec<i32> = route.nodes().map(|n| n.data().id()).collect();
        assert_eq!(vec![1, 2, 3, 11, 4], ids);
        assert_relative_eq!(
            200.0 + 40400f64.sqrt() + 130.0 + 17300f64.sqrt(),
            route.total_cost(),
            epsilon = 1e-9
        );
        assert_eq!(Direction::SouthEast, map.find_direction(library, gym));
    }

    #[test]
    fn test_every_building_reachable() {
        let map = BasicScenario.build().unwrap();
        let buildings = map.all_buildings();
        for from in &buildings {
            for to in &buildings {
                assert!(map.find_route(from, to).is_ok(), "{from} -> {to}");
            }
        }
    }
}
