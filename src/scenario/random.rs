use crate::campus::records::{BuildingRecord, CampusRecords, PathwayRecord};
use crate::error::{MapError, Result};
use crate::scenario::scenario::Scenario;
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;

const SPACING: i32 = 100;
const JITTER: i32 = 30;
const KINDS: [&str; 8] = [
    "Hall", "Lab", "Annex", "Tower", "Library", "Studio", "Center", "Pavilion",
];

/// Campus laid out on a jittered grid. The same seed always yields the same
/// campus, and every cell is reachable from every other.
pub struct RandomScenario {
    seed: u64,
    columns: usize,
    rows: usize,
}

impl RandomScenario {
    pub fn new(seed: u64, columns: usize, rows: usize) -> Self {
        Self {
            seed,
            columns,
            rows,
        }
    }

    /// Number of cells, when every id and coordinate fits in an `i32`.
    fn cell_count(&self) -> Result<usize> {
        let too_large = || MapError::GridTooLarge {
            columns: self.columns,
            rows: self.rows,
        };
        let count = self
            .columns
            .checked_mul(self.rows)
            .filter(|count| i32::try_from(*count).is_ok())
            .ok_or_else(too_large)?;
        i32::try_from(self.columns.max(self.rows))
            .ok()
            .and_then(|side| side.checked_mul(SPACING))
            .and_then(|extent| extent.checked_add(JITTER))
            .ok_or_else(too_large)?;
        Ok(count)
    }

    fn grid_neighbours(&self, cell: usize) -> Vec<usize> {
        let (col, row) = (cell % self.columns, cell / self.columns);
        let mut out = Vec::with_capacity(4);
        if col > 0 {
            out.push(cell - 1);
        }
        if col + 1 < self.columns {
            out.push(cell + 1);
        }
        if row > 0 {
            out.push(cell - self.columns);
        }
        if row + 1 < self.rows {
            out.push(cell + self.columns);
        }
        out
    }
}

impl Scenario for RandomScenario {
    fn describe(&self) -> String {
        format!(
            "random {}x{} campus (seed {})",
            self.columns, self.rows, self.seed
        )
    }

    fn records(&self) -> Result<CampusRecords> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let count = self.cell_count()?;
        let id = |cell: usize| cell as i32 + 1;

        let buildings = (0..count)
            .map(|cell| {
                let (col, row) = ((cell % self.columns) as i32, (cell / self.columns) as i32);
                let x = col * SPACING + rng.gen_range(-JITTER..=JITTER);
                let y = row * SPACING + rng.gen_range(-JITTER..=JITTER);
                let name = if rng.gen_bool(0.6) {
                    format!("{} {}", KINDS[rng.gen_range(0..KINDS.len())], id(cell))
                } else {
                    String::new()
                };
                BuildingRecord::new(name, id(cell), x, y)
            })
            .collect::<Vec<BuildingRecord>>();

        let mut linked: HashSet<(usize, usize)> = HashSet::new();
        let mut pathways = Vec::new();
        let mut add_pathway = |a: usize, b: usize| {
            if linked.insert((a.min(b), a.max(b))) {
                pathways.push(PathwayRecord::new(id(a), id(b)));
            }
        };

        if count > 0 {
            let mut reachable = vec![false; count];
            reachable[0] = true;
            let mut frontier = vec![0];
            while !frontier.is_empty() {
                let slot = rng.gen_range(0..frontier.len());
                let from = frontier[slot];
                let open = self
                    .grid_neighbours(from)
                    .into_iter()
                    .filter(|n| !reachable[*n])
                    .collect::<Vec<usize>>();
                if open.is_empty() {
                    frontier.swap_remove(slot);
                    continue;
                }
                let to = open[rng.gen_range(0..open.len())];
                add_pathway(from, to);
                reachable[to] = true;
                frontier.push(to);
            }

            for _ in 0..count / 2 {
                let from = rng.gen_range(0..count);
                let neighbours = self.grid_neighbours(from);
                if let Some(to) = neighbours.get(rng.gen_range(0..neighbours.len().max(1))) {
                    add_pathway(from, *to);
                }
            }
        }

        debug!(
            "generated {} buildings and {} pathways from seed {}",
            buildings.len(),
            pathways.len(),
            self.seed
        );

        Ok(CampusRecords {
            name: format!("Random Campus #{}", self.seed),
            buildings,
            pathways,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_same_seed_same_campus() {
        let a = RandomScenario::new(7, 6, 4).records().unwrap();
        let b = RandomScenario::new(7, 6, 4).records().unwrap();
        let c = RandomScenario::new(8, 6, 4).records().unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(24, a.buildings.len());
        // spanning pathways alone connect 24 cells
        assert!(a.pathways.len() >= 23);
    }

    #[test]
    fn test_random_campus_connected() {
        let map = RandomScenario::new(42, 5, 5).build().unwrap();
        let graph = map.graph();
        let first = map.graph().nodes().next().unwrap().data();

        for node in graph.nodes() {
            assert!(graph.find_path(first, node.data()).is_some());
            assert!(map.find_route(node.data(), first).is_ok());
        }
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let err = RandomScenario::new(1, usize::MAX, 2).records().unwrap_err();
        assert!(matches!(err, MapError::GridTooLarge { rows: 2, .. }));

        // cell count fits, coordinates would not
        let err = RandomScenario::new(1, 50_000_000, 1).records().unwrap_err();
        assert_eq!(ErrorKind::MalformedInput, err.kind());
    }

    #[test]
    fn test_empty_grid() {
        let records = RandomScenario::new(1, 0, 3).records().unwrap();
        assert!(records.buildings.is_empty());
        assert!(records.pathways.is_empty());
        assert!(RandomScenario::new(1, 0, 3).build().is_ok());
    }
}
