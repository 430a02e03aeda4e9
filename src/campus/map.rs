use crate::campus::building::Building;
use crate::campus::direction::Direction;
use crate::campus::records::CampusRecords;
use crate::error::{MapError, Result};
use crate::graph::graph::Graph;
use crate::graph::node::Node;
use crate::graph::route::{Route, shortest_route};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

/// One step of a route, with the heading a walker takes.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg<'a> {
    pub from: &'a Building,
    pub to: &'a Building,
    pub distance: f64,
    pub heading: Direction,
}

/// Walkable campus: buildings joined by pathways weighted with their length.
pub struct CampusMap {
    name: String,
    graph: Graph<Building, f64>,
    by_id: HashMap<i32, Building>,
    by_name: HashMap<String, Building>,
}

impl CampusMap {
    /// Builds the map from raw records.
    ///
    /// Every pathway is walkable both ways. Fails on a repeated building id
    /// or on a pathway naming an id no record defines.
    pub fn build(records: CampusRecords) -> Result<Self> {
        let mut buildings = HashMap::with_capacity(records.buildings.len());
        for record in records.buildings {
            let building = Building::new(record.name, record.id, record.x, record.y);
            if buildings.insert(record.id, building).is_some() {
                return Err(MapError::DuplicateBuildingId(record.id));
            }
        }

        let mut pathways: HashMap<Building, BTreeSet<i32>> = HashMap::new();
        for pathway in records.pathways {
            let endpoint = |id: i32| {
                buildings.get(&id).ok_or(MapError::DanglingPathway {
                    from: pathway.from,
                    to: pathway.to,
                    missing: id,
                })
            };
            let a = endpoint(pathway.from)?;
            let b = endpoint(pathway.to)?;
            pathways.entry(a.clone()).or_default().insert(pathway.to);
            pathways.entry(b.clone()).or_default().insert(pathway.from);
        }

        Self::from_adjacency(records.name, buildings, pathways)
    }

    /// Builds the map from buildings keyed by id and each building's set of
    /// adjacent ids. Edges are inserted exactly as listed, one direction per
    /// entry.
    ///
    /// Every adjacency key must be one of `buildings`. Distances come from the
    /// registered building, whatever coordinates the key carries.
    pub fn from_adjacency(
        name: impl Into<String>,
        buildings: HashMap<i32, Building>,
        pathways: HashMap<Building, BTreeSet<i32>>,
    ) -> Result<Self> {
        let mut graph = Graph::new();
        let mut by_name: HashMap<String, Building> = HashMap::new();

        for building in buildings.values() {
            graph.add_node(building.clone());
            if building.is_intersection() {
                continue;
            }
            match by_name.entry(building.name().to_string()) {
                Entry::Vacant(e) => {
                    e.insert(building.clone());
                }
                Entry::Occupied(mut e) => {
                    if building.id() < e.get().id() {
                        e.insert(building.clone());
                    }
                }
            }
        }

        for (source, neighbours) in &pathways {
            let registered = buildings
                .get(&source.id())
                .filter(|b| *b == source)
                .ok_or_else(|| MapError::UnregisteredBuilding(source.to_string()))?;
            for id in neighbours {
                let target = buildings.get(id).ok_or(MapError::DanglingPathway {
                    from: source.id(),
                    to: *id,
                    missing: *id,
                })?;
                graph.add_edge(
                    registered.clone(),
                    target.clone(),
                    registered.distance_to(target),
                );
            }
        }

        Ok(Self {
            name: name.into(),
            graph,
            by_id: buildings,
            by_name,
        })
    }

    /// Name of the university or campus the map describes.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph(&self) -> &Graph<Building, f64> {
        &self.graph
    }

    pub fn building_by_id(&self, id: i32) -> Result<&Building> {
        self.by_id
            .get(&id)
            .filter(|b| !b.is_intersection())
            .ok_or(MapError::UnknownBuildingId(id))
    }

    /// When several buildings share `name`, the lowest id answers.
    pub fn building_by_name(&self, name: &str) -> Result<&Building> {
        self.by_name
            .get(name)
            .ok_or_else(|| MapError::UnknownBuildingName(name.to_string()))
    }

    /// Named buildings sorted by name, one per name.
    pub fn all_buildings(&self) -> Vec<&Building> {
        let mut buildings: Vec<&Building> = self
            .graph
            .nodes()
            .map(Node::data)
            .filter(|b| !b.is_intersection())
            .collect();
        buildings.sort();
        buildings.dedup_by(|a, b| a.name() == b.name());
        buildings
    }

    /// Outgoing pathways of `building` with their lengths.
    pub fn neighbours(&self, building: &Building) -> Vec<(&Building, f64)> {
        self.graph
            .outgoing(building)
            .iter()
            .map(|(n, distance)| (n.data(), *distance))
            .collect()
    }

    /// Length of the direct pathway between two buildings.
    pub fn cost(&self, from: &Building, to: &Building) -> Result<f64> {
        self.graph
            .edge_label(from, to)
            .copied()
            .ok_or_else(|| MapError::MissingEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Shortest walk between two buildings. A building routed to itself
    /// gives a trivial route of length zero.
    pub fn find_route(&self, from: &Building, to: &Building) -> Result<Route<Building>> {
        self.ensure_on_map(from)?;
        self.ensure_on_map(to)?;
        let start = Node::new(from.clone());
        let dest = Node::new(to.clone());
        shortest_route(&start, &dest, &self.graph).ok_or_else(|| MapError::NoRouteExists {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// Path through the fewest pathways, ignoring their lengths.
    pub fn fewest_stops(&self, from: &Building, to: &Building) -> Result<Vec<Building>> {
        self.ensure_on_map(from)?;
        self.ensure_on_map(to)?;
        self.graph
            .find_path(from, to)
            .map(|path| path.into_iter().map(Node::into_data).collect())
            .ok_or_else(|| MapError::NoRouteExists {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    pub fn find_direction(&self, from: &Building, to: &Building) -> Direction {
        Direction::between(from.position(), to.position())
    }

    pub fn legs<'a>(&self, route: &'a Route<Building>) -> Vec<Leg<'a>> {
        route
            .edges()
            .iter()
            .map(|edge| {
                let (from, to) = (edge.source().data(), edge.target().data());
                Leg {
                    from,
                    to,
                    distance: *edge.label(),
                    heading: self.find_direction(from, to),
                }
            })
            .collect()
    }

    fn ensure_on_map(&self, building: &Building) -> Result<()> {
        if self.graph.contains_node(building) {
            Ok(())
        } else {
            Err(MapError::NotOnMap(building.to_string()))
        }
    }
}
