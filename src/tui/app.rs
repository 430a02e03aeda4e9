use crate::campus::building::Building;
use crate::campus::map::CampusMap;
use crate::error::MapError;
use crate::graph::route::Route;
use crossterm::event::KeyCode;
use log::{debug, info};
use ratatui::widgets::ListState;

pub struct App {
    map: CampusMap,
    buildings: Vec<Building>,
    pub list_state: ListState,
    pub running: bool,
    origin: Option<usize>,
    destination: Option<usize>,
    outcome: Option<Result<Route<Building>, MapError>>,
}

impl App {
    pub fn new(map: CampusMap) -> Self {
        let buildings: Vec<Building> = map.all_buildings().into_iter().cloned().collect();
        let selected = if buildings.is_empty() { None } else { Some(0) };
        Self {
            map,
            buildings,
            list_state: ListState::default().with_selected(selected),
            running: true,
            origin: None,
            destination: None,
            outcome: None,
        }
    }

    pub fn map(&self) -> &CampusMap {
        &self.map
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn origin(&self) -> Option<&Building> {
        self.origin.map(|i| &self.buildings[i])
    }

    pub fn destination(&self) -> Option<&Building> {
        self.destination.map(|i| &self.buildings[i])
    }

    pub fn outcome(&self) -> Option<&Result<Route<Building>, MapError>> {
        self.outcome.as_ref()
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Enter => self.choose(),
            KeyCode::Char('c') => self.clear(),
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.buildings.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.list_state.select(Some(next));
    }

    /// First pick sets the origin, the second the destination and computes
    /// the route. A third pick starts over from the new origin.
    fn choose(&mut self) {
        let Some(selected) = self.list_state.selected() else {
            return;
        };
        match (self.origin, self.destination) {
            (Some(origin), None) => {
                self.destination = Some(selected);
                let (from, to) = (&self.buildings[origin], &self.buildings[selected]);
                let outcome = self.map.find_route(from, to);
                match &outcome {
                    Ok(route) => info!(
                        "route {} -> {}: {} legs, {:.1}",
                        from,
                        to,
                        route.len(),
                        route.total_cost()
                    ),
                    Err(e) => info!("route {} -> {} failed: {}", from, to, e),
                }
                self.outcome = Some(outcome);
            }
            _ => {
                self.clear();
                self.origin = Some(selected);
                debug!("origin set to {}", self.buildings[selected]);
            }
        }
    }

    fn clear(&mut self) {
        self.origin = None;
        self.destination = None;
        self.outcome = None;
    }
}
