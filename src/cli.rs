use crate::campus::building::Building;
use crate::campus::map::CampusMap;
use crate::error::Result;
use crate::scenario::basic::BasicScenario;
use crate::scenario::csv_files::CsvScenario;
use crate::scenario::random::RandomScenario;
use crate::scenario::scenario::Scenario;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

const MAX_GRID_SIDE: i64 = 500;

#[derive(Parser, Debug)]
#[command(
    name = "campuspath",
    version,
    about = "Find walking routes between campus buildings",
    after_help = "\
Buildings are addressed by id or by name.

Examples:
  campuspath --nodes data/campus_nodes.csv --edges data/campus_edges.csv
  campuspath route Library Gymnasium
  campuspath --seed 7 list
"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Building records, CSV rows of `name,id,x,y`
    #[arg(long, value_name = "FILE", requires = "edges")]
    pub nodes: Option<PathBuf>,

    /// Pathway records, CSV rows of `id1,id2`
    #[arg(long, value_name = "FILE", requires = "nodes")]
    pub edges: Option<PathBuf>,

    /// Generate a random campus from this seed instead
    #[arg(long, conflicts_with = "nodes")]
    pub seed: Option<u64>,

    /// Columns of the random campus grid
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..=MAX_GRID_SIDE))]
    pub columns: u16,

    /// Rows of the random campus grid
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..=MAX_GRID_SIDE))]
    pub rows: u16,

    /// Write log messages to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// Browse buildings and routes interactively (default)
    Explore,
    /// Print the shortest walk between two buildings
    Route {
        from: String,
        to: String,
        /// Minimise the number of pathways instead of the distance
        #[arg(long)]
        fewest_stops: bool,
    },
    /// Print the compass direction from one building to another
    Direction { from: String, to: String },
    /// List all buildings
    List,
    /// Show a building and the pathways leaving it
    Show { building: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> LevelFilter {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Explore)
    }

    pub fn scenario(&self) -> Box<dyn Scenario> {
        match (&self.nodes, &self.edges, self.seed) {
            (Some(nodes), Some(edges), _) => Box::new(CsvScenario::new(nodes, edges)),
            (_, _, Some(seed)) => Box::new(RandomScenario::new(
                seed,
                usize::from(self.columns),
                usize::from(self.rows),
            )),
            _ => Box::new(BasicScenario),
        }
    }

    /// The terminal belongs to the explorer, so without a log file it logs
    /// nowhere. One-shot commands log to stderr.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        let level = LevelFilter::from(self.log_level);
        match &self.log_file {
            Some(path) => WriteLogger::init(level, Config::default(), File::create(path)?)?,
            None if self.command() == Command::Explore => {}
            None => TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?,
        }
        Ok(())
    }
}

/// Looks a building up by numeric id first, then by name.
pub fn resolve<'a>(map: &'a CampusMap, query: &str) -> Result<&'a Building> {
    match query.trim().parse::<i32>() {
        Ok(id) => map.building_by_id(id),
        Err(_) => map.building_by_name(query.trim()),
    }
}

/// Runs a one-shot command, printing to `out`.
pub fn run(map: &CampusMap, command: &Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Explore => {}
        Command::Route {
            from,
            to,
            fewest_stops: false,
        } => {
            let (from, to) = (resolve(map, from)?, resolve(map, to)?);
            let route = map.find_route(from, to)?;
            if route.is_trivial() {
                writeln!(out, "You are already at {}.", from)?;
                return Ok(());
            }
            writeln!(out, "Route from {} to {}:", from, to)?;
            for leg in map.legs(&route) {
                writeln!(
                    out,
                    "  {:<10} {:>8.1}  {} -> {}",
                    leg.heading.to_string(),
                    leg.distance,
                    leg.from,
                    leg.to
                )?;
            }
            writeln!(out, "Total distance: {:.1}", route.total_cost())?;
        }
        Command::Route {
            from,
            to,
            fewest_stops: true,
        } => {
            let (from, to) = (resolve(map, from)?, resolve(map, to)?);
            let stops = map.fewest_stops(from, to)?;
            writeln!(
                out,
                "{} stops from {} to {}:",
                stops.len().saturating_sub(1),
                from,
                to
            )?;
            for stop in &stops {
                writeln!(out, "  {}", stop)?;
            }
        }
        Command::Direction { from, to } => {
            let (from, to) = (resolve(map, from)?, resolve(map, to)?);
            writeln!(
                out,
                "{} lies {} of {}.",
                to,
                map.find_direction(from, to),
                from
            )?;
        }
        Command::List => {
            writeln!(out, "{}", map.name())?;
            for building in map.all_buildings() {
                writeln!(out, "  {:>5}  {}", building.id(), building)?;
            }
        }
        Command::Show { building } => {
            let building = resolve(map, building)?;
            writeln!(
                out,
                "{} (id {}) at ({}, {})",
                building,
                building.id(),
                building.x(),
                building.y()
            )?;
            for (neighbour, distance) in map.neighbours(building) {
                let kind = if neighbour.is_intersection() {
                    "intersection"
                } else {
                    "building"
                };
                writeln!(
                    out,
                    "  {:<12} {:>5}  {:>8.1}  {}",
                    kind,
                    neighbour.id(),
                    distance,
                    neighbour
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, MapError};

    fn output(map: &CampusMap, command: Command) -> String {
        let mut out = Vec::new();
        run(map, &command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["campuspath"]).unwrap();
        assert_eq!(Command::Explore, cli.command());
        assert_eq!(LogLevel::Info, cli.log_level);
        assert!(cli.scenario().describe().contains("demo"));
    }

    #[test]
    fn test_parse_sources() {
        let cli = Cli::try_parse_from(["campuspath", "--seed", "3", "--columns", "4", "list"]).unwrap();
        assert_eq!(Command::List, cli.command());
        assert_eq!("random 4x6 campus (seed 3)", cli.scenario().describe());

        let cli = Cli::try_parse_from([
            "campuspath",
            "--nodes",
            "n.csv",
            "--edges",
            "e.csv",
            "route",
            "Library",
            "7",
            "--fewest-stops",
        ])
        .unwrap();
        assert_eq!("n.csv and e.csv", cli.scenario().describe());
        assert_eq!(
            Command::Route {
                from: "Library".into(),
                to: "7".into(),
                fewest_stops: true
            },
            cli.command()
        );

        assert!(Cli::try_parse_from(["campuspath", "--nodes", "n.csv"]).is_err());
        assert!(Cli::try_parse_from(["campuspath", "--seed", "1", "--columns", "0"]).is_err());
        assert!(Cli::try_parse_from(["campuspath", "--seed", "1", "--rows", "501"]).is_err());
        assert!(Cli::try_parse_from(["campuspath", "--seed", "1", "--rows", "500"]).is_ok());
        assert!(
            Cli::try_parse_from(["campuspath", "--nodes", "n", "--edges", "e", "--seed", "1"])
                .is_err()
        );
    }

    #[test]
    fn test_resolve_by_id_or_name() {
        let map = BasicScenario.build().unwrap();
        assert_eq!("Library", resolve(&map, "1").unwrap().name());
        assert_eq!(3, resolve(&map, " Science Hall ").unwrap().id());
        let err = resolve(&map, "10").unwrap_err();
        assert!(matches!(err, MapError::UnknownBuildingId(10)));
        assert_eq!(ErrorKind::NotFound, resolve(&map, "Pool").unwrap_err().kind());
    }

    #[test]
    fn test_route_output() {
        let map = BasicScenario.build().unwrap();
        let text = output(
            &map,
            Command::Route {
                from: "Library".into(),
                to: "Student Union".into(),
                fewest_stops: false,
            },
        );
        assert_eq!(
            "Route from Library to Student Union:\n  East          200.0  Library -> Student Union\nTotal distance: 200.0\n",
            text
        );

        let text = output(
            &map,
            Command::Route {
                from: "2".into(),
                to: "2".into(),
                fewest_stops: false,
            },
        );
        assert_eq!("You are already at Student Union.\n", text);
    }

    #[test]
    fn test_fewest_stops_output() {
        let map = BasicScenario.build().unwrap();
        let text = output(
            &map,
            Command::Route {
                from: "Admissions".into(),
                to: "Library".into(),
                fewest_stops: true,
            },
        );
        assert_eq!(
            "2 stops from Admissions to Library:\n  Admissions\n  intersection #12\n  Library\n",
            text
        );
    }

    #[test]
    fn test_direction_and_list_output() {
        let map = BasicScenario.build().unwrap();
        let text = output(
            &map,
            Command::Direction {
                from: "Library".into(),
                to: "Admissions".into(),
            },
        );
        assert_eq!("Admissions lies South of Library.\n", text);

        let text = output(&map, Command::List);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!("Riverside College", lines[0]);
        assert_eq!("      6  Admissions", lines[1]);
        assert_eq!(8, lines.len());
    }

    #[test]
    fn test_show_output() {
        let map = BasicScenario.build().unwrap();
        let text = output(
            &map,
            Command::Show {
                building: "Observatory".into(),
            },
        );
        assert_eq!(
            format!(
                "Observatory (id 7) at (700, 60)\n  building         3  {:>8.1}  Science Hall\n",
                (200f64 * 200.0 + 60.0 * 60.0).sqrt()
            ),
            text
        );
    }

    #[test]
    fn test_errors_propagate() {
        let map = BasicScenario.build().unwrap();
        let mut out = Vec::new();
        let err = run(
            &map,
            &Command::Show {
                building: "Nowhere".into(),
            },
            &mut out,
        )
        .unwrap_err();
        assert_eq!("no building named 'Nowhere'", err.to_string());
    }
}
