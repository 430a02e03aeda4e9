use anyhow::Context;
use campuspath::campus::map::CampusMap;
use campuspath::cli::{self, Cli, Command};
use campuspath::tui::app::App;
use campuspath::tui::draw::draw_app;
use clap::Parser;
use crossterm::event::{Event, KeyEventKind};
use log::info;
use ratatui::DefaultTerminal;
use std::io;
use std::time::Duration;

fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    while app.running {
        terminal.draw(|frame| draw_app(frame, app))?;

        if crossterm::event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = crossterm::event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
    Ok(())
}

fn explore(map: CampusMap) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let mut app = App::new(map);
    let result = run_app(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;

    let scenario = cli.scenario();
    let map = scenario
        .build()
        .with_context(|| format!("failed to load {}", scenario.describe()))?;
    info!(
        "loaded {} from {}: {} buildings, {} pathways",
        map.name(),
        scenario.describe(),
        map.graph().node_count(),
        map.graph().edge_count()
    );

    match cli.command() {
        Command::Explore => explore(map)?,
        command => cli::run(&map, &command, &mut io::stdout().lock())?,
    }
    Ok(())
}
