use crate::campus::map::Leg;
use crate::tui::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Padding, Paragraph, Row, Table};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(40)])
        .split(rows[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(body[1]);

    frame.render_widget(build_header(app), rows[0]);
    draw_building_list(frame, app, body[0]);
    frame.render_widget(build_summary(app), right[0]);
    frame.render_widget(build_route_table(app), right[1]);
    frame.render_widget(build_footer(), rows[2]);
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn titled(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![Span::from(title).style(bold())]))
        .padding(Padding::horizontal(1))
}

fn build_header(app: &'_ App) -> Block<'_> {
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Campus Paths ").style(bold().fg(Color::Cyan)),
            Span::raw("|").style(dim()),
            Span::raw(format!(" {} ", app.map().name())).style(bold()),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_footer() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::raw(" ↑/↓ ").style(bold()),
        Span::raw("move  ").style(dim()),
        Span::raw("Enter ").style(bold()),
        Span::raw("pick  ").style(dim()),
        Span::raw("c ").style(bold()),
        Span::raw("clear  ").style(dim()),
        Span::raw("q ").style(bold()),
        Span::raw("quit").style(dim()),
    ]))
}

fn draw_building_list(frame: &mut Frame, app: &App, area: Rect) {
    let items = app.buildings().iter().map(|building| {
        let (marker, style) = if Some(building) == app.origin() {
            ("A ", Style::default().fg(Color::Green))
        } else if Some(building) == app.destination() {
            ("B ", Style::default().fg(Color::Yellow))
        } else {
            ("  ", Style::default())
        };
        ListItem::new(Line::from(vec![
            Span::raw(marker).style(bold()),
            Span::raw(building.name().to_owned()),
        ]))
        .style(style)
    });

    let list = List::new(items)
        .block(titled(" Buildings "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    // offset is recomputed from the selection every frame
    let mut state = app.list_state.clone();
    frame.render_stateful_widget(list, area, &mut state);
}

fn build_summary(app: &'_ App) -> Paragraph<'_> {
    let lines = match (app.origin(), app.destination(), app.outcome()) {
        (Some(from), _, Some(Ok(route))) if route.is_trivial() => {
            vec![Line::from(format!("You are already at {}.", from))]
        }
        (Some(from), Some(to), Some(Ok(route))) => vec![
            Line::from(vec![
                Span::raw(from.to_string()).style(bold().fg(Color::Green)),
                Span::raw(" → ").style(dim()),
                Span::raw(to.to_string()).style(bold().fg(Color::Yellow)),
            ]),
            Line::from(vec![
                Span::raw(format!("{:.1}", route.total_cost())).style(bold()),
                Span::raw(format!(" over {}, heading ", legs_label(route.len()))).style(dim()),
                Span::raw(app.map().find_direction(from, to).to_string()).style(bold()),
            ]),
        ],
        (_, _, Some(Err(e))) => {
            vec![Line::from(Span::raw(e.to_string()).style(Style::default().fg(Color::Red)))]
        }
        (Some(from), _, _) => vec![Line::from(vec![
            Span::raw("From "),
            Span::raw(from.to_string()).style(bold().fg(Color::Green)),
            Span::raw(". Pick a destination.").style(dim()),
        ])],
        _ => vec![Line::from(
            Span::raw("Pick a starting building.").style(dim()),
        )],
    };

    Paragraph::new(lines).block(titled(" Route "))
}

fn legs_label(count: usize) -> String {
    match count {
        1 => "1 leg".to_string(),
        n => format!("{} legs", n),
    }
}

fn leg_row(step: usize, leg: &Leg) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!("{:>3}", step)),
        Cell::from(leg.from.to_string()),
        Cell::from(leg.to.to_string()),
        Cell::from(format!("{:>8.1}", leg.distance)),
        Cell::from(format!(" {}  {}", leg.heading.arrow(), leg.heading)).style(bold()),
    ])
}

fn build_route_table(app: &'_ App) -> Table<'_> {
    let legs = match app.outcome() {
        Some(Ok(route)) => app.map().legs(route),
        _ => Vec::new(),
    };

    Table::new(
        legs.iter()
            .enumerate()
            .map(|(i, leg)| leg_row(i + 1, leg))
            .collect::<Vec<Row>>(),
        [
            Constraint::Length(4),
            Constraint::Length(22),
            Constraint::Length(22),
            Constraint::Length(9),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new([
            Cell::from("  #"),
            Cell::from("From"),
            Cell::from("To"),
            Cell::from("Distance"),
            Cell::from("Heading"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(titled(" Legs "))
}
