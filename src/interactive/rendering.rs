//! Board rendering and animation playback with ratatui

use std::thread;

use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::app::{App, InputMode};
use crate::core::{Coord, Tile};
use crate::engine::MoveEvent;

/// Character-cell footprint of one tile.
const CELL_W: u16 = 8;
const CELL_H: u16 = 4;

/// Main UI rendering function.
pub fn ui(f: &mut Frame, app: &App) {
    let (board_area, side_area) = split_areas(f.area(), app);

    render_board(f, app, board_area, None);
    render_side_panel(f, app, side_area);

    match app.input_mode {
        InputMode::WinPrompt => render_overlay(
            f,
            "...YOU WON!...",
            &["press c to continue", "press q to quit"],
            Color::Yellow,
        ),
        InputMode::GameOver => {
            render_overlay(f, "...YOU LOST...", &["press any key to quit"], Color::Red);
        }
        InputMode::Playing => {}
    }
}

/// Replay the last turn's events as interpolated frames.
///
/// One frame per character cell of the longest travel, with the configured
/// delay between frames. Spawned tiles appear near the end of the playback;
/// zero-distance moves contribute no frames.
pub fn play_events<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    if app.anim_rate.is_zero() {
        return Ok(());
    }

    let steps = app.last_events.iter().map(travel_cells).max().unwrap_or(0);
    for step in 1..=steps {
        terminal.draw(|f| {
            let (board_area, side_area) = split_areas(f.area(), app);
            render_board(f, app, board_area, Some((step, steps)));
            render_side_panel(f, app, side_area);
        })?;
        thread::sleep(app.anim_rate);
    }
    Ok(())
}

/// Playback length of one event in character cells.
fn travel_cells(event: &MoveEvent) -> u16 {
    match *event {
        MoveEvent::Moved { from, to, .. } | MoveEvent::Merged { from, to, .. } => {
            let dx = from.x.abs_diff(to.x) as u16 * CELL_W;
            let dy = from.y.abs_diff(to.y) as u16 * CELL_H;
            dx.max(dy)
        }
        MoveEvent::Spawned { .. } => 0,
    }
}

fn split_areas(area: Rect, app: &App) -> (Rect, Rect) {
    let board_width = app.game.grid().width() as u16 * CELL_W + 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(24)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the board; `anim` replaces the grid contents with the last turn's
/// events at interpolation step `step` of `steps`.
fn render_board(f: &mut Frame, app: &App, area: Rect, anim: Option<(u16, u16)>) {
    let block = Block::default()
        .title(" 2048 ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    match anim {
        None => {
            for (at, tile) in app.game.grid().tiles() {
                draw_tile(f, inner, app, tile, at.x as f64, at.y as f64);
            }
        }
        Some((step, steps)) => {
            let t = f64::from(step) / f64::from(steps);
            for event in &app.last_events {
                match *event {
                    MoveEvent::Moved { tile, from, to }
                    | MoveEvent::Merged { tile, from, to, .. } => {
                        let x = interpolate(from.x, to.x, t);
                        let y = interpolate(from.y, to.y, t);
                        draw_tile(f, inner, app, tile, x, y);
                    }
                    MoveEvent::Spawned { tile, at } => {
                        if step * 5 >= steps * 4 {
                            draw_tile(f, inner, app, tile, at.x as f64, at.y as f64);
                        }
                    }
                }
            }
        }
    }

    if app.debug {
        let marker = Rect {
            x: inner.x + app.inspect.x as u16 * CELL_W,
            y: inner.y + app.inspect.y as u16 * CELL_H,
            width: 1,
            height: 1,
        }
        .intersection(inner);
        f.render_widget(
            Paragraph::new("#").style(Style::default().fg(Color::Red)),
            marker,
        );
    }
}

fn interpolate(from: usize, to: usize, t: f64) -> f64 {
    let from = from as f64;
    let to = to as f64;
    from + (to - from) * t
}

fn draw_tile(f: &mut Frame, inner: Rect, app: &App, tile: Tile, x: f64, y: f64) {
    let rect = Rect {
        x: inner.x + (x * f64::from(CELL_W)).round() as u16,
        y: inner.y + (y * f64::from(CELL_H)).round() as u16,
        width: CELL_W,
        height: CELL_H,
    }
    .intersection(inner);
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let color = tile_color(tile.power(), app.game.win_power());
    let widget = Paragraph::new(tile.value().to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(widget, rect);
}

/// Color progression keyed by tile power; everything at or above the
/// winning power gets the distinct win color.
fn tile_color(power: u8, win_power: u8) -> Color {
    if power >= win_power {
        return Color::Yellow;
    }
    match power {
        1 => Color::White,
        2 => Color::Cyan,
        3 => Color::Blue,
        4 => Color::Magenta,
        5 => Color::Red,
        6 => Color::LightRed,
        _ => Color::LightYellow,
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    render_score_card(f, app, chunks[0]);
    render_help(f, chunks[1]);
    if app.debug {
        render_debug(f, app, chunks[2]);
    }
}

fn render_score_card(f: &mut Frame, app: &App, area: Rect) {
    let score = app.game.score();
    let lines = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                score.total().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("High:  {}", score.high())),
        Line::from(format!("Last:  +{}", score.last_delta())),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("h j k l / arrows  push"),
        Line::from("q                 quit"),
        Line::from("d                 debug"),
    ];

    let widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(widget, area);
}

fn render_debug(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.game.grid();
    let mut lines: Vec<Line> = (0..grid.height())
        .map(|y| {
            let row: Vec<String> = (0..grid.width())
                .map(|x| match grid.get(Coord::new(x, y)) {
                    Some(tile) => format!("{:>2}", tile.power()),
                    None => " .".to_string(),
                })
                .collect();
            Line::from(row.join(" "))
        })
        .collect();

    lines.push(Line::from(format!(
        "inspect {} (H/J/K/L, 1-9 injects)",
        app.inspect
    )));
    for event in &app.last_events {
        lines.push(Line::from(format!("{event:?}")));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Debug ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_overlay(f: &mut Frame, title: &str, lines: &[&str], color: Color) {
    let area = f.area();
    let height = lines.len() as u16 + 4;
    let width = 40.min(area.width);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
    .intersection(area);

    let mut text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    text.extend(lines.iter().map(|&line| Line::from(line)));

    let widget = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );

    f.render_widget(Clear, rect);
    f.render_widget(widget, rect);
}
