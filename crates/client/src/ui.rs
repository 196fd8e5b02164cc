//! Quadrant tile rendering.
//!
//! The logical 512-unit square board maps onto the terminal with the same
//! fit-to-shorter-edge rule the core specifies, with cell width doubled to
//! offset the roughly 2:1 glyph aspect. Slot order matches the logical
//! quadrant order: top-left, top-right, bottom-left, bottom-right.

use dice_content::TileSet;
use dice_core::{DICE_COUNT, DieValue, LOGICAL_SIZE, scale_factor};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Presentation state fed by runtime events.
pub struct ViewState {
    pub values: [DieValue; DICE_COUNT],
    /// Last announced result text; empty while rolling.
    pub result: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            values: [DieValue::Zero; DICE_COUNT],
            result: String::new(),
        }
    }
}

pub fn draw(frame: &mut Frame<'_>, tiles: &TileSet, view: &ViewState) {
    let [board_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let board = board_rect(board_area);
    let [top, bottom] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(board);
    let [slot0, slot1] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);
    let [slot2, slot3] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(bottom);

    for (slot, quad) in [slot0, slot1, slot2, slot3].into_iter().enumerate() {
        render_tile(frame, tiles, view.values[slot], quad);
    }

    let status = if view.result.is_empty() {
        "rolling...".to_owned()
    } else {
        format!("result: {}", view.result)
    };
    frame.render_widget(
        Line::from(format!("{status}   hold space to roll, q quits")),
        status_area,
    );
}

fn render_tile(frame: &mut Frame<'_>, tiles: &TileSet, value: DieValue, quad: Rect) {
    let sprite = tiles.sprite(value);

    // Vertically center the sprite inside the bordered quadrant.
    let inner_height = usize::from(quad.height.saturating_sub(2));
    let pad = inner_height.saturating_sub(sprite.height()) / 2;
    let mut lines: Vec<Line> = vec![Line::default(); pad];
    lines.extend(sprite.rows().iter().map(|row| Line::from(row.clone())));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(face_color(value)))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, quad);
}

fn face_color(value: DieValue) -> Color {
    match value {
        DieValue::Minus => Color::Red,
        DieValue::Zero => Color::Yellow,
        DieValue::Plus => Color::Green,
    }
}

/// Largest centered board rect fitting the area, two cells per logical
/// column pair. Follows the core scale rule: a square viewport half the
/// logical size renders the board at half scale.
fn board_rect(area: Rect) -> Rect {
    let scale = scale_factor(u32::from(area.width / 2), u32::from(area.height));
    let side = (f64::from(LOGICAL_SIZE) * scale) as u16;
    let width = side * 2;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(side)) / 2,
        width: width.min(area.width),
        height: side.min(area.height),
    }
}
