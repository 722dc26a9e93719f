//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Coordinate, GameView, MarkerValue, PlayerId};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

const HELP: &str = "arrows move | enter play | 1-9 cell | click cell | r new game | q quit";

/// Renders the whole screen and returns where each cell was drawn.
pub fn draw(
    frame: &mut Frame,
    view: &GameView,
    cursor: Coordinate,
    status: &str,
) -> Vec<(Coordinate, Rect)> {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(board_height(view)),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let [first, second] = view.players();
    let title = Paragraph::new(format!(
        "Tic Tac Toe: {} ({}) vs {} ({})",
        first.name(),
        first.marker(),
        second.name(),
        second.marker()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cells = draw_board(frame, chunks[1], view, cursor);

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    cells
}

fn board_width(view: &GameView) -> u16 {
    let columns = view.board().columns() as u16;
    columns * CELL_WIDTH + columns.saturating_sub(1)
}

fn board_height(view: &GameView) -> u16 {
    let rows = view.board().rows() as u16;
    rows * CELL_HEIGHT + rows.saturating_sub(1)
}

/// Alternates cell-sized slots with one-cell separators.
fn interleaved(count: usize, size: u16) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(count * 2);
    for i in 0..count {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(size));
    }
    constraints
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Coordinate,
) -> Vec<(Coordinate, Rect)> {
    let board = view.board();
    let board_area = center_rect(area, board_width(view), board_height(view));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(interleaved(board.rows(), CELL_HEIGHT))
        .split(board_area);

    let mut cells = Vec::with_capacity(board.rows() * board.columns());
    for (r, row) in board.grid().enumerate() {
        if r > 0 {
            draw_separator(frame, rows[2 * r - 1]);
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(interleaved(board.columns(), CELL_WIDTH))
            .split(rows[2 * r]);

        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                draw_separator_vertical(frame, cols[2 * c - 1]);
            }
            let at = Coordinate::new(r, c);
            let number = r * board.columns() + c + 1;
            draw_cell(frame, cols[2 * c], view, cell, at, number, at == cursor);
            cells.push((at, cols[2 * c]));
        }
    }
    cells
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cell: &Cell,
    at: Coordinate,
    number: usize,
    under_cursor: bool,
) {
    let (symbol, base_style) = match (cell.marker(), cell.owner()) {
        (MarkerValue::Placed(marker), Some(PlayerId::First)) => (
            marker.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        (MarkerValue::Placed(marker), _) => (
            marker.to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        (MarkerValue::Empty, _) => (number.to_string(), Style::default().fg(Color::DarkGray)),
    };

    let winning = view
        .outcome()
        .winning_line()
        .is_some_and(|line| line.contains(at));

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let mut lines = vec![Line::from(""); (area.height / 2) as usize];
    lines.push(Line::from(Span::styled(symbol, style)));

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
