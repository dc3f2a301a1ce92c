//! Stateless UI rendering for noughts and crosses.

use crate::game::View;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_noughts::{Board, Mark};

const HEADER_HEIGHT: u16 = 9;
const MESSAGE_HEIGHT: u16 = 3;
const MIN_WIDTH: u16 = 68;
const BOARD_GAP: u16 = 9;

/// Smallest terminal (columns, rows) that fits a board of side `size`.
pub fn required_area(size: usize) -> (u16, u16) {
    let board_width = grid_width(size);
    let width = MIN_WIDTH.max(2 * board_width + BOARD_GAP + 4);
    let height = HEADER_HEIGHT + grid_height(size) + MESSAGE_HEIGHT;
    (width, height)
}

/// Renders instructions, the play board next to a numbered reference board,
/// and the prompt.
pub fn draw(frame: &mut Frame, view: &View<'_>) {
    let size = view.board.size();
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(grid_height(size)),
        Constraint::Length(MESSAGE_HEIGHT),
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], size);
    draw_boards(frame, chunks[1], view);

    let status = Paragraph::new(view.message.to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_header(frame: &mut Frame, area: Rect, size: usize) {
    let (width, height) = required_area(size);
    let text = vec![
        Line::from(""),
        Line::from("Place your symbols on the left board using the corresponding"),
        Line::from("cell numbers on the right board, or move with the arrow keys"),
        Line::from("and press Enter"),
        Line::from(""),
        Line::from("Press Q in a game to end it early and outside of a game to quit"),
        Line::from(format!("Keep the terminal size at least {width}x{height}")),
    ];

    let header = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Minimax with Alpha-Beta Pruning (Noughts and Crosses) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(header, area);
}

fn draw_boards(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let board = view.board;
    let width = grid_width(board.size());
    let cols = Layout::horizontal([
        Constraint::Length(width),
        Constraint::Length(BOARD_GAP),
        Constraint::Length(width),
    ])
    .flex(Flex::Center)
    .split(area);

    let play = grid_lines(board, |index| {
        let (symbol, style) = match board.get_cell(index).mark() {
            None => (' ', Style::default().fg(Color::DarkGray)),
            Some(mark) => {
                let colour = match mark {
                    Mark::Cross => Color::Blue,
                    Mark::Nought => Color::Red,
                };
                (
                    mark.symbol(),
                    Style::default().fg(colour).add_modifier(Modifier::BOLD),
                )
            }
        };
        let style = if index == view.cursor {
            style.bg(Color::White).fg(Color::Black)
        } else {
            style
        };
        Span::styled(format!(" {symbol} "), style)
    });

    let reference = grid_lines(board, |index| {
        Span::styled(format!("{index:^3}"), Style::default().fg(Color::DarkGray))
    });

    frame.render_widget(Paragraph::new(play), cols[0]);
    frame.render_widget(Paragraph::new(reference), cols[2]);
}

/// Draws `-----` separated rows of `| a | b | c |` with `cell` filling each slot.
fn grid_lines<'a>(board: &Board, cell: impl Fn(usize) -> Span<'a>) -> Vec<Line<'a>> {
    let size = board.size();
    let separator = "-".repeat(usize::from(grid_width(size)));
    let border = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::styled(separator.clone(), border)];
    for row in 0..size {
        let mut spans = vec![Span::styled("|", border)];
        for col in 0..size {
            spans.push(cell(row * size + col));
            spans.push(Span::styled("|", border));
        }
        lines.push(Line::from(spans));
        lines.push(Line::styled(separator.clone(), border));
    }
    lines
}

fn grid_width(size: usize) -> u16 {
    // sizes are capped by Board::MAX_SIZE so this cannot truncate
    (4 * size + 1) as u16
}

fn grid_height(size: usize) -> u16 {
    (2 * size + 1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Message;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(board: &Board, cursor: usize, message: Message) -> String {
        let (width, height) = required_area(board.size());
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let view = View {
            board,
            cursor,
            message,
        };
        terminal.draw(|f| draw(f, &view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_classic_board_needs_68_by_19() {
        assert_eq!(required_area(3), (68, 19));
    }

    #[test]
    fn test_large_board_grows_area() {
        let (width, height) = required_area(11);
        assert!(width > 68);
        assert_eq!(height, 9 + 23 + 3);
    }

    #[test]
    fn test_renders_marks_and_numbers() {
        let board: Board = "X../.O./...".parse().unwrap();
        let screen = render(&board, 0, Message::Move { last: 8 });

        assert!(screen.contains("| X |   |   |"));
        assert!(screen.contains("|   | O |   |"));
        assert!(screen.contains("| 0 | 1 | 2 |"));
        assert!(screen.contains("| 6 | 7 | 8 |"));
        assert!(screen.contains("What is your move (0 to 8)?"));
    }

    #[test]
    fn test_renders_end_message() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let screen = render(&board, 2, Message::Lose);
        assert!(screen.contains("You LOSE! Play again (Y or N)?"));
    }
}
