use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};

use colordoku_core::Position;

use crate::game::{Game, GameState};
use crate::palette;

// ── Constants ────────────────────────────────────────────────────────────────

/// Each cell is 5 characters wide; 4 box borders on top.
const GRID_WIDTH: u16 = 9 * 5 + 4;

/// 9 cell rows plus 4 box border rows.
const GRID_HEIGHT: u16 = 13;

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, game: &Game) {
    match game.state {
        GameState::Menu => draw_menu(f, game),
        GameState::Generating => draw_generating(f, game),
        GameState::Playing => draw_playing(f, game),
        GameState::Paused => draw_paused(f, game),
        GameState::Won => draw_won(f, game),
    }

    if game.show_quit_confirm {
        draw_quit_confirm(f);
    }
}

// ── Menu screen ──────────────────────────────────────────────────────────────

fn draw_menu(f: &mut Frame, game: &Game) {
    let area = center_rect(46, 14, f.area());
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "C O L O R D O K U",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Sudoku with nine colors instead of digits",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let diff_color = match game.difficulty {
        colordoku_core::Difficulty::Easy => Color::Green,
        colordoku_core::Difficulty::Medium => Color::Yellow,
        colordoku_core::Difficulty::Hard => Color::Red,
    };
    let selector = Paragraph::new(Line::from(vec![
        Span::raw("◀ "),
        Span::styled(
            format!(" {} ", game.difficulty.label()),
            Style::default().fg(diff_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ▶"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Difficulty "),
    );
    f.render_widget(selector, chunks[2]);

    let help = Paragraph::new(Line::from(Span::styled(
        "↑/↓ difficulty · Enter start · q quit",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}

// ── Generating screen ────────────────────────────────────────────────────────

fn draw_generating(f: &mut Frame, game: &Game) {
    let area = center_rect(44, 5, f.area());
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Generating a {} puzzle…", game.difficulty.label()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "↑/↓ change difficulty · Esc back",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().border_type(BorderType::Rounded));
    f.render_widget(text, area);
}

// ── Playing screen ───────────────────────────────────────────────────────────

fn draw_playing(f: &mut Frame, game: &Game) {
    let total_height = 1 + 1 + GRID_HEIGHT + 3 + 1;
    let area = center_rect(GRID_WIDTH + 4, total_height, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(1),           // status
        Constraint::Length(1),           // toast
        Constraint::Length(GRID_HEIGHT), // board
        Constraint::Length(3),           // palette
        Constraint::Length(1),           // help
    ])
    .split(area);

    draw_status(f, game, chunks[0]);
    draw_toast(f, game, chunks[1]);
    draw_grid(f, game, chunks[2]);
    draw_palette(f, game, chunks[3]);

    let help = Paragraph::new(Line::from(Span::styled(
        "1-9 place · 0/Del erase · h hint · c check · space pause · n new · q quit",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}

fn draw_status(f: &mut Frame, game: &Game, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            game.difficulty.label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(game.format_time(), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(
            format!("Hints: {}", game.hints_remaining),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn draw_toast(f: &mut Frame, game: &Game, area: Rect) {
    let Some(toast) = &game.toast else {
        return;
    };
    let color = if toast.is_error {
        Color::Red
    } else {
        Color::Green
    };
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", toast.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(toast.body.clone(), Style::default().fg(color)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_grid(f: &mut Frame, game: &Game, area: Rect) {
    let mut lines = Vec::with_capacity(GRID_HEIGHT as usize);
    lines.push(border_line('┏', '━', '┳', '┓'));

    for row in 0..9 {
        lines.push(grid_row_line(game, row));
        if row == 2 || row == 5 {
            lines.push(border_line('┣', '━', '╋', '┫'));
        }
    }
    lines.push(border_line('┗', '━', '┻', '┛'));

    let grid = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(grid, area);
}

fn border_line(left: char, fill: char, mid: char, right: char) -> Line<'static> {
    let seg: String = std::iter::repeat_n(fill, 15).collect();
    let text = format!("{left}{seg}{mid}{seg}{mid}{seg}{right}");
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn grid_row_line(game: &Game, row: usize) -> Line<'_> {
    let border = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled("┃", border)];

    for col in 0..9 {
        spans.push(cell_span(game, row, col));
        if col == 2 || col == 5 {
            spans.push(Span::styled("┃", border));
        }
    }

    spans.push(Span::styled("┃", border));
    Line::from(spans)
}

fn cell_span(game: &Game, row: usize, col: usize) -> Span<'static> {
    let value = game.user_grid[row][col];
    let pos = Position::new(row, col);
    let selected = row == game.selected_row && col == game.selected_col;

    // Most urgent marker wins: conflict, then check result, then clue.
    let center = if game.conflicts.contains(&pos) {
        '✗'
    } else if game.incorrect.contains(&pos) {
        '!'
    } else if game.is_clue(row, col) {
        '▪'
    } else if value == 0 {
        '·'
    } else {
        ' '
    };

    let (open, close) = if selected { ('▶', '◀') } else { (' ', ' ') };
    let text: String = [open, ' ', center, ' ', close].iter().collect();

    let style = if value == 0 {
        let fg = if selected { Color::White } else { Color::DarkGray };
        Style::default().fg(fg)
    } else {
        Style::default()
            .bg(palette::color(value))
            .fg(palette::contrast(value))
    };
    Span::styled(text, style)
}

fn draw_palette(f: &mut Frame, game: &Game, area: Rect) {
    let mut key_spans = vec![Span::raw(" ")];
    let mut count_spans = vec![Span::raw(" ")];

    for value in 1..=9u8 {
        let remaining = game.remaining_of(value);
        let style = if remaining == 0 {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
                .bg(palette::color(value))
                .fg(palette::contrast(value))
        };
        key_spans.push(Span::styled(format!(" {value} "), style));
        key_spans.push(Span::raw("  "));
        count_spans.push(Span::styled(
            format!(" {remaining} "),
            Style::default().fg(if remaining == 0 {
                Color::DarkGray
            } else {
                Color::Gray
            }),
        ));
        count_spans.push(Span::raw("  "));
    }

    let block = Paragraph::new(vec![
        Line::from(key_spans),
        Line::from(count_spans),
    ])
    .alignment(Alignment::Center);
    f.render_widget(block, area);
}

// ── Paused screen ────────────────────────────────────────────────────────────

fn draw_paused(f: &mut Frame, game: &Game) {
    // The board is hidden while paused.
    let area = center_rect(40, 6, f.area());
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "Paused",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            game.format_time(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "space resume · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().border_type(BorderType::Rounded));
    f.render_widget(text, area);
}

// ── Won screen ───────────────────────────────────────────────────────────────

fn draw_won(f: &mut Frame, game: &Game) {
    let area = center_rect(44, 8, f.area());
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "★ You solved it! ★",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(game.difficulty.label(), Style::default().fg(Color::Cyan)),
            Span::raw("  ·  "),
            Span::styled(game.format_time(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter menu · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().border_type(BorderType::Rounded));
    f.render_widget(text, area);
}

// ── Quit confirmation popup ──────────────────────────────────────────────────

fn draw_quit_confirm(f: &mut Frame) {
    let area = center_rect(36, 5, f.area());
    f.render_widget(Clear, area);
    let text = Paragraph::new(vec![
        Line::from("Quit? Progress is saved."),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter quit · any other key stay",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(text, area);
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Center a `width` x `height` rect inside `area`, clamped to fit.
fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
