use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Position, RunState, Snapshot};
use crate::metrics::SessionStats;

/// Draws one frame from an engine snapshot
///
/// Holds no game state of its own; everything it shows comes from the
/// `Snapshot` and the session stats passed in per frame.
pub struct Renderer;

/// Yellow caption for a stat
fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Yellow))
}

/// Plain white stat value
fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::White))
}

/// Bold white stat value
fn strong(text: String) -> Span<'static> {
    Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn bold(text: &'static str, color: Color) -> Span<'static> {
    Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Stats header
                Constraint::Min(0),    // Playfield
                Constraint::Length(3), // Key hints
            ])
            .split(frame.area());

        frame.render_widget(self.header(chunks[0], snapshot, stats), chunks[0]);

        // Keep the playfield horizontally centered
        let play_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot.run_state {
            RunState::Running => {
                frame.render_widget(self.grid(play_area, snapshot), play_area);
            }
            RunState::GameOver => {
                frame.render_widget(self.game_over_panel(play_area, snapshot, stats), play_area);
            }
        }

        frame.render_widget(self.key_hints(chunks[2]), chunks[2]);
    }

    /// The playfield: one styled span per cell, one line per grid row
    fn grid(&self, _area: Rect, snapshot: &Snapshot) -> Paragraph<'_> {
        let (cells_x, cells_y) = snapshot.grid;

        let lines: Vec<Line> = (0..cells_y)
            .map(|y| {
                (0..cells_x)
                    .map(|x| self.cell_span(Position::new(x, y), snapshot))
                    .collect::<Vec<_>>()
                    .into()
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn cell_span(&self, pos: Position, snapshot: &Snapshot) -> Span<'static> {
        if pos == snapshot.head {
            bold("■ ", Color::Cyan)
        } else if snapshot.body.contains(&pos) {
            Span::styled("□ ", Style::default().fg(Color::Green))
        } else if pos == snapshot.food {
            bold("O ", Color::Red)
        } else {
            Span::styled(". ", Style::default().fg(Color::DarkGray))
        }
    }

    fn header(&self, _area: Rect, snapshot: &Snapshot, stats: &SessionStats) -> Paragraph<'_> {
        let mut spans = vec![label("Score: "), strong(snapshot.score.to_string())];
        for (caption, text) in [
            ("High: ", stats.high_score.to_string()),
            ("Time: ", stats.format_time()),
            ("Games: ", stats.games_played.to_string()),
        ] {
            spans.push(Span::raw("    "));
            spans.push(label(caption));
            spans.push(value(text));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn game_over_panel(
        &self,
        _area: Rect,
        snapshot: &Snapshot,
        stats: &SessionStats,
    ) -> Paragraph<'_> {
        let hint = Style::default().fg(Color::Gray);
        let text = vec![
            Line::from(""),
            Line::from(bold("GAME OVER", Color::Red)),
            Line::from(""),
            Line::from(vec![
                label("Final Score: "),
                strong(snapshot.score.to_string()),
                Span::raw("    "),
                label("High Score: "),
                value(stats.high_score.to_string()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", hint),
                bold("Enter", Color::Green),
                Span::styled(" to play again or ", hint),
                bold("Q", Color::Red),
                Span::styled(" to quit", hint),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn key_hints(&self, _area: Rect) -> Paragraph<'_> {
        let line = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(line).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
