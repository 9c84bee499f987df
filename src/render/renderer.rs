use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CellKind, Coord, GameState, Speed};
use crate::metrics::GameMetrics;
use crate::modes::Screen;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        screen: Screen,
        speed: Speed,
        state: &GameState,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the main panel horizontally
        let panel_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match screen {
            Screen::Start => {
                frame.render_widget(self.render_start(speed), panel_area);
            }
            Screen::Instructions => {
                frame.render_widget(self.render_instructions(), panel_area);
            }
            Screen::Playing => {
                frame.render_widget(self.render_grid(state), panel_area);
            }
        }

        let controls = self.render_controls(screen, chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn cell_span(&self, kind: CellKind) -> Span<'static> {
        match kind {
            CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
            CellKind::Food => Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            CellKind::FoodReversing => Span::styled(
                "O ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            CellKind::SnakeBody => Span::styled("■ ", Style::default().fg(Color::Green)),
            CellKind::SnakeBodyHit => Span::styled(
                "■ ",
                Style::default().fg(Color::Green).bg(Color::Red),
            ),
            CellKind::DeadCellHit => Span::styled(
                "■ ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        }
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for row in 0..state.grid.height {
            let mut spans = Vec::new();
            for col in 0..state.grid.width {
                let cell = state.grid.cell_id(Coord::new(row as i32, col as i32));
                spans.push(self.cell_span(state.classify(cell)));
            }
            lines.push(Line::from(spans));
        }

        let (title, border_color) = if state.alive {
            (" Reversed Snake ", Color::White)
        } else {
            (" Game Over ", Color::Red)
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start(&self, selected: Speed) -> Paragraph<'static> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "REVERSED SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (key, speed) in [
            ('1', Speed::Fast),
            ('2', Speed::Medium),
            ('3', Speed::Slow),
        ] {
            let style = if speed == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            text.push(Line::from(Span::styled(
                format!(" {} - {} ", key, speed.label()),
                style,
            )));
        }

        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "ENTER",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to start", Style::default().fg(Color::Gray)),
        ]));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled("I", Style::default().fg(Color::Cyan)),
            Span::styled(" for instructions", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        )
    }

    fn render_instructions(&self) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Instructions",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("1. Move around using the arrow keys"),
            Line::from("2. Collect tokens to score"),
            Line::from("3. Violet tokens will reverse your direction"),
            Line::from("4. Moving into yourself or the walls will kill you"),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled("I", Style::default().fg(Color::Cyan)),
                Span::styled(" to go back", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        )
    }

    fn render_controls(&self, screen: Screen, _area: Rect) -> Paragraph<'_> {
        let text = match screen {
            Screen::Playing => vec![Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])],
            _ => vec![Line::from(vec![
                Span::styled("1/2/3", Style::default().fg(Color::Cyan)),
                Span::raw(" to pick a speed | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])],
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
