use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, Speed};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Delay between death and the automatic return to the start screen.
const AUTO_RESET_DELAY: Duration = Duration::from_millis(1500);

/// Which screen the session is on. The engine only knows alive/dead; the
/// idle/running gating lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Instructions,
    Playing,
}

pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    screen: Screen,
    speed: Speed,
    should_quit: bool,
    died_at: Option<Instant>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let speed = config.speed;
        Self::with_engine(GameEngine::new(config), speed)
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let speed = config.speed;
        Self::with_engine(GameEngine::with_seed(config, seed), speed)
    }

    fn with_engine(engine: GameEngine, speed: Speed) -> Self {
        Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            screen: Screen::Start,
            speed,
            should_quit: false,
            died_at: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.speed.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        let previous_speed = self.speed;
                        self.handle_event(event);
                        if self.speed != previous_speed {
                            tick_timer = interval(self.speed.tick_interval());
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.on_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let (screen, speed) = (self.screen, self.speed);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, screen, speed, self.engine.state(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (self.screen, self.input_handler.handle_key_event(key)) {
            (_, KeyAction::Quit) => {
                self.should_quit = true;
            }
            (Screen::Start, KeyAction::Start) => {
                self.start_run();
            }
            (Screen::Start, KeyAction::SelectSpeed(speed)) => {
                self.speed = speed;
                info!("Speed set to {}", speed.label());
            }
            (Screen::Start, KeyAction::ToggleInstructions) => {
                self.screen = Screen::Instructions;
            }
            (Screen::Instructions, KeyAction::ToggleInstructions) => {
                self.screen = Screen::Start;
            }
            (Screen::Playing, KeyAction::Steer(direction)) => {
                self.engine.set_direction(direction);
            }
            (Screen::Playing, KeyAction::Restart) => {
                self.restart();
            }
            // Enter while already running, steering on the start screen, ...
            _ => {}
        }
    }

    fn on_tick(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }

        if self.engine.state().alive {
            let outcome = self.engine.step();
            if outcome.ate_food {
                self.metrics
                    .on_food(outcome.reversed, self.engine.state().body.len());
                debug!(
                    "Food eaten, score {}, reversed {}",
                    self.engine.state().score,
                    outcome.reversed
                );
            }
            if !self.engine.state().alive {
                let score = self.engine.state().score;
                self.metrics.on_game_over(score);
                self.died_at = Some(Instant::now());
                info!("Game over with score {score}");
            }
        } else if self.died_at.map_or(true, |at| at.elapsed() >= AUTO_RESET_DELAY) {
            self.engine.reset();
            self.died_at = None;
            self.screen = Screen::Start;
        }
    }

    fn start_run(&mut self) {
        self.screen = Screen::Playing;
        self.metrics.on_game_start();
        info!("Run started at {} speed", self.speed.label());
    }

    fn restart(&mut self) {
        self.engine.reset();
        self.metrics.on_game_start();
        self.died_at = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
