use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, interval_at};

use crate::game::{GameConfig, GameEngine, RunState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Terminal host for the game
///
/// Owns the engine and drives it from three async sources: a tick timer
/// paced by the engine's own interval, a fixed-rate render timer, and
/// the keyboard event stream. The engine stays free of all of this; the
/// app is the only place timers and terminals exist.
pub struct App {
    engine: GameEngine,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };

        Self {
            engine,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Raw mode on the alternate screen, drawing to stderr
        enable_raw_mode().context("switching the terminal to raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("entering the alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("initializing the terminal")?;
        terminal.hide_cursor().context("hiding the cursor")?;
        terminal.clear().context("clearing the screen")?;

        let result = self.run_game_loop(&mut terminal).await;

        // Restore the terminal whether or not the loop failed
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The game tick follows the engine's pace, starting one full
        // interval out. The timer is rebuilt whenever that pace changes.
        let period = self.engine.tick_interval();
        let mut tick_timer = interval_at(Instant::now() + period, period);

        // Frames draw at a fixed 30 FPS no matter how fast the game runs
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Keyboard
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        let was_over = self.engine.run_state() == RunState::GameOver;
                        self.handle_event(event);
                        if was_over && self.engine.run_state() == RunState::Running {
                            // Fresh game: restart the tick clock so the
                            // first step lands one full interval out.
                            let period = self.engine.tick_interval();
                            tick_timer = interval_at(Instant::now() + period, period);
                        }
                    }
                }

                // Game logic tick, paused while the game-over screen is up
                _ = tick_timer.tick(), if self.engine.run_state() == RunState::Running => {
                    self.update_game();
                    let period = self.engine.tick_interval();
                    if period != tick_timer.period() {
                        // Eating food sped the game up; reschedule.
                        tick_timer = interval_at(Instant::now() + period, period);
                    }
                }

                // Draw a frame
                _ = render_timer.tick() => {
                    if self.engine.run_state() == RunState::Running {
                        self.stats.update();
                    }
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.stats);
                    }).context("drawing a frame")?;
                }

                // SIGINT
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
        if let Event::Key(key) = event {
            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    // Applied immediately; the next tick moves this way.
                    self.engine.set_direction(direction);
                }
                KeyAction::Restart => {
                    if self.engine.run_state() == RunState::GameOver {
                        self.engine.restart();
                        self.stats.on_game_start();
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let was_running = self.engine.run_state() == RunState::Running;
        self.engine.tick();

        if was_running && self.engine.run_state() == RunState::GameOver {
            self.stats.on_game_over(self.engine.snapshot().score);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("disabling raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("leaving the alternate screen")?;
        terminal.show_cursor().context("restoring the cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_app_initialization() {
        let app = App::new(GameConfig::default(), Some(1));

        assert_eq!(app.engine.run_state(), RunState::Running);
        assert_eq!(app.engine.snapshot().score, 0);
        assert_eq!(app.stats.games_played, 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_steering_key_moves_the_snake() {
        let mut app = App::new(GameConfig::small(), Some(5));

        app.handle_event(key(KeyCode::Down));
        app.update_game();

        assert_eq!(app.engine.snapshot().head, Position::new(0, 1));
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut app = App::new(GameConfig::small(), Some(3));
        let food_before = app.engine.snapshot().food;

        app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.engine.run_state(), RunState::Running);
        assert_eq!(app.engine.snapshot().food, food_before);
        assert_eq!(app.stats.games_played, 0);
    }

    #[test]
    fn test_game_over_is_counted_once_then_restart_works() {
        let mut app = App::new(GameConfig::small(), Some(3));

        // Heading right from the top-left corner, the snake meets the
        // wall on the tenth step. The extra updates must not recount.
        for _ in 0..12 {
            app.update_game();
        }
        assert_eq!(app.engine.run_state(), RunState::GameOver);
        assert_eq!(app.stats.games_played, 1);

        app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.engine.run_state(), RunState::Running);
        assert_eq!(app.engine.snapshot().score, 0);
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(GameConfig::small(), Some(3));

        app.handle_event(key(KeyCode::Char('q')));

        assert!(app.should_quit);
    }
}
