use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Direction;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    None,
}

/// Maps raw terminal key events to game commands
///
/// Only translates; whether a command applies (steering mid-game,
/// restarting after a game over) is the engine's call.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Only act on the downstroke. Some terminals also deliver repeat
        // and release events for the same key.
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        // Ctrl+C quits regardless of what the C key would mean alone
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Arrows
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // WASD, either case
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Session controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_steering_keys() {
        let handler = InputHandler::new();

        let bindings = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('d'), Direction::Right),
            (KeyCode::Char('W'), Direction::Up),
            (KeyCode::Char('S'), Direction::Down),
            (KeyCode::Char('A'), Direction::Left),
            (KeyCode::Char('D'), Direction::Right),
        ];
        for (code, direction) in bindings {
            assert_eq!(
                handler.handle_key_event(press(code)),
                KeyAction::Steer(direction),
                "{:?}",
                code
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            assert_eq!(handler.handle_key_event(press(code)), KeyAction::Quit);
        }

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_restart_keys() {
        let handler = InputHandler::new();

        for code in [KeyCode::Char('r'), KeyCode::Char('R'), KeyCode::Enter] {
            assert_eq!(handler.handle_key_event(press(code)), KeyAction::Restart);
        }
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('x'))),
            KeyAction::None
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Tab)), KeyAction::None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let handler = InputHandler::new();

        let released =
            KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(handler.handle_key_event(released), KeyAction::None);
    }
}
