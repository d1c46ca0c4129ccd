use crate::config::UiConfig;
use crate::game::{GameResult, GameState, MoveError, Player, ScoreTally};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    game_state: GameState,
    tally: ScoreTally,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    first_player: Player,
    ascii_pieces: bool,
    poll_interval: Duration,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let first_player = config.first_player();
        App {
            game_state: GameState::new(first_player),
            tally: ScoreTally::new(),
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            first_player,
            ascii_pieces: config.ascii_pieces,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.reset_board();
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' for a new round.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => match self.game_state.result() {
                GameResult::Win(player) => {
                    // The terminal check above guarantees this runs once per game
                    self.tally.record(self.game_state.result());
                    self.message = Some(format!("{} wins!", player.name()));
                }
                GameResult::Draw => {
                    self.message = Some("It's a draw!".to_string());
                }
                GameResult::InProgress => {}
            },
            Err(err @ MoveError::ColumnFull) => {
                self.message = Some(format!("{err}!"));
            }
            Err(MoveError::InvalidColumn) | Err(MoveError::GameOver) => {}
        }
    }

    /// Start a new round. The board empties but the tally carries over.
    fn reset_board(&mut self) {
        self.game_state = GameState::new(self.first_player);
        self.selected_column = 3;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            &self.tally,
            self.selected_column,
            &self.message,
            self.ascii_pieces,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&UiConfig::default())
    }

    /// Drive a horizontal red win: red stacks columns 0..3 on the bottom
    /// row while yellow answers on top.
    fn play_red_win(app: &mut App) {
        for col in 0..4 {
            app.selected_column = col;
            app.drop_piece(); // Red
            if col < 3 {
                app.drop_piece(); // Yellow, same column
            }
        }
    }

    #[test]
    fn test_win_counts_once_in_tally() {
        let mut app = app();
        play_red_win(&mut app);
        assert!(app.game_state.is_terminal());
        assert_eq!(app.tally.wins(Player::Red), 1);

        // Further drops on the decided board change nothing
        app.drop_piece();
        app.drop_piece();
        assert_eq!(app.tally.wins(Player::Red), 1);
    }

    #[test]
    fn test_reset_clears_board_but_keeps_tally() {
        let mut app = app();
        play_red_win(&mut app);
        assert_eq!(app.tally.wins(Player::Red), 1);

        app.handle_key(key(KeyCode::Char('r')));
        assert!(!app.game_state.is_terminal());
        assert_eq!(app.game_state.legal_actions().len(), 7);
        assert_eq!(app.tally.wins(Player::Red), 1);
        assert_eq!(app.game_state.current_player(), Player::Red);
    }

    #[test]
    fn test_selector_stays_in_bounds() {
        let mut app = app();
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn test_full_column_sets_message() {
        let mut app = app();
        app.selected_column = 0;
        for _ in 0..6 {
            app.drop_piece();
        }
        app.drop_piece();
        assert_eq!(app.message.as_deref(), Some("column is full!"));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
