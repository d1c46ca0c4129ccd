use super::rules::{self, GameResult};
use super::{Board, MoveError, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    result: GameResult,
}

impl GameState {
    /// Create an empty board with the given player to move
    pub fn new(first_player: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first_player,
            result: GameResult::InProgress,
        }
    }

    /// Create initial game state
    pub fn initial() -> Self {
        Self::new(Player::Red) // Red starts
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the game result so far
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.result.is_decided()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..super::board::COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut board = self.board;
        board.drop_piece(column, self.current_player.to_cell())?;

        Ok(GameState {
            board,
            current_player: self.current_player.other(),
            result: rules::evaluate(&board),
        })
    }

    /// Apply move in place (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())?;

        self.result = rules::evaluate(&self.board);
        self.current_player = self.current_player.other();

        Ok(())
    }
}
