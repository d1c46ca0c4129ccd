//! Win and draw detection over a whole board.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_decided(self) -> bool {
        self != GameResult::InProgress
    }
}

/// Row/column deltas of the four run directions, in the order they are
/// checked at each cell: horizontal, vertical, down-right diagonal,
/// up-right diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Evaluate the board: the first four-in-a-row found wins, scanning cells
/// in row-major order and directions in the fixed order above. With no win,
/// a board without empty cells is a draw.
pub fn evaluate(board: &Board) -> GameResult {
    for row in 0..ROWS {
        for col in 0..COLS {
            let cell = board.get(row, col);
            let Some(player) = Player::from_cell(cell) else {
                continue;
            };

            for (dr, dc) in DIRECTIONS {
                if !run_fits(row, col, dr, dc) {
                    continue;
                }
                let matched = (1..4).all(|step| {
                    let r = (row as isize + step * dr) as usize;
                    let c = (col as isize + step * dc) as usize;
                    board.get(r, c) == cell
                });
                if matched {
                    return GameResult::Win(player);
                }
            }
        }
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Whether all four cells of a run starting at (row, col) stay on the board.
fn run_fits(row: usize, col: usize, dr: isize, dc: isize) -> bool {
    let end_row = row as isize + 3 * dr;
    let end_col = col as isize + 3 * dc;
    (0..ROWS as isize).contains(&end_row) && (0..COLS as isize).contains(&end_col)
}
