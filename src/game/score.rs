use super::rules::GameResult;
use super::Player;

/// Session win counters, one per player. A board reset never touches the
/// tally; it lives as long as the app and is not persisted anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    red_wins: u32,
    yellow_wins: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game. Only a decisive win moves a counter;
    /// draws and in-progress results are ignored.
    pub fn record(&mut self, result: GameResult) {
        if let GameResult::Win(player) = result {
            match player {
                Player::Red => self.red_wins += 1,
                Player::Yellow => self.yellow_wins += 1,
            }
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }
}
