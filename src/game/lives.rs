//! Life board and match result
//!
//! Reference collaborator behind [`LifeSink`]: counts lives per player and
//! decides the match once a player runs out.

use serde::Serialize;
use tracing::info;

use crate::game::state::Player;
use crate::game::systems::ownership::LifeSink;

/// Lives remaining per player
#[derive(Debug, Clone)]
pub struct LifeBoard {
    lives_per_player: u32,
    lives: [u32; 2],
    winner: Option<Player>,
}

impl LifeBoard {
    pub fn new(lives_per_player: u32) -> Self {
        Self {
            lives_per_player,
            lives: [lives_per_player; 2],
            winner: None,
        }
    }

    pub fn lives(&self, player: Player) -> u32 {
        self.lives[slot(player)]
    }

    /// First player to knock the opponent out; sticks until reset
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn reset(&mut self) {
        self.lives = [self.lives_per_player; 2];
        self.winner = None;
    }
}

impl LifeSink for LifeBoard {
    fn life_lost(&mut self, player: Player) {
        if self.winner.is_some() {
            return;
        }
        let remaining = &mut self.lives[slot(player)];
        *remaining = remaining.saturating_sub(1);
        info!("{:?} lost a life, {} remaining", player, *remaining);

        if *remaining == 0 {
            let winner = player.opponent();
            info!("{:?} has no lives left, {:?} wins", player, winner);
            self.winner = Some(winner);
        }
    }
}

fn slot(player: Player) -> usize {
    match player {
        Player::PlayerA => 0,
        Player::PlayerB => 1,
    }
}

/// Reason why match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchEndReason {
    /// A player ran out of lives
    Knockout,
    /// Time limit reached
    TimeLimit,
}

/// Match result information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub reason: MatchEndReason,
    pub winner: Option<Player>,
    pub lives_a: u32,
    pub lives_b: u32,
    pub match_duration: f32,
}

/// Check if match should end
pub fn check_match_end(board: &LifeBoard, elapsed: f32, time_limit: f32) -> Option<MatchEndReason> {
    if board.winner().is_some() {
        return Some(MatchEndReason::Knockout);
    }
    if elapsed >= time_limit {
        return Some(MatchEndReason::TimeLimit);
    }
    None
}

/// Determine match result; on time limit the player with more lives wins
pub fn determine_result(board: &LifeBoard, reason: MatchEndReason, elapsed: f32) -> MatchResult {
    let lives_a = board.lives(Player::PlayerA);
    let lives_b = board.lives(Player::PlayerB);

    let winner = board.winner().or_else(|| match lives_a.cmp(&lives_b) {
        std::cmp::Ordering::Greater => Some(Player::PlayerA),
        std::cmp::Ordering::Less => Some(Player::PlayerB),
        std::cmp::Ordering::Equal => None,
    });

    MatchResult {
        reason,
        winner,
        lives_a,
        lives_b,
        match_duration: elapsed,
    }
}
