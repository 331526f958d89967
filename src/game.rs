use anyhow::{bail, ensure};
use log::{debug, info};
use rand::Rng;

use crate::{common::ShotOutcome, player::Player};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Index of the player whose opponent lost its whole fleet.
    Won { winner: usize },
}

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Index of the player who fired.
    pub shooter: usize,
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
}

/// Two players taking alternate shots at each other's board, first player
/// first.
#[derive(Debug)]
pub struct Match {
    players: [Player; 2],
    current: usize,
    turns: usize,
}

impl Match {
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
            current: 0,
            turns: 0,
        }
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    /// Index of the player due to fire next.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Turns played so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn status(&self) -> GameStatus {
        if self.players[1].has_lost() {
            GameStatus::Won { winner: 0 }
        } else if self.players[0].has_lost() {
            GameStatus::Won { winner: 1 }
        } else {
            GameStatus::InProgress
        }
    }

    /// Let the current player fire one shot at its opponent and hand the
    /// turn over. A rejected coordinate still uses up the turn.
    pub fn play_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TurnReport {
        let shooter = self.current;
        let target = 1 - shooter;
        let (row, col) = self.players[shooter].select_shot(rng);
        let outcome = ShotOutcome::from_fire(self.players[target].board_mut().fire(row, col));
        self.players[shooter].register_shot_result(row, col, outcome.is_hit(), outcome.sunk());
        debug!(
            "turn {}: {} fired at ({}, {}): {:?}",
            self.turns + 1,
            self.players[shooter].name(),
            row,
            col,
            outcome
        );
        self.turns += 1;
        self.current = target;
        TurnReport {
            shooter,
            row,
            col,
            outcome,
        }
    }

    /// Play until one fleet is lost, returning the winner's index.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R, max_turns: usize) -> anyhow::Result<usize> {
        for p in &self.players {
            ensure!(
                !p.board().vessels().is_empty(),
                "{} has no vessels deployed",
                p.name()
            );
        }
        while self.turns < max_turns {
            self.play_turn(rng);
            if let GameStatus::Won { winner } = self.status() {
                info!(
                    "{} won after {} turns",
                    self.players[winner].name(),
                    self.turns
                );
                return Ok(winner);
            }
        }
        bail!("no winner after {} turns", max_turns)
    }
}
