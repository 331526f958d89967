use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use log::trace;
use rand::Rng;

use crate::{
    ai::HuntTarget,
    board::Board,
    common::PlacementError,
    config::{DEFAULT_BOARD_SIZE, FLEET},
    vessel::{Orientation, Vessel, VesselKind},
};

/// Supplies coordinates for a manually controlled player, typically by
/// prompting a human.
///
/// Implementations must return an in-bounds coordinate that `view` has not
/// recorded as shot yet.
pub trait ShotSource {
    fn next_shot(&mut self, view: &Board) -> (usize, usize);
}

impl<F> ShotSource for F
where
    F: FnMut(&Board) -> (usize, usize),
{
    fn next_shot(&mut self, view: &Board) -> (usize, usize) {
        self(view)
    }
}

/// How a player picks its shots.
pub enum Controller {
    /// Coordinates come from outside the engine.
    Manual(Box<dyn ShotSource>),
    /// Hunt/target strategy.
    Automated(HuntTarget),
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controller::Manual(_) => f.write_str("Manual"),
            Controller::Automated(ai) => f.debug_tuple("Automated").field(ai).finish(),
        }
    }
}

/// One side of a match: its own fleet plus a record of the shots it fired.
#[derive(Debug)]
pub struct Player {
    name: String,
    board: Board,
    opponent_view: Board,
    controller: Controller,
}

impl Player {
    /// Player on `size`×`size` boards.
    pub fn new(name: impl Into<String>, size: usize, controller: Controller) -> Self {
        Self {
            name: name.into(),
            board: Board::with_size(size),
            opponent_view: Board::with_size(size),
            controller,
        }
    }

    /// Player whose shots come from `source`.
    pub fn manual(name: impl Into<String>, source: impl ShotSource + 'static) -> Self {
        Self::new(name, DEFAULT_BOARD_SIZE, Controller::Manual(Box::new(source)))
    }

    /// Computer-controlled player.
    pub fn automated(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_BOARD_SIZE, Controller::Automated(HuntTarget::new()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's own fleet.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the player's own fleet, for placement and for
    /// resolving the opponent's shots.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Shots this player has fired at the opponent.
    pub fn opponent_view(&self) -> &Board {
        &self.opponent_view
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Place one vessel on the player's own board.
    pub fn place_vessel(
        &mut self,
        vessel: Vessel,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        self.board.place(vessel, row, col, orientation)
    }

    /// Place the whole standard fleet at random positions.
    pub fn deploy_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        for kind in FLEET {
            self.board.place_randomly(rng, Vessel::new(kind))?;
        }
        Ok(())
    }

    /// Next coordinate to fire at.
    pub fn select_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (usize, usize) {
        match &mut self.controller {
            Controller::Manual(source) => source.next_shot(&self.opponent_view),
            Controller::Automated(ai) => ai.select_shot(&self.opponent_view, rng),
        }
    }

    /// Record the outcome of a shot this player fired. The coordinate is
    /// marked as shot on the opponent view whatever the outcome.
    pub fn register_shot_result(
        &mut self,
        row: usize,
        col: usize,
        hit: bool,
        sunk: Option<VesselKind>,
    ) {
        if let Err(e) = self.opponent_view.fire(row, col) {
            trace!("{}: opponent view unchanged: {}", self.name, e);
        }
        if let Controller::Automated(ai) = &mut self.controller {
            ai.register_shot_result(row, col, hit, sunk);
        }
    }

    /// Returns `true` once every vessel of the player's fleet is sunk.
    pub fn has_lost(&self) -> bool {
        self.board.all_sunk()
    }
}
