use crate::grid::{Pos, Size};
use crate::placement::{place, PlacementError};
use rand::Rng;
use std::collections::HashSet;

/// The single collectible on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Apple {
    pos: Pos,
}

impl Apple {
    pub(crate) fn new(pos: Pos) -> Self {
        Apple { pos }
    }

    pub(crate) fn pos(&self) -> Pos {
        self.pos
    }

    pub(crate) fn is_under(&self, head: Pos) -> bool {
        self.pos.box_contains(head)
    }

    /// Moves the apple to a free cell. `occupied` should include the apple's current cell.
    pub(crate) fn relocate(
        &mut self,
        arena_size: Size,
        occupied: &HashSet<Pos>,
        rng: &mut impl Rng,
    ) -> Result<(), PlacementError> {
        self.pos = place(arena_size, occupied, rng)?;
        Ok(())
    }
}
