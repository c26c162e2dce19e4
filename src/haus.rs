//! One round of play: every entity on the board and the per-tick update
use crate::apple::Apple;
use crate::bombs::Bombs;
use crate::grid::{Direction, Pos, Size};
use crate::placement::{place, PlacementError};
use crate::portal::{PortalUpdate, Portals};
use crate::snek::Snek;
use crate::sound::SoundEvent;
use log::{debug, info};
use rand::Rng;
use std::collections::HashSet;

/// What ended a round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FatalCollision {
    Hazard,
    /// The snek bit its own body
    Body,
}

impl FatalCollision {
    pub(crate) fn sound(&self) -> SoundEvent {
        match self {
            FatalCollision::Hazard => SoundEvent::HazardCollision,
            FatalCollision::Body => SoundEvent::SelfCollision,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    Continue,
    GameOver(FatalCollision),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SnekHaus {
    size: Size,
    snek: Snek,
    apple: Apple,
    bombs: Bombs,
    portals: Portals,
    score: u32,
    queued_direction: Option<Direction>,
    sounds: Vec<SoundEvent>,
}

impl SnekHaus {
    /// A fresh board: a one-segment snek heading east and an apple somewhere free.
    pub(crate) fn new(
        size: Size,
        start: Pos,
        rng: &mut impl Rng,
    ) -> Result<Self, PlacementError> {
        let snek = Snek::new(start, Direction::East);
        let occupied = snek.segments().iter().copied().collect();
        let apple = Apple::new(place(size, &occupied, rng)?);
        Ok(SnekHaus {
            size,
            snek,
            apple,
            bombs: Bombs::default(),
            portals: Portals::default(),
            score: 0,
            queued_direction: None,
            sounds: Vec::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_parts(size: Size, snek: Snek, apple: Apple, portals: Portals) -> Self {
        SnekHaus {
            size,
            snek,
            apple,
            bombs: Bombs::default(),
            portals,
            score: 0,
            queued_direction: None,
            sounds: Vec::new(),
        }
    }

    pub(crate) fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn snek(&self) -> &Snek {
        &self.snek
    }

    pub(crate) fn apple(&self) -> Apple {
        self.apple
    }

    pub(crate) fn bombs(&self) -> &Bombs {
        &self.bombs
    }

    pub(crate) fn portals(&self) -> &Portals {
        &self.portals
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// Lengthens the snek to `length` segments; the copies stack on the tail.
    pub(crate) fn grow_to(&mut self, length: usize) {
        while self.snek.len() < length {
            self.snek.grow();
        }
    }

    /// Remembers a turn for the next tick. The latest one wins.
    pub(crate) fn queue_direction(&mut self, direction: Direction) {
        self.queued_direction = Some(direction);
    }

    pub(crate) fn take_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sounds)
    }

    /// Every cell something already sits on.
    pub(crate) fn occupied(&self) -> HashSet<Pos> {
        let mut occupied: HashSet<Pos> = self.snek.segments().iter().copied().collect();
        occupied.extend(self.bombs.cells().iter().copied());
        occupied.insert(self.apple.pos());
        if let Some((a, b)) = self.portals.ends() {
            occupied.insert(a);
            occupied.insert(b);
        }
        occupied
    }

    /// Runs one tick. The order of the steps matters: each one reads what
    /// the previous one left behind.
    pub(crate) fn tick(&mut self, rng: &mut impl Rng) -> Result<TickOutcome, PlacementError> {
        if let Some(direction) = self.queued_direction.take() {
            self.snek.change_direction(direction);
        }

        let vacated = self.snek.tail();
        self.snek.slither(self.size);

        let occupied = self.occupied();
        match self.portals.update(&mut self.snek, self.size, &occupied, rng) {
            PortalUpdate::Teleported => self.sounds.push(SoundEvent::PortalEnter),
            PortalUpdate::Idle
            | PortalUpdate::Opened
            | PortalUpdate::CloseDeferred
            | PortalUpdate::Closed => {}
        }

        let target = Bombs::target_count(self.snek.len());
        let mut occupied = self.occupied();
        if self.bombs.resize(target, self.size, &mut occupied, rng)? > 0 {
            debug!("Now {} bombs on the board", self.bombs.len());
        }

        let head = self.snek.head();
        if self.bombs.hit(head) {
            return Ok(self.collided(FatalCollision::Hazard));
        }

        if self.apple.is_under(head) {
            self.nom(vacated, rng)?;
        }

        if self.snek.bit_itself() {
            return Ok(self.collided(FatalCollision::Body));
        }

        Ok(TickOutcome::Continue)
    }

    /// Eats the apple. The new one also stays off `vacated`, the cell the
    /// tail left this tick.
    fn nom(&mut self, vacated: Pos, rng: &mut impl Rng) -> Result<(), PlacementError> {
        self.sounds.push(SoundEvent::Eat);
        self.score += 1;
        self.snek.grow();
        let mut occupied = self.occupied();
        occupied.insert(vacated);
        self.apple.relocate(self.size, &occupied, rng)
    }

    fn collided(&mut self, collision: FatalCollision) -> TickOutcome {
        info!(
            "Fatal collision {:?} at {:?} with score {}",
            collision,
            self.snek.head(),
            self.score
        );
        self.sounds.push(collision.sound());
        TickOutcome::GameOver(collision)
    }
}
