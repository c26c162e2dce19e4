//! Linked pair of teleport cells that open and close on their own
use crate::consts::{
    PORTAL_ACTIVATION_CUTOFF, PORTAL_OPEN_TICKS_MAX, PORTAL_OPEN_TICKS_MIN, PORTAL_ROLL_MAX,
};
use crate::grid::{Pos, Size};
use crate::placement::{place, PlacementError};
use crate::snek::Snek;
use log::{debug, info, warn};
use rand::Rng;
use std::collections::HashSet;

/// Both ends of a pair exist together or not at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PortalState {
    Inactive {
        ticks_since_close: u32,
    },
    /// `remaining == 0` means the pair is waiting to close.
    Active {
        a: Pos,
        b: Pos,
        remaining: u32,
        in_use: bool,
    },
}

/// What a single portal update did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PortalUpdate {
    Idle,
    Opened,
    /// The head entered a portal; the jump is queued on the snek
    Teleported,
    CloseDeferred,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Portals {
    state: PortalState,
}

impl Default for Portals {
    fn default() -> Self {
        Portals {
            state: PortalState::Inactive {
                ticks_since_close: 0,
            },
        }
    }
}

impl Portals {
    #[cfg(test)]
    pub(crate) fn open_at(a: Pos, b: Pos, remaining: u32) -> Self {
        Portals {
            state: PortalState::Active {
                a,
                b,
                remaining,
                in_use: false,
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> PortalState {
        self.state
    }

    pub(crate) fn ends(&self) -> Option<(Pos, Pos)> {
        match self.state {
            PortalState::Active { a, b, .. } => Some((a, b)),
            PortalState::Inactive { .. } => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn in_use(&self) -> bool {
        matches!(self.state, PortalState::Active { in_use: true, .. })
    }

    /// Advances the portal lifecycle by one tick.
    ///
    /// Runs after the snake has moved. An entry queues the teleport on the
    /// snake, so the jump itself happens on the snake's next slither.
    pub(crate) fn update(
        &mut self,
        snek: &mut Snek,
        arena_size: Size,
        occupied: &HashSet<Pos>,
        rng: &mut impl Rng,
    ) -> PortalUpdate {
        match &mut self.state {
            PortalState::Inactive { ticks_since_close } => {
                *ticks_since_close += 1;
                let roll = rng.gen_range(0..=PORTAL_ROLL_MAX);
                if roll + *ticks_since_close <= PORTAL_ACTIVATION_CUTOFF {
                    return PortalUpdate::Idle;
                }
                match Self::place_pair(arena_size, occupied, rng) {
                    Ok((a, b)) => {
                        let remaining =
                            rng.gen_range(PORTAL_OPEN_TICKS_MIN..=PORTAL_OPEN_TICKS_MAX);
                        info!(
                            "Portals opened at {:?} <-> {:?} for {} ticks",
                            a, b, remaining
                        );
                        self.state = PortalState::Active {
                            a,
                            b,
                            remaining,
                            in_use: false,
                        };
                        PortalUpdate::Opened
                    }
                    Err(e) => {
                        warn!("Could not open portals: {}", e);
                        PortalUpdate::Idle
                    }
                }
            }
            PortalState::Active {
                a,
                b,
                remaining,
                in_use,
            } => {
                let gap_open = snek.has_teleport_gap(arena_size);

                if *remaining == 0 {
                    if gap_open {
                        debug!("Portal close deferred, snek still passing through");
                        return PortalUpdate::CloseDeferred;
                    }
                    info!("Portals closed");
                    self.state = PortalState::Inactive {
                        ticks_since_close: 0,
                    };
                    return PortalUpdate::Closed;
                }
                *remaining -= 1;

                let head = snek.head();
                if *in_use && !gap_open && !a.box_contains(head) && !b.box_contains(head) {
                    *in_use = false;
                }
                if *in_use {
                    return PortalUpdate::Idle;
                }

                let (entry, exit) = if a.box_contains(head) {
                    (*a, *b)
                } else if b.box_contains(head) {
                    (*b, *a)
                } else {
                    return PortalUpdate::Idle;
                };
                snek.teleport_to(exit);
                *in_use = true;
                debug!("Snek entered portal at {:?}, exiting at {:?}", entry, exit);
                PortalUpdate::Teleported
            }
        }
    }

    fn place_pair(
        arena_size: Size,
        occupied: &HashSet<Pos>,
        rng: &mut impl Rng,
    ) -> Result<(Pos, Pos), PlacementError> {
        let mut occupied = occupied.clone();
        let a = place(arena_size, &occupied, rng)?;
        occupied.insert(a);
        let b = place(arena_size, &occupied, rng)?;
        Ok((a, b))
    }
}
