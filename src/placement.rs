//! Finding a free cell by rejection sampling
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::grid::{Pos, Size};
use log::debug;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub(crate) enum PlacementError {
    #[error("no free cell found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Samples cells until one lies outside every occupied cell.
///
/// Gives up with [`PlacementError::Exhausted`] once
/// [`MAX_PLACEMENT_ATTEMPTS`] candidates have been rejected, which only
/// happens when the grid is (nearly) saturated.
pub(crate) fn place(
    size: Size,
    occupied: &HashSet<Pos>,
    rng: &mut impl Rng,
) -> Result<Pos, PlacementError> {
    place_within(size, occupied, rng, MAX_PLACEMENT_ATTEMPTS)
}

fn place_within(
    size: Size,
    occupied: &HashSet<Pos>,
    rng: &mut impl Rng,
    max_attempts: u32,
) -> Result<Pos, PlacementError> {
    for attempt in 1..=max_attempts {
        let candidate = size.sample_cell(rng);
        if !occupied.iter().any(|cell| cell.box_contains(candidate)) {
            if attempt > 1 {
                debug!("Placed at {:?} after {} attempts", candidate, attempt);
            }
            return Ok(candidate);
        }
    }
    Err(PlacementError::Exhausted {
        attempts: max_attempts,
    })
}
