use crate::consts::SELF_COLLISION_START_INDEX;
use crate::grid::{Direction, Pos, Size};

/// The snake. `segments[0]` is the head and there is always at least one segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Snek {
    segments: Vec<Pos>,
    direction: Direction,
    pending_teleport: Option<Pos>,
}

impl Snek {
    pub(crate) fn new(head: Pos, direction: Direction) -> Self {
        Snek {
            segments: vec![head],
            direction,
            pending_teleport: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Pos>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snek needs a head");
        Snek {
            segments,
            direction,
            pending_teleport: None,
        }
    }

    pub(crate) fn head(&self) -> Pos {
        self.segments[0]
    }

    pub(crate) fn segments(&self) -> &[Pos] {
        &self.segments
    }

    pub(crate) fn tail(&self) -> Pos {
        self.segments[self.segments.len() - 1]
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    #[cfg(test)]
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn pending_teleport(&self) -> Option<Pos> {
        self.pending_teleport
    }

    /// Turning straight back into the neck is ignored.
    pub(crate) fn change_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction && new_direction.opposite() != self.direction {
            self.direction = new_direction;
        }
    }

    /// Moves the head to `exit` on the next slither instead of stepping forward.
    pub(crate) fn teleport_to(&mut self, exit: Pos) {
        self.pending_teleport = Some(exit);
    }

    pub(crate) fn slither(&mut self, arena_size: Size) {
        let teleport = self.pending_teleport.take();

        // Tail first, so every segment reads its leader's old cell
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        self.segments[0] = match teleport {
            Some(exit) => exit,
            None => self.segments[0].wrapped_add(self.direction.into(), arena_size),
        };
    }

    /// Appends a copy of the tail; it peels off on the next slither.
    pub(crate) fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push(tail);
    }

    #[cfg(test)]
    pub(crate) fn occupies(&self, pos: Pos) -> bool {
        self.segments.iter().any(|segment| segment.box_contains(pos))
    }

    /// Whether the head sits on one of its own segments far enough back to count.
    pub(crate) fn bit_itself(&self) -> bool {
        let head = self.head();
        self.segments
            .iter()
            .skip(SELF_COLLISION_START_INDEX)
            .any(|segment| segment.box_contains(head))
    }

    /// Whether a jump left behind by a teleport is still travelling down the body.
    ///
    /// Neighbouring segments more than one cell apart are either an ordinary
    /// wrap across the arena edge (the two coordinates are exactly `0` and
    /// `extent - 1`) or teleport residue.
    pub(crate) fn has_teleport_gap(&self, arena_size: Size) -> bool {
        self.segments
            .windows(2)
            .any(|pair| is_teleport_residue(pair[0], pair[1], arena_size))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AxisGap {
    Adjacent,
    Wrap,
    Residue,
}

fn axis_gap(a: u16, b: u16, extent: u16) -> AxisGap {
    if a.abs_diff(b) <= 1 {
        AxisGap::Adjacent
    } else if a.min(b) == 0 && a.max(b) == extent - 1 {
        AxisGap::Wrap
    } else {
        AxisGap::Residue
    }
}

fn is_teleport_residue(a: Pos, b: Pos, arena_size: Size) -> bool {
    axis_gap(a.x, b.x, arena_size.width) == AxisGap::Residue
        || axis_gap(a.y, b.y, arena_size.height) == AxisGap::Residue
}
