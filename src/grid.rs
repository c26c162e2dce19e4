//! Cell geometry on a wrap-around grid
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Size {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Size {
    /// Reduces each coordinate modulo the grid extent (torus topology).
    pub(crate) fn wrap(&self, x: i32, y: i32) -> Pos {
        Pos {
            x: x.rem_euclid(i32::from(self.width)) as u16,
            y: y.rem_euclid(i32::from(self.height)) as u16,
        }
    }

    /// Draws a cell uniformly from `[0, width] x [0, height]` and pulls any
    /// draw on the (out of range) upper boundary one cell back inside.
    pub(crate) fn sample_cell(&self, rng: &mut impl Rng) -> Pos {
        Pos {
            x: pull_inside(rng.gen_range(0..=self.width), self.width),
            y: pull_inside(rng.gen_range(0..=self.height), self.height),
        }
    }
}

fn pull_inside(value: u16, extent: u16) -> u16 {
    if value >= extent {
        extent - 1
    } else {
        value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub(crate) fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Pos {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PosDelta {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => PosDelta { x: 0, y: -1 },
            Direction::South => PosDelta { x: 0, y: 1 },
            Direction::East => PosDelta { x: 1, y: 0 },
            Direction::West => PosDelta { x: -1, y: 0 },
        }
    }
}

impl Pos {
    pub(crate) const fn new(x: u16, y: u16) -> Pos {
        Pos { x, y }
    }

    pub(crate) fn wrapped_add(&self, delta: PosDelta, size: Size) -> Pos {
        size.wrap(i32::from(self.x) + delta.x, i32::from(self.y) + delta.y)
    }

    /// Whether `point` falls inside the unit box whose top-left corner is this cell.
    ///
    /// Every entity sits on whole cells, so in practice this is equality.
    pub(crate) fn box_contains(&self, point: Pos) -> bool {
        let (left, top) = (u32::from(self.x), u32::from(self.y));
        let (px, py) = (u32::from(point.x), u32::from(point.y));
        (left..left + 1).contains(&px) && (top..top + 1).contains(&py)
    }
}
