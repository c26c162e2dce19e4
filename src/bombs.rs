use crate::consts::SEGMENTS_PER_BOMB;
use crate::grid::{Pos, Size};
use crate::placement::{place, PlacementError};
use rand::Rng;
use std::collections::HashSet;

/// Hazard cells. Their number follows the snake's length and never goes down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Bombs {
    cells: Vec<Pos>,
}

impl Bombs {
    pub(crate) fn target_count(snek_len: usize) -> usize {
        snek_len / SEGMENTS_PER_BOMB
    }

    pub(crate) fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Places bombs until there are `target` of them. Each new bomb is
    /// added to `occupied` before the next one is placed.
    ///
    /// Returns how many were added.
    pub(crate) fn resize(
        &mut self,
        target: usize,
        arena_size: Size,
        occupied: &mut HashSet<Pos>,
        rng: &mut impl Rng,
    ) -> Result<usize, PlacementError> {
        let mut added = 0;
        while self.cells.len() < target {
            let pos = place(arena_size, occupied, rng)?;
            occupied.insert(pos);
            self.cells.push(pos);
            added += 1;
        }
        Ok(added)
    }

    pub(crate) fn hit(&self, head: Pos) -> bool {
        self.cells.iter().any(|bomb| bomb.box_contains(head))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const ARENA: Size = Size {
        width: 10,
        height: 10,
    };

    #[test]
    fn test_target_count_scales_with_length() {
        assert_eq!(Bombs::target_count(1), 0);
        assert_eq!(Bombs::target_count(4), 0);
        assert_eq!(Bombs::target_count(5), 1);
        assert_eq!(Bombs::target_count(9), 1);
        assert_eq!(Bombs::target_count(10), 2);
    }

    #[test]
    fn test_resize_never_shrinks() {
        let mut bombs = Bombs::default();
        let mut occupied = HashSet::from([Pos::new(0, 0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        assert_eq!(bombs.resize(3, ARENA, &mut occupied, &mut rng), Ok(3));
        let placed = bombs.cells().to_vec();

        assert_eq!(bombs.resize(1, ARENA, &mut occupied, &mut rng), Ok(0));
        assert_eq!(bombs.cells(), placed.as_slice());

        assert_eq!(bombs.resize(4, ARENA, &mut occupied, &mut rng), Ok(1));
        assert_eq!(&bombs.cells()[..3], placed.as_slice());
    }

    #[test]
    fn test_new_bombs_avoid_each_other_and_occupied() {
        let mut bombs = Bombs::default();
        let mut occupied: HashSet<Pos> = (0..10).map(|x| Pos::new(x, 0)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        bombs.resize(20, ARENA, &mut occupied, &mut rng).unwrap();

        let unique: HashSet<Pos> = bombs.cells().iter().copied().collect();
        assert_eq!(unique.len(), 20);
        assert!(bombs.cells().iter().all(|bomb| bomb.y != 0));
        assert_eq!(occupied.len(), 30);
    }

    #[test]
    fn test_hit() {
        let mut bombs = Bombs::default();
        let mut occupied = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        bombs.resize(1, ARENA, &mut occupied, &mut rng).unwrap();

        let bomb = bombs.cells()[0];
        assert!(bombs.hit(bomb));
        assert!(!bombs.hit(Pos::new((bomb.x + 1) % 10, bomb.y)));
    }
}
