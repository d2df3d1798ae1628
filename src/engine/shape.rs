use std::sync::OnceLock;

use super::coord::Offset;

/// Number of cells painted by a single aircraft placement (§3).
pub const AIRCRAFT_SIZE: usize = 10;

/// Number of distinct orientations an aircraft can be placed in.
pub const NUM_DIRECTIONS: usize = 4;

/// The canonical (direction 0) aircraft shape, anchored at its head.
/// The head is always the first offset and is always (0, 0).
const CANONICAL_BODY: [(isize, isize); AIRCRAFT_SIZE] = [
    (0, 0),
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (3, -1),
    (3, 0),
    (3, 1),
];

/// Precomputed body offsets for each of the four rotations (§4.1). Built
/// once and shared read-only by every caller and enumeration worker.
pub struct ShapeLibrary {
    bodies: [[Offset; AIRCRAFT_SIZE]; NUM_DIRECTIONS],
}

impl ShapeLibrary {
    /// The process-wide shape library, computed on first use.
    pub fn get() -> &'static ShapeLibrary {
        static LIBRARY: OnceLock<ShapeLibrary> = OnceLock::new();
        LIBRARY.get_or_init(ShapeLibrary::build)
    }

    fn build() -> ShapeLibrary {
        let mut bodies = [[Offset::new(0, 0); AIRCRAFT_SIZE]; NUM_DIRECTIONS];
        bodies[0] = CANONICAL_BODY.map(|(dx, dy)| Offset::new(dx, dy));
        for dir in 1..NUM_DIRECTIONS {
            let prev = bodies[dir - 1];
            bodies[dir] = prev.map(|offset| offset.rotate_cw());
        }
        ShapeLibrary { bodies }
    }

    /// The 10 body offsets (head first) for the given direction.
    pub fn body(&self, dir: usize) -> &[Offset; AIRCRAFT_SIZE] {
        &self.bodies[dir]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_is_rotation_invariant_anchor() {
        let lib = ShapeLibrary::get();
        for dir in 0..NUM_DIRECTIONS {
            assert_eq!(lib.body(dir)[0], Offset::new(0, 0));
        }
    }

    #[test]
    fn four_rotations_return_to_the_canonical_shape() {
        let lib = ShapeLibrary::get();
        let mut offset = lib.body(0)[1];
        for _ in 0..4 {
            offset = offset.rotate_cw();
        }
        assert_eq!(offset, lib.body(0)[1]);
    }

    #[test]
    fn direction_one_is_a_clockwise_rotation_of_direction_zero() {
        let lib = ShapeLibrary::get();
        for i in 0..AIRCRAFT_SIZE {
            assert_eq!(lib.body(1)[i], lib.body(0)[i].rotate_cw());
        }
    }

    #[test]
    fn every_direction_has_ten_distinct_offsets() {
        let lib = ShapeLibrary::get();
        for dir in 0..NUM_DIRECTIONS {
            let body = lib.body(dir);
            for i in 0..body.len() {
                for j in (i + 1)..body.len() {
                    assert_ne!(body[i], body[j], "dir {dir} has duplicate offsets");
                }
            }
        }
    }
}
