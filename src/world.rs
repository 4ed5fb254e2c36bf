use crate::config::*;
use crate::types::Rect;
use ::rand::Rng;
use macroquad::math::Vec2;

// The fixed maze: four alternating walls and a bar across the top.
const BLOCKADES: [Rect; 5] = [
    Rect::new(100.0, 0.0, 20.0, 400.0),
    Rect::new(300.0, 200.0, 20.0, 400.0),
    Rect::new(500.0, 0.0, 20.0, 400.0),
    Rect::new(700.0, 200.0, 20.0, 400.0),
    Rect::new(200.0, 500.0, 400.0, 20.0),
];

/// Returns the fixed maze layout.
pub fn build_blockades() -> Vec<Rect> {
    BLOCKADES.to_vec()
}

// Static layout of the playfield: its size and the blockades inside it.
// World coordinates are y-up with the origin at the lower-left corner.
#[derive(Debug, Clone)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub blockades: Vec<Rect>,
}

impl World {
    pub fn new() -> Self {
        World {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            blockades: build_blockades(),
        }
    }

    /// A world with custom blockades, mostly useful for tests.
    pub fn with_blockades(blockades: Vec<Rect>) -> Self {
        World {
            blockades,
            ..Self::new()
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    // Checks whether a circle's inflated bounds overlap any blockade
    pub fn is_blocked(&self, position: Vec2, radius: f32) -> bool {
        self.blockades
            .iter()
            .any(|b| b.overlaps_circle_bounds(position, radius))
    }

    /// Uniform random point inside the playfield inset by `SPAWN_MARGIN`.
    /// Blockades are not considered.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.gen_range(SPAWN_MARGIN..self.width - SPAWN_MARGIN),
            rng.gen_range(SPAWN_MARGIN..self.height - SPAWN_MARGIN),
        )
    }

    /// Rejection-samples a point whose radius-inflated bounds clear every
    /// blockade. Falls back to the playfield center when all attempts fail.
    pub fn find_safe_point<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        radius: f32,
        max_attempts: usize,
    ) -> Vec2 {
        for _ in 0..max_attempts {
            let candidate = self.random_point(rng);
            if !self.is_blocked(candidate, radius) {
                return candidate;
            }
        }
        log::warn!(
            "No safe point found for radius {:.1} after {} attempts, using center",
            radius,
            max_attempts
        );
        self.center()
    }

    /// Samples safe points and keeps the one farthest from `from`.
    /// This approximates "spawn far from the goal"; it is not a true
    /// farthest-point search.
    pub fn find_far_safe_point<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        radius: f32,
        from: Vec2,
        candidates: usize,
    ) -> Vec2 {
        let mut best = self.find_safe_point(rng, radius, SAFE_POINT_ATTEMPTS);
        let mut best_distance = 0.0;
        for _ in 0..candidates {
            let candidate = self.find_safe_point(rng, radius, SAFE_POINT_ATTEMPTS);
            let distance = candidate.distance(from);
            if distance > best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
        best
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_blockade_layout_is_fixed() {
        let first = build_blockades();
        let second = build_blockades();
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        assert_eq!(first[4], Rect::new(200.0, 500.0, 400.0, 20.0));
    }

    #[test]
    fn test_is_blocked() {
        let world = World::new();
        // Inside the first wall
        assert!(world.is_blocked(Vec2::new(110.0, 100.0), 1.0));
        // Open water between the first two walls
        assert!(!world.is_blocked(Vec2::new(200.0, 100.0), 18.0));
        // Radius reaches the wall
        assert!(world.is_blocked(Vec2::new(140.0, 100.0), 21.0));
    }

    #[test]
    fn test_random_point_stays_inside_margin() {
        let world = World::new();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = world.random_point(&mut rng);
            assert!(p.x >= SPAWN_MARGIN && p.x < world.width - SPAWN_MARGIN);
            assert!(p.y >= SPAWN_MARGIN && p.y < world.height - SPAWN_MARGIN);
        }
    }

    #[test]
    fn test_find_safe_point_avoids_blockades() {
        let world = World::new();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let p = world.find_safe_point(&mut rng, PLAYER_RADIUS + 5.0, SAFE_POINT_ATTEMPTS);
            assert!(!world.is_blocked(p, PLAYER_RADIUS + 5.0));
        }
    }

    #[test]
    fn test_find_safe_point_falls_back_to_center() {
        // One blockade covering the whole playfield leaves nowhere to stand
        let world = World::with_blockades(vec![Rect::new(0.0, 0.0, 800.0, 600.0)]);
        let mut rng = Pcg32::seed_from_u64(1);
        let p = world.find_safe_point(&mut rng, 10.0, 50);
        assert_eq!(p, world.center());

        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(world.find_safe_point(&mut rng, 10.0, 0), world.center());
    }

    #[test]
    fn test_find_far_safe_point_prefers_distance() {
        let world = World::new();
        let door = Vec2::new(60.0, 60.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let far = world.find_far_safe_point(&mut rng, PLAYER_RADIUS, door, FAR_POINT_CANDIDATES);
        assert!(!world.is_blocked(far, PLAYER_RADIUS));
        // With 200 candidates the winner should be well across the playfield
        assert!(far.distance(door) > 400.0, "far point too close: {:?}", far);
    }
}
