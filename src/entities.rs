use crate::config::*;
use crate::world::World;
use ::rand::Rng;
use macroquad::math::Vec2;

// The player's submarine
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub oxygen: f32,    // Always within [0, MAX_OXYGEN]
    pub collected: u32, // Tanks picked up this session
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Player {
            position,
            velocity: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            oxygen: MAX_OXYGEN,
            collected: 0,
        }
    }

    /// Adds oxygen, saturating at `MAX_OXYGEN`.
    pub fn refill(&mut self, amount: f32) {
        self.oxygen = (self.oxygen + amount).min(MAX_OXYGEN);
    }

    pub fn oxygen_ratio(&self) -> f32 {
        self.oxygen / MAX_OXYGEN
    }
}

// Collectible oxygen tank. Slots are deactivated on pickup, never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Tank {
    pub position: Vec2,
    pub value: f32,
    pub radius: f32,
    pub active: bool,
}

impl Tank {
    pub fn new(position: Vec2) -> Self {
        Tank {
            position,
            value: TANK_VALUE,
            radius: TANK_RADIUS,
            active: true,
        }
    }
}

// Drifting hazard that bounces off the playfield edges
#[derive(Debug, Clone, PartialEq)]
pub struct Hazard {
    pub position: Vec2,
    pub velocity: Vec2, // Unit-ish direction, scaled by HAZARD_SPEED when moving
    pub damage: f32,
    pub radius: f32,
    pub active: bool,
}

impl Hazard {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Hazard {
            position,
            velocity,
            damage: HAZARD_DAMAGE,
            radius: HAZARD_RADIUS,
            active: true,
        }
    }

    /// Moves the hazard and reflects each axis independently once it has
    /// crossed the edge margin.
    pub fn advance(&mut self, dt: f32, width: f32, height: f32) {
        self.position += self.velocity * HAZARD_SPEED * dt;
        if self.position.x < HAZARD_EDGE_MARGIN || self.position.x > width - HAZARD_EDGE_MARGIN {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < HAZARD_EDGE_MARGIN || self.position.y > height - HAZARD_EDGE_MARGIN {
            self.velocity.y = -self.velocity.y;
        }
    }
}

// The exit. Touching it is the only way to win.
#[derive(Debug, Clone, PartialEq)]
pub struct ExitDoor {
    pub position: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl ExitDoor {
    pub fn new(position: Vec2) -> Self {
        ExitDoor {
            position,
            radius: DOOR_RADIUS,
            active: true,
        }
    }
}

/// New tank at an unconstrained random point. It may land inside a blockade.
pub fn spawn_tank<R: Rng + ?Sized>(rng: &mut R, world: &World) -> Tank {
    Tank::new(world.random_point(rng))
}

/// New hazard at an unconstrained random point with velocity
/// components in `[-1, 1]` at a 0.01 step.
pub fn spawn_hazard<R: Rng + ?Sized>(rng: &mut R, world: &World) -> Hazard {
    let position = world.random_point(rng);
    let velocity = Vec2::new(
        rng.gen_range(-100..=100) as f32 / 100.0,
        rng.gen_range(-100..=100) as f32 / 100.0,
    );
    Hazard::new(position, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_player_defaults() {
        let player = Player::new(Vec2::new(100.0, 100.0));
        assert_eq!(player.velocity, Vec2::ZERO);
        assert_approx_eq!(player.oxygen, MAX_OXYGEN);
        assert_approx_eq!(player.radius, 18.0);
        assert_eq!(player.collected, 0);
    }

    #[test]
    fn test_player_refill_saturates() {
        let mut player = Player::new(Vec2::ZERO);
        player.oxygen = 145.0;
        player.refill(TANK_VALUE);
        assert_approx_eq!(player.oxygen, MAX_OXYGEN);

        player.oxygen = 20.0;
        player.refill(TANK_VALUE);
        assert_approx_eq!(player.oxygen, 30.0);
        assert_approx_eq!(player.oxygen_ratio(), 0.2);
    }

    #[test]
    fn test_spawned_entities_use_defaults() {
        let world = World::new();
        let mut rng = Pcg32::seed_from_u64(11);

        let tank = spawn_tank(&mut rng, &world);
        assert!(tank.active);
        assert_approx_eq!(tank.value, 10.0);
        assert_approx_eq!(tank.radius, 12.0);

        for _ in 0..100 {
            let hazard = spawn_hazard(&mut rng, &world);
            assert!(hazard.active);
            assert_approx_eq!(hazard.damage, 30.0);
            assert_approx_eq!(hazard.radius, 14.0);
            assert!(hazard.velocity.x.abs() <= 1.0);
            assert!(hazard.velocity.y.abs() <= 1.0);
        }
    }

    #[test]
    fn test_hazard_advances_at_scaled_speed() {
        let mut hazard = Hazard::new(Vec2::new(400.0, 300.0), Vec2::new(0.5, -1.0));
        hazard.advance(0.1, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
        assert_approx_eq!(hazard.position.x, 403.0);
        assert_approx_eq!(hazard.position.y, 294.0);
        assert_eq!(hazard.velocity, Vec2::new(0.5, -1.0));
    }

    #[test]
    fn test_hazard_reflects_off_edges() {
        let mut hazard = Hazard::new(Vec2::new(12.0, 588.0), Vec2::new(-1.0, 1.0));
        hazard.advance(0.1, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
        // Crossed both margins in one step
        assert_approx_eq!(hazard.velocity.x, 1.0);
        assert_approx_eq!(hazard.velocity.y, -1.0);
    }
}
