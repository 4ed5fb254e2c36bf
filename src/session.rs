use crate::config::*;
use crate::entities::{self, ExitDoor, Hazard, Player, Tank};
use crate::particles::ParticleSystem;
use crate::types::{GameEvent, InputState, LossReason, Phase};
use crate::utils::{self, circles_collide};
use crate::world::World;
use log::info;
use macroquad::math::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// All mutable state of one play-through. The presentation layer borrows
/// it read-only after each tick; nothing here touches the window.
#[derive(Debug, Clone)]
pub struct Session {
    pub world: World,
    pub player: Player,
    pub tanks: Vec<Tank>,
    pub hazards: Vec<Hazard>,
    pub door: ExitDoor,
    pub particles: ParticleSystem,
    pub score: i32,
    pub time_remaining: f32,
    pub phase: Phase,
    pub hurry_visible: bool,
    hurry_accumulator: f32,
    alarm_accumulator: f32,
    tank_timer: f32,
    hazard_timer: f32,
    tick_count: u64,
    rng: Pcg32,
}

impl Session {
    pub fn with_seed(seed: u64) -> Self {
        Self::with_world(World::new(), seed)
    }

    pub fn with_world(world: World, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (door, player) = Self::place_door_and_player(&world, &mut rng);
        let session = Session {
            world,
            player,
            tanks: Vec::new(),
            hazards: Vec::new(),
            door,
            particles: ParticleSystem::new(),
            score: 0,
            time_remaining: GAME_TIME,
            phase: Phase::Playing,
            hurry_visible: true,
            hurry_accumulator: 0.0,
            alarm_accumulator: 0.0,
            tank_timer: 0.0,
            hazard_timer: 0.0,
            tick_count: 0,
            rng,
        };
        session.log_start();
        session
    }

    // The door goes first so the player can be placed far away from it
    fn place_door_and_player(world: &World, rng: &mut Pcg32) -> (ExitDoor, Player) {
        let door_position =
            world.find_safe_point(rng, DOOR_RADIUS + DOOR_SPAWN_CLEARANCE, SAFE_POINT_ATTEMPTS);
        let player_position = world.find_far_safe_point(
            rng,
            PLAYER_RADIUS + PLAYER_SPAWN_CLEARANCE,
            door_position,
            FAR_POINT_CANDIDATES,
        );
        (ExitDoor::new(door_position), Player::new(player_position))
    }

    fn log_start(&self) {
        info!(
            "Session started: player at ({:.0}, {:.0}), exit door at ({:.0}, {:.0})",
            self.player.position.x,
            self.player.position.y,
            self.door.position.x,
            self.door.position.y
        );
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// True whenever the simulation is frozen: paused, lost or won.
    pub fn is_paused(&self) -> bool {
        self.phase != Phase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Whether the "HURRY!" banner should be drawn this frame.
    pub fn show_hurry(&self) -> bool {
        self.time_remaining > 0.0 && self.time_remaining <= LOW_TIME_THRESHOLD && self.hurry_visible
    }

    /// Playing and Paused swap; terminal phases ignore the toggle.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            terminal => terminal,
        };
        crate::debug_input!(self.tick_count, "Pause toggled, phase now {:?}", self.phase);
    }

    /// Rebuilds the session when it has ended. Returns false and leaves the
    /// state untouched while the session is still running or paused.
    pub fn restart(&mut self) -> bool {
        if !self.phase.is_terminal() {
            return false;
        }
        info!("Restarting session");
        self.reset();
        true
    }

    fn reset(&mut self) {
        let (door, player) = Self::place_door_and_player(&self.world, &mut self.rng);
        self.door = door;
        self.player = player;
        self.tanks.clear();
        self.hazards.clear();
        self.particles.clear();
        self.score = 0;
        self.time_remaining = GAME_TIME;
        self.phase = Phase::Playing;
        self.hurry_visible = true;
        self.hurry_accumulator = 0.0;
        self.alarm_accumulator = 0.0;
        self.tank_timer = 0.0;
        self.hazard_timer = 0.0;
        self.tick_count = 0;
        self.log_start();
    }

    /// Advances the simulation by `dt` seconds. Does nothing unless the
    /// session is playing. Returns what happened for audio and logging.
    pub fn tick(&mut self, dt: f32, input: &InputState) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Playing {
            return events;
        }
        let dt = utils::clamp(dt, 0.0, MAX_TICK_DT);
        self.tick_count += 1;

        self.update_countdown(dt, &mut events);
        self.update_low_time_alert(dt, &mut events);
        self.drain_oxygen(dt, &mut events);
        self.move_player(dt, input);
        self.update_spawners(dt);
        self.move_hazards(dt);
        self.particles.update(dt);
        self.collect_tanks(&mut events);
        self.hit_hazards(&mut events);
        self.check_exit(&mut events);
        self.emit_ambient_bubble();

        events
    }

    fn update_countdown(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        self.time_remaining = (self.time_remaining - dt).max(0.0);
        if self.time_remaining <= 0.0 {
            self.lose(LossReason::TimeExpired, events);
        }
    }

    fn update_low_time_alert(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        if self.time_remaining > 0.0 && self.time_remaining < LOW_TIME_THRESHOLD {
            self.hurry_accumulator += dt;
            if self.hurry_accumulator >= HURRY_BLINK_PERIOD {
                self.hurry_visible = !self.hurry_visible;
                self.hurry_accumulator = 0.0;
            }
            self.alarm_accumulator += dt;
            if self.alarm_accumulator >= ALARM_PERIOD {
                self.alarm_accumulator -= ALARM_PERIOD;
                crate::debug_sim!(
                    self.tick_count,
                    "Low time alarm, {:.2}s left",
                    self.time_remaining
                );
                events.push(GameEvent::LowTimeAlarm);
            }
        } else {
            self.hurry_accumulator = 0.0;
            self.alarm_accumulator = 0.0;
            self.hurry_visible = true;
        }
    }

    fn drain_oxygen(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        let speed = self.player.velocity.x.abs() + self.player.velocity.y.abs();
        let drain = (BASE_OXYGEN_DRAIN + MOVE_OXYGEN_DRAIN * speed) * dt;
        self.player.oxygen = utils::clamp(self.player.oxygen - drain, 0.0, MAX_OXYGEN);
        if self.player.oxygen <= OXYGEN_DEPLETED {
            self.lose(LossReason::OxygenDepleted, events);
        }
    }

    fn move_player(&mut self, dt: f32, input: &InputState) {
        let acceleration = input.acceleration(PLAYER_ACCELERATION);
        self.player.velocity += acceleration * dt;
        // Per tick, so the effective drag depends on the frame rate
        self.player.velocity *= VELOCITY_DAMPING;

        let next = self.player.position + self.player.velocity * dt;
        if self.world.is_blocked(next, self.player.radius) {
            crate::debug_collision!(
                self.tick_count,
                "Move to ({:.1}, {:.1}) blocked",
                next.x,
                next.y
            );
        } else {
            self.player.position = next;
        }

        self.player.position = utils::clamp_vec(
            self.player.position,
            Vec2::splat(PLAYER_EDGE_MARGIN),
            Vec2::new(
                self.world.width - PLAYER_EDGE_MARGIN,
                self.world.height - PLAYER_EDGE_MARGIN,
            ),
        );
    }

    fn update_spawners(&mut self, dt: f32) {
        self.tank_timer += dt;
        self.hazard_timer += dt;

        if self.tank_timer > TANK_SPAWN_INTERVAL {
            let tank = entities::spawn_tank(&mut self.rng, &self.world);
            crate::debug_spawn!(
                self.tick_count,
                "Tank spawned at ({:.0}, {:.0})",
                tank.position.x,
                tank.position.y
            );
            self.tanks.push(tank);
            self.tank_timer = 0.0;
        }
        if self.hazard_timer > HAZARD_SPAWN_INTERVAL {
            let hazard = entities::spawn_hazard(&mut self.rng, &self.world);
            crate::debug_spawn!(
                self.tick_count,
                "Hazard spawned at ({:.0}, {:.0}) heading ({:.2}, {:.2})",
                hazard.position.x,
                hazard.position.y,
                hazard.velocity.x,
                hazard.velocity.y
            );
            self.hazards.push(hazard);
            self.hazard_timer = 0.0;
        }
    }

    fn move_hazards(&mut self, dt: f32) {
        let (width, height) = (self.world.width, self.world.height);
        for hazard in self.hazards.iter_mut().filter(|h| h.active) {
            hazard.advance(dt, width, height);
        }
    }

    fn collect_tanks(&mut self, events: &mut Vec<GameEvent>) {
        let player = &mut self.player;
        for tank in self.tanks.iter_mut().filter(|t| t.active) {
            if !circles_collide(player.position, player.radius, tank.position, tank.radius) {
                continue;
            }
            tank.active = false;
            player.refill(tank.value);
            player.collected += 1;
            self.score += TANK_SCORE;
            self.particles.spawn_pickup_bubbles(&mut self.rng, tank.position);
            crate::debug_collision!(
                self.tick_count,
                "Tank collected, oxygen {:.1}, score {}",
                player.oxygen,
                self.score
            );
            events.push(GameEvent::TankCollected {
                position: tank.position,
            });
        }
    }

    fn hit_hazards(&mut self, events: &mut Vec<GameEvent>) {
        for i in 0..self.hazards.len() {
            let hazard = &mut self.hazards[i];
            if !hazard.active
                || !circles_collide(
                    self.player.position,
                    self.player.radius,
                    hazard.position,
                    hazard.radius,
                )
            {
                continue;
            }
            hazard.active = false;
            let position = hazard.position;
            self.player.oxygen -= hazard.damage;
            self.score -= HAZARD_PENALTY;
            self.particles.spawn_hazard_burst(&mut self.rng, position);

            let oxygen_after = self.player.oxygen;
            crate::debug_collision!(
                self.tick_count,
                "Hazard hit, oxygen {:.1}, score {}",
                oxygen_after,
                self.score
            );
            events.push(GameEvent::HazardHit {
                position,
                oxygen_after,
            });
            if oxygen_after <= 0.0 {
                self.lose(LossReason::OxygenDepleted, events);
            }
        }
        // Several hits may stack below zero within one tick
        self.player.oxygen = self.player.oxygen.max(0.0);
    }

    fn check_exit(&mut self, events: &mut Vec<GameEvent>) {
        // Reaching the door wins even if time or air ran out earlier this tick
        if !self.door.active {
            return;
        }
        if circles_collide(
            self.player.position,
            self.player.radius,
            self.door.position,
            self.door.radius,
        ) {
            self.door.active = false;
            self.phase = Phase::Won;
            info!("YOU WIN! Congratulations!");
            self.log_summary();
            events.push(GameEvent::Won);
        }
    }

    fn emit_ambient_bubble(&mut self) {
        if self.rng.gen_range(0..AMBIENT_BUBBLE_ODDS) == 0 {
            let position = Vec2::new(
                self.player.position.x - self.player.radius - AMBIENT_BUBBLE_OFFSET,
                self.player.position.y,
            );
            self.particles.spawn_ambient_bubble(&mut self.rng, position);
        }
    }

    // The first loss reason sticks; only the exit door can override it
    fn lose(&mut self, reason: LossReason, events: &mut Vec<GameEvent>) {
        if self.phase != Phase::Playing {
            return;
        }
        self.phase = Phase::Lost(reason);
        match reason {
            LossReason::TimeExpired => info!("GAME OVER: time ran out"),
            LossReason::OxygenDepleted => info!("GAME OVER: oxygen depleted"),
        }
        self.log_summary();
        events.push(GameEvent::Lost(reason));
    }

    fn log_summary(&self) {
        info!(
            "Session summary: {:?}, score {}, tanks collected {}, {:.1}s left",
            self.phase, self.score, self.player.collected, self.time_remaining
        );
    }
}
