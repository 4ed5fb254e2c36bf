//! Configuration constants for the oxygen maze game.

// Playfield and window
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const PLAYFIELD_WIDTH: f32 = WINDOW_WIDTH as f32;
pub const PLAYFIELD_HEIGHT: f32 = WINDOW_HEIGHT as f32;
pub const SPAWN_MARGIN: f32 = 50.0; // Random points are sampled this far inside the edges
pub const PLAYER_EDGE_MARGIN: f32 = 20.0; // Player position is clamped this far inside the edges
pub const HAZARD_EDGE_MARGIN: f32 = 10.0; // Hazards bounce when crossing this margin

// Session rules
pub const MAX_OXYGEN: f32 = 150.0;
pub const GAME_TIME: f32 = 20.0; // Countdown in seconds
pub const MAX_TICK_DT: f32 = 0.25; // Largest time step a single tick will integrate
pub const LOW_TIME_THRESHOLD: f32 = 10.0;
pub const HURRY_BLINK_PERIOD: f32 = 0.4;
pub const ALARM_PERIOD: f32 = 1.0;
pub const OXYGEN_DEPLETED: f32 = 0.01; // Oxygen at or below this ends the session

// Oxygen drain
pub const BASE_OXYGEN_DRAIN: f32 = 5.0; // Units per second while idle
pub const MOVE_OXYGEN_DRAIN: f32 = 0.02; // Extra units per second per unit of |vx|+|vy|

// Player physics
pub const PLAYER_RADIUS: f32 = 18.0;
pub const PLAYER_SPAWN_CLEARANCE: f32 = 5.0;
pub const PLAYER_ACCELERATION: f32 = 400.0; // Units/s² per pressed direction
pub const VELOCITY_DAMPING: f32 = 0.98; // Applied once per tick, not scaled by dt

// Spawning
pub const TANK_SPAWN_INTERVAL: f32 = 4.0;
pub const HAZARD_SPAWN_INTERVAL: f32 = 3.0;
pub const SAFE_POINT_ATTEMPTS: usize = 200;
pub const FAR_POINT_CANDIDATES: usize = 200;

// Entities
pub const TANK_VALUE: f32 = 10.0;
pub const TANK_RADIUS: f32 = 12.0;
pub const HAZARD_DAMAGE: f32 = 30.0;
pub const HAZARD_RADIUS: f32 = 14.0;
pub const HAZARD_SPEED: f32 = 60.0; // Scale applied to the hazard's unit velocity
pub const DOOR_RADIUS: f32 = 40.0;
pub const DOOR_SPAWN_CLEARANCE: f32 = 10.0;

// Scoring
pub const TANK_SCORE: i32 = 10;
pub const HAZARD_PENALTY: i32 = 50;

// Particles
pub const PICKUP_BUBBLES: usize = 8;
pub const HAZARD_BURST_PARTICLES: usize = 18;
pub const AMBIENT_BUBBLE_ODDS: u32 = 6; // One bubble every N ticks on average
pub const AMBIENT_BUBBLE_OFFSET: f32 = 6.0; // Distance behind the hull the bubbles appear

// Rendering
pub const FRAME_RATE: u32 = 60; // Target frame rate
pub const OXYGEN_BAR_WIDTH: f32 = 200.0;
