//! Oxygen Survival Maze: steer a submarine through a fixed maze, collect
//! oxygen tanks, dodge drifting hazards and reach the exit before the air
//! or the clock runs out.
//!
//! The simulation (`session`, `world`, `entities`, `particles`) has no
//! window dependency and can be driven headless. `game`, `render`, `input`,
//! `audio` and `assets` wire it to macroquad.

pub mod assets;
pub mod audio;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod particles;
pub mod render;
pub mod session;
pub mod types;
pub mod utils;
pub mod world;
