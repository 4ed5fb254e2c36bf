use crate::assets::Textures;
use crate::config::{MAX_OXYGEN, OXYGEN_BAR_WIDTH, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::particles::{Particle, ParticleKind};
use crate::session::Session;
use crate::types::{Phase, Rect};
use crate::utils;
use macroquad::prelude::*;

const BACKGROUND: Color = Color::new(0.02, 0.12, 0.22, 1.0);
const BLOCKADE_COLOR: Color = Color::new(0.5, 0.3, 0.1, 1.0);
const BAR_TRACK_COLOR: Color = Color::new(0.4, 0.4, 0.4, 1.0);
const WARNING_RED: Color = Color::new(1.0, 0.2, 0.2, 1.0);
const WIN_GREEN: Color = Color::new(0.2, 1.0, 0.2, 1.0);
const BURST_TINT: Color = Color::new(1.0, 0.55, 0.3, 1.0);

const WAVE_BAND_HEIGHT: f32 = 4.0;
const HUD_FONT_SIZE: u16 = 18;
const INSTRUCTION_FONT_SIZE: u16 = 16;
const BAR_HEIGHT: f32 = 12.0;
const BAR_TOP: f32 = 60.0;

// World space is y-up, the screen is y-down
fn to_screen(p: Vec2) -> Vec2 {
    Vec2::new(p.x, PLAYFIELD_HEIGHT - p.y)
}

// Screen-space top-left corner of a world rectangle
fn rect_to_screen(rect: &Rect) -> Vec2 {
    Vec2::new(rect.x, PLAYFIELD_HEIGHT - rect.top())
}

/// Vertical displacement of a background band at world height `y`.
fn wave_offset(time: f32, y: f32) -> f32 {
    (time * 2.0 + y * 0.05).sin() * 10.0
}

fn band_color(time: f32, y: f32) -> Color {
    Color::new(0.0, 0.1 + y * 0.0006, 0.3 + (time + y * 0.01).sin() * 0.05, 1.0)
}

/// Shifts from green when empty toward red when full.
fn oxygen_bar_color(ratio: f32) -> Color {
    let p = utils::clamp(ratio, 0.0, 1.0);
    Color::new(utils::lerp(0.1, 0.7, p), utils::lerp(0.7, 0.1, p), 0.1, 1.0)
}

// Half-extent of a particle sprite; grows as it fades
fn particle_half_size(alpha: f32) -> f32 {
    3.0 + 1.5 * (1.0 - alpha)
}

// Handles rendering the session state using macroquad
pub struct Renderer {
    textures: Textures,
}

impl Renderer {
    pub fn new(textures: Textures) -> Self {
        Renderer { textures }
    }

    /// Draws one frame. `time` is the wall clock in seconds and only drives
    /// the background animation.
    pub fn draw_frame(&self, session: &Session, time: f32) {
        clear_background(BACKGROUND);
        Self::draw_water_background(time);
        Self::draw_blockades(&session.world.blockades);

        if session.door.active {
            self.draw_sprite(&self.textures.door, session.door.position, session.door.radius, 0.0, WHITE);
        }
        for tank in session.tanks.iter().filter(|t| t.active) {
            self.draw_sprite(&self.textures.tank, tank.position, tank.radius, 0.0, WHITE);
        }
        for hazard in session.hazards.iter().filter(|h| h.active) {
            self.draw_sprite(&self.textures.hazard, hazard.position, hazard.radius, 0.0, WHITE);
        }

        let player = &session.player;
        let heading = utils::heading_degrees(player.velocity);
        self.draw_sprite(&self.textures.submarine, player.position, player.radius, heading, WHITE);

        for particle in session.particles.iter() {
            self.draw_particle(particle);
        }

        Self::draw_hud(session);
        Self::draw_instructions();
        if session.show_hurry() {
            draw_text_ex(
                "HURRY!",
                PLAYFIELD_WIDTH / 2.0 - 40.0,
                100.0,
                TextParams {
                    font_size: 24,
                    color: WARNING_RED,
                    ..Default::default()
                },
            );
        }
        Self::draw_banners(session.phase);
    }

    fn draw_water_background(time: f32) {
        let mut y = 0.0;
        while y < PLAYFIELD_HEIGHT {
            let wave = wave_offset(time, y);
            let top = PLAYFIELD_HEIGHT - (y + WAVE_BAND_HEIGHT + wave);
            draw_rectangle(0.0, top, PLAYFIELD_WIDTH, WAVE_BAND_HEIGHT, band_color(time, y));
            y += WAVE_BAND_HEIGHT;
        }
    }

    fn draw_blockades(blockades: &[Rect]) {
        for blockade in blockades {
            let corner = rect_to_screen(blockade);
            draw_rectangle(corner.x, corner.y, blockade.width, blockade.height, BLOCKADE_COLOR);
        }
    }

    // Draws a square sprite centered on a world position.
    // `heading_degrees` is counter-clockwise in world space.
    fn draw_sprite(&self, texture: &Texture2D, position: Vec2, half_size: f32, heading_degrees: f32, tint: Color) {
        let center = to_screen(position);
        draw_texture_ex(
            texture,
            center.x - half_size,
            center.y - half_size,
            tint,
            DrawTextureParams {
                dest_size: Some(Vec2::splat(half_size * 2.0)),
                // Screen rotation is clockwise because y points down
                rotation: -heading_degrees.to_radians(),
                ..Default::default()
            },
        );
    }

    fn draw_particle(&self, particle: &Particle) {
        let alpha = particle.alpha();
        let base = match particle.kind {
            ParticleKind::Bubble => WHITE,
            ParticleKind::Burst => BURST_TINT,
        };
        let tint = Color::new(base.r, base.g, base.b, alpha);
        self.draw_sprite(
            &self.textures.bubble,
            particle.position,
            particle_half_size(alpha),
            0.0,
            tint,
        );
    }

    fn draw_hud(session: &Session) {
        let params = TextParams {
            font_size: HUD_FONT_SIZE,
            color: WHITE,
            ..Default::default()
        };
        let oxygen = session.player.oxygen;
        draw_text_ex(&format!("Oxygen: {}", oxygen as i32), 12.0, 22.0, params.clone());
        draw_text_ex(&format!("Score: {}", session.score), 12.0, 44.0, params.clone());
        draw_text_ex(
            &format!("Time Left: {}s", session.time_remaining as i32),
            PLAYFIELD_WIDTH - 220.0,
            28.0,
            params,
        );

        let ratio = oxygen / MAX_OXYGEN;
        draw_rectangle(12.0, BAR_TOP, OXYGEN_BAR_WIDTH, BAR_HEIGHT, BAR_TRACK_COLOR);
        draw_rectangle(
            12.0,
            BAR_TOP,
            OXYGEN_BAR_WIDTH * utils::clamp(ratio, 0.0, 1.0),
            BAR_HEIGHT,
            oxygen_bar_color(ratio),
        );
    }

    fn draw_instructions() {
        let params = TextParams {
            font_size: INSTRUCTION_FONT_SIZE,
            color: WHITE,
            ..Default::default()
        };
        let lines = [
            (120.0, "Press U - up"),
            (100.0, "Press D - down"),
            (80.0, "Press L - left"),
            (60.0, "Press R - right"),
            (30.0, "Touch door to Win!"),
        ];
        for (world_y, line) in lines {
            draw_text_ex(line, 3.0, PLAYFIELD_HEIGHT - world_y, params.clone());
        }
    }

    fn draw_banners(phase: Phase) {
        match phase {
            Phase::Paused => Self::draw_centered("PAUSED", 400.0, 28, WHITE),
            Phase::Lost(_) => {
                Self::draw_centered("GAME OVER", 260.0, 56, WARNING_RED);
                Self::draw_centered("PRESS R TO RESTART", 310.0, 26, WHITE);
            }
            Phase::Won => {
                Self::draw_centered("YOU WIN!", 270.0, 60, WIN_GREEN);
                Self::draw_centered("PRESS R TO RESTART", 310.0, 26, WHITE);
            }
            Phase::Playing => {}
        }
    }

    fn draw_centered(text: &str, baseline: f32, font_size: u16, color: Color) {
        let dims = measure_text(text, None, font_size, 1.0);
        draw_text_ex(
            text,
            (PLAYFIELD_WIDTH - dims.width) / 2.0,
            baseline,
            TextParams {
                font_size,
                color,
                ..Default::default()
            },
        );
    }
}
