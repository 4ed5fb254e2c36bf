use macroquad::math::Vec2;

/// Axis-aligned rectangle in world units, anchored at its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// True when a circle's bounding box, inflated by `radius` around `center`,
    /// overlaps this rectangle. Touching edges do not count.
    pub fn overlaps_circle_bounds(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius > self.x
            && center.x - radius < self.right()
            && center.y + radius > self.y
            && center.y - radius < self.top()
    }
}

/// Level-triggered movement keys, sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Acceleration produced by the pressed keys. Opposite keys cancel.
    pub fn acceleration(&self, magnitude: f32) -> Vec2 {
        let mut acc = Vec2::ZERO;
        if self.up {
            acc.y += magnitude;
        }
        if self.down {
            acc.y -= magnitude;
        }
        if self.left {
            acc.x -= magnitude;
        }
        if self.right {
            acc.x += magnitude;
        }
        acc
    }
}

/// One-shot commands issued by the input driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Restart,
    Quit,
}

/// Why a session was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    TimeExpired,
    OxygenDepleted,
}

/// Session-level state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    Lost(LossReason),
    Won,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Lost(_) | Phase::Won)
    }
}

/// Things that happened during a tick that collaborators outside the
/// simulation may want to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Once-per-second alarm while the countdown is low.
    LowTimeAlarm,
    TankCollected { position: Vec2 },
    /// `oxygen_after` is the unclamped value right after the damage landed.
    HazardHit { position: Vec2, oxygen_after: f32 },
    Lost(LossReason),
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap_is_strict() {
        let rect = Rect::new(100.0, 0.0, 20.0, 400.0);
        // Circle whose inflated bounds end exactly at the left edge
        assert!(!rect.overlaps_circle_bounds(Vec2::new(90.0, 200.0), 10.0));
        assert!(rect.overlaps_circle_bounds(Vec2::new(90.5, 200.0), 10.0));
        // Above the top
        assert!(!rect.overlaps_circle_bounds(Vec2::new(110.0, 420.0), 20.0));
        assert!(rect.overlaps_circle_bounds(Vec2::new(110.0, 419.0), 20.0));
    }

    #[test]
    fn test_input_acceleration() {
        let input = InputState {
            up: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.acceleration(400.0), Vec2::new(400.0, 400.0));

        let opposed = InputState {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(opposed.acceleration(400.0), Vec2::ZERO);
        assert_eq!(InputState::default().acceleration(400.0), Vec2::ZERO);
    }

    #[test]
    fn test_phase_terminal() {
        assert!(!Phase::Playing.is_terminal());
        assert!(!Phase::Paused.is_terminal());
        assert!(Phase::Won.is_terminal());
        assert!(Phase::Lost(LossReason::TimeExpired).is_terminal());
    }
}
