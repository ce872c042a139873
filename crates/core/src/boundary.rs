//! Edge clamping for proposed element positions.
//!
//! Offsets are in screen space relative to each element's resting spot: +y is down.
//! Checks run bottom, top, then sides; each is independent so a corner hit applies
//! two corrections in the same tick.

use bevy::math::Vec2;
use bevy::prelude::Resource;
use lv_config::PhysicsSettings;

/// Distance kept between the floor and the bottom of the viewport.
pub const FLOOR_INSET: f32 = 200.0;
/// Fixed ceiling offset used while antigravity is on.
pub const CEILING_Y: f32 = -200.0;
/// Vertical speed kept after a ceiling hit (independent of bounce strength).
pub const CEILING_RETENTION: f32 = 0.5;
/// Distance kept between a side wall and the viewport half width.
pub const WALL_INSET: f32 = 100.0;
/// Horizontal speed kept after a wall hit.
pub const WALL_RETENTION: f32 = 0.8;

/// Current host viewport size in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Hidden / minimised hosts report zero sized viewports; those disable clamping.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn floor_y(&self) -> f32 {
        self.height - FLOOR_INSET
    }

    pub fn wall_x(&self) -> f32 {
        self.width / 2.0 - WALL_INSET
    }
}

/// Clamp `position` to the viewport edges and reflect `velocity` on contact.
pub fn resolve(
    position: Vec2,
    velocity: Vec2,
    viewport: Viewport,
    settings: &PhysicsSettings,
) -> (Vec2, Vec2) {
    if !viewport.is_usable() {
        return (position, velocity);
    }
    let (mut p, mut v) = (position, velocity);

    let max_y = viewport.floor_y();
    if p.y > max_y && settings.gravity_on {
        p.y = max_y;
        v.y = -v.y.abs() * settings.bounce_scale();
    }

    if p.y < CEILING_Y && settings.antigravity_on {
        p.y = CEILING_Y;
        v.y = v.y.abs() * CEILING_RETENTION;
    }

    // Walls apply whatever the force state.
    let max_x = viewport.wall_x();
    if p.x.abs() > max_x {
        p.x = sign(p.x) * max_x;
        v.x = -v.x * WALL_RETENTION;
    }

    (p, v)
}

// f32::signum maps 0.0 to 1.0; a centred element must stay centred.
fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn gravity(bounce: i32) -> PhysicsSettings {
        PhysicsSettings {
            gravity_on: true,
            bounce_strength: bounce,
            ..Default::default()
        }
    }

    fn antigravity(bounce: i32) -> PhysicsSettings {
        PhysicsSettings {
            antigravity_on: true,
            bounce_strength: bounce,
            ..Default::default()
        }
    }

    #[test]
    fn floor_bounce_scales_with_bounce_strength() {
        let vp = Viewport::new(1200.0, 800.0);
        let max_y = vp.floor_y();
        let (p, v) = resolve(Vec2::new(0.0, max_y + 10.0), Vec2::new(0.0, 10.0), vp, &gravity(70));
        assert_eq!(p.y, max_y);
        assert!(approx(v.y, -7.0), "vy={}", v.y);
    }

    #[test]
    fn floor_ignored_without_gravity() {
        let vp = Viewport::new(1200.0, 800.0);
        let below = Vec2::new(0.0, vp.floor_y() + 50.0);
        let (p, v) = resolve(below, Vec2::new(0.0, 10.0), vp, &antigravity(70));
        assert_eq!(p, below);
        assert_eq!(v.y, 10.0);
    }

    #[test]
    fn ceiling_bounce_uses_fixed_retention() {
        let vp = Viewport::new(1200.0, 800.0);
        for bounce in [0, 35, 70, 100] {
            let (p, v) =
                resolve(Vec2::new(0.0, -210.0), Vec2::new(0.0, -10.0), vp, &antigravity(bounce));
            assert_eq!(p.y, CEILING_Y);
            assert!(approx(v.y, 5.0), "bounce={bounce} vy={}", v.y);
        }
    }

    #[test]
    fn ceiling_ignored_without_antigravity() {
        let vp = Viewport::new(1200.0, 800.0);
        let (p, v) = resolve(Vec2::new(0.0, -400.0), Vec2::new(0.0, -10.0), vp, &gravity(70));
        assert_eq!(p.y, -400.0);
        assert_eq!(v.y, -10.0);
    }

    #[test]
    fn walls_always_reflect() {
        let vp = Viewport::new(1000.0, 800.0);
        let off = PhysicsSettings::default();
        let (p, v) = resolve(Vec2::new(450.0, 0.0), Vec2::new(10.0, 0.0), vp, &off);
        assert_eq!(p.x, 400.0);
        assert!(approx(v.x, -8.0));
        let (p, v) = resolve(Vec2::new(-420.0, 0.0), Vec2::new(-5.0, 0.0), vp, &off);
        assert_eq!(p.x, -400.0);
        assert!(approx(v.x, 4.0));
    }

    #[test]
    fn corner_applies_both_corrections() {
        let vp = Viewport::new(1000.0, 800.0);
        let (p, v) = resolve(Vec2::new(500.0, 700.0), Vec2::new(6.0, 12.0), vp, &gravity(50));
        assert_eq!(p, Vec2::new(400.0, 600.0));
        assert!(approx(v.x, -4.8));
        assert!(approx(v.y, -6.0));
    }

    #[test]
    fn unusable_viewport_skips_clamping() {
        let p0 = Vec2::new(5_000.0, 5_000.0);
        let v0 = Vec2::new(3.0, 3.0);
        for vp in [Viewport::new(0.0, 800.0), Viewport::new(1200.0, -1.0)] {
            assert_eq!(resolve(p0, v0, vp, &gravity(70)), (p0, v0));
        }
    }

    #[test]
    fn narrow_viewport_keeps_centre() {
        // wall_x is negative here; an element at x=0 must not be shoved sideways.
        let vp = Viewport::new(150.0, 800.0);
        let (p, _) = resolve(Vec2::ZERO, Vec2::ZERO, vp, &PhysicsSettings::default());
        assert_eq!(p.x, 0.0);
    }
}
