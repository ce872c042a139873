use serde::{Deserialize, Serialize};

/// Lowest accepted strength percentage.
pub const STRENGTH_MIN: i32 = 0;
/// Highest accepted strength percentage.
pub const STRENGTH_MAX: i32 = 100;

/// Clamp a raw slider / config value into the `0..=100` percentage range.
pub fn clamp_strength(n: i32) -> i32 {
    n.clamp(STRENGTH_MIN, STRENGTH_MAX)
}

/// User-facing force settings. This is the record the settings store persists.
///
/// Strengths are kept as plain integers so hand-edited files with out-of-range
/// values still load; every consumer goes through [`PhysicsSettings::gravity_scale`]
/// / [`PhysicsSettings::bounce_scale`] or [`PhysicsSettings::normalized`], which clamp.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity_on: bool,
    pub antigravity_on: bool,
    /// Percentage 0..=100 scaling both the gravity and the antigravity pull.
    pub gravity_strength: i32,
    /// Percentage 0..=100 of vertical speed kept on a floor bounce.
    pub bounce_strength: i32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity_on: false,
            antigravity_on: false,
            gravity_strength: 50,
            bounce_strength: 70,
        }
    }
}

impl PhysicsSettings {
    /// True while either force is enabled (the scheduler should be running).
    pub fn any_force(&self) -> bool {
        self.gravity_on || self.antigravity_on
    }

    /// Clamped gravity strength as a `0.0..=1.0` factor.
    pub fn gravity_scale(&self) -> f32 {
        clamp_strength(self.gravity_strength) as f32 / 100.0
    }

    /// Clamped bounce strength as a `0.0..=1.0` factor.
    pub fn bounce_scale(&self) -> f32 {
        clamp_strength(self.bounce_strength) as f32 / 100.0
    }

    /// Copy with strengths clamped and the on/off flags made mutually exclusive.
    /// When a stored record has both flags set, gravity wins.
    pub fn normalized(mut self) -> Self {
        self.gravity_strength = clamp_strength(self.gravity_strength);
        self.bounce_strength = clamp_strength(self.bounce_strength);
        if self.gravity_on && self.antigravity_on {
            self.antigravity_on = false;
        }
        self
    }

    /// Non-fatal warnings for suspicious values, prefixed with `prefix`.
    pub fn validate_into(&self, prefix: &str, w: &mut Vec<String>) {
        if self.gravity_on && self.antigravity_on {
            w.push(format!(
                "{prefix}gravity_on and {prefix}antigravity_on both set; antigravity will be cleared"
            ));
        }
        if clamp_strength(self.gravity_strength) != self.gravity_strength {
            w.push(format!(
                "{prefix}gravity_strength {} outside 0..100 -> clamped",
                self.gravity_strength
            ));
        }
        if clamp_strength(self.bounce_strength) != self.bounce_strength {
            w.push(format!(
                "{prefix}bounce_strength {} outside 0..100 -> clamped",
                self.bounce_strength
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_control_panel() {
        let s = PhysicsSettings::default();
        assert!(!s.gravity_on && !s.antigravity_on);
        assert_eq!(s.gravity_strength, 50);
        assert_eq!(s.bounce_strength, 70);
        assert!(!s.any_force());
    }

    #[test]
    fn scales_clamp_out_of_range() {
        let s = PhysicsSettings {
            gravity_strength: 250,
            bounce_strength: -40,
            ..Default::default()
        };
        assert_eq!(s.gravity_scale(), 1.0);
        assert_eq!(s.bounce_scale(), 0.0);
    }

    #[test]
    fn normalized_resolves_both_flags() {
        let s = PhysicsSettings {
            gravity_on: true,
            antigravity_on: true,
            gravity_strength: 101,
            bounce_strength: 70,
        }
        .normalized();
        assert!(s.gravity_on);
        assert!(!s.antigravity_on);
        assert_eq!(s.gravity_strength, 100);
    }

    #[test]
    fn validate_reports_each_problem() {
        let s = PhysicsSettings {
            gravity_on: true,
            antigravity_on: true,
            gravity_strength: -1,
            bounce_strength: 900,
        };
        let mut w = Vec::new();
        s.validate_into("physics.", &mut w);
        assert_eq!(w.len(), 3, "{w:?}");
        assert!(w[0].contains("physics.antigravity_on"));
    }
}
