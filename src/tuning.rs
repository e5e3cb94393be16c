//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a settings file
//! can rebalance the game without touching code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tunables (pixels, pixels per tick, seconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: i32,
    pub screen_height: i32,

    pub catcher_width: i32,
    pub catcher_height: i32,

    pub object_width: i32,
    pub object_min_radius: i32,
    pub object_max_radius: i32,

    pub initial_speed: i32,
    pub max_speed: i32,
    pub speed_ramp_secs: u64,

    pub game_duration_secs: u64,

    pub min_spawn_distance: i32,
    pub safe_zone: i32,
    /// Resample budget before spawn placement relaxes the distance rule
    pub max_spawn_attempts: u32,

    pub base_population: usize,
    pub population_ramp_secs: u64,

    pub particle_burst: usize,
    pub particle_lifetime: u32,
    pub particle_max_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            catcher_width: CATCHER_WIDTH,
            catcher_height: CATCHER_HEIGHT,

            object_width: OBJECT_WIDTH,
            object_min_radius: OBJECT_MIN_RADIUS,
            object_max_radius: OBJECT_MAX_RADIUS,

            initial_speed: INITIAL_SPEED,
            max_speed: MAX_SPEED,
            speed_ramp_secs: SPEED_RAMP_SECS,

            game_duration_secs: GAME_DURATION_SECS,

            min_spawn_distance: MIN_SPAWN_DISTANCE,
            safe_zone: SAFE_ZONE,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,

            base_population: BASE_POPULATION,
            population_ramp_secs: POPULATION_RAMP_SECS,

            particle_burst: PARTICLE_BURST,
            particle_lifetime: PARTICLE_LIFETIME,
            particle_max_speed: PARTICLE_MAX_SPEED,
        }
    }
}

impl Tuning {
    /// Inclusive range of spawn x positions
    pub fn spawn_range(&self) -> (i32, i32) {
        (
            self.safe_zone,
            self.screen_width - self.safe_zone - self.object_width,
        )
    }

    /// Top edge of the catcher bar (objects at or below this line can be caught)
    pub fn catcher_top(&self) -> i32 {
        self.screen_height - self.catcher_height
    }

    /// Rightmost catcher x that keeps the bar fully on screen
    pub fn catcher_max_x(&self) -> i32 {
        self.screen_width - self.catcher_width
    }

    /// Check internal consistency, returning a description of the first problem
    pub fn check(&self) -> Result<(), String> {
        let (lo, hi) = self.spawn_range();
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err("screen dimensions must be positive".into());
        }
        if lo > hi {
            return Err(format!("empty spawn range [{lo}, {hi}]"));
        }
        if self.catcher_width <= 0 || self.catcher_width > self.screen_width {
            return Err("catcher width must fit on screen".into());
        }
        if self.catcher_height <= 0 || self.catcher_height >= self.screen_height {
            return Err("catcher height must fit on screen".into());
        }
        if self.object_min_radius <= 0 || self.object_min_radius > self.object_max_radius {
            return Err(format!(
                "invalid radius range [{}, {}]",
                self.object_min_radius, self.object_max_radius
            ));
        }
        if self.initial_speed <= 0 || self.max_speed < self.initial_speed {
            return Err("speeds must satisfy 0 < initial_speed <= max_speed".into());
        }
        if self.speed_ramp_secs == 0 || self.population_ramp_secs == 0 {
            return Err("ramp periods must be non-zero".into());
        }
        if self.game_duration_secs == 0 {
            return Err("game duration must be non-zero".into());
        }
        if self.max_spawn_attempts == 0 {
            return Err("max_spawn_attempts must be non-zero".into());
        }
        if self.particle_max_speed.is_nan() || self.particle_max_speed < 0.0 {
            return Err("particle_max_speed must be non-negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spawn_range() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn_range(), (30, 590));
        assert_eq!(tuning.catcher_top(), 460);
        assert_eq!(tuning.catcher_max_x(), 540);
        assert!(tuning.check().is_ok());
    }

    #[test]
    fn test_check_rejects_empty_spawn_range() {
        let tuning = Tuning {
            safe_zone: 400,
            ..Default::default()
        };
        assert!(tuning.check().is_err());
    }

    #[test]
    fn test_check_rejects_inverted_radius() {
        let tuning = Tuning {
            object_min_radius: 40,
            object_max_radius: 10,
            ..Default::default()
        };
        assert!(tuning.check().is_err());
    }

    #[test]
    fn test_check_rejects_slow_max_speed() {
        let tuning = Tuning {
            max_speed: 2,
            ..Default::default()
        };
        assert!(tuning.check().is_err());
    }
}
