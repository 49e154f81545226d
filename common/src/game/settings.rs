use std::time::Duration;

use crate::grid::GridSize;

pub const BASE_TICK_INTERVAL_MS: u64 = 300;

/// Parameters fixed for the lifetime of one game session. Level acts as a
/// linear speed multiplier on the tick rate.
#[derive(Clone, Copy, Debug)]
pub struct GameSettings {
    pub grid: GridSize,
    pub level: u32,
}

impl GameSettings {
    pub fn new(grid: GridSize, level: u32) -> Self {
        Self { grid, level }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(BASE_TICK_INTERVAL_MS / u64::from(self.level.max(1)))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.grid.width < 10 || self.grid.width > 100 {
            return Err("Grid width must be between 10 and 100".to_string());
        }
        if self.grid.height < 10 || self.grid.height > 100 {
            return Err("Grid height must be between 10 and 100".to_string());
        }
        if self.level < 1 || self.level > 10 {
            return Err("Level must be between 1 and 10".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval_scales_inversely_with_level() {
        let grid = GridSize::new(30, 20);

        assert_eq!(
            GameSettings::new(grid, 1).tick_interval(),
            Duration::from_millis(300)
        );
        assert_eq!(
            GameSettings::new(grid, 4).tick_interval(),
            Duration::from_millis(75)
        );
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let settings = GameSettings::new(GridSize::new(30, 20), 1);

        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tiny_grid() {
        let settings = GameSettings::new(GridSize::new(4, 20), 1);

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_level() {
        let settings = GameSettings::new(GridSize::new(30, 20), 0);

        assert!(settings.validate().is_err());
    }
}
