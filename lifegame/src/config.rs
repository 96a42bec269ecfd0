// config.rs - Session constants, fixed when the game is built

use std::time::Duration;

use egui::{Color32, Vec2};

use crate::error::{LifeError, LifeResult};

/// Everything that stays fixed for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub columns: usize,
    pub rows: usize,
    /// Pixels per cell edge.
    pub cell_size: f32,
    /// Delay between generations while running.
    pub interval: Duration,
    pub live_color: Color32,
    pub grid_color: Color32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            columns: 25,
            rows: 25,
            cell_size: 20.0,
            interval: Duration::from_millis(100),
            live_color: Color32::from_rgb(144, 238, 144), // lightgreen
            grid_color: Color32::BLACK,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> LifeResult<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(LifeError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(LifeError::InvalidCellSize(self.cell_size));
        }
        if self.interval.is_zero() {
            return Err(LifeError::InvalidInterval);
        }
        Ok(())
    }

    /// Pixel size of the whole board.
    pub fn surface_size(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = LifeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.surface_size(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn rejects_bad_values() {
        let empty = LifeConfig { rows: 0, ..Default::default() };
        assert_eq!(
            empty.validate(),
            Err(LifeError::InvalidDimensions { columns: 25, rows: 0 })
        );

        let nan = LifeConfig { cell_size: f32::NAN, ..Default::default() };
        assert!(matches!(nan.validate(), Err(LifeError::InvalidCellSize(_))));

        let flat = LifeConfig { cell_size: 0.0, ..Default::default() };
        assert_eq!(flat.validate(), Err(LifeError::InvalidCellSize(0.0)));

        let instant = LifeConfig { interval: Duration::ZERO, ..Default::default() };
        assert_eq!(instant.validate(), Err(LifeError::InvalidInterval));
    }
}
