use crate::error::HostError;
use crate::render::Palette;
use std::time::Duration;

/// largest scale accepted; a 64x32 buffer at this scale is already far past
/// any terminal
pub const MAX_SCALE: usize = 64;

/// Knobs for the host loop. The defaults are the plain harness: one step per
/// tick, ~1ms between ticks, unscaled output.
#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    /// surface pixels per buffer cell, each way
    pub scale: usize,
    /// sleep after every tick
    pub tick_interval: Duration,
    /// machine steps per rendered frame
    pub steps_per_frame: u32,
    /// trace lines kept in memory
    pub trace_capacity: usize,
    pub palette: Palette,
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig {
            scale: 1,
            tick_interval: Duration::from_millis(1),
            steps_per_frame: 1,
            trace_capacity: 1024,
            palette: Palette::default(),
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> Result<(), HostError> {
        if self.scale == 0 {
            return Err(HostError::Config("scale must be at least 1".to_string()));
        }
        if self.scale > MAX_SCALE {
            return Err(HostError::Config(format!(
                "scale {} is more than the maximum of {}",
                self.scale, MAX_SCALE
            )));
        }
        if self.steps_per_frame == 0 {
            return Err(HostError::Config(
                "steps per frame must be at least 1".to_string(),
            ));
        }
        if self.trace_capacity == 0 {
            return Err(HostError::Config(
                "trace capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
