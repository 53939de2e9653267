use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// Discrete zoom actions from buttons or the scroll wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

impl ZoomCommand {
    /// Scrolling up zooms in, down zooms out; a purely horizontal scroll does nothing.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(ZoomCommand::In)
        } else if delta_y > 0.0 {
            Some(ZoomCommand::Out)
        } else {
            None
        }
    }
}

/// View scale, always within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom {
    level: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZOOM,
        }
    }
}

impl Zoom {
    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Apply a command; returns whether the level changed.
    pub fn apply(&mut self, command: ZoomCommand) -> bool {
        let old = self.level;
        self.level = match command {
            ZoomCommand::In => (old + ZOOM_STEP * old).clamp(MIN_ZOOM, MAX_ZOOM),
            ZoomCommand::Out => (old - ZOOM_STEP * old).clamp(MIN_ZOOM, MAX_ZOOM),
            ZoomCommand::Reset => DEFAULT_ZOOM,
        };
        old != self.level
    }

    pub fn zoom_in(&mut self) -> bool {
        self.apply(ZoomCommand::In)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.apply(ZoomCommand::Out)
    }

    pub fn reset(&mut self) -> bool {
        self.apply(ZoomCommand::Reset)
    }
}
