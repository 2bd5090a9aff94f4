//! Loading progress simulation.

use std::f64::consts::PI;

/// Interval between progress ticks
pub const TICK_MS: u32 = 200;
/// Fade-out duration before the overlay is removed
pub const FADE_OUT_MS: u32 = 1000;
/// Delay between revealing the page and showing the navigation and home content
pub const REVEAL_DELAY_MS: u32 = 1000;
/// Radius of the progress ring in its 100x100 view box
pub const RING_RADIUS: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Loading,
    Complete,
}

/// Overlay lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Visible,
    FadingOut,
    Removed,
}

/// Simulated load percentage, 0 to 100
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Add `step` percent, capped at 100
    pub fn advance(&mut self, step: f64) -> LoadingPhase {
        self.percent = (self.percent + step.max(0.0)).min(100.0);
        if self.is_complete() {
            LoadingPhase::Complete
        } else {
            LoadingPhase::Loading
        }
    }

    /// Whole percent shown in the label
    pub fn label(&self) -> String {
        format!("{}%", self.percent.floor() as u32)
    }

    /// `stroke-dashoffset` of the progress ring
    pub fn ring_offset(&self) -> f64 {
        ring_circumference() * (1.0 - self.percent / 100.0)
    }
}

pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Step for one tick given a uniform random number in `[0, 1)`
pub fn random_step(random: f64) -> f64 {
    random * 10.0 + 5.0
}
