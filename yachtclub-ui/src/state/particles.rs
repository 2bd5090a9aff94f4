//! Water particles scattered around the home title.

pub const PARTICLE_COUNT: usize = 40;
/// Horizontal jitter either side of the title box
pub const JITTER_X: f64 = 20.0;
/// Vertical jitter either side of the title box
pub const JITTER_Y: f64 = 10.0;
/// Upper bound of the animation delay
pub const MAX_DELAY_S: f64 = 3.0;

/// Layout box in page pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// One particle, positioned relative to the home content box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; animation-delay: {:.2}s",
            self.x, self.y, self.delay_s
        )
    }
}

/// Scatter particles over `title`, expressed relative to `home`.
///
/// `random` yields uniform numbers in `[0, 1)`.
pub fn scatter(title: Rect, home: Rect, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    let origin_x = title.left - home.left;
    let origin_y = title.top - home.top;

    (0..PARTICLE_COUNT)
        .map(|_| {
            let x = origin_x + random() * title.width + (random() - 0.5) * 2.0 * JITTER_X;
            let y = origin_y + random() * title.height + (random() - 0.5) * 2.0 * JITTER_Y;
            Particle {
                x,
                y,
                delay_s: random() * MAX_DELAY_S,
            }
        })
        .collect()
}
