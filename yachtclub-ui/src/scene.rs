//! Ocean Scene
//!
//! Camera, sky and water parameters for the animated background, with the
//! projection math used to draw it on a 2D canvas. Drawing itself lives in
//! `components::background`.

use std::f64::consts::PI;

/// Orbit limits applied to the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub target: [f64; 3],
    pub max_polar_angle: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub enable_zoom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
    pub camera_position: [f64; 3],
    pub water_size: f64,
    pub water_color: u32,
    pub sun_color: u32,
    pub distortion_scale: f64,
    pub sky_scale: f64,
    pub turbidity: f64,
    pub rayleigh: f64,
    pub mie_coefficient: f64,
    pub mie_directional_g: f64,
    pub sun_elevation_deg: f64,
    pub sun_azimuth_deg: f64,
    pub orbit: OrbitLimits,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov_deg: 55.0,
            near: 1.0,
            far: 20000.0,
            camera_position: [30.0, 30.0, 100.0],
            water_size: 10000.0,
            water_color: 0x001e0f,
            sun_color: 0xffcc66,
            distortion_scale: 3.7,
            sky_scale: 10000.0,
            turbidity: 10.0,
            rayleigh: 2.0,
            mie_coefficient: 0.005,
            mie_directional_g: 0.8,
            sun_elevation_deg: 2.0,
            sun_azimuth_deg: 180.0,
            orbit: OrbitLimits {
                target: [0.0, 10.0, 0.0],
                max_polar_angle: PI * 0.495,
                min_distance: 40.0,
                max_distance: 200.0,
                enable_zoom: false,
            },
        }
    }
}

/// Unit vector toward the sun from elevation and azimuth in degrees
pub fn sun_direction(elevation_deg: f64, azimuth_deg: f64) -> [f64; 3] {
    let phi = (90.0 - elevation_deg).to_radians();
    let theta = azimuth_deg.to_radians();
    [
        phi.sin() * theta.sin(),
        phi.cos(),
        phi.sin() * theta.cos(),
    ]
}

/// `#rrggbb` for a packed colour
pub fn hex_color(color: u32) -> String {
    format!("#{:06x}", color & 0xff_ffff)
}

/// Linear blend of two packed colours
pub fn mix_color(a: u32, b: u32, t: f64) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |shift: u32| {
        let ca = f64::from((a >> shift) & 0xff);
        let cb = f64::from((b >> shift) & 0xff);
        ((ca + (cb - ca) * t).round() as u32) << shift
    };
    channel(16) | channel(8) | channel(0)
}

/// Animated scene state
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub config: SceneConfig,
    pub time: f64,
    pub width: f64,
    pub height: f64,
    pub sun: [f64; 3],
}

impl Scene {
    /// Seconds added per animation frame
    pub const FRAME_STEP: f64 = 1.0 / 60.0;

    pub fn new(config: SceneConfig, width: f64, height: f64) -> Self {
        let sun = sun_direction(config.sun_elevation_deg, config.sun_azimuth_deg);
        Self {
            config,
            time: 0.0,
            width: width.max(1.0),
            height: height.max(1.0),
            sun,
        }
    }

    pub fn tick(&mut self) {
        self.time += Self::FRAME_STEP;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Camera pitch below horizontal, looking at the orbit target
    fn pitch(&self) -> f64 {
        let [cx, cy, cz] = self.config.camera_position;
        let [tx, ty, tz] = self.config.orbit.target;
        let ground = ((cx - tx).powi(2) + (cz - tz).powi(2)).sqrt();
        (cy - ty).atan2(ground)
    }

    /// Camera heading in the water plane
    fn yaw(&self) -> f64 {
        let [cx, _, cz] = self.config.camera_position;
        let [tx, _, tz] = self.config.orbit.target;
        (tx - cx).atan2(tz - cz)
    }

    fn half_fov_tan(&self) -> f64 {
        (self.config.fov_deg.to_radians() / 2.0).tan()
    }

    /// Screen y of the horizon as a fraction of the height
    pub fn horizon_ratio(&self) -> f64 {
        (0.5 - 0.5 * self.pitch().tan() / self.half_fov_tan()).clamp(0.0, 1.0)
    }

    /// Sun position in canvas pixels
    pub fn sun_screen_position(&self) -> (f64, f64) {
        let [sx, sy, sz] = self.sun;
        let heading = sx.atan2(sz) - self.yaw();
        let heading = (heading + PI).rem_euclid(2.0 * PI) - PI;
        let elevation = sy.atan2((sx * sx + sz * sz).sqrt());

        let half_w = self.half_fov_tan() * self.aspect();
        let x = self.width * (0.5 + 0.5 * heading.tan() / half_w);
        let y = self.height
            * (self.horizon_ratio() - 0.5 * elevation.tan() / self.half_fov_tan());
        (x, y)
    }

    /// Vertical displacement of wave band `band` at canvas x
    pub fn wave_offset(&self, band: usize, x: f64) -> f64 {
        let depth = 1.0 + band as f64 * 0.35;
        let phase = self.time * (0.6 + band as f64 * 0.05) + band as f64 * 1.7;
        self.config.distortion_scale * depth * (x / (90.0 - band as f64 * 2.0) + phase).sin()
    }

    /// Colour at the top of the sky
    pub fn zenith_color(&self) -> u32 {
        mix_color(0x0b1d3a, 0x3a6ea5, self.config.rayleigh / 4.0)
    }

    /// Colour where sky meets sea, warmed by a low sun and haze
    pub fn horizon_color(&self) -> u32 {
        let low_sun = 1.0 - (self.config.sun_elevation_deg / 30.0).clamp(0.0, 1.0);
        let haze = (self.config.turbidity / 20.0).clamp(0.0, 1.0);
        mix_color(0x9fc4e0, self.config.sun_color, low_sun * (0.5 + 0.5 * haze))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_defaults() {
        let config = SceneConfig::default();
        assert_eq!(config.fov_deg, 55.0);
        assert_eq!(config.camera_position, [30.0, 30.0, 100.0]);
        assert_eq!(config.water_color, 0x001e0f);
        assert_eq!(config.sun_color, 0xffcc66);
        assert_eq!(config.orbit.target, [0.0, 10.0, 0.0]);
        assert!(close(config.orbit.max_polar_angle, PI * 0.495));
        assert!(!config.orbit.enable_zoom);
    }

    #[test]
    fn test_sun_direction() {
        let [x, y, z] = sun_direction(90.0, 0.0);
        assert!(close(x, 0.0) && close(y, 1.0) && close(z, 0.0));

        // low sun due "south" in scene space
        let [x, y, z] = sun_direction(2.0, 180.0);
        assert!(x.abs() < 1e-9);
        assert!(close(y, 2.0_f64.to_radians().sin()));
        assert!(z < -0.99);
        assert!(close(x * x + y * y + z * z, 1.0));
    }

    #[test]
    fn test_tick_advances_time() {
        let mut scene = Scene::new(SceneConfig::default(), 800.0, 600.0);
        for _ in 0..60 {
            scene.tick();
        }
        assert!(close(scene.time, 1.0));
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut scene = Scene::new(SceneConfig::default(), 800.0, 600.0);
        assert!(close(scene.aspect(), 800.0 / 600.0));

        scene.resize(1920.0, 1080.0);
        assert!(close(scene.aspect(), 1920.0 / 1080.0));

        scene.resize(0.0, 0.0);
        assert!(close(scene.aspect(), 1.0));
    }

    #[test]
    fn test_horizon_above_center() {
        let scene = Scene::new(SceneConfig::default(), 800.0, 600.0);
        let ratio = scene.horizon_ratio();
        assert!(ratio > 0.2 && ratio < 0.5);
    }

    #[test]
    fn test_sun_near_horizon_and_on_screen() {
        let scene = Scene::new(SceneConfig::default(), 1200.0, 800.0);
        let (x, y) = scene.sun_screen_position();
        assert!(x > 0.0 && x < 1200.0);
        assert!(y < scene.horizon_ratio() * 800.0);
        assert!(y > 0.0);
    }

    #[test]
    fn test_colors() {
        assert_eq!(hex_color(0x001e0f), "#001e0f");
        assert_eq!(mix_color(0x000000, 0xffffff, 0.0), 0x000000);
        assert_eq!(mix_color(0x000000, 0xffffff, 1.0), 0xffffff);
        assert_eq!(mix_color(0x000000, 0x0000ff, 0.5), 0x000080);
    }

    #[test]
    fn test_gradient_stops_are_css_hex() {
        let is_hex = |c: u32| {
            let s = hex_color(c);
            s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|ch| ch.is_ascii_hexdigit())
        };
        for rayleigh in [0.0, 2.0, 8.0] {
            for elevation in [-10.0, 2.0, 45.0] {
                let config = SceneConfig {
                    rayleigh,
                    sun_elevation_deg: elevation,
                    ..SceneConfig::default()
                };
                let scene = Scene::new(config, 800.0, 600.0);
                assert!(is_hex(scene.zenith_color()));
                assert!(is_hex(scene.horizon_color()));
                assert!(is_hex(mix_color(config.water_color, scene.horizon_color(), 0.35)));
            }
        }
        // stray high bits never widen the string
        assert_eq!(hex_color(0xff00_1e0f), "#001e0f");
    }

    #[test]
    fn test_waves_bounded_by_distortion() {
        let mut scene = Scene::new(SceneConfig::default(), 800.0, 600.0);
        for _ in 0..30 {
            scene.tick();
            for band in 0..10 {
                let limit = scene.config.distortion_scale * (1.0 + band as f64 * 0.35);
                assert!(scene.wave_offset(band, 123.0).abs() <= limit + 1e-9);
            }
        }
    }
}
