//! Spiral math: sampling, step sizing and depth fade.
//!
//! The curve is a conical helix around the y-axis whose radius grows
//! linearly with the angle `theta`:
//!
//! ```text
//! x =  theta * factor * cos(theta + angle_offset)
//! y =  rate * theta
//! z = -theta * factor * sin(theta + angle_offset)
//! ```

/// Coordinate in spiral-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3d {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3d {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Screen coordinate in pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2d {
    pub x: f32,
    pub y: f32,
}

impl Point2d {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One visible dash of a spiral at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub start: Point3d,
    pub end: Point3d,
    pub alpha: f32,
}

#[inline]
pub fn point_on_spiral(theta: f32, factor: f32, angle_offset: f32, rate: f32) -> Point3d {
    let angle = theta + angle_offset;
    Point3d {
        x: theta * factor * angle.cos(),
        y: rate * theta,
        z: -theta * factor * angle.sin(),
    }
}

/// Angular increment that advances roughly `arc_length` along the curve at
/// `theta`. Shrinks as the radius grows, so dashes keep a near-constant
/// length.
///
/// Zero when `arc_length` is zero. `rate` and `factor` must not both be zero
/// at `theta == 0`; spirals reject such shapes at construction.
#[inline]
pub fn adaptive_step(theta: f32, arc_length: f32, rate: f32, factor: f32) -> f32 {
    let speed = (rate * rate + factor * factor * theta * theta).sqrt();
    arc_length / speed
}

/// Fade of a dash that starts at `point`. Clamped above at 1.0 only.
///
/// The lower end is left open: `atan` keeps the value above ~0.1 for finite
/// input, and callers that need `[0, 1]` clamp themselves.
#[inline]
pub fn alpha_from_depth(point: Point3d, factor: f32, rate: f32) -> f32 {
    let depth = point.y * factor / rate * 0.1 + 0.02 - point.z;
    ((depth * 40.0).atan() * 0.35 + 0.65).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{G_FACTOR, G_RATE, THETA_MAX, THETA_MIN};
    use std::f32::consts::PI;

    #[test]
    fn origin_at_zero_theta() {
        let p = point_on_spiral(0.0, 0.9 * G_FACTOR, 0.92 * PI, G_RATE);
        assert_eq!(p, Point3d::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn radius_grows_linearly() {
        let factor = G_FACTOR;
        for theta in [1.0_f32, 4.0, 10.0, 20.0] {
            let p = point_on_spiral(theta, factor, 0.3, G_RATE);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - theta * factor).abs() < 1e-4, "theta={theta} r={r}");
            assert!((p.y - G_RATE * theta).abs() < 1e-5);
        }
    }

    #[test]
    fn step_is_non_increasing() {
        let factor = 0.93 * G_FACTOR;
        let samples = 512;
        let mut prev = f32::INFINITY;
        for i in 0..=samples {
            let theta = THETA_MIN + (THETA_MAX - THETA_MIN) * i as f32 / samples as f32;
            let step = adaptive_step(theta, 0.0625, G_RATE, factor);
            assert!(step.is_finite() && step > 0.0);
            assert!(step <= prev, "step grew at theta={theta}");
            prev = step;
        }
    }

    #[test]
    fn step_at_origin_depends_on_rate_only() {
        let step = adaptive_step(0.0, 0.5, G_RATE, G_FACTOR);
        assert!((step - 0.5 / G_RATE).abs() < 1e-4);
        assert_eq!(adaptive_step(3.0, 0.0, G_RATE, G_FACTOR), 0.0);
    }

    #[test]
    fn alpha_is_capped_and_deterministic() {
        let origin = Point3d::default();
        let a = alpha_from_depth(origin, 0.9 * G_FACTOR, G_RATE);
        let b = alpha_from_depth(origin, 0.9 * G_FACTOR, G_RATE);
        assert!(a <= 1.0);
        assert_eq!(a, b);
        let near = Point3d::new(0.0, 0.0, -3.0);
        assert_eq!(alpha_from_depth(near, G_FACTOR, G_RATE), 1.0);
    }

    #[test]
    fn alpha_fades_behind_the_axis() {
        let far = Point3d::new(0.0, 0.0, 3.0);
        let a = alpha_from_depth(far, G_FACTOR, G_RATE);
        assert!(a > 0.0 && a < 0.2, "a={a}");
    }
}
