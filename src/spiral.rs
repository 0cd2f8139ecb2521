use std::f32::consts::PI;

use crate::color::{Channel, Color};
use crate::config::{
    SpiralSpec, G_FACTOR, G_RATE, LINE_LENGTH, LINE_SPACING, PERIOD, SPEED, THETA_MAX, THETA_MIN,
};
use crate::error::{Result, SceneError};
use crate::geometry::{adaptive_step, alpha_from_depth, point_on_spiral, Line};
use crate::segments::SegmentBuffer;

/// One animated spiral and the dashes it produced on the last frame.
#[derive(Debug, Clone)]
pub struct Spiral {
    name: &'static str,
    color: Color,
    angle_offset: f32,
    factor: f32,
    phase_offset: f32,
    segments: SegmentBuffer,
}

impl Spiral {
    pub fn new(spec: &SpiralSpec) -> Result<Self> {
        let factor = spec.shape_factor * G_FACTOR;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(SceneError::DegenerateSpiral {
                name: spec.name,
                factor,
            });
        }
        Ok(Self {
            name: spec.name,
            color: spec.color,
            angle_offset: spec.angle_offset * PI,
            factor,
            phase_offset: 0.0,
            segments: SegmentBuffer::new(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn color_mut(&mut self) -> &mut Color {
        &mut self.color
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        self.color.channel(channel)
    }

    pub fn angle_offset(&self) -> f32 {
        self.angle_offset
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn phase_offset(&self) -> f32 {
        self.phase_offset
    }

    pub fn segments(&self) -> &SegmentBuffer {
        &self.segments
    }

    pub fn lines(&self) -> &[Line] {
        self.segments.as_slice()
    }

    fn advance_phase(&mut self, dt: f32) {
        self.phase_offset += dt * SPEED;
        if self.phase_offset >= PERIOD {
            self.phase_offset -= PERIOD;
        }
    }

    /// Advances the animation by `dt` seconds and regenerates the dashes.
    ///
    /// The phase wraps by a single `PERIOD`, so it stays in `[0, PERIOD)`
    /// only while `dt * SPEED < PERIOD`; callers feed deltas capped by
    /// [`crate::FrameClock`].
    ///
    /// The first dash starts up to one dash spacing before `THETA_MIN`,
    /// shifted by the phase, so the pattern travels along the curve.
    pub fn recompute(&mut self, dt: f32) {
        self.advance_phase(dt);
        self.segments.reset();

        let lead_in = LINE_SPACING * self.phase_offset / PERIOD;
        let mut theta = THETA_MIN - adaptive_step(THETA_MIN, lead_in, G_RATE, self.factor);

        while theta < THETA_MAX {
            let theta_old = theta.max(THETA_MIN);
            let step = adaptive_step(theta, LINE_LENGTH, G_RATE, self.factor);
            debug_assert!(step.is_finite() && step > 0.0, "step {step} at theta {theta}");
            theta += step;
            let theta_end = ((theta_old + theta.max(THETA_MIN)) / 2.0).min(THETA_MAX);

            if theta_end < THETA_MIN {
                continue;
            }

            let start = point_on_spiral(theta_old, self.factor, self.angle_offset, G_RATE);
            let end = point_on_spiral(theta_end, self.factor, self.angle_offset, G_RATE);
            let alpha = alpha_from_depth(start, self.factor, G_RATE);
            self.segments.push(Line { start, end, alpha });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SPIRALS;

    #[test]
    fn rejects_flat_spiral() {
        let spec = SpiralSpec {
            shape_factor: 0.0,
            ..SPIRALS[0]
        };
        assert!(matches!(
            Spiral::new(&spec),
            Err(SceneError::DegenerateSpiral { .. })
        ));
    }

    #[test]
    fn scales_table_values() {
        let s = Spiral::new(&SPIRALS[4]).unwrap();
        assert!((s.angle_offset() - PI).abs() < 1e-6);
        assert!((s.factor() - G_FACTOR).abs() < 1e-7);
        assert_eq!(s.phase_offset(), 0.0);
        assert!(s.lines().is_empty());
    }

    #[test]
    fn dashes_stay_inside_theta_range() {
        let mut s = Spiral::new(&SPIRALS[2]).unwrap();
        s.recompute(0.13);
        let top = point_on_spiral(THETA_MAX, s.factor(), s.angle_offset(), G_RATE);
        for line in s.lines() {
            assert!(line.start.y >= 0.0 && line.end.y >= line.start.y);
            assert!(line.end.y <= top.y + 1e-5);
        }
    }

    #[test]
    fn capped_frame_delta_keeps_phase_in_range() {
        let max_dt = crate::config::SceneConfig::default().max_frame_delta;
        assert!(max_dt * SPEED < PERIOD);
        let mut s = Spiral::new(&SPIRALS[3]).unwrap();
        for _ in 0..50 {
            s.recompute(max_dt);
            assert!((0.0..PERIOD).contains(&s.phase_offset()), "{}", s.phase_offset());
        }
    }

    #[test]
    fn first_dash_starts_at_tip() {
        let mut s = Spiral::new(&SPIRALS[0]).unwrap();
        s.recompute(0.0);
        let first = s.lines()[0];
        assert_eq!(first.start, point_on_spiral(THETA_MIN, s.factor(), s.angle_offset(), G_RATE));
    }
}
