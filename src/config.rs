//! Compile-time constants and the startup configuration of the scene.

use std::f32::consts::PI;

use crate::color::Color;

pub const THETA_MIN: f32 = 0.0;
pub const THETA_MAX: f32 = 8.0 * PI;
/// One full animation cycle of the dash pattern, in phase units.
pub const PERIOD: f32 = THETA_MAX;
pub const LINE_SPACING: f32 = 1.5 / 12.0;
pub const LINE_LENGTH: f32 = LINE_SPACING / 2.0;
/// Vertical rise per radian.
pub const G_RATE: f32 = 1.0 / (2.0 * PI);
pub const G_FACTOR: f32 = G_RATE / 3.0;
/// Phase units per second.
pub const SPEED: f32 = PERIOD * 1.5;

pub const SCREEN_WIDTH: u32 = 600;
pub const SCREEN_HEIGHT: u32 = 800;

/// One row of the spiral table. `angle_offset` is in units of π and
/// `shape_factor` in units of [`G_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralSpec {
    pub name: &'static str,
    pub color: Color,
    pub angle_offset: f32,
    pub shape_factor: f32,
}

pub const SPIRALS: [SpiralSpec; 6] = [
    SpiralSpec {
        name: "Spiral Left 3",
        color: Color::rgb(0x22, 0x00, 0x00),
        angle_offset: 0.92,
        shape_factor: 0.9,
    },
    SpiralSpec {
        name: "Spiral Right 3",
        color: Color::rgb(0x00, 0x22, 0x11),
        angle_offset: 0.08,
        shape_factor: 0.9,
    },
    SpiralSpec {
        name: "Spiral Left 2",
        color: Color::rgb(0x66, 0x00, 0x00),
        angle_offset: 0.95,
        shape_factor: 0.93,
    },
    SpiralSpec {
        name: "Spiral Right 2",
        color: Color::rgb(0x00, 0x33, 0x22),
        angle_offset: 0.05,
        shape_factor: 0.93,
    },
    SpiralSpec {
        name: "Spiral Left 1",
        color: Color::rgb(0xff, 0x00, 0x00),
        angle_offset: 1.0,
        shape_factor: 1.0,
    },
    SpiralSpec {
        name: "Spiral Right 1",
        color: Color::rgb(0x00, 0xff, 0xcc),
        angle_offset: 0.0,
        shape_factor: 1.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            scale: 1.0,
            y: 2.1,
            z: -5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub spirals: Vec<SpiralSpec>,
    pub camera: CameraConfig,
    /// Stroke width of a projected segment, in pixels.
    pub line_width: f32,
    /// Upper bound for a single frame delta, in seconds.
    pub max_frame_delta: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spirals: SPIRALS.to_vec(),
            camera: CameraConfig::default(),
            line_width: 2.0,
            max_frame_delta: 0.25,
        }
    }
}
