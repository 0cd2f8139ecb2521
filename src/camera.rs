use crate::config::CameraConfig;
use crate::error::{Result, SceneError};
use crate::geometry::{Point2d, Point3d};

/// Pinhole camera looking down +z from `(0, camera_y, camera_z)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralCamera {
    screen_offset_x: f32,
    screen_offset_y: f32,
    screen_scale: f32,
    scale: f32,
    camera_y: f32,
    camera_z: f32,
    last_width: f32,
    last_height: f32,
}

impl SpiralCamera {
    pub fn configure(width: f32, height: f32, scale: f32, y_pos: f32, z_pos: f32) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SceneError::InvalidCamera { scale });
        }
        Ok(Self {
            screen_offset_x: width / 2.0,
            screen_offset_y: height / 2.0,
            screen_scale: width.max(height) / scale,
            scale,
            camera_y: y_pos,
            camera_z: z_pos,
            last_width: width,
            last_height: height,
        })
    }

    pub fn from_config(config: &CameraConfig) -> Result<Self> {
        Self::configure(config.width, config.height, config.scale, config.y, config.z)
    }

    /// Follows a viewport size change. Changes adding up to less than one
    /// unit are ignored. Returns whether the camera was updated.
    ///
    /// The new screen scale is always `max(width, height) / scale`, with
    /// `scale` as given to [`SpiralCamera::configure`].
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if (self.last_width - width).abs() + (self.last_height - height).abs() < 1.0 {
            return false;
        }
        self.screen_offset_x = width / 2.0;
        self.screen_offset_y = height / 2.0;
        self.screen_scale = width.max(height) / self.scale;
        self.last_width = width;
        self.last_height = height;
        log::debug!(
            "camera resized to {}x{} (screen scale {})",
            width,
            height,
            self.screen_scale
        );
        true
    }

    /// Perspective projection. A point at the camera's depth yields
    /// non-finite coordinates.
    #[inline]
    pub fn project(&self, point: Point3d) -> Point2d {
        let depth = point.z - self.camera_z;
        Point2d {
            x: self.screen_offset_x + self.screen_scale * (point.x / depth),
            y: self.screen_offset_y + self.screen_scale * ((point.y - self.camera_y) / depth),
        }
    }

    pub fn screen_offset(&self) -> Point2d {
        Point2d::new(self.screen_offset_x, self.screen_offset_y)
    }

    pub fn screen_scale(&self) -> f32 {
        self.screen_scale
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn position(&self) -> (f32, f32) {
        (self.camera_y, self.camera_z)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.last_width, self.last_height)
    }
}
