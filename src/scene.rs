use crate::camera::SpiralCamera;
use crate::color::Color;
use crate::config::SceneConfig;
use crate::controller::{Controller, Status};
use crate::error::Result;
use crate::geometry::Point2d;
use crate::input::InputState;

/// A projected dash ready for a line primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLine {
    pub start: Point2d,
    pub end: Point2d,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct Scene {
    controller: Controller,
    camera: SpiralCamera,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Result<Self> {
        let controller = Controller::new(&config.spirals)?;
        let camera = SpiralCamera::from_config(&config.camera)?;
        log::info!("scene ready with {} spirals", controller.spirals().len());
        Ok(Self { controller, camera })
    }

    /// One update pass: input, viewport, then every spiral.
    pub fn frame(&mut self, dt: f32, width: f32, height: f32, input: &InputState) {
        self.controller.apply_input(input);
        self.camera.resize(width, height);
        self.controller.recompute(dt);
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn camera(&self) -> &SpiralCamera {
        &self.camera
    }

    pub fn status(&self) -> Status {
        self.controller.status()
    }

    pub fn segment_count(&self) -> usize {
        self.controller
            .spirals()
            .iter()
            .map(|s| s.segments().len())
            .sum()
    }

    pub fn draw_list(&self) -> impl Iterator<Item = ScreenLine> + '_ {
        let camera = &self.camera;
        self.controller.spirals().iter().flat_map(move |spiral| {
            let color = spiral.color();
            spiral.lines().iter().map(move |line| ScreenLine {
                start: camera.project(line.start),
                end: camera.project(line.end),
                color: color.with_alpha(line.alpha),
            })
        })
    }
}
