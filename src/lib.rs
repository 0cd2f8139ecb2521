//! Animated fir-tree of dashed conical spirals.
//!
//! The geometry core is target-independent; the browser host under `wasm`
//! is only compiled for wasm32.

pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod segments;
pub mod spiral;
pub mod stroke;

pub use camera::SpiralCamera;
pub use clock::FrameClock;
pub use color::{Channel, Color};
pub use config::{SceneConfig, SpiralSpec};
pub use controller::{Controller, Status};
pub use error::SceneError;
pub use geometry::{adaptive_step, alpha_from_depth, point_on_spiral, Line, Point2d, Point3d};
pub use input::{InputState, Key};
pub use scene::{Scene, ScreenLine};
pub use segments::SegmentBuffer;
pub use spiral::Spiral;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod hud;
    mod keyboard;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("c")
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let hud = hud::Hud::attach(&document)?;

        render::start(canvas, hud)?;
        Ok(())
    }
}
