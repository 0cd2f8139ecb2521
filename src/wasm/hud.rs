use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::color::Color;
use crate::controller::Status;

/// HTML overlay for the FPS counter and the color editor state.
pub struct Hud {
    fps: HtmlElement,
    spiral: HtmlElement,
    channel: HtmlElement,
    value: HtmlElement,
    shown: Option<(u32, Status)>,
}

fn element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{id} not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an html element")))
}

impl Hud {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let hud = Self {
            fps: element(document, "hud-fps")?,
            spiral: element(document, "hud-spiral")?,
            channel: element(document, "hud-channel")?,
            value: element(document, "hud-value")?,
            shown: None,
        };
        let label = Color::YELLOW.to_css();
        for el in [&hud.spiral, &hud.channel] {
            el.style().set_property("color", &label)?;
        }
        hud.fps.style().set_property("color", &Color::GREEN.to_css())?;
        Ok(hud)
    }

    /// Touches the DOM only when something changed.
    pub fn update(&mut self, fps: u32, status: &Status) -> Result<(), JsValue> {
        if matches!(&self.shown, Some((f, s)) if *f == fps && s == status) {
            return Ok(());
        }
        self.fps.set_inner_text(&format!("{fps} FPS"));
        self.spiral.set_inner_text(status.spiral_name);
        self.channel.set_inner_text(status.channel_label());
        self.value.set_inner_text(&status.value.to_string());
        self.value
            .style()
            .set_property("color", &status.value_color().to_css())?;
        self.shown = Some((fps, status.clone()));
        Ok(())
    }
}
