#![cfg(target_arch = "wasm32")]

use fir_tree_wasm::stroke::{self, VERTICES_PER_LINE};
use fir_tree_wasm::{Scene, SceneConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn canvas_exists() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let elem = document
        .get_element_by_id("c")
        .expect("canvas element not found");

    let rect = elem
        .dyn_ref::<web_sys::Element>()
        .unwrap()
        .get_bounding_client_rect();

    assert!(rect.width() > 0.0 && rect.height() > 0.0);
}

#[wasm_bindgen_test]
fn frame_tessellates_every_visible_dash() {
    let mut scene = Scene::new(&SceneConfig::default()).unwrap();
    scene.frame(1.0 / 60.0, 600.0, 800.0, &Default::default());
    let mut vertices = Vec::new();
    let count = stroke::tessellate(scene.draw_list(), 2.0, &mut vertices);
    assert!(count > 0);
    assert!(count <= scene.segment_count() * VERTICES_PER_LINE);
}
