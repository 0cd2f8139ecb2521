use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    console, window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
};

use super::hud::Hud;
use super::keyboard;
use crate::clock::FrameClock;
use crate::config::{SceneConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::InputState;
use crate::scene::Scene;
use crate::stroke::{self, FLOATS_PER_VERTEX};

const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec2 a_pos;
layout(location = 1) in vec4 a_color;
uniform vec2 u_resolution;
out vec4 v_color;
void main() {
    vec2 clip = a_pos / u_resolution * 2.0 - 1.0;
    gl_Position = vec4(clip.x, -clip.y, 0.0, 1.0);
    v_color = a_color;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
in vec4 v_color;
out vec4 out_color;
void main() {
    out_color = vec4(v_color.rgb, clamp(v_color.a, 0.0, 1.0));
}
"#;

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("unable to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(JsValue::from_str(&format!("shader compile failed: {log}")))
    }
}

fn link(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, JsValue> {
    let program = gl.create_program().ok_or("unable to create program")?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        Err(JsValue::from_str(&format!("program link failed: {log}")))
    }
}

/// Draws the scene's dashes as alpha-blended triangle quads.
struct LineRenderer {
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    vbo: WebGlBuffer,
    u_resolution: Option<WebGlUniformLocation>,
    line_width: f32,
    vertices: Vec<f32>,
}

impl LineRenderer {
    fn new(gl: GL, line_width: f32) -> Result<Self, JsValue> {
        let vs = compile(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link(&gl, &vs, &fs)?;
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let vao = gl
            .create_vertex_array()
            .ok_or("unable to create vertex array")?;
        let vbo = gl.create_buffer().ok_or("unable to create buffer")?;
        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vbo));
        let stride = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as i32;
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 2, GL::FLOAT, false, stride, 0);
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(1, 4, GL::FLOAT, false, stride, 2 * 4);
        gl.bind_vertex_array(None);

        let u_resolution = gl.get_uniform_location(&program, "u_resolution");

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        Ok(Self {
            gl,
            program,
            vao,
            vbo,
            u_resolution,
            line_width,
            vertices: Vec::new(),
        })
    }

    fn draw(&mut self, scene: &Scene, width: u32, height: u32) {
        let gl = &self.gl;
        gl.viewport(0, 0, width as i32, height as i32);
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        self.vertices.clear();
        let count = stroke::tessellate(scene.draw_list(), self.line_width, &mut self.vertices);
        if count == 0 {
            return;
        }

        gl.use_program(Some(&self.program));
        gl.uniform2f(self.u_resolution.as_ref(), width as f32, height as f32);
        gl.bind_vertex_array(Some(&self.vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.vbo));
        let data = js_sys::Float32Array::from(self.vertices.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::DYNAMIC_DRAW);
        gl.draw_arrays(GL::TRIANGLES, 0, count as i32);
        gl.bind_vertex_array(None);
    }
}

fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let w = window.inner_width()?.as_f64().unwrap_or(SCREEN_WIDTH as f64);
    let h = window.inner_height()?.as_f64().unwrap_or(SCREEN_HEIGHT as f64);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Ok(())
}

/// Builds the scene and runs it on `requestAnimationFrame` until the page
/// goes away.
pub fn start(canvas: HtmlCanvasElement, mut hud: Hud) -> Result<(), JsValue> {
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;

    let config = SceneConfig::default();
    let mut scene = Scene::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut renderer = LineRenderer::new(gl, config.line_width)?;
    let mut clock = FrameClock::new(config.max_frame_delta);

    let window = window().ok_or("no window")?;
    let performance = window.performance().ok_or("performance not available")?;

    fit_to_window(&canvas)?;

    // Resize canvas to fit window
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Err(e) = fit_to_window(&canvas) {
                log::error!("resize failed: {:?}", e);
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let input = Rc::new(RefCell::new(InputState::new()));
    keyboard::listen(&window, input.clone())?;

    console::log_1(&"fir-tree: arrows left/right pick a channel, up/down edit it".into());

    // `f` holds the animation-frame closure so it can reschedule itself;
    // the `Option` lets the closure be created before it refers to itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let dt = clock.tick(performance.now());
        let (width, height) = (canvas.width(), canvas.height());
        {
            let mut input = input.borrow_mut();
            scene.frame(dt, width as f32, height as f32, &input);
            input.end_frame();
        }
        renderer.draw(&scene, width, height);
        if let Err(e) = hud.update(clock.fps(), &scene.status()) {
            log::error!("hud update failed: {:?}", e);
        }

        // schedule next
        if let Some(Err(e)) = f.borrow().as_ref().map(request_frame) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>));

    let first = g.borrow();
    let cb = first.as_ref().ok_or("animation closure missing")?;
    request_frame(cb)?;
    Ok(())
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}
