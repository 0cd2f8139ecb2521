use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{KeyboardEvent, Window};

use crate::input::{InputState, Key};

/// Feeds window keyboard events into `input` for the lifetime of the page.
pub fn listen(window: &Window, input: Rc<RefCell<InputState>>) -> Result<(), JsValue> {
    let on_down = {
        let input = input.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if let Some(key) = Key::from_dom(&event.key()) {
                event.prevent_default();
                input.borrow_mut().key_down(key);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    window.add_event_listener_with_callback("keydown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();

    let on_up = {
        let input = input.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if let Some(key) = Key::from_dom(&event.key()) {
                input.borrow_mut().key_up(key);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    window.add_event_listener_with_callback("keyup", on_up.as_ref().unchecked_ref())?;
    on_up.forget();

    // keyup never arrives if focus moves away mid-press
    let on_blur = Closure::wrap(Box::new(move || {
        input.borrow_mut().release_all();
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
    on_blur.forget();

    Ok(())
}
