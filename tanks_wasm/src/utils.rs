use std::{cell::RefCell, rc::Rc};
use tanks_core::{utils::Vector2, TankConfig, TankPalette};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Id of the `<script type="application/json">` element holding Tank tuning
pub const TANK_CONFIG_ID: &str = "tank-config";
/// Id of the `<script type="application/json">` element holding Tank colors
pub const TANK_PALETTE_ID: &str = "tank-palette";

pub fn js_window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    js_window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("should register `requestAnimationFrame` OK");
}

pub fn document() -> web_sys::Document {
    js_window()
        .document()
        .expect("should have a document on window")
}

pub fn body() -> web_sys::HtmlElement {
    document().body().expect("document should have a body")
}

pub fn fetch_or_create_canvas() -> HtmlCanvasElement {
    body()
        .query_selector("canvas")
        .expect("query tries to fetch element")
        .unwrap_or_else(|| {
            let canvas = document()
                .create_element("canvas")
                .expect("document should create canvas");

            body()
                .append_child(&canvas)
                .expect("added canvas to the DOM");

            canvas
        })
        .dyn_into::<HtmlCanvasElement>()
        .expect("element is canvas element")
}

/// Trait that allows for a resize of an Element to fullscreen
pub trait Canvas {
    /// Sets the Element to the full size of the window
    fn set_fullscreen(&self);
    fn get_2d_context(&self) -> CanvasRenderingContext2d;
}

pub fn get_window_bounds() -> Vector2 {
    Vector2 {
        x: js_window()
            .inner_width()
            .expect("valid window width")
            .as_f64()
            .unwrap_or_default(),
        y: js_window()
            .inner_height()
            .expect("valid window height")
            .as_f64()
            .unwrap_or_default(),
    }
}

impl Canvas for HtmlCanvasElement {
    fn set_fullscreen(&self) {
        let bounds = get_window_bounds();
        self.set_width(bounds.x as u32);
        self.set_height(bounds.y as u32);
    }

    fn get_2d_context(&self) -> CanvasRenderingContext2d {
        self.get_context("2d")
            .expect("canvas has 2d context")
            .expect("valid context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("root canvas")
    }
}

pub fn start_animation_loop(mut frame_call: Box<dyn FnMut()>) {
    let f = Rc::new(RefCell::new(None));
    let g = f.clone();

    let closure = Closure::wrap(Box::new(move || {
        frame_call();
        // Schedule ourself for another requestAnimationFrame callback.
        request_animation_frame(f.borrow().as_ref().unwrap());
    }) as Box<dyn FnMut()>);

    *g.borrow_mut() = Some(closure);

    request_animation_frame(g.borrow().as_ref().unwrap());
}

/// Text content of an inline JSON script element, if the page has one
fn read_json_script(id: &str) -> Option<String> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Tank tuning from the page, falling back to the defaults
pub fn load_tank_config() -> TankConfig {
    let Some(json) = read_json_script(TANK_CONFIG_ID) else {
        return TankConfig::default();
    };

    match TankConfig::from_json(&json) {
        Ok(config) => {
            log::info!("loaded tank config from #{}", TANK_CONFIG_ID);
            config
        }
        Err(e) => {
            log::warn!("ignoring #{} :: {}", TANK_CONFIG_ID, e);
            TankConfig::default()
        }
    }
}

/// Tank colors from the page, falling back to the defaults
pub fn load_tank_palette() -> TankPalette {
    let Some(json) = read_json_script(TANK_PALETTE_ID) else {
        return TankPalette::default();
    };

    serde_json::from_str(&json).unwrap_or_else(|e| {
        log::warn!("ignoring #{} :: {}", TANK_PALETTE_ID, e);
        TankPalette::default()
    })
}
