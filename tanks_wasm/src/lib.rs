use app::{render, GameState};
use std::{cell::RefCell, panic, rc::Rc};
use utils::*;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Event, HtmlCanvasElement, KeyboardEvent};

pub mod app;
mod surface;
mod utils;

thread_local! {
    /// Global State for the Game
    ///
    /// Do not panic while using this data, otherwise you may
    /// encounter a permanent locking of the Data
    static GAME_STATE: RefCell<GameState> =
        RefCell::new(GameState::new(load_tank_config(), load_tank_palette()));
}

/// Initialization process for the window
///
/// setups up logging and the canvas to start rendering
#[wasm_bindgen(start)]
pub fn start() {
    setup_logging();

    let canvas_element = setup_canvas();
    setup_window_listeners();

    let context = canvas_element.get_2d_context();
    let frame_procedure = move || {
        GAME_STATE.with(|state| {
            let mut state = state.borrow_mut();
            state.update(get_window_bounds());
            render(&canvas_element, &context, &state);
        })
    };
    start_animation_loop(Box::new(frame_procedure));
}

fn setup_logging() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Info).expect("initializing logging");
}

/// Canvas Listeners Setup
fn setup_canvas() -> Rc<HtmlCanvasElement> {
    let canvas_element = Rc::new(fetch_or_create_canvas());
    canvas_element.set_fullscreen();

    // Resize Callback
    let cloned_canvas_element = canvas_element.clone();
    let resize_callback = Closure::wrap(Box::new(move |_: Event| {
        log::debug!("resize");
        cloned_canvas_element.set_fullscreen();
    }) as Box<dyn FnMut(_)>);
    js_window()
        .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
        .expect("failed to add listener");
    resize_callback.forget();

    canvas_element
}

/// Window Listeners Setup
fn setup_window_listeners() {
    // Slow motion toggle
    let keydown_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.repeat() {
            return;
        }
        if event.key().eq_ignore_ascii_case("s") {
            GAME_STATE.with(|state| state.borrow_mut().toggle_slow_motion());
        }
    }) as Box<dyn FnMut(_)>);
    js_window()
        .add_event_listener_with_callback("keydown", keydown_callback.as_ref().unchecked_ref())
        .expect("failed to add listener");
    keydown_callback.forget();
}
