//! Web entry point for diagdash using ratzilla.
//!
//! Mounts the dashboard into the host page through ratzilla's DOM backend,
//! drawing the same components as the terminal build.

use std::cell::RefCell;
use std::rc::Rc;

use diagdash_core::prediction_metrics;
use ratatui::Terminal;
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::event::AppKeyEvent;
use crate::state::{DashboardState, DataSource};

/// Set up event listener to prevent default browser behavior for captured keys.
fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        // Arrow keys would otherwise scroll the host page
        if matches!(
            event.key().as_str(),
            "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight"
        ) {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // Prevent the closure from being dropped
    closure.forget();
    Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    crate::init_logging_web();

    tracing::info!("diagdash web version starting");

    setup_prevent_default()?;

    let state = DashboardState::new(prediction_metrics(), DataSource::BuiltIn);
    let app = Rc::new(RefCell::new(App::new(state)));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        let mut app = app_clone.borrow_mut();
        app.handle_key_event(key);
        if app.should_exit() {
            // A page cannot close itself; just log the request
            tracing::info!("Exit requested");
        }
    });

    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}
