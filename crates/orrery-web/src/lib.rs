//! Browser entry points.
//!
//! wasm-bindgen cannot export a stateful struct's methods as free
//! functions, so the single `Runner` lives in a `thread_local!` and every
//! export borrows it through `with_runner`.

use std::cell::RefCell;

use orrery::{InputEvent, SimConfig, CUSTOM_SET_PAUSED};
use wasm_bindgen::prelude::*;

pub mod runner;
pub use runner::Runner;

thread_local! {
    static RUNNER: RefCell<Option<Runner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut Runner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Orrery not initialized. Call orrery_init() first.");
        f(runner)
    })
}

fn install(runner: Runner) {
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Start with the reference system.
#[wasm_bindgen]
pub fn orrery_init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    install(Runner::new(SimConfig::default()).map_err(to_js)?);
    log::info!("orrery: initialized");
    Ok(())
}

/// Replace the configuration (body table, timing, world size) from JSON.
/// Works before or after `orrery_init`; a rejected config changes nothing.
#[wasm_bindgen]
pub fn orrery_load_config(json: &str) -> Result<(), JsValue> {
    let initialized = RUNNER.with(|cell| cell.borrow().is_some());
    if initialized {
        with_runner(|r| r.replace_config(json)).map_err(to_js)
    } else {
        let runner = SimConfig::from_json(json)
            .and_then(Runner::new)
            .map_err(to_js)?;
        install(runner);
        Ok(())
    }
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

/// `key_code` is the Unicode scalar of `KeyboardEvent.key`.
#[wasm_bindgen]
pub fn orrery_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn orrery_set_paused(paused: bool) {
    let a = if paused { 1.0 } else { 0.0 };
    with_runner(|r| {
        r.push_input(InputEvent::Custom {
            kind: CUSTOM_SET_PAUSED,
            a,
            b: 0.0,
            c: 0.0,
        })
    });
}

// ---- Frame data ----

/// The current frame as JSON (see `orrery::FrameView`).
#[wasm_bindgen]
pub fn orrery_frame_json() -> Result<String, JsValue> {
    with_runner(|r| r.world().snapshot().to_json()).map_err(to_js)
}

/// Hover panel text, or `undefined` when nothing is hovered.
#[wasm_bindgen]
pub fn orrery_hover_text() -> Option<String> {
    with_runner(|r| r.world().hover_text())
}

#[wasm_bindgen]
pub fn orrery_instructions() -> js_sys::Array {
    with_runner(|r| {
        r.world()
            .instructions()
            .into_iter()
            .map(JsValue::from)
            .collect()
    })
}

#[wasm_bindgen]
pub fn get_sdf_instances_ptr() -> *const f32 {
    with_runner(|r| r.sdf_instances_ptr())
}

#[wasm_bindgen]
pub fn get_sdf_instance_count() -> u32 {
    with_runner(|r| r.sdf_instance_count())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len())
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vector_vertices_ptr())
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertex_count() -> u32 {
    with_runner(|r| r.vector_vertex_count())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}
