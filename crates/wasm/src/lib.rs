use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use campus_core::chat::Responder;
use campus_core::input::Key;
use campus_core::{Carousel, CarouselConfig};
use campus_protocol::{CarouselEvent, RenderCommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

/// A mounted carousel plus the output the page has not collected yet.
struct Slot {
    carousel: Carousel<usize>,
    commands: Vec<RenderCommand>,
    events: Arc<Mutex<Vec<CarouselEvent>>>,
}

static CAROUSELS: Mutex<Vec<Option<Slot>>> = Mutex::new(Vec::new());

fn registry() -> MutexGuard<'static, Vec<Option<Slot>>> {
    CAROUSELS.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_slot<T>(handle: usize, f: impl FnOnce(&mut Slot) -> T) -> Result<T, JsError> {
    let mut slots = registry();
    let slot = slots
        .get_mut(handle)
        .and_then(Option::as_mut)
        .ok_or_else(|| JsError::new("invalid carousel handle"))?;
    Ok(f(slot))
}

/// Run a carousel operation and queue its render commands.
fn drive(
    handle: usize,
    op: impl FnOnce(&mut Carousel<usize>) -> Vec<RenderCommand>,
) -> Result<(), JsError> {
    with_slot(handle, |slot| {
        let commands = op(&mut slot.carousel);
        slot.commands.extend(commands);
    })
}

/// Store `slot` in the first freed entry, or append one. Returns its handle.
fn insert(slots: &mut Vec<Option<Slot>>, slot: Slot) -> usize {
    match slots.iter().position(Option::is_none) {
        Some(handle) => {
            slots[handle] = Some(slot);
            handle
        }
        None => {
            slots.push(Some(slot));
            slots.len() - 1
        }
    }
}

fn millis(now_ms: f64) -> u64 {
    now_ms.max(0.0) as u64
}

fn width(viewport_width: f64) -> u32 {
    viewport_width.clamp(0.0, f64::from(u32::MAX)) as u32
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Mount a carousel over `panel_count` panels. Returns a handle, or nothing
/// when there are no panels to show. Handles of destroyed carousels are
/// reused.
///
/// An empty config string uses the defaults. The mount commands are queued
/// for the first `take_commands` call.
#[wasm_bindgen]
pub fn create_carousel(
    config_json: &str,
    panel_count: usize,
    viewport_width: f64,
    now_ms: f64,
) -> Result<Option<usize>, JsError> {
    let config = if config_json.trim().is_empty() {
        CarouselConfig::default()
    } else {
        CarouselConfig::from_json(config_json).map_err(|e| JsError::new(&e.to_string()))?
    };

    let Some((mut carousel, commands)) =
        Carousel::mount(0..panel_count, config, width(viewport_width), millis(now_ms))
    else {
        return Ok(None);
    };

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    carousel.subscribe(move |event| {
        sink.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*event);
    });

    let slot = Slot {
        carousel,
        commands,
        events,
    };
    Ok(Some(insert(&mut registry(), slot)))
}

#[wasm_bindgen]
pub fn advance(handle: usize, now_ms: f64) -> Result<(), JsError> {
    drive(handle, |c| c.advance(millis(now_ms)))
}

#[wasm_bindgen]
pub fn retreat(handle: usize, now_ms: f64) -> Result<(), JsError> {
    drive(handle, |c| c.retreat(millis(now_ms)))
}

#[wasm_bindgen]
pub fn go_to(handle: usize, index: usize, now_ms: f64) -> Result<(), JsError> {
    drive(handle, |c| c.go_to(index, millis(now_ms)))
}

/// Fire due timers. Pages call this from `requestAnimationFrame` or a timer
/// set for `next_deadline`.
#[wasm_bindgen]
pub fn tick(handle: usize, now_ms: f64) -> Result<(), JsError> {
    drive(handle, |c| c.tick(millis(now_ms)))
}

/// Earliest pending timer deadline in milliseconds, if any.
#[wasm_bindgen]
pub fn next_deadline(handle: usize) -> Result<Option<f64>, JsError> {
    with_slot(handle, |slot| {
        slot.carousel.next_deadline().map(|at| at as f64)
    })
}

#[wasm_bindgen]
pub fn pointer_down(handle: usize, x: f64) -> Result<(), JsError> {
    with_slot(handle, |slot| slot.carousel.pointer_down(x))
}

#[wasm_bindgen]
pub fn pointer_up(handle: usize, x: f64, now_ms: f64) -> Result<(), JsError> {
    drive(handle, |c| c.pointer_up(x, millis(now_ms)))
}

#[wasm_bindgen]
pub fn pointer_enter(handle: usize, now_ms: f64) -> Result<(), JsError> {
    drive(handle, |c| c.pointer_enter(millis(now_ms)))
}

#[wasm_bindgen]
pub fn pointer_leave(handle: usize, now_ms: f64) -> Result<(), JsError> {
    drive(handle, |c| c.pointer_leave(millis(now_ms)))
}

#[wasm_bindgen]
pub fn focus(handle: usize) -> Result<(), JsError> {
    with_slot(handle, |slot| slot.carousel.focus())
}

#[wasm_bindgen]
pub fn blur(handle: usize) -> Result<(), JsError> {
    with_slot(handle, |slot| slot.carousel.blur())
}

/// Forward a DOM `KeyboardEvent.key` value.
#[wasm_bindgen]
pub fn key_down(handle: usize, key: &str, now_ms: f64) -> Result<(), JsError> {
    let key = Key::from_dom(key);
    drive(handle, |c| c.key_down(key, millis(now_ms)))
}

#[wasm_bindgen]
pub fn resize(handle: usize, viewport_width: f64, now_ms: f64) -> Result<(), JsError> {
    drive(handle, |c| c.resize(width(viewport_width), millis(now_ms)))
}

#[wasm_bindgen]
pub fn active_index(handle: usize) -> Result<usize, JsError> {
    with_slot(handle, |slot| slot.carousel.active_index())
}

/// Drain queued render commands as a JSON array.
#[wasm_bindgen]
pub fn take_commands(handle: usize) -> Result<String, JsError> {
    let commands = with_slot(handle, |slot| std::mem::take(&mut slot.commands))?;
    to_json(&commands)
}

/// Drain `slideChanged` events as a JSON array.
#[wasm_bindgen]
pub fn take_events(handle: usize) -> Result<String, JsError> {
    let events = with_slot(handle, |slot| {
        std::mem::take(&mut *slot.events.lock().unwrap_or_else(PoisonError::into_inner))
    })?;
    to_json(&events)
}

/// Tear the carousel down and free its handle. Returns the teardown
/// commands as JSON; destroying an already freed handle returns `[]`.
#[wasm_bindgen]
pub fn destroy(handle: usize) -> Result<String, JsError> {
    let mut slots = registry();
    let entry = slots
        .get_mut(handle)
        .ok_or_else(|| JsError::new("invalid carousel handle"))?;
    let commands = match entry.take() {
        Some(mut slot) => {
            let mut commands = std::mem::take(&mut slot.commands);
            commands.extend(slot.carousel.destroy());
            commands
        }
        None => Vec::new(),
    };
    to_json(&commands)
}

/// Canned support-chat answer for `message`. `seed` picks among the
/// fallback answers when no keyword matches.
#[wasm_bindgen]
pub fn chat_reply(message: &str, seed: f64) -> String {
    let mut rng = StdRng::seed_from_u64(seed.to_bits());
    Responder::default().reply(message, &mut rng).to_string()
}
