//! Valentine card core crate.
//!
//! The question page offers "Yes" and an evasive "No" that jumps to a random
//! spot whenever the pointer reaches it. "Yes" leads to a success page with
//! falling heart confetti and a one-shot "add to calendar" button.
//!
//! Pure logic (placement, particles, flow) builds and tests natively; the
//! `card` module is the browser runtime on top of it.

use wasm_bindgen::prelude::*;

pub mod calendar;
pub mod card;
pub mod config;
pub mod decor;
pub mod flow;
pub mod particles;
pub mod placement;

pub use config::{CalendarEvent, CardConfig};
pub use flow::{CalendarState, CardFlow, EvasiveTarget, TargetPlacement, View};
pub use particles::{Particle, ParticleField};
pub use placement::{ElementSize, PlacementInput, Position, Region, place_evasive};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    // A second init (e.g. a test harness that already set a logger) is fine.
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Mount the card into `#vc-root` (created if missing), applying any inline
/// `#vc-config` overrides.
#[wasm_bindgen]
pub fn start_card() -> Result<(), JsValue> {
    let doc = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let config = card::load_config(&doc);
    card::mount(config)
}

/// Tear the card down, cancelling the confetti loop.
#[wasm_bindgen]
pub fn stop_card() {
    card::unmount();
}

/// "question", "success", or `undefined` when no card is mounted.
#[wasm_bindgen]
pub fn card_view() -> Option<String> {
    card::current_view().map(str::to_string)
}
