// Browser smoke tests. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{HtmlButtonElement, HtmlElement};

use valentine_card::config::{CALENDAR_OPEN_DELAY_MS, CONFIRM_DELAY_MS};

wasm_bindgen_test_configure!(run_in_browser);

fn query(selector: &str) -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()
}

fn click(selector: &str) {
    let el: HtmlElement = query(selector).unwrap().dyn_into().unwrap();
    el.click();
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

// Replace `window.open` with a counter so no tab is opened.
fn count_window_open() -> (Rc<Cell<u32>>, Closure<dyn FnMut(JsValue, JsValue) -> JsValue>) {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let stub = Closure::wrap(Box::new(move |_url: JsValue, _target: JsValue| {
        counter.set(counter.get() + 1);
        JsValue::NULL
    }) as Box<dyn FnMut(JsValue, JsValue) -> JsValue>);
    let win = web_sys::window().unwrap();
    js_sys::Reflect::set(&win, &JsValue::from_str("open"), stub.as_ref()).unwrap();
    (calls, stub)
}

#[wasm_bindgen_test]
fn test_mounts_question_and_tears_down() {
    valentine_card::start_card().unwrap();
    assert_eq!(valentine_card::card_view().as_deref(), Some("question"));
    assert!(query(".btn-no").is_some());
    assert!(query(".no-button-boundary").is_some());

    valentine_card::stop_card();
    assert_eq!(valentine_card::card_view(), None);
    assert!(query(".btn-no").is_none());
}

#[wasm_bindgen_test]
fn test_clicking_no_moves_it_into_free_placement() {
    valentine_card::start_card().unwrap();
    click(".btn-no");
    // The boundary may be too small in a headless window; then nothing moves.
    if let Some(free) = query(".btn-no-teleport") {
        assert_eq!(free.get_attribute("data-instance").as_deref(), Some("1"));
        assert!(query(".no-button-spacer").is_some());
    }
    valentine_card::stop_card();
}

#[wasm_bindgen_test]
fn test_yes_is_one_way() {
    valentine_card::start_card().unwrap();
    click(".btn-yes");
    assert_eq!(valentine_card::card_view().as_deref(), Some("success"));
    click(".btn-yes");
    assert_eq!(valentine_card::card_view().as_deref(), Some("success"));
    valentine_card::stop_card();
}

#[wasm_bindgen_test]
async fn test_success_page_calendar_and_confetti_teardown() {
    let (opened, _stub) = count_window_open();
    valentine_card::start_card().unwrap();
    click(".btn-yes");
    sleep(CONFIRM_DELAY_MS + 200).await;

    assert!(query(".confetti-canvas").is_some());
    assert!(query(".btn-no").is_none());
    let calendar: HtmlButtonElement = query(".calendar-btn").unwrap().dyn_into().unwrap();
    assert!(!calendar.disabled());

    calendar.click();
    calendar.click();
    assert!(calendar.disabled());
    assert!(calendar.class_list().contains("added"));
    sleep(CALENDAR_OPEN_DELAY_MS + 200).await;
    assert_eq!(opened.get(), 1);

    valentine_card::stop_card();
    assert!(query(".confetti-canvas").is_none());
    assert!(query(".calendar-btn").is_none());
}

#[wasm_bindgen_test]
async fn test_remount_before_success_render_stays_on_question() {
    valentine_card::start_card().unwrap();
    click(".btn-yes");
    valentine_card::stop_card();
    valentine_card::start_card().unwrap();
    sleep(CONFIRM_DELAY_MS + 200).await;

    assert_eq!(valentine_card::card_view().as_deref(), Some("question"));
    assert!(query(".btn-no").is_some());
    assert!(query(".calendar-btn").is_none());
    assert!(query(".confetti-canvas").is_none());
    valentine_card::stop_card();
}
