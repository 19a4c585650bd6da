//! Browser runtime for the card.
//!
//! Builds the question / success pages, wires DOM listeners and forwards every
//! event to [`CardFlow`]. All card state lives in one thread-local
//! [`CardState`]; listener closures only look it up and call into it.
//!
//! Any element that has gone missing by the time a handler runs turns the
//! handler into a no-op.

mod confetti;
mod markup;

pub use confetti::ConfettiHandle;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlCanvasElement, MouseEvent, window};

use crate::config::{CALENDAR_OPEN_DELAY_MS, CONFIRM_DELAY_MS, CardConfig};
use crate::decor;
use crate::flow::{CardFlow, View};
use crate::placement::{ElementSize, PlacementInput, Position, Region};

/// Element the card mounts into; created under `<body>` when absent.
pub const ROOT_ID: &str = "vc-root";
/// Optional `<script type="application/json">` holding config overrides.
pub const CONFIG_ID: &str = "vc-config";

type Listener = Closure<dyn FnMut(MouseEvent)>;

/// One closure per action, shared by every element that triggers it.
struct Listeners {
    evade: Listener,
    confirm: Listener,
    calendar: Listener,
}

impl Listeners {
    fn new() -> Self {
        Self {
            evade: Closure::wrap(Box::new(|_evt: MouseEvent| {
                with_card("evasive button", CardState::evade);
            }) as Box<dyn FnMut(_)>),
            confirm: Closure::wrap(Box::new(|_evt: MouseEvent| {
                with_card("yes button", CardState::confirm);
            }) as Box<dyn FnMut(_)>),
            calendar: Closure::wrap(Box::new(|_evt: MouseEvent| {
                with_card("calendar button", CardState::add_to_calendar);
            }) as Box<dyn FnMut(_)>),
        }
    }
}

struct CardState {
    config: CardConfig,
    flow: CardFlow,
    doc: Document,
    root: Element,
    owns_root: bool,
    /// Bumped on every mount; deferred work checks it before touching the card.
    generation: u32,
    // Question page
    container: Option<Element>,
    boundary: Option<Element>,
    inline_slot: Option<Element>,
    no_button: Option<Element>,
    yes_button: Option<Element>,
    // Success page
    calendar_button: Option<HtmlButtonElement>,
    confetti: Option<ConfettiHandle>,
    listeners: Listeners,
}

thread_local! {
    static CARD: std::cell::RefCell<Option<CardState>> = const { std::cell::RefCell::new(None) };
    static GENERATION: std::cell::Cell<u32> = const { std::cell::Cell::new(0) };
}

fn with_card(what: &str, f: impl FnOnce(&mut CardState) -> Result<(), JsValue>) {
    CARD.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            if let Err(err) = f(state) {
                log::warn!("{what}: {err:?}");
            }
        }
    });
}

/// Build the card and show the question. Replaces any card already mounted.
pub fn mount(config: CardConfig) -> Result<(), JsValue> {
    unmount();
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let (root, owns_root) = match doc.get_element_by_id(ROOT_ID) {
        Some(el) => (el, false),
        None => {
            let el = doc.create_element("div")?;
            el.set_id(ROOT_ID);
            doc.body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&el)?;
            (el, true)
        }
    };
    root.set_class_name("app");
    let generation = GENERATION.with(|g| {
        g.set(g.get().wrapping_add(1));
        g.get()
    });

    let mut state = CardState {
        flow: CardFlow::new(config.calendar.clone()),
        config,
        doc,
        root,
        owns_root,
        generation,
        container: None,
        boundary: None,
        inline_slot: None,
        no_button: None,
        yes_button: None,
        calendar_button: None,
        confetti: None,
        listeners: Listeners::new(),
    };
    state.render_question()?;
    CARD.with(|cell| *cell.borrow_mut() = Some(state));
    log::info!("card mounted");
    Ok(())
}

/// Tear the card down: stop the confetti loop and clear the DOM.
pub fn unmount() {
    let Some(mut state) = CARD.with(|cell| cell.borrow_mut().take()) else {
        return;
    };
    if let Some(mut confetti) = state.confetti.take() {
        confetti.stop();
    }
    state.root.set_inner_html("");
    if state.owns_root {
        state.root.remove();
    }
    log::info!("card unmounted");
}

/// Current view name, `None` when nothing is mounted.
pub fn current_view() -> Option<&'static str> {
    CARD.with(|cell| {
        cell.borrow().as_ref().map(|s| match s.flow.view() {
            View::Question(_) => "question",
            View::Success(_) => "success",
        })
    })
}

/// Read overrides from the inline config block, falling back to defaults.
pub fn load_config(doc: &Document) -> CardConfig {
    inline_config(doc).unwrap_or_default()
}

#[cfg(feature = "serde_json")]
fn inline_config(doc: &Document) -> Option<CardConfig> {
    let src = doc.get_element_by_id(CONFIG_ID)?.text_content()?;
    match CardConfig::from_json(&src) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("ignoring malformed #{CONFIG_ID}: {err}");
            None
        }
    }
}

#[cfg(not(feature = "serde_json"))]
fn inline_config(_doc: &Document) -> Option<CardConfig> {
    None
}

impl CardState {
    fn reset_root(&self) -> Result<(), JsValue> {
        self.root.set_inner_html("");
        let style = self.doc.create_element("style")?;
        style.set_text_content(Some(markup::STYLE));
        self.root.append_child(&style)?;
        Ok(())
    }

    fn render_question(&mut self) -> Result<(), JsValue> {
        let doc = self.doc.clone();
        self.reset_root()?;

        let container = el(&doc, "div", "page-container")?;
        let boundary = el(&doc, "div", "no-button-boundary")?;
        boundary.set_attribute("aria-hidden", "true")?;
        container.append_child(&boundary)?;

        let hearts = el(&doc, "div", "hearts-background")?;
        for heart in decor::scatter(&mut rand::thread_rng(), self.config.floating_hearts) {
            let h = el(&doc, "div", "floating-heart")?;
            h.set_attribute("style", &heart.style())?;
            h.set_inner_html(markup::HEART_SVG);
            hearts.append_child(&h)?;
        }
        container.append_child(&hearts)?;

        let content = el(&doc, "div", "content-wrapper")?;
        let icon = el(&doc, "div", "heart-icon")?;
        icon.set_inner_html(markup::HEART_SVG);
        content.append_child(&icon)?;
        let title = el(&doc, "h1", "question-title intro")?;
        title.set_text_content(Some(&self.config.question));
        content.append_child(&title)?;

        let row = el(&doc, "div", "buttons-container")?;
        let yes = el(&doc, "button", "btn btn-yes intro-late")?;
        let yes_text = el(&doc, "span", "btn-text")?;
        yes_text.set_text_content(Some(&self.config.yes_label));
        let yes_icon = el(&doc, "span", "btn-icon")?;
        yes_icon.set_inner_html(markup::HEART_SVG);
        yes.append_child(&yes_text)?;
        yes.append_child(&yes_icon)?;
        yes.add_event_listener_with_callback("click", self.listeners.confirm.as_ref().unchecked_ref())?;
        row.append_child(&yes)?;

        let slot = el(&doc, "div", "no-button-wrapper intro-late")?;
        let no = self.build_no_button(None, 0)?;
        slot.append_child(&no)?;
        row.append_child(&slot)?;
        content.append_child(&row)?;
        container.append_child(&content)?;
        self.root.append_child(&container)?;

        self.container = Some(container);
        self.boundary = Some(boundary);
        self.inline_slot = Some(slot);
        self.no_button = Some(no);
        self.yes_button = Some(yes);
        Ok(())
    }

    /// A fresh "No" button; `at` switches it to free placement.
    fn build_no_button(&self, at: Option<Position>, instance: u32) -> Result<Element, JsValue> {
        let class = if at.is_some() {
            "btn btn-no btn-no-teleport"
        } else {
            "btn btn-no"
        };
        let button = el(&self.doc, "button", class)?;
        button.set_attribute("data-instance", &instance.to_string())?;
        if let Some(p) = at {
            button.set_attribute("style", &format!("left:{:.2}px;top:{:.2}px;", p.x, p.y))?;
        }
        let text = el(&self.doc, "span", "btn-text")?;
        text.set_text_content(Some(&self.config.no_label));
        button.append_child(&text)?;
        button.add_event_listener_with_callback("mouseenter", self.listeners.evade.as_ref().unchecked_ref())?;
        button.add_event_listener_with_callback("click", self.listeners.evade.as_ref().unchecked_ref())?;
        Ok(button)
    }

    fn evade(&mut self) -> Result<(), JsValue> {
        let (Some(button), Some(container), Some(boundary)) = (
            self.no_button.clone(),
            self.container.clone(),
            self.boundary.clone(),
        ) else {
            log::debug!("evasive button: page not mounted");
            return Ok(());
        };
        if !(button.is_connected() && container.is_connected() && boundary.is_connected()) {
            log::debug!("evasive button: element detached");
            return Ok(());
        }

        let input = measure(&button, &container, &boundary, self.config.boundary_padding);
        let Some(moved) = self.flow.evade(&input, &mut rand::thread_rng()) else {
            log::debug!("evasive button: no room inside {:?}", input.region);
            return Ok(());
        };

        if moved.first {
            if let Some(slot) = self.inline_slot.take() {
                let spacer = el(&self.doc, "div", "no-button-spacer")?;
                spacer.set_attribute("aria-hidden", "true")?;
                slot.replace_with_with_node_1(&spacer)?;
            }
        }
        // New element per move so no half-finished hover/transition carries over.
        let fresh = self.build_no_button(Some(moved.position), moved.instance)?;
        button.remove();
        container.append_child(&fresh)?;
        self.no_button = Some(fresh);
        log::debug!(
            "evasive button #{} -> ({:.1}, {:.1})",
            moved.instance,
            moved.position.x,
            moved.position.y
        );
        Ok(())
    }

    fn confirm(&mut self) -> Result<(), JsValue> {
        if !self.flow.confirm() {
            return Ok(());
        }
        log::info!("question answered");
        if let Some(yes) = &self.yes_button {
            yes.class_list().add_1("pressed")?;
        }
        let generation = self.generation;
        defer(CONFIRM_DELAY_MS, move || {
            with_card("success page", |card| {
                if card.generation != generation {
                    log::debug!("success page: card was remounted");
                    return Ok(());
                }
                card.render_success()
            });
        })?;
        Ok(())
    }

    fn render_success(&mut self) -> Result<(), JsValue> {
        // Only a card that answered "Yes" shows the success page, and only once.
        if !matches!(self.flow.view(), View::Success(_)) || self.calendar_button.is_some() {
            return Ok(());
        }
        let doc = self.doc.clone();
        self.container = None;
        self.boundary = None;
        self.inline_slot = None;
        self.no_button = None;
        self.yes_button = None;
        self.reset_root()?;

        let page = el(&doc, "div", "page-container success-page")?;
        let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        canvas.set_class_name("confetti-canvas");
        page.append_child(&canvas)?;

        let content = el(&doc, "div", "success-content intro")?;
        let icon = el(&doc, "div", "celebration-icon")?;
        let img = el(&doc, "img", "celebration-gif")?;
        img.set_attribute("src", &self.config.celebration_image)?;
        img.set_attribute("alt", "Celebration cat")?;
        icon.append_child(&img)?;
        content.append_child(&icon)?;

        let title = el(&doc, "h1", "success-title")?;
        title.set_text_content(Some(&self.config.success_title));
        content.append_child(&title)?;
        let message = el(&doc, "p", "success-message")?;
        message.set_text_content(Some(&self.config.success_message));
        content.append_child(&message)?;

        let divider = el(&doc, "div", "heart-divider")?;
        divider.set_inner_html(&markup::HEART_SVG.repeat(3));
        content.append_child(&divider)?;

        let calendar: HtmlButtonElement = el(&doc, "button", "calendar-btn")?.dyn_into()?;
        self.paint_calendar_button(&calendar, false)?;
        calendar.add_event_listener_with_callback("click", self.listeners.calendar.as_ref().unchecked_ref())?;
        content.append_child(&calendar)?;
        page.append_child(&content)?;
        self.root.append_child(&page)?;
        self.calendar_button = Some(calendar);

        if let Some(mut old) = self.confetti.take() {
            old.stop();
        }
        self.confetti = ConfettiHandle::start(&canvas, &self.config)?;
        Ok(())
    }

    fn paint_calendar_button(&self, button: &HtmlButtonElement, added: bool) -> Result<(), JsValue> {
        let (icon, text) = if added {
            (markup::CHECK_SVG, &self.config.calendar_added_label)
        } else {
            (markup::CALENDAR_SVG, &self.config.calendar_label)
        };
        button.set_inner_html(icon);
        let label = self.doc.create_element("span")?;
        label.set_text_content(Some(text));
        button.append_child(&label)?;
        button.set_disabled(added);
        if added {
            button.class_list().add_1("added")?;
        }
        Ok(())
    }

    fn add_to_calendar(&mut self) -> Result<(), JsValue> {
        let Some(url) = self.flow.add_to_calendar() else {
            return Ok(());
        };
        if let Some(button) = &self.calendar_button {
            self.paint_calendar_button(button, true)?;
        }
        log::info!("opening calendar link");
        // Let the "added" state paint before the new tab steals focus.
        defer(CALENDAR_OPEN_DELAY_MS, move || {
            if let Some(w) = window() {
                if let Err(err) = w.open_with_url_and_target(&url, "_blank") {
                    log::warn!("calendar link: {err:?}");
                }
            }
        })?;
        Ok(())
    }
}

fn el(doc: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let e = doc.create_element(tag)?;
    e.set_class_name(class);
    Ok(e)
}

fn measure(button: &Element, container: &Element, boundary: &Element, padding: f64) -> PlacementInput {
    let b = button.get_bounding_client_rect();
    let c = container.get_bounding_client_rect();
    let r = boundary.get_bounding_client_rect();
    PlacementInput {
        region: Region::new(r.left(), r.top(), r.right(), r.bottom())
            .relative_to(Position::new(c.left(), c.top())),
        element: ElementSize::new(b.width(), b.height()),
        container: ElementSize::new(c.width(), c.height()),
        padding,
    }
}

fn defer(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let cb = Closure::once_into_js(f);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
}
