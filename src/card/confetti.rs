//! Heart confetti on the success screen: a canvas sized to the viewport and a
//! `requestAnimationFrame` loop that runs until the handle is stopped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::config::{CardConfig, PARTICLE_COUNT};
use crate::particles::{ParticleField, heart_path};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Everything one frame needs. Owned by the loop, shared with the resize
/// listener.
struct ConfettiScene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
    config: CardConfig,
}

impl ConfettiScene {
    fn frame(&mut self) -> Result<(), JsValue> {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.field.step(&mut rand::thread_rng());
        for p in self.field.particles() {
            self.ctx.save();
            let drawn = self.draw_heart(p.x, p.y, p.rotation_radians(), p.size, p.color);
            self.ctx.restore();
            drawn?;
        }
        Ok(())
    }

    fn draw_heart(&self, x: f64, y: f64, angle: f64, size: f64, color: usize) -> Result<(), JsValue> {
        self.ctx.translate(x, y)?;
        self.ctx.rotate(angle)?;
        self.ctx.set_fill_style_str(self.config.color(color));
        let (start, curves) = heart_path(size);
        self.ctx.begin_path();
        self.ctx.move_to(start.0, start.1);
        for c in curves.iter() {
            self.ctx.bezier_curve_to(c.c1.0, c.c1.1, c.c2.0, c.c2.1, c.to.0, c.to.1);
        }
        self.ctx.fill();
        Ok(())
    }

    fn fit_to(&mut self, win: &Window) {
        let (w, h) = viewport_size(win);
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
        self.field.resize(w, h);
    }
}

fn viewport_size(win: &Window) -> (f64, f64) {
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Running confetti loop. Stopping (or dropping) it cancels the pending frame
/// and unregisters the resize listener.
pub struct ConfettiHandle {
    window: Window,
    frame_id: Rc<Cell<Option<i32>>>,
    frame_cb: FrameCallback,
    resize_cb: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl ConfettiHandle {
    /// Start animating on `canvas`. Returns `Ok(None)` when the canvas has no
    /// 2D context.
    pub fn start(canvas: &HtmlCanvasElement, config: &CardConfig) -> Result<Option<Self>, JsValue> {
        let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let ctx: CanvasRenderingContext2d = match canvas.get_context("2d")? {
            Some(obj) => obj.dyn_into()?,
            None => {
                log::debug!("confetti: canvas has no 2d context");
                return Ok(None);
            }
        };

        let (w, h) = viewport_size(&win);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        let field = ParticleField::spawn(
            &mut rand::thread_rng(),
            PARTICLE_COUNT,
            w,
            h,
            config.palette.len(),
        );
        log::debug!("confetti: {} particles on {w}x{h}", field.len());

        let scene = Rc::new(RefCell::new(ConfettiScene {
            canvas: canvas.clone(),
            ctx,
            field,
            config: config.clone(),
        }));

        let resize_cb = {
            let scene = scene.clone();
            Closure::wrap(Box::new(move |_evt: web_sys::Event| {
                if let Some(w) = web_sys::window() {
                    scene.borrow_mut().fit_to(&w);
                }
            }) as Box<dyn FnMut(_)>)
        };
        win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

        let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        {
            let frame_id = frame_id.clone();
            *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
                if let Err(err) = scene.borrow_mut().frame() {
                    log::warn!("confetti frame failed: {err:?}");
                }
                if let (Some(w), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
                    frame_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }) as Box<dyn FnMut(f64)>));
        }
        if let Some(cb) = g.borrow().as_ref() {
            frame_id.set(Some(win.request_animation_frame(cb.as_ref().unchecked_ref())?));
        }

        Ok(Some(Self {
            window: win,
            frame_id,
            frame_cb: g,
            resize_cb: Some(resize_cb),
        }))
    }

    /// Cancel the loop. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Dropping the closure also breaks its reference to itself.
        self.frame_cb.borrow_mut().take();
        if let Some(cb) = self.resize_cb.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ConfettiHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
