use crate::bridge;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::{dom, input, overlay};
use embedview_core::Viewer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub viewer: Rc<RefCell<Viewer>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
    pub pushed_revision: Option<u64>,
    pub was_moving: bool,
}

impl FrameContext {
    pub fn new(viewer: Rc<RefCell<Viewer>>, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            viewer,
            canvas,
            last_instant: Instant::now(),
            pushed_revision: None,
            was_moving: false,
        }
    }

    /// One animation frame: advance transitions, then forward whatever
    /// changed to the renderer. Runs every frame whether or not anything moves.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec =
            input::clamp_frame_dt((now - self.last_instant).as_secs_f32(), MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let mut viewer = self.viewer.borrow_mut();
        viewer.set_aspect(input::aspect_of(self.canvas.width(), self.canvas.height()));
        if crate::take_pending_assets() {
            viewer.on_assets_loaded();
            if let Some(document) = dom::window_document() {
                overlay::hide_loading(&document);
            }
        }
        if !viewer.is_ready() {
            return;
        }
        let moving = viewer.tick(Duration::from_secs_f32(dt_sec));

        let revision = viewer.layout_revision();
        // push on the settling frame too, so the final positions land exactly
        if moving || self.was_moving || self.pushed_revision != Some(revision) {
            bridge::push_positions(viewer.positions_f32());
            self.pushed_revision = Some(revision);
        }
        self.was_moving = moving;

        if let Some(update) = viewer.take_camera_update() {
            bridge::push_camera(&update);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
