//! Frame loop and input wiring for the ornament.
//!
//! [`OrnamentCore`] holds the scene and motion state and is browser-free.
//! [`Ornament`] pairs it with a [`Surface`] that measures and draws. [`mount`]
//! builds the browser version and drives it from `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlCanvasElement;

use crate::camera::Viewport;
use crate::error::OrnamentError;
use crate::motion::{Motion, Point};
use crate::render::CanvasSurface;
use crate::scene::{Frame, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Everything the ornament needs from its host: pointer input, a place to
/// draw, and the current size.
pub trait Surface {
    /// Route pointer input on the surface into `core`.
    ///
    /// # Errors
    ///
    /// Returns an error if a listener cannot be attached.
    fn attach_input_handlers(&mut self, core: Rc<RefCell<OrnamentCore>>) -> Result<(), OrnamentError>;

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if any drawing call fails.
    fn render_frame(&mut self, frame: &Frame) -> Result<(), OrnamentError>;

    /// Re-measure the drawing area and resize the backing store to match.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the resize.
    fn handle_resize(&mut self) -> Result<Viewport, OrnamentError>;
}

/// Scene, motion and the last known viewport.
#[derive(Debug)]
pub struct OrnamentCore {
    pub scene: Scene,
    pub motion: Motion,
    pub viewport: Viewport,
}

impl OrnamentCore {
    #[must_use]
    pub fn new(scene: Scene, viewport: Viewport) -> Self {
        Self { scene, motion: Motion::new(), viewport }
    }

    pub fn pointer_down(&mut self, at: Point) {
        self.motion.pointer_down(at);
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.motion.pointer_move(at);
    }

    pub fn pointer_up(&mut self) {
        self.motion.pointer_up();
    }

    /// Advance the motion one step and project the scene.
    pub fn tick(&mut self) -> Frame {
        self.motion.tick();
        self.scene.frame(&self.motion, self.viewport)
    }
}

pub struct Ornament<S: Surface> {
    core: Rc<RefCell<OrnamentCore>>,
    surface: S,
}

impl<S: Surface> Ornament<S> {
    /// Size the surface, set up the core and hand it to the input handlers.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial resize or listener setup fails.
    pub fn new(mut surface: S, scene: Scene) -> Result<Self, OrnamentError> {
        let viewport = surface.handle_resize()?;
        let core = Rc::new(RefCell::new(OrnamentCore::new(scene, viewport)));
        surface.attach_input_handlers(Rc::clone(&core))?;
        Ok(Self { core, surface })
    }

    #[must_use]
    pub fn core(&self) -> Rc<RefCell<OrnamentCore>> {
        Rc::clone(&self.core)
    }

    /// Advance and draw one frame.
    ///
    /// # Errors
    ///
    /// Propagates drawing failures from the surface.
    pub fn frame(&mut self) -> Result<(), OrnamentError> {
        let frame = self.core.borrow_mut().tick();
        self.surface.render_frame(&frame)
    }

    /// Follow a window resize: new viewport for projection, new backing store.
    ///
    /// # Errors
    ///
    /// Propagates resize failures from the surface.
    pub fn resize(&mut self) -> Result<(), OrnamentError> {
        let viewport = self.surface.handle_resize()?;
        self.core.borrow_mut().viewport = viewport;
        log::debug!("ornament resized to {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

// ── Browser mount ───────────────────────────────────────────────

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Start the ornament on `canvas` and keep it animating for the life of the
/// page.
///
/// # Errors
///
/// Returns an error when the canvas is absent, there is no window, the 2D
/// context is unavailable or a listener cannot be attached. The caller
/// should treat any error as "no decoration".
pub fn mount(canvas: Option<HtmlCanvasElement>) -> Result<(), OrnamentError> {
    let canvas = canvas.ok_or(OrnamentError::MissingCanvas)?;
    let window = web_sys::window().ok_or(OrnamentError::NoWindow)?;

    let surface = CanvasSurface::new(canvas)?;
    let ornament = Rc::new(RefCell::new(Ornament::new(surface, Scene::new(js_sys::Math::random))?));

    let on_resize = {
        let ornament = Rc::clone(&ornament);
        Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = ornament.borrow_mut().resize() {
                log::warn!("ornament resize failed: {err}");
            }
        })
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    start_loop(&window, ornament)?;
    log::info!("ornament mounted");
    Ok(())
}

/// Self-rescheduling `requestAnimationFrame` loop. The callback holds its own
/// handle, so it lives as long as the page.
fn start_loop(window: &web_sys::Window, ornament: Rc<RefCell<Ornament<CanvasSurface>>>) -> Result<(), OrnamentError> {
    let holder: FrameCallback = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    *holder.borrow_mut() = Some(Closure::new(move |_ts: f64| {
        if let Err(err) = ornament.borrow_mut().frame() {
            log::warn!("ornament frame failed, stopping: {err}");
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::warn!("ornament frame request failed: {err:?}");
            }
        }
    }));
    if let Some(cb) = holder.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
