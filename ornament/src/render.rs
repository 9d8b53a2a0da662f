//! 2D canvas surface for the ornament.
//!
//! This is the only module that touches [`web_sys::CanvasRenderingContext2d`].
//! [`draw`] paints a prepared [`Frame`] and never changes scene or motion
//! state; pointer listeners only forward positions to the core.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::camera::Viewport;
use crate::engine::{OrnamentCore, Surface};
use crate::error::OrnamentError;
use crate::motion::Point;
use crate::scene::Frame;

/// Line width of the wireframe in CSS pixels.
const LINE_WIDTH_PX: f64 = 1.0;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// # Errors
    ///
    /// Returns [`OrnamentError::NoContext`] when the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, OrnamentError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(OrnamentError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| OrnamentError::NoContext)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn attach_input_handlers(&mut self, core: Rc<RefCell<OrnamentCore>>) -> Result<(), OrnamentError> {
        let window = web_sys::window().ok_or(OrnamentError::NoWindow)?;
        let canvas: &EventTarget = &self.canvas;

        let down = Rc::clone(&core);
        listen(canvas, "mousedown", move |ev| {
            if let Some(at) = mouse_point(&ev) {
                down.borrow_mut().pointer_down(at);
            }
        })?;
        let moved = Rc::clone(&core);
        listen(canvas, "mousemove", move |ev| {
            if let Some(at) = mouse_point(&ev) {
                moved.borrow_mut().pointer_move(at);
            }
        })?;
        // A drag released outside the canvas still ends.
        let up = Rc::clone(&core);
        listen(&window, "mouseup", move |_| up.borrow_mut().pointer_up())?;

        let touch_down = Rc::clone(&core);
        listen(canvas, "touchstart", move |ev| {
            if let Some(at) = touch_point(&ev) {
                touch_down.borrow_mut().pointer_down(at);
            }
        })?;
        let touch_moved = Rc::clone(&core);
        listen(canvas, "touchmove", move |ev| {
            if let Some(at) = touch_point(&ev) {
                touch_moved.borrow_mut().pointer_move(at);
            }
        })?;
        listen(canvas, "touchend", move |_| core.borrow_mut().pointer_up())?;
        Ok(())
    }

    fn render_frame(&mut self, frame: &Frame) -> Result<(), OrnamentError> {
        draw(&self.ctx, frame)?;
        Ok(())
    }

    fn handle_resize(&mut self) -> Result<Viewport, OrnamentError> {
        let window = web_sys::window().ok_or(OrnamentError::NoWindow)?;
        let viewport = Viewport::new(
            f64::from(self.canvas.client_width()),
            f64::from(self.canvas.client_height()),
            window.device_pixel_ratio(),
        );
        let (width, height) = viewport.backing_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(viewport)
    }
}

/// Attach `handler` for the lifetime of the page.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), OrnamentError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn mouse_point(ev: &Event) -> Option<Point> {
    let ev = ev.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())))
}

fn touch_point(ev: &Event) -> Option<Point> {
    let touch = ev.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Clear and draw strokes (in order) then particles.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, frame: &Frame) -> Result<(), JsValue> {
    let Viewport { width, height, pixel_ratio } = frame.viewport;
    ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_line_width(LINE_WIDTH_PX);
    for stroke in &frame.strokes {
        ctx.set_stroke_style_str(&stroke.color.css());
        ctx.begin_path();
        for (from, to) in &stroke.segments {
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
        }
        ctx.stroke();
    }

    ctx.set_fill_style_str(&frame.dot_color.css());
    for dot in &frame.dots {
        ctx.begin_path();
        ctx.arc(dot.x, dot.y, dot.size / 2.0, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}
