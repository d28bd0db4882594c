//! Particle field on the full-viewport canvas

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::dom;
use crate::config::FieldConfig;
use crate::field::{Field, Surface};
use crate::page::ids;

/// 2D canvas context as a field surface
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(style);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, style: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(style);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}

/// Canvas, its drawing context and the field drawn on it
struct Background {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    field: Field,
}

impl Background {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.resize(width as f32, height as f32);
    }

    fn frame(&mut self) {
        self.field.frame(&mut self.surface);
    }
}

/// Viewport size in CSS pixels
fn viewport_size(window: &Window) -> (u32, u32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Size the canvas to the viewport, spawn the field and start animating
pub fn start(window: &Window, document: &Document, config: &FieldConfig) -> Result<(), JsValue> {
    let canvas: HtmlCanvasElement = dom::require_as(document, ids::CANVAS)?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)?;

    let (width, height) = viewport_size(window);
    canvas.set_width(width);
    canvas.set_height(height);

    let seed = js_sys::Date::now() as u64;
    let field = Field::new(width as f32, height as f32, seed, config.clone());
    log::info!(
        "Background field {}x{} with {} points",
        width,
        height,
        field.points.len()
    );

    let background = Rc::new(RefCell::new(Background {
        canvas,
        surface: CanvasSurface { ctx },
        field,
    }));

    {
        let background = background.clone();
        let win = window.clone();
        dom::listen(window, "resize", move |_event| {
            let (width, height) = viewport_size(&win);
            background.borrow_mut().resize(width, height);
        })?;
    }

    request_animation_frame(background);
    Ok(())
}

fn request_animation_frame(background: Rc<RefCell<Background>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(move |_time: f64| {
        frame_loop(background);
    });
    let _ = window.request_animation_frame(callback.unchecked_ref());
}

fn frame_loop(background: Rc<RefCell<Background>>) {
    background.borrow_mut().frame();
    request_animation_frame(background);
}
