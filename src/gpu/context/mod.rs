// GL Context Management
// Finds the canvas and obtains its WebGL context.
// Main responsibilities:
// - Look up the canvas element by id
// - Request the "webgl" rendering context
// - Report the live aspect ratio each frame
// - Tell the user when WebGL is unavailable

use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

use crate::error::RenderError;

pub struct GlContext {
    pub canvas: HtmlCanvasElement,
    pub gl: WebGlRenderingContext,
}

impl GlContext {
    pub fn new(canvas_id: &str) -> Result<Self, RenderError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(RenderError::ContextUnavailable)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| RenderError::CanvasNotFound { id: canvas_id.to_string() })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderError::NotACanvas { id: canvas_id.to_string() })?;

        let gl = canvas
            .get_context("webgl")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<WebGlRenderingContext>().ok())
            .ok_or(RenderError::ContextUnavailable)?;

        log::info!("WebGL context acquired on #{canvas_id}");
        Ok(Self { canvas, gl })
    }
}

/// Displayed width over height, sampled fresh so a resized canvas is picked
/// up on the next frame. Falls back to the drawing-buffer size while the
/// element has no layout box.
pub fn aspect(canvas: &HtmlCanvasElement) -> f32 {
    aspect_ratio(
        (canvas.client_width(), canvas.client_height()),
        (canvas.width() as i32, canvas.height() as i32),
    )
}

/// First of `client` or `buffer` with a positive size; square if neither.
fn aspect_ratio(client: (i32, i32), buffer: (i32, i32)) -> f32 {
    [client, buffer]
        .into_iter()
        .find(|&(w, h)| w > 0 && h > 0)
        .map_or(1.0, |(w, h)| w as f32 / h as f32)
}

/// Blocking alert; the only user-facing error channel.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
