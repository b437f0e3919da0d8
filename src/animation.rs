use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::frame::{FrameState, Renderer};
use crate::gpu::context::{self, GlContext};

fn request_animation_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Sets up the pipeline on the configured canvas and starts drawing.
///
/// On failure the loop is not started. Environment failures are logged and
/// alerted; shader and link failures were already logged where they happened.
pub fn start(config: &RenderConfig) -> Result<(), RenderError> {
    let result = GlContext::new(&config.canvas_id)
        .and_then(|GlContext { canvas, gl }| Ok((canvas, Renderer::new(gl, config)?)));

    match result {
        Ok((canvas, renderer)) => {
            run(canvas, renderer);
            Ok(())
        }
        Err(e) => {
            match &e {
                e if e.is_environment() => {
                    log::error!("{e}");
                    context::alert(&e.to_string());
                }
                // Already logged with the driver diagnostic.
                RenderError::ShaderCompile { .. } | RenderError::ProgramLink { .. } => {}
                e => log::error!("{e}"),
            }
            Err(e)
        }
    }
}

/// Drives `renderer` once per display refresh until the page goes away.
fn run(canvas: HtmlCanvasElement, renderer: Renderer<WebGlRenderingContext>) {
    let callback = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
    let callback_clone = callback.clone();
    let mut state = FrameState::default();

    let render_fn = move || {
        state = renderer.render_frame(state, context::aspect(&canvas));
        if let Some(cb) = callback_clone.borrow().as_ref() {
            request_animation_frame(cb);
        }
    };

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(render_fn) as Box<dyn FnMut()>));

    // Start the render loop
    if let Some(cb) = callback.borrow().as_ref() {
        request_animation_frame(cb);
    }
}
