use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::gpu::backend::GlBackend;
use crate::gpu::pipeline::CubePipeline;
use crate::gpu::utils;
use crate::transform::Transform;

const TRACE_EVERY: u64 = 600;

/// Everything that changes between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameState {
    /// Radians; only ever grows.
    pub angle: f64,
    pub frame: u64,
}

impl FrameState {
    /// Steps by a fixed amount per call, independent of elapsed time.
    pub fn advance(self, step: f64) -> Self {
        Self {
            angle: self.angle + step,
            frame: self.frame + 1,
        }
    }
}

/// Owns the GL context and everything built on it.
pub struct Renderer<B: GlBackend> {
    gl: B,
    pipeline: CubePipeline<B>,
    transform: Transform,
    clear_color: [f32; 4],
    angle_step: f64,
}

impl<B: GlBackend> Renderer<B> {
    pub fn new(gl: B, config: &RenderConfig) -> Result<Self, RenderError> {
        let pipeline = CubePipeline::new(&gl)?;
        log::info!("cube pipeline ready ({} indices)", pipeline.index_count());
        Ok(Self {
            gl,
            pipeline,
            transform: Transform::from_config(config),
            clear_color: config.clear_color,
            angle_step: config.angle_step,
        })
    }

    /// Draws one frame at `state.angle` and returns the state for the next one.
    pub fn render_frame(&self, state: FrameState, aspect: f32) -> FrameState {
        utils::clear_frame(&self.gl, self.clear_color);

        let matrix = self.transform.combined(state.angle, aspect);
        self.pipeline.draw(&self.gl, &matrix);

        if state.frame % TRACE_EVERY == 0 {
            log::trace!("frame {} angle {:.3} aspect {:.3}", state.frame, state.angle, aspect);
        }
        state.advance(self.angle_step)
    }

    #[cfg(test)]
    pub fn gl(&self) -> &B {
        &self.gl
    }
}
