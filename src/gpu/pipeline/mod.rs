// Render Pipeline Management
// Ties the linked program, its resolved locations and the cube buffers
// together and issues the indexed draw.

use glam::Mat4;

use crate::error::RenderError;
use crate::geometry::{COLOR_COMPONENTS, POSITION_COMPONENTS};
use crate::gpu::backend::GlBackend;
use crate::gpu::buffers::{self, BufferTarget, CubeBuffers};
use crate::gpu::shaders::ShaderProgram;

pub const POSITION_ATTRIBUTE: &str = "a_position";
pub const COLOR_ATTRIBUTE: &str = "a_color";
pub const MATRIX_UNIFORM: &str = "u_matrix";

pub struct CubePipeline<B: GlBackend> {
    program: ShaderProgram<B>,
    position_location: u32,
    color_location: u32,
    matrix_location: B::UniformLocation,
    buffers: CubeBuffers<B>,
}

impl<B: GlBackend> CubePipeline<B> {
    pub fn new(gl: &B) -> Result<Self, RenderError> {
        let program = ShaderProgram::cube(gl)?;
        let position_location = program.attribute(gl, POSITION_ATTRIBUTE)?;
        let color_location = program.attribute(gl, COLOR_ATTRIBUTE)?;
        let matrix_location = program.uniform(gl, MATRIX_UNIFORM)?;
        let buffers = CubeBuffers::new(gl)?;

        Ok(Self {
            program,
            position_location,
            color_location,
            matrix_location,
            buffers,
        })
    }

    /// Binds everything the draw needs, uploads `matrix` and draws all
    /// indices as a triangle list.
    pub fn draw(&self, gl: &B, matrix: &Mat4) {
        self.program.bind(gl);

        buffers::bind_attribute(gl, &self.buffers.positions, self.position_location, POSITION_COMPONENTS);
        buffers::bind_attribute(gl, &self.buffers.colors, self.color_location, COLOR_COMPONENTS);
        gl.bind_buffer(BufferTarget::Index, &self.buffers.indices);

        gl.uniform_matrix4(&self.matrix_location, &matrix.to_cols_array());
        gl.draw_triangles_u16(self.buffers.index_count);
    }

    pub fn index_count(&self) -> i32 {
        self.buffers.index_count
    }
}
