// Buffer Management
// Uploads static geometry into GPU memory and wires buffers to attributes.
// Buffers are written once at creation and never touched again.

use crate::error::RenderError;
use crate::geometry::{self, COLOR_COMPONENTS, POSITION_COMPONENTS, VERTEX_COUNT};
use crate::gpu::backend::GlBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Per-vertex attribute data (`ARRAY_BUFFER`).
    Vertex,
    /// Triangle indices (`ELEMENT_ARRAY_BUFFER`).
    Index,
}

pub fn upload_f32<B: GlBackend>(gl: &B, target: BufferTarget, data: &[f32]) -> Result<B::Buffer, RenderError> {
    let buffer = gl
        .create_buffer()
        .ok_or(RenderError::ResourceAllocation { what: "buffer" })?;
    gl.bind_buffer(target, &buffer);
    gl.buffer_data_f32(target, data);
    Ok(buffer)
}

pub fn upload_u16<B: GlBackend>(gl: &B, target: BufferTarget, data: &[u16]) -> Result<B::Buffer, RenderError> {
    let buffer = gl
        .create_buffer()
        .ok_or(RenderError::ResourceAllocation { what: "buffer" })?;
    gl.bind_buffer(target, &buffer);
    gl.buffer_data_u16(target, data);
    Ok(buffer)
}

/// Points `location` at `buffer`, `components` floats per vertex.
///
/// There is no binding cache; callers rebind every frame.
pub fn bind_attribute<B: GlBackend>(gl: &B, buffer: &B::Buffer, location: u32, components: usize) {
    gl.bind_buffer(BufferTarget::Vertex, buffer);
    gl.vertex_attrib_pointer_f32(location, components as i32);
    gl.enable_vertex_attrib_array(location);
}

fn check_layout(name: &'static str, len: usize, components: usize) -> Result<(), RenderError> {
    if len == VERTEX_COUNT * components {
        Ok(())
    } else {
        Err(RenderError::GeometryMismatch { name, len, components })
    }
}

/// The three static buffers the cube draws from.
pub struct CubeBuffers<B: GlBackend> {
    pub positions: B::Buffer,
    pub colors: B::Buffer,
    pub indices: B::Buffer,
    pub index_count: i32,
}

impl<B: GlBackend> CubeBuffers<B> {
    pub fn new(gl: &B) -> Result<Self, RenderError> {
        Self::from_arrays(gl, &geometry::POSITIONS, &geometry::COLORS, &geometry::INDICES)
    }

    pub fn from_arrays(gl: &B, positions: &[f32], colors: &[f32], indices: &[u16]) -> Result<Self, RenderError> {
        check_layout("positions", positions.len(), POSITION_COMPONENTS)?;
        check_layout("colors", colors.len(), COLOR_COMPONENTS)?;
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= VERTEX_COUNT) {
            return Err(RenderError::IndexOutOfRange {
                index: bad,
                vertex_count: VERTEX_COUNT,
            });
        }

        let buffers = Self {
            positions: upload_f32(gl, BufferTarget::Vertex, positions)?,
            colors: upload_f32(gl, BufferTarget::Vertex, colors)?,
            indices: upload_u16(gl, BufferTarget::Index, indices)?,
            index_count: indices.len() as i32,
        };
        log::debug!(
            "uploaded {} vertices, {} indices",
            positions.len() / POSITION_COMPONENTS,
            indices.len()
        );
        Ok(buffers)
    }
}
