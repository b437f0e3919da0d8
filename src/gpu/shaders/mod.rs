// Shader Management
// Compiles the two GLSL ES stages and links them into a program.
// Responsibilities:
// - Hold the embedded shader sources
// - Compile each stage, releasing it again on failure
// - Link the program, releasing it again on failure
// - Carry the driver diagnostic back in the error

use std::fmt;

use crate::error::RenderError;
use crate::gpu::backend::GlBackend;

pub const VERTEX_SHADER_SOURCE: &str = r#"
attribute vec4 a_position;
attribute vec4 a_color;
uniform mat4 u_matrix;
varying vec4 v_color;
void main(void) {
  gl_Position = u_matrix * a_position;
  v_color = a_color;
}
"#;

pub const FRAGMENT_SHADER_SOURCE: &str = r#"
precision mediump float;
varying vec4 v_color;
void main(void) {
  gl_FragColor = v_color;
}
"#;

const EMPTY_LOG: &str = "(driver returned no diagnostic)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

fn diagnostic(log: Option<String>) -> String {
    match log {
        Some(log) if !log.trim().is_empty() => log.trim().to_string(),
        _ => EMPTY_LOG.to_string(),
    }
}

/// Compiles one stage. On failure the shader object is deleted before the
/// error is returned.
pub fn compile_shader<B: GlBackend>(gl: &B, stage: ShaderStage, source: &str) -> Result<B::Shader, RenderError> {
    let shader = gl
        .create_shader(stage)
        .ok_or(RenderError::ResourceAllocation { what: "shader" })?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl.shader_compiled(&shader) {
        return Ok(shader);
    }

    let log = diagnostic(gl.shader_info_log(&shader));
    log::error!("Shader compile failed ({stage}): {log}");
    gl.delete_shader(&shader);
    Err(RenderError::ShaderCompile { stage, log })
}

/// Links two compiled stages. On failure the program object is deleted.
pub fn link_program<B: GlBackend>(
    gl: &B,
    vertex: &B::Shader,
    fragment: &B::Shader,
) -> Result<B::Program, RenderError> {
    let program = gl
        .create_program()
        .ok_or(RenderError::ResourceAllocation { what: "program" })?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl.program_linked(&program) {
        return Ok(program);
    }

    let log = diagnostic(gl.program_info_log(&program));
    log::error!("Program linking failed: {log}");
    gl.delete_program(&program);
    Err(RenderError::ProgramLink { log })
}

/// A linked program. Only constructed when both stages compiled and the link
/// succeeded, so holding one means it is safe to `use_program`.
pub struct ShaderProgram<B: GlBackend> {
    program: B::Program,
}

impl<B: GlBackend> ShaderProgram<B> {
    pub fn new(gl: &B, vertex_source: &str, fragment_source: &str) -> Result<Self, RenderError> {
        let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
        let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_source) {
            Ok(shader) => shader,
            Err(e) => {
                gl.delete_shader(&vertex);
                return Err(e);
            }
        };

        let linked = link_program(gl, &vertex, &fragment);
        // Attached shaders stay alive until the program goes; this only flags them.
        gl.delete_shader(&vertex);
        gl.delete_shader(&fragment);

        let program = linked?;
        log::debug!("shader program linked");
        Ok(Self { program })
    }

    /// The cube's built-in vertex/fragment pair.
    pub fn cube(gl: &B) -> Result<Self, RenderError> {
        Self::new(gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)
    }

    pub fn bind(&self, gl: &B) {
        gl.use_program(&self.program);
    }

    pub fn attribute(&self, gl: &B, name: &'static str) -> Result<u32, RenderError> {
        u32::try_from(gl.attrib_location(&self.program, name))
            .map_err(|_| RenderError::MissingAttribute { name })
    }

    pub fn uniform(&self, gl: &B, name: &'static str) -> Result<B::UniformLocation, RenderError> {
        gl.uniform_location(&self.program, name)
            .ok_or(RenderError::MissingUniform { name })
    }
}
