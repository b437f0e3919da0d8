use std::fmt;

use crate::gpu::shaders::ShaderStage;

/// Everything that can stop the cube from rendering.
///
/// All variants are terminal for the session: setup reports them once and
/// the frame loop never starts.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No element with the configured id exists in the document.
    CanvasNotFound { id: String },
    /// The element exists but is not a `<canvas>`.
    NotACanvas { id: String },
    /// `getContext("webgl")` returned nothing.
    ContextUnavailable,
    /// A shader stage failed to compile; `log` is the driver diagnostic.
    ShaderCompile { stage: ShaderStage, log: String },
    /// The program failed to link; `log` is the driver diagnostic.
    ProgramLink { log: String },
    /// A `create*` call handed back null.
    ResourceAllocation { what: &'static str },
    MissingAttribute { name: &'static str },
    MissingUniform { name: &'static str },
    /// A geometry array does not match its declared layout.
    GeometryMismatch {
        name: &'static str,
        len: usize,
        components: usize,
    },
    /// An index points past the vertex table.
    IndexOutOfRange { index: u16, vertex_count: usize },
    /// Malformed configuration block.
    Config(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasNotFound { id } => write!(f, "no element with id `{id}`"),
            Self::NotACanvas { id } => write!(f, "element `{id}` is not a canvas"),
            Self::ContextUnavailable => write!(f, "WebGL not supported"),
            Self::ShaderCompile { stage, log } => {
                write!(f, "{stage} shader compile failed: {log}")
            }
            Self::ProgramLink { log } => write!(f, "program linking failed: {log}"),
            Self::ResourceAllocation { what } => write!(f, "failed to allocate {what}"),
            Self::MissingAttribute { name } => write!(f, "attribute `{name}` not found in program"),
            Self::MissingUniform { name } => write!(f, "uniform `{name}` not found in program"),
            Self::GeometryMismatch {
                name,
                len,
                components,
            } => write!(
                f,
                "{name} has {len} elements, which does not fit {components} components per vertex"
            ),
            Self::IndexOutOfRange { index, vertex_count } => {
                write!(f, "index {index} out of range for {vertex_count} vertices")
            }
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl RenderError {
    /// The page cannot host the renderer at all. These are the failures the
    /// user is told about; the rest only go to the log.
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            Self::ContextUnavailable | Self::CanvasNotFound { .. } | Self::NotACanvas { .. }
        )
    }
}

impl std::error::Error for RenderError {}
