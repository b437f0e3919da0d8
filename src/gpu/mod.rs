// GPU module - organizes all WebGL-related functionality
// This module provides abstractions for WebGL operations including:
// - Context management (canvas lookup, context creation)
// - The backend trait the pipeline is written against
// - Shader compilation and program linking
// - Buffer upload and attribute binding
// - Pipeline assembly and per-frame helpers

pub mod backend;
pub mod buffers;
pub mod context;
pub mod pipeline;
pub mod shaders;
pub mod utils;
