// WebGL Utilities
// Helper functions for common per-frame GL state

use crate::gpu::backend::GlBackend;

/// Clears color and depth for a new frame. Depth is reset to the far value
/// and compared with `LEQUAL` so fragments sitting exactly on the far plane
/// still pass.
pub fn clear_frame<B: GlBackend>(gl: &B, color: [f32; 4]) {
    gl.clear_color(color);
    gl.clear_depth(1.0);
    gl.enable_depth_test_lequal();
    gl.clear_color_and_depth();
}
