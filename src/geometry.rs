// Cube geometry: 8 shared vertices, 12 triangles.

pub const VERTEX_COUNT: usize = 8;
pub const POSITION_COMPONENTS: usize = 3;
pub const COLOR_COMPONENTS: usize = 4;

/// One corner of the cube as stored in the tables below.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; POSITION_COMPONENTS],
    pub color: [f32; COLOR_COMPONENTS],
}

#[rustfmt::skip]
pub const POSITIONS: [f32; VERTEX_COUNT * POSITION_COMPONENTS] = [
    // Front face
    -1.0, -1.0,  1.0,
     1.0, -1.0,  1.0,
     1.0,  1.0,  1.0,
    -1.0,  1.0,  1.0,
    // Back face
    -1.0, -1.0, -1.0,
    -1.0,  1.0, -1.0,
     1.0,  1.0, -1.0,
     1.0, -1.0, -1.0,
];

#[rustfmt::skip]
pub const COLORS: [f32; VERTEX_COUNT * COLOR_COMPONENTS] = [
    1.0, 0.0, 0.0, 1.0, // red
    0.0, 1.0, 0.0, 1.0, // green
    0.0, 0.0, 1.0, 1.0, // blue
    1.0, 1.0, 0.0, 1.0, // yellow
    1.0, 0.0, 1.0, 1.0, // magenta
    0.0, 1.0, 1.0, 1.0, // cyan
    1.0, 0.5, 0.0, 1.0, // orange
    0.5, 0.0, 0.5, 1.0, // purple
];

#[rustfmt::skip]
pub const INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // back
    4, 5, 3, 4, 3, 0, // left
    1, 7, 6, 1, 6, 2, // right
    3, 2, 6, 3, 6, 5, // top
    4, 0, 1, 4, 1, 7, // bottom
];

/// Returns vertex `i` assembled from the position and color tables.
#[cfg(test)]
pub fn vertex(i: usize) -> Option<Vertex> {
    if i >= VERTEX_COUNT {
        return None;
    }
    let p = &POSITIONS[i * POSITION_COMPONENTS..(i + 1) * POSITION_COMPONENTS];
    let c = &COLORS[i * COLOR_COMPONENTS..(i + 1) * COLOR_COMPONENTS];
    Some(Vertex {
        position: [p[0], p[1], p[2]],
        color: [c[0], c[1], c[2], c[3]],
    })
}

#[cfg(test)]
pub fn vertices() -> impl Iterator<Item = Vertex> {
    (0..VERTEX_COUNT).filter_map(vertex)
}
