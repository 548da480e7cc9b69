//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::scene::Quad;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Two triangles per quad, in draw order
pub fn quads_to_vertices(quads: &[Quad]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(quads.len() * 6);
    for quad in quads {
        let min = quad.pos;
        let max = quad.pos + quad.size;
        let c = quad.color;

        vertices.push(Vertex::new(min.x, min.y, c));
        vertices.push(Vertex::new(max.x, min.y, c));
        vertices.push(Vertex::new(min.x, max.y, c));

        vertices.push(Vertex::new(min.x, max.y, c));
        vertices.push(Vertex::new(max.x, min.y, c));
        vertices.push(Vertex::new(max.x, max.y, c));
    }
    vertices
}

/// Raw bytes for upload
pub fn vertex_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_quad_expands_to_two_triangles() {
        let quad = Quad {
            pos: Vec2::new(10.0, 20.0),
            size: Vec2::new(4.0, 2.0),
            color: [1.0, 0.0, 0.0, 1.0],
        };
        let vertices = quads_to_vertices(&[quad]);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [10.0, 20.0]);
        assert_eq!(vertices[5].position, [14.0, 22.0]);
        assert_eq!(vertex_bytes(&vertices).len(), 6 * 24);
    }
}
