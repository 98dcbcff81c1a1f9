//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Circle tessellation
const CIRCLE_SEGMENTS: usize = 16;

/// Axis-aligned rectangle as two triangles
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ];
    quad(out, corners, color);
}

/// Rectangle of `size` centred on `center`, rotated by `heading_deg`.
///
/// Positive headings rotate counter-clockwise on screen (y down).
pub fn rotated_rect(
    out: &mut Vec<Vertex>,
    center: Vec2,
    size: Vec2,
    heading_deg: f32,
    color: [f32; 4],
) {
    let rad = heading_deg.to_radians();
    // y is down, so a visual CCW turn is a negative rotation in screen space
    let rot = Vec2::new(rad.cos(), -rad.sin());
    let half = size * 0.5;
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| center + rot.rotate(c));
    quad(out, corners, color);
}

/// Filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    out.reserve(CIRCLE_SEGMENTS * 3);
    for i in 0..CIRCLE_SEGMENTS {
        let a0 = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let a1 = (i + 1) as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let p0 = center + Vec2::new(a0.cos(), a0.sin()) * radius;
        let p1 = center + Vec2::new(a1.cos(), a1.sin()) * radius;
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(p0.x, p0.y, color));
        out.push(Vertex::new(p1.x, p1.y, color));
    }
}

fn quad(out: &mut Vec<Vertex>, c: [Vec2; 4], color: [f32; 4]) {
    for i in [0, 1, 2, 0, 2, 3] {
        out.push(Vertex::new(c[i].x, c[i].y, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_vertices() {
        let mut out = Vec::new();
        rect(&mut out, Vec2::new(10.0, 20.0), Vec2::new(5.0, 5.0), [1.0; 4]);
        assert_eq!(out.len(), 6);
        assert_eq!(out[0].position, [10.0, 20.0]);
        assert_eq!(out[2].position, [15.0, 25.0]);
    }

    #[test]
    fn test_rotated_rect_quarter_turn() {
        let mut out = Vec::new();
        rotated_rect(&mut out, Vec2::ZERO, Vec2::new(40.0, 70.0), 90.0, [1.0; 4]);
        let max_x = out.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let max_y = out.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!((max_x - 35.0).abs() < 1e-3);
        assert!((max_y - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_circle_vertex_count() {
        let mut out = Vec::new();
        circle(&mut out, Vec2::new(5.0, 5.0), 3.0, [1.0; 4]);
        assert_eq!(out.len(), CIRCLE_SEGMENTS * 3);
    }
}
