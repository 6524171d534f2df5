//! Triangulation of 2D primitives
//!
//! All positions are screen pixels; the pipeline maps them to clip space.

use glam::Vec2;

use super::vertex::Vertex;

/// Fan-triangulate a closed polygon around its centroid.
/// Correct for any polygon that is star-shaped about that centroid,
/// which every star outline is.
pub fn polygon_fan(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let center = points.iter().copied().sum::<Vec2>() / points.len() as f32;
    let mut vertices = Vec::with_capacity(points.len() * 3);

    for (i, p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Thick line segment as a quad (two triangles)
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = a + perp;
    let a2 = a - perp;
    let b1 = b + perp;
    let b2 = b - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Rectangle outline from four edge quads; corners overlap by half a width
pub fn rect_outline(min: Vec2, max: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = width / 2.0;
    let tl = min;
    let tr = Vec2::new(max.x, min.y);
    let br = max;
    let bl = Vec2::new(min.x, max.y);

    let mut vertices = Vec::with_capacity(24);
    vertices.extend(line(tl - Vec2::X * half, tr + Vec2::X * half, width, color));
    vertices.extend(line(tr, br, width, color));
    vertices.extend(line(br + Vec2::X * half, bl - Vec2::X * half, width, color));
    vertices.extend(line(bl, tl, width, color));
    vertices
}
