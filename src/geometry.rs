//! CPU-side procedural mesh generation.
//!
//! Builds interleaved vertex/index data for a handful of primitive shapes:
//! boxes, UV spheres, and heightmap terrain. The output is plain buffers;
//! uploading them and drawing is the render backend's job.

use crate::math::vec::Vec4;
use thiserror::Error;

/// Minimum brightness for the lowest heightmap vertices, so valleys are
/// never pitch black.
const MIN_HEIGHT_COLOR: f32 = 0.2;

/// Errors from mesh generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("heightmap has no rows or columns")]
    EmptyHeightmap,
    #[error("heightmap row {row} has {got} columns, expected {expected}")]
    RaggedHeightmap {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("sphere needs at least 2 subdivisions, got {0}")]
    TooFewSubdivisions(u32),
    #[error("mesh exceeds 16-bit index range ({0} vertices)")]
    IndexOverflow(usize),
}

/// Interleaved vertex: position, color, uv, normal. 48 bytes, matching the
/// render backend's vertex stride.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

/// Vertex and index buffers for one mesh, ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Sub-rectangle of a texture atlas, in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u_min: f32,
    pub v_min: f32,
    pub u_max: f32,
    pub v_max: f32,
}

/// Per-face RGBA colors for [`box_mesh`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceColors {
    pub front: [f32; 4],
    pub back: [f32; 4],
    pub right: [f32; 4],
    pub left: [f32; 4],
    pub top: [f32; 4],
    pub bottom: [f32; 4],
}

impl Default for FaceColors {
    fn default() -> Self {
        let white = [1.0, 1.0, 1.0, 1.0];
        FaceColors {
            front: white,
            back: white,
            right: white,
            left: white,
            top: white,
            bottom: white,
        }
    }
}

// Atlas layout for the six box faces.
const BOX_UV_TOP: UvRect = UvRect { u_min: 0.5, v_min: 0.0, u_max: 0.75, v_max: 0.25 };
const BOX_UV_FRONT: UvRect = UvRect { u_min: 0.0, v_min: 0.25, u_max: 0.25, v_max: 0.5 };
const BOX_UV_RIGHT: UvRect = UvRect { u_min: 0.25, v_min: 0.25, u_max: 0.5, v_max: 0.5 };
const BOX_UV_BACK: UvRect = UvRect { u_min: 0.5, v_min: 0.25, u_max: 0.75, v_max: 0.5 };
const BOX_UV_LEFT: UvRect = UvRect { u_min: 0.75, v_min: 0.25, u_max: 1.0, v_max: 0.5 };
const BOX_UV_BOTTOM: UvRect = UvRect { u_min: 0.5, v_min: 0.5, u_max: 0.75, v_max: 0.75 };

/// Builds an axis-aligned box centered at the origin.
///
/// 24 vertices (4 per face, so normals and UVs stay per-face) and 36 indices.
pub fn box_mesh(width: f32, height: f32, depth: f32, colors: &FaceColors) -> MeshData {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let hd = depth / 2.0;

    // (corners, normal, color, uv rect) per face; corners wind the same way
    // for every face so the index pattern below holds
    let faces: [([[f32; 3]; 4], [f32; 3], [f32; 4], UvRect); 6] = [
        (
            [[hw, -hh, -hd], [-hw, -hh, -hd], [-hw, hh, -hd], [hw, hh, -hd]],
            [0.0, 0.0, -1.0],
            colors.front,
            BOX_UV_FRONT,
        ),
        (
            [[hw, -hh, hd], [hw, -hh, -hd], [hw, hh, -hd], [hw, hh, hd]],
            [1.0, 0.0, 0.0],
            colors.right,
            BOX_UV_RIGHT,
        ),
        (
            [[-hw, -hh, hd], [hw, -hh, hd], [hw, hh, hd], [-hw, hh, hd]],
            [0.0, 0.0, 1.0],
            colors.back,
            BOX_UV_BACK,
        ),
        (
            [[-hw, -hh, -hd], [-hw, -hh, hd], [-hw, hh, hd], [-hw, hh, -hd]],
            [-1.0, 0.0, 0.0],
            colors.left,
            BOX_UV_LEFT,
        ),
        (
            [[-hw, hh, hd], [hw, hh, hd], [hw, hh, -hd], [-hw, hh, -hd]],
            [0.0, 1.0, 0.0],
            colors.top,
            BOX_UV_TOP,
        ),
        (
            [[-hw, -hh, -hd], [hw, -hh, -hd], [hw, -hh, hd], [-hw, -hh, hd]],
            [0.0, -1.0, 0.0],
            colors.bottom,
            BOX_UV_BOTTOM,
        ),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (face, (corners, normal, color, uv)) in faces.iter().enumerate() {
        let uvs = [
            [uv.u_max, uv.v_max],
            [uv.u_min, uv.v_max],
            [uv.u_min, uv.v_min],
            [uv.u_max, uv.v_min],
        ];

        for (corner, tex) in corners.iter().zip(uvs) {
            vertices.push(Vertex {
                position: *corner,
                color: *color,
                uv: tex,
                normal: *normal,
            });
        }

        let base = (face * 4) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Builds a UV sphere of the given diameter.
///
/// `subdivisions` sets both the ring and segment count; vertices double up
/// along the seam so UVs wrap cleanly. Diameter must be positive (a zero
/// diameter degenerates the normals).
pub fn uv_sphere(diameter: f32, subdivisions: u32, color: [f32; 4]) -> Result<MeshData, GeometryError> {
    if subdivisions < 2 {
        return Err(GeometryError::TooFewSubdivisions(subdivisions));
    }

    let vert_count = (subdivisions as usize + 1) * (subdivisions as usize + 1);
    if vert_count > u16::MAX as usize {
        return Err(GeometryError::IndexOverflow(vert_count));
    }

    let tau = std::f32::consts::TAU;
    let radius = diameter / 2.0;
    let layers = subdivisions + 1;

    let mut vertices = Vec::with_capacity(vert_count);
    let mut indices = Vec::new();

    for i in 0..layers {
        // half a turn from pole to pole
        let y_turns = i as f32 / subdivisions as f32 / 2.0;
        let y = (y_turns * tau).cos() * radius;
        let ring_radius = (y_turns * tau).sin() * radius;

        for j in 0..=subdivisions {
            let turns = j as f32 / subdivisions as f32;
            let rads = turns * tau;

            let x = rads.cos() * ring_radius;
            let z = rads.sin() * ring_radius;

            vertices.push(Vertex {
                position: [x, y, z],
                color,
                uv: [
                    j as f32 / subdivisions as f32,
                    i as f32 / subdivisions as f32,
                ],
                normal: [x / radius, y / radius, z / radius],
            });
        }
    }

    for i in 0..layers - 1 {
        for j in 0..subdivisions {
            let top_left = i * (subdivisions + 1) + j;
            let top_right = top_left + 1;
            let bottom_left = (i + 1) * (subdivisions + 1) + j;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left as u16,
                top_right as u16,
                bottom_left as u16,
                top_right as u16,
                bottom_right as u16,
                bottom_left as u16,
            ]);
        }
    }

    Ok(MeshData { vertices, indices })
}

/// Builds terrain from a grid of heights, centered on the origin.
///
/// Each grid cell becomes a quad of two triangles with its own face normals,
/// so the terrain shades faceted rather than smooth. Vertex brightness scales
/// with height between `min` and `max` (which must differ).
pub fn heightmap(map: &[Vec<f32>], min: f32, max: f32) -> Result<MeshData, GeometryError> {
    let rows = map.len();
    if rows == 0 || map[0].is_empty() {
        return Err(GeometryError::EmptyHeightmap);
    }

    let cols = map[0].len();
    for (row, heights) in map.iter().enumerate() {
        if heights.len() != cols {
            return Err(GeometryError::RaggedHeightmap {
                row,
                got: heights.len(),
                expected: cols,
            });
        }
    }

    let vert_count = rows.saturating_sub(1) * cols.saturating_sub(1) * 6;
    if vert_count > u16::MAX as usize {
        return Err(GeometryError::IndexOverflow(vert_count));
    }

    let off_x = cols as f32 / 2.0;
    let off_z = rows as f32 / 2.0;

    let brightness = |height: f32| -> f32 {
        let normed = height / (max - min);
        MIN_HEIGHT_COLOR + normed * (1.0 - MIN_HEIGHT_COLOR)
    };

    let mut vertices = Vec::with_capacity(vert_count);
    let mut indices = Vec::with_capacity(vert_count);

    let push_vert = |vertices: &mut Vec<Vertex>, v: &Vec4, u: f32, tex_v: f32, n: &Vec4| {
        let bright = brightness(v.y());
        vertices.push(Vertex {
            position: [v.x(), v.y(), v.z()],
            color: [bright, bright, bright, 1.0],
            uv: [u, tex_v],
            normal: [n.x(), n.y(), n.z()],
        });
    };

    for row in 1..rows {
        for col in 1..cols {
            let indi_start = indices.len() as u16;

            let h_tl = map[row - 1][col - 1];
            let h_tr = map[row - 1][col];
            let h_bl = map[row][col - 1];
            let h_br = map[row][col];

            let v_tl = Vec4::point(-1.0, h_tl, -1.0);
            let v_tr = Vec4::point(0.0, h_tr, -1.0);
            let v_bl = Vec4::point(-1.0, h_bl, 0.0);
            let v_br = Vec4::point(0.0, h_br, 0.0);

            // face normals per triangle; argument order picks the up-facing
            // sign for this winding
            let normal_t1 = Vec4::normal_of_triangle(&v_tl, &v_bl, &v_tr).norm();
            let normal_t2 = Vec4::normal_of_triangle(&v_br, &v_tr, &v_bl).norm();

            let offset = Vec4::direction(col as f32 - off_x, 0.0, row as f32 - off_z);
            let v_tl = v_tl.add(&offset);
            let v_tr = v_tr.add(&offset);
            let v_bl = v_bl.add(&offset);
            let v_br = v_br.add(&offset);

            push_vert(&mut vertices, &v_tl, 0.0, 1.0, &normal_t1);
            push_vert(&mut vertices, &v_tr, 1.0, 1.0, &normal_t1);
            push_vert(&mut vertices, &v_bl, 0.0, 0.0, &normal_t1);

            push_vert(&mut vertices, &v_br, 1.0, 0.0, &normal_t2);
            push_vert(&mut vertices, &v_bl, 0.0, 0.0, &normal_t2);
            push_vert(&mut vertices, &v_tr, 1.0, 1.0, &normal_t2);

            indices.extend_from_slice(&[
                indi_start,
                indi_start + 1,
                indi_start + 2,
                indi_start + 3,
                indi_start + 4,
                indi_start + 5,
            ]);
        }
    }

    Ok(MeshData { vertices, indices })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_counts() {
        let mesh = box_mesh(2.0, 4.0, 6.0, &FaceColors::default());
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < 24));
    }

    #[test]
    fn test_box_normals_point_outward() {
        let mesh = box_mesh(2.0, 2.0, 2.0, &FaceColors::default());

        for vertex in &mesh.vertices {
            // every face normal points along the axis of its corners
            let dot = vertex.position[0] * vertex.normal[0]
                + vertex.position[1] * vertex.normal[1]
                + vertex.position[2] * vertex.normal[2];
            assert!(dot > 0.0, "inward normal at {:?}", vertex.position);
        }
    }

    #[test]
    fn test_box_per_face_colors() {
        let colors = FaceColors {
            top: [1.0, 0.0, 0.0, 1.0],
            ..FaceColors::default()
        };
        let mesh = box_mesh(2.0, 2.0, 2.0, &colors);

        let red = mesh
            .vertices
            .iter()
            .filter(|v| v.color == [1.0, 0.0, 0.0, 1.0])
            .count();
        assert_eq!(red, 4);
    }

    #[test]
    fn test_sphere_counts_and_radius() {
        let subdivisions = 16;
        let mesh = uv_sphere(8.0, subdivisions, [1.0; 4]).unwrap();

        let per_ring = (subdivisions + 1) as usize;
        assert_eq!(mesh.vertices.len(), per_ring * per_ring);
        assert_eq!(
            mesh.indices.len(),
            (subdivisions * subdivisions * 6) as usize
        );

        for vertex in &mesh.vertices {
            let r = (vertex.position[0].powi(2)
                + vertex.position[1].powi(2)
                + vertex.position[2].powi(2))
            .sqrt();
            assert!((r - 4.0).abs() < 1e-3, "off-sphere vertex: {:?}", vertex.position);
        }
    }

    #[test]
    fn test_sphere_normals_are_unit() {
        let mesh = uv_sphere(2.0, 8, [1.0; 4]).unwrap();
        for vertex in &mesh.vertices {
            let len = (vertex.normal[0].powi(2)
                + vertex.normal[1].powi(2)
                + vertex.normal[2].powi(2))
            .sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_rejects_degenerate_inputs() {
        assert_eq!(
            uv_sphere(1.0, 1, [1.0; 4]),
            Err(GeometryError::TooFewSubdivisions(1))
        );
        assert!(matches!(
            uv_sphere(1.0, 300, [1.0; 4]),
            Err(GeometryError::IndexOverflow(_))
        ));
    }

    #[test]
    fn test_heightmap_flat_normals_point_up() {
        let map = vec![vec![1.0; 3]; 3];
        let mesh = heightmap(&map, 0.0, 2.0).unwrap();

        // 2x2 quads, 6 verts each
        assert_eq!(mesh.vertices.len(), 24);
        for vertex in &mesh.vertices {
            assert!((vertex.normal[1] - 1.0).abs() < 1e-6);
            assert!(vertex.normal[0].abs() < 1e-6);
            assert!(vertex.normal[2].abs() < 1e-6);
        }
    }

    #[test]
    fn test_heightmap_brightness_tracks_height() {
        let map = vec![vec![0.0, 0.0], vec![4.0, 4.0]];
        let mesh = heightmap(&map, 0.0, 4.0).unwrap();

        let low = mesh.vertices.iter().find(|v| v.position[1] == 0.0).unwrap();
        let high = mesh.vertices.iter().find(|v| v.position[1] == 4.0).unwrap();
        assert!((low.color[0] - MIN_HEIGHT_COLOR).abs() < 1e-6);
        assert!((high.color[0] - 1.0).abs() < 1e-6);
        assert!(high.color[0] > low.color[0]);
    }

    #[test]
    fn test_heightmap_rejects_bad_input() {
        assert_eq!(heightmap(&[], 0.0, 1.0), Err(GeometryError::EmptyHeightmap));

        let ragged = vec![vec![0.0, 0.0], vec![0.0]];
        assert_eq!(
            heightmap(&ragged, 0.0, 1.0),
            Err(GeometryError::RaggedHeightmap {
                row: 1,
                got: 1,
                expected: 2,
            })
        );
    }
}
