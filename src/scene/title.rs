//! Debug title mesh: extruded 3D text built from embedded 5x7 glyph
//! bitmaps, one box per horizontal pixel run, merged into a single mesh.
//!
//! The mesh carries normals for the matcap material and is centered on
//! the origin; the title renderer places it in front of the camera.
//! Characters outside A-Z / 0-9 / space are skipped.

use glam::Vec3;

/// Default edge length of one glyph cell in world units.
pub const DEFAULT_CELL_SIZE: f32 = 12.0;
/// Default extrusion depth in world units.
pub const DEFAULT_DEPTH: f32 = 18.0;

/// Glyph cell columns.
const GLYPH_W: u32 = 5;
/// Glyph cell rows.
const GLYPH_H: u32 = 7;
/// Horizontal advance between glyph origins, in cells.
const ADVANCE: u32 = GLYPH_W + 1;

/// Vertex format for the title mesh.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TitleVertex {
    /// Model-space position.
    pub position: [f32; 3],
    /// Outward face normal.
    pub normal: [f32; 3],
}

impl TitleVertex {
    /// Vertex buffer layout for the title pipeline.
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Describe this vertex format to a render pipeline.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// The merged title geometry.
pub struct TitleGeometry {
    /// Centered model-space vertices.
    pub vertices: Vec<TitleVertex>,
    /// Triangle-list indices.
    pub indices: Vec<u32>,
}

/// 5x7 bitmap per glyph, one byte per row, bit 4 = leftmost column.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => return None,
    };
    Some(rows)
}

/// Append one axis-aligned box with outward normals.
fn push_box(
    vertices: &mut Vec<TitleVertex>,
    indices: &mut Vec<u32>,
    min: Vec3,
    max: Vec3,
) {
    // (normal, four corners CCW when viewed from outside)
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::Z,
            [
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(min.x, max.y, max.z),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, max.y, min.z),
                Vec3::new(max.x, max.y, min.z),
            ],
        ),
        (
            Vec3::X,
            [
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(max.x, max.y, max.z),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(min.x, max.y, min.z),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(min.x, max.y, min.z),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(min.x, min.y, max.z),
            ],
        ),
    ];

    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        for corner in corners {
            vertices.push(TitleVertex {
                position: corner.to_array(),
                normal: normal.to_array(),
            });
        }
        indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }
}

/// Build the extruded title mesh, centered on the origin.
#[must_use]
pub fn build_title(text: &str, cell_size: f32, depth: f32) -> TitleGeometry {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let mut pen_x = 0u32;
    for c in text.chars() {
        if c == ' ' {
            pen_x += ADVANCE;
            continue;
        }
        let Some(rows) = glyph(c.to_ascii_uppercase()) else {
            log::warn!("title: unsupported character {c:?} skipped");
            continue;
        };

        for (row, bits) in rows.iter().enumerate() {
            // Merge horizontal runs of lit cells into single boxes.
            let mut col = 0;
            while col < GLYPH_W {
                if bits & (0x10 >> col) == 0 {
                    col += 1;
                    continue;
                }
                let run_start = col;
                while col < GLYPH_W && bits & (0x10 >> col) != 0 {
                    col += 1;
                }
                let x0 = (pen_x + run_start) as f32 * cell_size;
                let x1 = (pen_x + col) as f32 * cell_size;
                let y1 = (GLYPH_H - row as u32) as f32 * cell_size;
                let y0 = y1 - cell_size;
                push_box(
                    &mut vertices,
                    &mut indices,
                    Vec3::new(x0, y0, -depth / 2.0),
                    Vec3::new(x1, y1, depth / 2.0),
                );
            }
        }
        pen_x += ADVANCE;
    }

    // Center on the origin so placement is a pure translation.
    if !vertices.is_empty() {
        let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
        let (mut min_y, mut max_y) = (f32::MAX, f32::MIN);
        for v in &vertices {
            min_x = min_x.min(v.position[0]);
            max_x = max_x.max(v.position[0]);
            min_y = min_y.min(v.position[1]);
            max_y = max_y.max(v.position[1]);
        }
        let cx = (min_x + max_x) / 2.0;
        let cy = (min_y + max_y) / 2.0;
        for v in &mut vertices {
            v.position[0] -= cx;
            v.position[1] -= cy;
        }
    }

    TitleGeometry { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_i_produces_expected_boxes() {
        // 'I' rows: bar, five single cells, bar -> 7 runs -> 7 boxes.
        let geometry = build_title("I", 1.0, 1.0);
        assert_eq!(geometry.vertices.len(), 7 * 24);
        assert_eq!(geometry.indices.len(), 7 * 36);
    }

    #[test]
    fn unsupported_characters_are_skipped() {
        let with = build_title("A!", 1.0, 1.0);
        let without = build_title("A", 1.0, 1.0);
        assert_eq!(with.vertices.len(), without.vertices.len());
    }

    #[test]
    fn fully_unsupported_text_is_empty() {
        let geometry = build_title("!?#", 1.0, 1.0);
        assert!(geometry.vertices.is_empty());
        assert!(geometry.indices.is_empty());
    }

    #[test]
    fn lowercase_maps_to_uppercase() {
        let lower = build_title("cirrus", 1.0, 1.0);
        let upper = build_title("CIRRUS", 1.0, 1.0);
        assert_eq!(lower.vertices.len(), upper.vertices.len());
    }

    #[test]
    fn mesh_is_centered() {
        let geometry = build_title("CIRRUS 2026", 2.0, 3.0);
        let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
        for v in &geometry.vertices {
            min_x = min_x.min(v.position[0]);
            max_x = max_x.max(v.position[0]);
        }
        assert!((min_x + max_x).abs() < 1e-3);
    }

    #[test]
    fn space_advances_the_pen() {
        fn width(g: &TitleGeometry) -> f32 {
            let mut min_x = f32::MAX;
            let mut max_x = f32::MIN;
            for v in &g.vertices {
                min_x = min_x.min(v.position[0]);
                max_x = max_x.max(v.position[0]);
            }
            max_x - min_x
        }
        let spaced = build_title("A A", 1.0, 1.0);
        let packed = build_title("AA", 1.0, 1.0);
        assert!(width(&spaced) > width(&packed));
    }

    #[test]
    fn normals_are_unit_axis_vectors() {
        let geometry = build_title("8", 1.0, 1.0);
        for v in &geometry.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            assert_eq!(n.abs().max_element(), 1.0);
        }
    }
}
