//! CPU-side line geometry for the helper overlays.

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a].
/// Consecutive vertex pairs form independent segments.
#[derive(Clone, Default)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 7
    }

    pub fn segment_count(&self) -> usize {
        self.vertex_count() / 2
    }

    /// Segment endpoints with colors: ([x,y,z], [x,y,z], [r,g,b,a]).
    pub fn segments(&self) -> impl Iterator<Item = ([f32; 3], [f32; 3], [f32; 4])> + '_ {
        self.vertices.chunks_exact(14).map(|v| {
            (
                [v[0], v[1], v[2]],
                [v[7], v[8], v[9]],
                [v[3], v[4], v[5], v[6]],
            )
        })
    }
}

/// Build a square grid on the XZ plane: total width `size`, `divisions`
/// cells per direction. The two center lines are drawn at full alpha, the
/// remaining lines dimmed, all tinted by `color`.
pub fn grid(size: f32, divisions: u32, color: [u8; 3]) -> LineMeshData {
    let mut vertices = Vec::new();
    if divisions == 0 || size <= 0.0 {
        return LineMeshData { vertices };
    }

    let rgb = [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    ];
    let center_color = [rgb[0], rgb[1], rgb[2], 1.0];
    let line_color = [rgb[0], rgb[1], rgb[2], 0.45];

    let half = size * 0.5;
    let step = size / divisions as f32;

    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        let color = if 2 * i == divisions {
            center_color
        } else {
            line_color
        };
        // Line along Z
        push_line_vert(&mut vertices, offset, 0.0, -half, color);
        push_line_vert(&mut vertices, offset, 0.0, half, color);
        // Line along X
        push_line_vert(&mut vertices, -half, 0.0, offset, color);
        push_line_vert(&mut vertices, half, 0.0, offset, color);
    }

    LineMeshData { vertices }
}

/// Build the three-axis indicator: X red, Y green, Z blue, each `length` long.
pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    // X axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, r);
    push_line_vert(&mut vertices, length, 0.0, 0.0, r);
    // Y axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, g);
    push_line_vert(&mut vertices, 0.0, length, 0.0, g);
    // Z axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, b);
    push_line_vert(&mut vertices, 0.0, 0.0, length, b);

    LineMeshData { vertices }
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}
