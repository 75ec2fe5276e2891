// Mesh builders for the orb, the debris and the backdrop (grid + stars).

use glam::{Mat4, Vec3};
use rand::prelude::*;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Grid line or star point.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BackdropVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    /// phase, amount
    pub twinkle: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Icosahedron with every face split into `(detail + 1)²` triangles and all
/// vertices pushed onto the sphere. Normals point radially outward.
pub fn icosphere(radius: f32, detail: u32) -> Mesh {
    let corners = icosahedron_corners();
    let n = detail as usize + 1;
    let per_face = (n + 1) * (n + 2) / 2;
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(20 * per_face),
        indices: Vec::with_capacity(20 * n * n * 3),
    };

    for [ia, ib, ic] in ICOSAHEDRON_FACES {
        let (a, b, c) = (corners[ia], corners[ib], corners[ic]);
        let base = mesh.vertices.len() as u32;
        // Row i walks from edge ab toward corner c; column j along ab.
        for i in 0..=n {
            for j in 0..=(n - i) {
                let p = a + (b - a) * (j as f32 / n as f32) + (c - a) * (i as f32 / n as f32);
                let dir = p.normalize();
                mesh.vertices.push(Vertex {
                    position: (dir * radius).to_array(),
                    normal: dir.to_array(),
                });
            }
        }
        let idx = |i: usize, j: usize| -> u32 {
            // rows before i hold (n+1) + n + ... + (n-i+2) vertices
            let row_start = i * (n + 1) - i * i.saturating_sub(1) / 2;
            base + (row_start + j) as u32
        };
        for i in 0..n {
            for j in 0..(n - i) {
                mesh.indices
                    .extend_from_slice(&[idx(i, j), idx(i, j + 1), idx(i + 1, j)]);
                if j + 1 < n - i {
                    mesh.indices
                        .extend_from_slice(&[idx(i, j + 1), idx(i + 1, j + 1), idx(i + 1, j)]);
                }
            }
        }
    }
    mesh
}

const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

/// Octahedron with flat per-face normals (unshared vertices).
pub fn octahedron(radius: f32) -> Mesh {
    let corners = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    let mut mesh = Mesh::default();
    for [ia, ib, ic] in OCTAHEDRON_FACES {
        let (a, b, c) = (corners[ia] * radius, corners[ib] * radius, corners[ic] * radius);
        let normal = (b - a).cross(c - a).normalize();
        for p in [a, b, c] {
            mesh.indices.push(mesh.vertices.len() as u32);
            mesh.vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
    }
    mesh
}

/// Square grid of `divisions` cells per side in the XZ plane, transformed by
/// `transform`. Returned as a line list; the two centre lines get `center_color`.
pub fn grid_lines(
    size: f32,
    divisions: u32,
    center_color: [f32; 3],
    line_color: [f32; 3],
    transform: Mat4,
) -> Vec<BackdropVertex> {
    let half = size / 2.0;
    let step = size / divisions as f32;
    let center = divisions / 2;
    let mut out = Vec::with_capacity((divisions as usize + 1) * 4);
    let mut push = |p: Vec3, color: [f32; 3]| {
        out.push(BackdropVertex {
            position: transform.transform_point3(p).to_array(),
            color,
            twinkle: [0.0, 0.0],
        });
    };
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if i == center { center_color } else { line_color };
        push(Vec3::new(-half, 0.0, k), color);
        push(Vec3::new(half, 0.0, k), color);
        push(Vec3::new(k, 0.0, -half), color);
        push(Vec3::new(k, 0.0, half), color);
    }
    out
}

/// Greyscale star points scattered over a spherical shell from `radius` out to
/// `radius + depth`, outermost first.
pub fn star_field(count: usize, radius: f32, depth: f32, seed: u64) -> Vec<BackdropVertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    let increment = depth / count.max(1) as f32;
    let mut r = radius + depth;
    (0..count)
        .map(|_| {
            r -= increment * rng.gen::<f32>();
            let polar = (1.0 - rng.gen::<f32>() * 2.0).acos();
            let azimuth = rng.gen::<f32>() * std::f32::consts::TAU;
            let (sp, cp) = polar.sin_cos();
            let (sa, ca) = azimuth.sin_cos();
            let brightness = 0.9;
            BackdropVertex {
                position: (Vec3::new(sp * sa, cp, sp * ca) * r).to_array(),
                color: [brightness; 3],
                twinkle: [rng.gen::<f32>() * std::f32::consts::TAU, 0.35],
            }
        })
        .collect()
}
