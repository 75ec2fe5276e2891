// 3D simplex noise.
//
// Mirrors the `snoise` routine in `shaders/dither.wgsl` so the CPU side can
// reason about (and test) the exact displacement the GPU applies.

use glam::{Vec3, Vec4};

#[inline]
fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: Vec4) -> Vec4 {
    mod289_4((x * 34.0 + Vec4::ONE) * x)
}

#[inline]
fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - r * 0.853_734_7
}

/// `1.0` where `edge <= x`, else `0.0` (GLSL/WGSL `step`).
#[inline]
fn step4(edge: Vec4, x: Vec4) -> Vec4 {
    Vec4::new(
        if x.x >= edge.x { 1.0 } else { 0.0 },
        if x.y >= edge.y { 1.0 } else { 0.0 },
        if x.z >= edge.z { 1.0 } else { 0.0 },
        if x.w >= edge.w { 1.0 } else { 0.0 },
    )
}

/// Offsets of the second and third simplex corners, from ranking `x0`'s components.
#[inline]
fn simplex_steps(x0: Vec3) -> (Vec3, Vec3) {
    const XY: Vec3 = Vec3::new(1.0, 1.0, 0.0);
    const XZ: Vec3 = Vec3::new(1.0, 0.0, 1.0);
    const YZ: Vec3 = Vec3::new(0.0, 1.0, 1.0);
    if x0.x >= x0.y {
        if x0.y >= x0.z {
            (Vec3::X, XY)
        } else if x0.x >= x0.z {
            (Vec3::X, XZ)
        } else {
            (Vec3::Z, XZ)
        }
    } else if x0.y < x0.z {
        (Vec3::Z, YZ)
    } else if x0.x < x0.z {
        (Vec3::Y, YZ)
    } else {
        (Vec3::Y, XY)
    }
}

/// Smooth gradient noise over R³, roughly in [-1, 1].
pub fn snoise(v: Vec3) -> f32 {
    const C_X: f32 = 1.0 / 6.0;
    const C_Y: f32 = 1.0 / 3.0;

    // First corner
    let i = (v + Vec3::splat(v.dot(Vec3::splat(C_Y)))).floor();
    let x0 = v - i + Vec3::splat(i.dot(Vec3::splat(C_X)));

    // Other corners. Ties between x0's components (the cell diagonal) must still
    // pick one unit step for i1 and two for i2.
    let (i1, i2) = simplex_steps(x0);

    let x1 = x0 - i1 + Vec3::splat(C_X);
    let x2 = x0 - i2 + Vec3::splat(C_Y);
    let x3 = x0 - Vec3::splat(0.5);

    // Permutations
    let i = mod289_3(i);
    let p = permute(
        permute(
            permute(Vec4::splat(i.z) + Vec4::new(0.0, i1.z, i2.z, 1.0))
                + Vec4::splat(i.y)
                + Vec4::new(0.0, i1.y, i2.y, 1.0),
        ) + Vec4::splat(i.x)
            + Vec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Gradients: 7x7 points over a square, mapped onto an octahedron.
    let n_ = 1.0 / 7.0;
    let ns = Vec3::new(2.0 * n_, 0.5 * n_ - 1.0, n_);

    let j = p - (p * ns.z * ns.z).floor() * 49.0;

    let x_ = (j * ns.z).floor();
    let y_ = (j - x_ * 7.0).floor();

    let x = x_ * ns.x + Vec4::splat(ns.y);
    let y = y_ * ns.x + Vec4::splat(ns.y);
    let h = Vec4::ONE - x.abs() - y.abs();

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor() * 2.0 + Vec4::ONE;
    let s1 = b1.floor() * 2.0 + Vec4::ONE;
    let sh = -step4(h, Vec4::ZERO);

    let a0 = Vec4::new(b0.x, b0.z, b0.y, b0.w)
        + Vec4::new(s0.x, s0.z, s0.y, s0.w) * Vec4::new(sh.x, sh.x, sh.y, sh.y);
    let a1 = Vec4::new(b1.x, b1.z, b1.y, b1.w)
        + Vec4::new(s1.x, s1.z, s1.y, s1.w) * Vec4::new(sh.z, sh.z, sh.w, sh.w);

    let mut p0 = Vec3::new(a0.x, a0.y, h.x);
    let mut p1 = Vec3::new(a0.z, a0.w, h.y);
    let mut p2 = Vec3::new(a1.x, a1.y, h.z);
    let mut p3 = Vec3::new(a1.z, a1.w, h.w);

    let norm = taylor_inv_sqrt(Vec4::new(p0.dot(p0), p1.dot(p1), p2.dot(p2), p3.dot(p3)));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    // Mix final noise value
    let m = (Vec4::splat(0.6) - Vec4::new(x0.dot(x0), x1.dot(x1), x2.dot(x2), x3.dot(x3)))
        .max(Vec4::ZERO);
    let m = m * m;
    42.0 * (m * m).dot(Vec4::new(p0.dot(x0), p1.dot(x1), p2.dot(x2), p3.dot(x3)))
}
