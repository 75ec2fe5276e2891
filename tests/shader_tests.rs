// Host-side tests for the bundled WGSL and its CPU reference.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod dither {
    include!("../src/core/dither.rs");
}

use constants::{AMBIENT_FLOOR, DIFFUSE_WEIGHT};
use dither::BAYER_4X4;
use naga::{Expression, Handle, Literal, Module};

const DITHER_WGSL: &str = include_str!("../shaders/dither.wgsl");
const BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

fn parse_and_validate(source: &str) -> Module {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("{}", e.emit_to_string(source)));
    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(&module)
    .unwrap_or_else(|e| panic!("{e:?}"));
    module
}

fn f32_literal(module: &Module, expr: Handle<Expression>) -> f32 {
    match module.global_expressions[expr] {
        Expression::Literal(Literal::F32(v)) => v,
        ref other => panic!("expected an f32 literal, got {other:?}"),
    }
}

fn shader_const(module: &Module, name: &str) -> f32 {
    let (_, c) = module
        .constants
        .iter()
        .find(|(_, c)| c.name.as_deref() == Some(name))
        .unwrap_or_else(|| panic!("no const {name}"));
    f32_literal(module, c.init)
}

#[test]
fn both_shaders_validate() {
    let dither = parse_and_validate(DITHER_WGSL);
    let entry: Vec<_> = dither.entry_points.iter().map(|e| e.name.as_str()).collect();
    for name in ["vs_orb", "vs_debris", "fs_dither"] {
        assert!(entry.contains(&name), "missing entry point {name}");
    }
    parse_and_validate(BACKDROP_WGSL);
}

#[test]
fn lighting_weights_match_the_cpu_reference() {
    let module = parse_and_validate(DITHER_WGSL);
    assert_eq!(shader_const(&module, "DIFFUSE_WEIGHT"), DIFFUSE_WEIGHT);
    assert_eq!(shader_const(&module, "AMBIENT_FLOOR"), AMBIENT_FLOOR);
}

#[test]
fn bayer_ranks_match_the_cpu_table() {
    let module = parse_and_validate(DITHER_WGSL);
    let (_, bayer) = module
        .global_variables
        .iter()
        .find(|(_, g)| g.name.as_deref() == Some("BAYER"))
        .expect("BAYER table");
    let init = bayer.init.expect("BAYER is initialised");
    let Expression::Compose { ref components, .. } = module.global_expressions[init] else {
        panic!("BAYER is not an array constructor");
    };
    let ranks: Vec<f32> = components.iter().map(|&c| f32_literal(&module, c)).collect();
    let expected: Vec<f32> = BAYER_4X4.iter().flatten().map(|&r| r as f32).collect();
    assert_eq!(ranks, expected);
}

#[test]
fn noise_ranks_simplex_corners_by_comparison() {
    let module = parse_and_validate(DITHER_WGSL);
    assert!(module
        .functions
        .iter()
        .any(|(_, f)| f.name.as_deref() == Some("simplex_steps")));
    // The step()-based ranking breaks when x0's components tie
    assert!(!DITHER_WGSL.contains("step(x0.yzx"));
}
