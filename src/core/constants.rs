// Shared scene tuning constants used by the web frontend and the pure core.

// Orb material
pub const ORB_COLOR_DARK: [f32; 3] = [0.039, 0.039, 0.039]; // #0a0a0a
pub const ORB_COLOR_LIGHT: [f32; 3] = [0.878, 0.878, 0.878]; // #e0e0e0
pub const ORB_DITHER_SCALE: f32 = 2.0; // physical pixels per dither cell

// Debris material
pub const DEBRIS_COLOR_DARK: [f32; 3] = [0.0, 0.0, 0.0]; // #000000
pub const DEBRIS_COLOR_LIGHT: [f32; 3] = [0.533, 0.533, 0.533]; // #888888
pub const DEBRIS_DITHER_SCALE: f32 = 1.5;

// Vertex displacement
pub const DISPLACE_FREQUENCY: f32 = 0.5;
pub const DISPLACE_TIME_SCALE: f32 = 0.2;
pub const DISPLACE_AMPLITUDE: f32 = 0.2;

// Lighting
pub const DIFFUSE_WEIGHT: f32 = 0.8;
pub const AMBIENT_FLOOR: f32 = 0.1; // faces turned away from the light keep 2 of 16 Bayer cells lit

// Light orbit: x = sin(t*speed)*radius, y = height, z = cos(t*speed)*radius
pub const LIGHT_ORBIT_RADIUS: f32 = 10.0;
pub const LIGHT_ORBIT_SPEED: f32 = 0.5;
pub const LIGHT_HEIGHT: f32 = 10.0;
pub const LIGHT_INITIAL_POS: [f32; 3] = [10.0, 10.0, 10.0];

// Orb spin increments (radians per frame at the reference rate)
pub const ORB_SPIN_Y: f32 = 0.002;
pub const ORB_SPIN_Z: f32 = 0.001;
pub const REFERENCE_FPS: f32 = 60.0;

// Orb geometry
pub const ORB_RADIUS: f32 = 2.5;
pub const ORB_DETAIL: u32 = 40;

// Debris
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_SIZE: f32 = 0.5; // octahedron radius
pub const PARTICLE_SCALE_BASE: f32 = 0.1;
pub const PARTICLE_SCALE_JITTER: f32 = 0.05;
pub const PARTICLE_POSITION_DIVISOR: f32 = 3.0;
pub const PARTICLE_Z_SPEED_RATIO: f32 = 0.5;
pub const PARTICLE_PHASE_MAX: f32 = 100.0;
pub const PARTICLE_FACTOR_MIN: f32 = 20.0;
pub const PARTICLE_FACTOR_SPAN: f32 = 100.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.01;
pub const PARTICLE_SPEED_SPAN: f32 = 0.005;
pub const PARTICLE_OFFSET_HALF_RANGE: f32 = 50.0;
pub const DEFAULT_SEED: u64 = 42;

// Background grid
pub const GRID_SIZE: f32 = 60.0;
pub const GRID_DIVISIONS: u32 = 40;
pub const GRID_CENTER_COLOR: [f32; 3] = [0.2, 0.2, 0.2]; // #333333
pub const GRID_LINE_COLOR: [f32; 3] = [0.067, 0.067, 0.067]; // #111111
pub const GRID_Y_OFFSET: f32 = -5.0;

// Star field
pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;

// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POLAR_MIN: f32 = std::f32::consts::PI / 3.0;
pub const CAMERA_POLAR_MAX: f32 = std::f32::consts::PI / 1.5;
pub const ORBIT_DRAG_SPEED: f32 = std::f32::consts::TAU; // radians per full canvas height
