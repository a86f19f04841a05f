// Shared motion tuning constants used by the core and the web frontend.

// Particle field defaults
pub const NODE_COUNT: usize = 80; // dense enough to read as a field, small enough for O(n^2) pairing
pub const CONNECTION_DISTANCE: f32 = 180.0; // px
pub const POINTER_INFLUENCE_RADIUS: f32 = 300.0; // px
pub const POINTER_ATTRACTION: f32 = 0.01; // velocity gain per px of offset at the pointer
pub const VELOCITY_DAMPING: f32 = 0.98; // per-frame drag multiplier
pub const WRAP_MARGIN: f32 = 50.0; // px beyond the surface before a point wraps
pub const DEPTH_BAND: f32 = 0.3; // max depth difference for a connection
pub const ACCENT_DEPTH: f32 = 0.8; // points nearer than this use the accent colour

// Per-point spawn bounds (all scaled by depth at spawn)
pub const DEPTH_MIN: f32 = 0.2;
pub const DEPTH_MAX: f32 = 1.0;
pub const SPEED_MAX: f32 = 0.1; // px per frame along each axis
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_MAX: f32 = 2.0;
pub const BASE_OPACITY_MIN: f32 = 0.1;
pub const BASE_OPACITY_MAX: f32 = 0.5;

// Breathing pulse
pub const PULSE_AMPLITUDE: f32 = 0.05;
pub const PULSE_RATE: f32 = 0.005; // phase advance per frame

// Connection lines
pub const LINE_OPACITY_SCALE: f32 = 0.6;
pub const LINE_WIDTH: f32 = 0.5; // multiplied by the source point's depth
pub const DIM_LINE_FACTOR: f32 = 0.5; // opacity factor for non-accent lines

// Palette
pub const ACCENT_RGB: [u8; 3] = [79, 209, 197]; // teal
pub const NODE_RGB: [u8; 3] = [255, 255, 255];

// Stage cross-fade
pub const CROSSFADE_SECS: f32 = 0.5;

// Magnetic spring (elastic follow toward the pointer)
pub const MAGNET_STRENGTH: f32 = 0.5;
pub const MAGNET_OMEGA: f32 = 9.0; // natural frequency, rad/s
pub const MAGNET_DAMPING_RATIO: f32 = 0.3; // underdamped for the elastic overshoot
