// DOM contract and frontend tuning constants for the web layer.

// Canvas ids; either may be absent from a page
pub const FIELD_CANVAS_ID: &str = "memory-field";
pub const WAVES_CANVAS_ID: &str = "neural-waves";

// Section wiring
pub const SECTION_ATTR: &str = "data-motion-section"; // value is a preset id
pub const TARGET_ATTR: &str = "data-motion-target"; // value is a binding target
pub const STAGE_ATTR: &str = "data-motion-stage"; // value is a stage name
pub const ACTIVE_STAGE_ATTR: &str = "data-active-stage"; // written on the section element
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const MAGNETIC_STRENGTH_ATTR: &str = "data-magnetic";

// Field overrides read from the canvas element
pub const NODE_COUNT_ATTR: &str = "data-node-count";
pub const CONNECTION_DISTANCE_ATTR: &str = "data-connection-distance";
pub const EDGE_ATTR: &str = "data-edge";
pub const MAX_NODE_COUNT: usize = 200; // pairwise connections are O(n^2)

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Entrance reveal
pub const REVEAL_ATTR: &str = "data-reveal"; // value is an optional delay in seconds
pub const REVEAL_LINE: f32 = 0.8; // fraction of viewport height the element top must cross
pub const REVEAL_SECS: f32 = 1.2;
pub const REVEAL_OFFSET_PX: f32 = 24.0;

// Magnetic elements
pub const MAGNET_REST_EPSILON: f32 = 0.05; // px
