// DOM anchors and event names the front-end binds to

// Element ids
pub const TRAIL_CANVAS_ID: &str = "canvas";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CONFIG_SCRIPT_ID: &str = "neon-trail-config";

// Elements that grow the cursor ring while hovered
pub const HOVER_SELECTOR: &str = "a, button, .magnetic-btn, .hoverable";

// Pointer events feeding the trail target (document-level)
pub const TRAIL_POINTER_EVENTS: [&str; 3] = ["mousemove", "touchmove", "touchstart"];

// Per-effect seed derivation (golden-ratio increment)
pub const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;
