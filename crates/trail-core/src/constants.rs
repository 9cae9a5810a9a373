// Shared tuning constants for the cursor trail, particle field and ring cursor.

// Trail pool
pub const TRAIL_COUNT: usize = 20; // lines in the pool
pub const NODES_PER_LINE: usize = 50; // nodes per line, fixed for the line's lifetime

// Line physics
pub const FRICTION: f32 = 0.5; // per-tick velocity decay before jitter
pub const DAMPENING: f32 = 0.25; // share of the previous node's velocity inherited
pub const TENSION: f32 = 0.98; // multiplicative spring decay per node index
pub const BASE_SPRING: f32 = 0.4; // spring of the first line in the pool
pub const SPRING_SPREAD: f32 = 0.025; // spring added across the pool, by line index
pub const SPRING_JITTER: [f32; 2] = [-0.02, 0.08]; // per-line random spring offset range
pub const FRICTION_JITTER: [f32; 2] = [-0.002, 0.008]; // per-line random friction offset range

// Stroke
pub const LINE_WIDTH: f32 = 1.0;
pub const VIEWPORT_GUTTER_PX: u32 = 20; // trimmed from the window width so no scrollbar appears

// Hue oscillator
pub const HUE_AMPLITUDE: f32 = 85.0;
pub const HUE_FREQUENCY: f32 = 0.0015; // radians per frame
pub const HUE_OFFSET: f32 = 285.0; // centre hue, magenta-ish
pub const HUE_SATURATION: f32 = 50.0; // percent
pub const HUE_LIGHTNESS: f32 = 50.0; // percent
pub const HUE_ALPHA: f32 = 0.2;

// Oscillator fallbacks when a parameter is left unset
pub const OSC_DEFAULT_FREQUENCY: f32 = 0.001;
pub const OSC_DEFAULT_AMPLITUDE: f32 = 1.0;

// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_FPS: f32 = 45.0; // frame rate cap, independent of the display rate
pub const PARTICLE_COLOR: [u8; 3] = [255, 50, 50];
pub const PARTICLE_GLOW_SCALE: f32 = 2.0; // glow disc radius relative to the core disc
pub const PARTICLE_GLOW_ALPHA: f32 = 0.3; // glow opacity relative to the core disc
pub const PARTICLE_SIZE: [f32; 2] = [0.5, 2.5];
pub const PARTICLE_SPEED_X: [f32; 2] = [-0.15, 0.15];
pub const PARTICLE_RISE: [f32; 2] = [0.1, 0.6]; // upward speed, px per frame
pub const PARTICLE_OPACITY: [f32; 2] = [0.1, 0.6];
pub const PARTICLE_FADE: [f32; 2] = [0.002, 0.007]; // opacity lost per frame
pub const PARTICLE_RESPAWN_MARGIN: f32 = 10.0; // px beyond the top/bottom edges

// Ring cursor
pub const FOLLOWER_MIN_EASE: f32 = 0.08; // easing when the ring sits on the pointer
pub const FOLLOWER_MAX_EASE: f32 = 0.2; // easing cap when far behind
pub const FOLLOWER_EASE_PER_PX: f32 = 0.001; // extra easing per px of distance
pub const FOLLOWER_RING_RADIUS: f32 = 20.0;
pub const FOLLOWER_DOT_RADIUS: f32 = 4.0;
pub const FOLLOWER_HOVER_SCALE: f32 = 1.5;
pub const FOLLOWER_PRESS_SCALE: f32 = 0.75;
