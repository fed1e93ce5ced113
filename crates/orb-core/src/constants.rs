// Shared visual and interaction tuning constants.

// Scale limits and smoothing
pub const START_SCALE: f32 = 0.9;
pub const SCALE_MIN: f32 = 0.2;
pub const SCALE_MAX: f32 = 2.0;
pub const EASE_FACTOR: f32 = 0.1; // fraction of remaining distance covered per frame

// Input mapping
pub const WHEEL_SCALE_PER_DELTA: f32 = 0.001;
pub const GRAB_RADIUS_FACTOR: f32 = 0.3; // of min_side, times current scale

// Form generation
pub const LAYER_COUNT: usize = 6;
pub const LAYER_BASE_COUNT: f32 = 100.0;
pub const LAYER_COUNT_STEP: f32 = 40.0;
pub const REFERENCE_MIN_SIDE: f32 = 800.0; // min_side at which layer counts are nominal
pub const DIST_BIAS_EXPONENT: f32 = 1.4;
pub const BLOB_COUNT: usize = 20;
pub const BLOB_SPEED_MAX: f32 = 0.3; // px per frame, per axis
pub const BLOB_SIZE_MIN: f32 = 150.0;
pub const BLOB_SIZE_MAX: f32 = 300.0;

// Motion
pub const ROTATION_SPEED: f32 = 0.0005; // radians per frame
pub const HUE_DRIFT: f32 = 0.03;
pub const PULSE_TIME_PER_MS: f32 = 0.003;
pub const BLOB_PULSE_RATE: f32 = 0.3;

// Orb geometry, as fractions of min_side
pub const MAIN_RADIUS_FACTOR: f32 = 0.27;
pub const HALO_RADIUS_FACTOR: f32 = 1.2;
pub const HALO_INNER_FACTOR: f32 = 0.7;
pub const INFLUENCE_RADIUS_FACTOR: f32 = 0.25;

// Influence response
pub const INFLUENCE_RADIUS_BOOST: f32 = 0.6;
pub const INFLUENCE_LIGHTNESS_BOOST: f32 = 25.0;
pub const INFLUENCE_ALPHA_BOOST: f32 = 0.25;

// Background
pub const BACKGROUND_COLOR: &str = "#050508";
pub const HORIZON_FRACTION: f32 = 0.6;
pub const HORIZON_BAND_HEIGHT: f32 = 100.0;
pub const BLOB_BLUR_PX: f32 = 70.0;
