#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:5000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production: same origin
}

// Site-wide timing knobs, all in one place.
pub const PRELOADER_DELAY_MS: u32 = 2_000;
pub const TESTIMONIAL_ROTATE_MS: u32 = 6_000;
pub const TOAST_DISMISS_MS: u32 = 5_000;
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_TICK_MS: u32 = 16;

// Scroll thresholds, in CSS pixels.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
pub const SECTION_SPY_OFFSET: f64 = 200.0;
pub const SMOOTH_SCROLL_OFFSET: f64 = 100.0;
