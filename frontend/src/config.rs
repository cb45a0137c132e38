use log::Level;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Name the contact assistant addresses rewritten messages to.
pub const DEVELOPER_NAME: &str = "Som";

/// Scroll offset in pixels past which the navbar turns sticky.
pub const NAVBAR_STICKY_OFFSET: f64 = 50.0;

pub const TESTIMONIAL_INTERVAL_MS: u32 = 5_000;
pub const ACKNOWLEDGMENT_DISMISS_MS: u32 = 3_000;

// Scroll reveal, matching the page's original animate-on-scroll setup.
pub const REVEAL_DURATION_MS: u32 = 800;
pub const REVEAL_OFFSET_PX: f64 = 120.0;

/// Key injected at build time, e.g. `GEMINI_API_KEY=... trunk build --release`.
pub fn api_key() -> &'static str {
    option_env!("GEMINI_API_KEY").unwrap_or("")
}

pub fn generate_content_url(api_key: &str) -> String {
    format!(
        "{}/{}:generateContent?key={}",
        GEMINI_BASE_URL,
        GEMINI_MODEL,
        urlencoding::encode(api_key)
    )
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
