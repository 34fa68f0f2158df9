use std::time::Duration;

use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub const PAGE_TITLE: &str = "Sammy Sparkle | The TikTok 150K Playbook";

/// Simulated round trip of the email subscription call.
pub const SUBSCRIBE_DELAY: Duration = Duration::from_millis(1000);
/// Simulated round trip of the checkout call.
pub const PURCHASE_DELAY: Duration = Duration::from_millis(2000);

pub const TOAST_DURATION_MS: u32 = 4000;
pub const TOAST_LIMIT: usize = 3;

pub const REVEAL_SELECTOR: &str = ".fade-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const EBOOK_SECTION_ID: &str = "ebook-section";
