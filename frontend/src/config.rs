use log::Level;

pub const BRAND_NAME: &str = "YiMera";
pub const CONTACT_EMAIL: &str = "hello@yimera.co";
pub const TAGLINE: &str = "A consultancy for hosts who mean business.";
pub const SERVICE_AREA: &str = "Serving NY, NJ, PA, & CT";

// One frame, so the hidden styles are painted before an entrance starts.
pub const ENTRANCE_KICKOFF_MS: u32 = 16;
pub const ANCHOR_SCROLL_DELAY_MS: u32 = 50;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn contact_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
