use log::Level;

pub const PAGE_TITLE: &str = "Belinda To - Portfolio";

/// Wheel events needed to slide one panel fully into view.
pub const REVEAL_STEPS_PER_PANEL: u16 = 100;

pub const LOAD_IN_DELAY_MS: u32 = 120;

pub const LETTER_STAGGER_SECS: f64 = 0.09;

pub const HERO_PARALLAX_FACTOR: f64 = 0.25;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development builds log every consumed wheel event
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
