//! Timing and layout constants shared by the page behaviors.

/// Ordered section anchors, top to bottom of the page. Keyboard navigation
/// steps through these.
pub const SECTION_IDS: [&str; 6] = [
    "#home",
    "#features",
    "#technology",
    "#results",
    "#team",
    "#download",
];

/// A section counts as "current" once its top edge has scrolled above this.
pub const SECTION_TOP_THRESHOLD: f64 = 100.0;

/// The header swaps to its scrolled preset past this scroll offset.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Breathing room left under the fixed header when scrolling to a section.
pub const NAV_SCROLL_MARGIN: i32 = 20;

/// Navigation clicks are ignored this long after a smooth scroll starts.
pub const SCROLL_LOCK_MS: u32 = 1000;

/// Counters tween from 0 to their target over this duration.
pub const COUNTER_DURATION_MS: u32 = 2000;
/// Counter tick cadence, roughly 60 updates per second.
pub const COUNTER_TICK_MS: u32 = 16;
/// Counters start once half the element is visible.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Reveal fires once a tenth of the element is visible, with the viewport
/// bottom pulled up so cards animate a little before they fully arrive.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Per-sibling delay for grid reveal cascades.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Slowest particle speed factor; each further particle drifts faster.
pub const PARALLAX_BASE_SPEED: f64 = 0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

/// The modal gains its `active` class this long after mounting so the CSS
/// transition has a non-active frame to start from.
pub const MODAL_ENTER_DELAY_MS: u32 = 50;
/// The modal stays in the tree this long after losing `active` so the
/// closing transition can finish.
pub const MODAL_EXIT_MS: u32 = 300;

/// Download flow stage lengths.
pub const DOWNLOAD_PREPARE_MS: u32 = 1500;
pub const DOWNLOAD_RUN_MS: u32 = 1000;
pub const DOWNLOAD_RESET_MS: u32 = 3000;
