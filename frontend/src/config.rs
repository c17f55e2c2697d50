
/// Height of the sticky top navigation bar in pixels.
pub const NAVBAR_HEIGHT: f64 = 64.0;

/// Extra distance below the navbar that a section top must cross before it counts as active.
pub const LEAD_IN: f64 = 10.0;

/// Scroll distance after which the floating bottom dock is shown.
pub const CHROME_THRESHOLD: f64 = 120.0;

/// Scroll distance after which the top bar switches to its solid style.
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 20.0;

/// Delay before the first offset-based resolution, lets sections finish their first layout.
pub const SETTLE_DELAY_MS: u32 = 200;

pub const VISIBILITY_THRESHOLD: f64 = 0.01;

// shrinks the viewport by 10% from the top and 60% from the bottom
pub const VISIBILITY_ROOT_MARGIN: &str = "-10% 0px -60% 0px";

/// How long the footer shows its "subscribed" confirmation.
pub const SUBSCRIBE_CONFIRMATION_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub navbar_height: f64,
    pub lead_in: f64,
    pub chrome_threshold: f64,
    pub scrolled_threshold: f64,
    pub settle_delay_ms: u32,
    pub visibility_threshold: f64,
    pub visibility_root_margin: &'static str,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            navbar_height: NAVBAR_HEIGHT,
            lead_in: LEAD_IN,
            chrome_threshold: CHROME_THRESHOLD,
            scrolled_threshold: NAVBAR_SCROLLED_THRESHOLD,
            settle_delay_ms: SETTLE_DELAY_MS,
            visibility_threshold: VISIBILITY_THRESHOLD,
            visibility_root_margin: VISIBILITY_ROOT_MARGIN,
        }
    }
}
