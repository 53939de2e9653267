/// DOM element ids the front-end binds to.
pub const CANVAS_ID: &str = "starCanvas";
pub const INFO_PANEL_ID: &str = "starInfo";

pub const MASS_SLIDER_ID: &str = "massSlider";
pub const GRAVITY_SLIDER_ID: &str = "gravitySlider";
pub const HYDROGEN_SLIDER_ID: &str = "hydrogenSlider";

pub const MASS_VALUE_ID: &str = "massValue";
pub const GRAVITY_VALUE_ID: &str = "gravityValue";
pub const HYDROGEN_VALUE_ID: &str = "hydrogenValue";

pub const ZOOM_VALUE_ID: &str = "zoomValueDisplay";
pub const ZOOM_IN_BUTTON_ID: &str = "zoomInBtn";
pub const ZOOM_OUT_BUTTON_ID: &str = "zoomOutBtn";
pub const RESET_ZOOM_BUTTON_ID: &str = "resetZoomBtn";

pub const SLIDER_IDS: [&str; 3] = [MASS_SLIDER_ID, GRAVITY_SLIDER_ID, HYDROGEN_SLIDER_ID];

// Backing-size fallback while the canvas parent has no layout yet
pub const FALLBACK_MAX_WIDTH: f64 = 700.0;
pub const FALLBACK_WIDTH_FRACTION: f64 = 0.9;
pub const FALLBACK_ASPECT: f64 = 9.0 / 16.0; // height / width
