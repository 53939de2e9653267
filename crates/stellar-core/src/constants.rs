/// Classification thresholds and visual tuning constants.
///
/// The classification values define the taxonomy boundaries and must stay
/// literal. Render tuning values only shape the look of a frame.

// Effective mass: mass * (1 + (gravity - 1) * GRAVITY_MASS_WEIGHT)
pub const GRAVITY_MASS_WEIGHT: f64 = 0.5;

// Hydrogen (percent) below which the star is out of fuel
pub const FUEL_EXHAUSTED_HYDROGEN: f64 = 5.0;
// Below this the remnant itself is shown instead of the supernova nebula
pub const REMNANT_VISIBLE_HYDROGEN: f64 = 2.0;

// Effective-mass tiers (solar masses)
pub const FUSION_MIN_MASS: f64 = 0.08;
pub const LOW_MASS_LIMIT: f64 = 0.5;
pub const MEDIUM_MASS_LIMIT: f64 = 1.5;
pub const HIGH_MASS_LIMIT: f64 = 8.0;

// Hydrogen (percent) below which each tier counts as evolved
pub const MEDIUM_MASS_EVOLVED_HYDROGEN: f64 = 40.0;
pub const HIGH_MASS_EVOLVED_HYDROGEN: f64 = 30.0;
pub const VERY_HIGH_MASS_EVOLVED_HYDROGEN: f64 = 20.0;

// Extreme O-type conjunct bounds (all strict)
pub const O_TYPE_MIN_HYDROGEN: f64 = 70.0;
pub const O_TYPE_MIN_MASS: f64 = 20.0;
pub const O_TYPE_MIN_GRAVITY: f64 = 1.2;

// Remnant is a neutron star while effective mass < NEUTRON_STAR_MASS_LIMIT / gravity
pub const NEUTRON_STAR_MASS_LIMIT: f64 = 25.0;

// Zoom
pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 8.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const ZOOM_STEP: f64 = 0.1; // fraction of the current zoom per command

// Background field
pub const NUM_BACKGROUND_STARS: usize = 250;

// Object sizing: base radius = min(width, height) * size_factor / BASE_RADIUS_DIVISOR
pub const BASE_RADIUS_DIVISOR: f64 = 12.0;
pub const ACTIVITY_MODIFIER_MIN: f64 = 0.5;
pub const ACTIVITY_MODIFIER_MAX: f64 = 2.0;
pub const GENERAL_PULSE_RATE: f64 = 0.0005; // per ms, scaled by activity

// Accretion disk
pub const ACCRETION_SEGMENTS: usize = 70;
pub const ACCRETION_ROTATION_RATE: f64 = 0.0002;

// Pulsar
pub const PULSE_STEP: f64 = 0.07;
pub const PULSE_FACTOR_MIN: f64 = 0.7;
pub const PULSE_FACTOR_SPAN: f64 = 0.6;
pub const BEAM_ROTATION_RATE: f64 = 0.003;
pub const BEAM_LENGTH_FRACTION: f64 = 0.75;

// Corona
pub const BREATHING_ACTIVITY_MIN: f64 = 0.4; // strictly above
pub const FLARE_ACTIVITY_MIN: f64 = 0.8; // strictly above
pub const FLARES_PER_ACTIVITY: f64 = 5.0;
