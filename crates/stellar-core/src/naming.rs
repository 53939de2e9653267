//! Deterministic catalog-style designations.

static PREFIXES: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Omega", "Cygnus", "Orion", "Sirius", "Proxima", "Kepler",
    "Trappist", "Gliese", "HD", "NGC", "Messier",
];

static ROOTS: &[&str] = &[
    "Majoris", "Minoris", "Prime", "Centauri", "Nebulae", "Core", "Cluster", "Point", "Sector",
    "Nova", "Stellaris", "Luminos", "Draconis", "Ignis", "Caeli",
];

static SUFFIXES: &[&str] = &[
    "A", "B", "X", "Prime", "System", "Star", "Object", "Entity", "Anomaly", "Designate", "7",
    "42", "101", "3000", "IX", "IV", "VI",
];

/// Map a value scaled to `[0, 1)` by `span` onto a word, falling back to the first word.
fn pick(words: &'static [&'static str], value: f64, span: f64) -> &'static str {
    let len = words.len() as i64;
    // NaN and infinities saturate in the cast; rem_euclid keeps the index non-negative
    let idx = ((value / span) * len as f64).floor() as i64;
    words
        .get(idx.rem_euclid(len.max(1)) as usize)
        .copied()
        .unwrap_or(words[0])
}

/// Designation such as `"Alpha Stellaris Anomaly-1289"`.
///
/// Pure in its three inputs; the numeric part is always in `[1000, 9999]`.
pub fn generate_name(mass: f64, hydrogen_percent: f64, gravity_factor: f64) -> String {
    let prefix = pick(PREFIXES, mass, 100.0);
    let root = pick(ROOTS, hydrogen_percent, 100.0);
    let suffix = pick(SUFFIXES, gravity_factor, 2.0);
    let seed = (mass * 17.0 + hydrogen_percent * 3.0 + gravity_factor * 53.0).floor() as i64;
    let number = seed.rem_euclid(9000) + 1000;
    format!("{prefix} {root} {suffix}-{number}")
}
