// Host-side tests for the canvas sizing policy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod layout {
    include!("../src/layout.rs");
}

use layout::*;

#[test]
fn fallback_is_sixteen_by_nine() {
    assert_eq!(fallback_canvas_size(1000.0), (700, 393));
    assert_eq!(fallback_canvas_size(400.0), (360, 202));
}

#[test]
fn fallback_caps_width() {
    for inner in [778.0, 1920.0, 3840.0] {
        assert_eq!(fallback_canvas_size(inner).0, 700);
    }
}

#[test]
fn fallback_never_negative() {
    assert_eq!(fallback_canvas_size(0.0), (0, 0));
    assert_eq!(fallback_canvas_size(-50.0), (0, 0));
    assert_eq!(fallback_canvas_size(f64::NAN), (0, 0));
}

#[test]
fn laid_out_parent_uses_client_box() {
    assert_eq!(
        canvas_backing_size(Some((900.0, 600.0)), (880.0, 495.5), 1280.0),
        (880, 495)
    );
}

#[test]
fn unsized_parent_falls_back() {
    assert_eq!(canvas_backing_size(None, (0.0, 0.0), 1000.0), (700, 393));
    assert_eq!(
        canvas_backing_size(Some((900.0, 0.0)), (880.0, 0.0), 1000.0),
        (700, 393)
    );
}
