use stellar_core::*;

#[test]
fn sun_like_report() {
    let report = StarReport::new(&classify(1.0, 1.0, 73.0));
    assert_eq!(report.title, "Medium-Mass Main Sequence Star: Yellow Dwarf (Main Sequence)");
    assert_eq!(report.designation, "Alpha Stellaris Anomaly-1289");
    assert_eq!(report.description, StellarKind::YellowDwarf.def().description);
    assert_eq!(report.parameters, "Mass: 1.0 M☉, Gravity Inf: 1.0x, Hydrogen: 73%");

    let html = report.to_html();
    assert!(html.starts_with("<h2>Medium-Mass Main Sequence Star: "));
    assert!(html.contains("<h3>Designation: Alpha Stellaris Anomaly-1289</h3>"));
    assert!(html.contains("<strong>Current Parameters:</strong> Mass: 1.0"));
    assert!(html.contains("<strong>Probable Fate / Evolution:</strong> A Yellow Dwarf"));
}

#[test]
fn readouts_use_fixed_precision() {
    let readouts = Readouts::from_input(&SimulationInput::new(1.24, 0.5, 72.6));
    assert_eq!(readouts.mass, "1.2");
    assert_eq!(readouts.gravity, "0.50");
    assert_eq!(readouts.hydrogen, "73");
}

#[test]
fn zoom_label_has_one_decimal() {
    assert_eq!(zoom_label(1.0), "Zoom: 1.0x");
    assert_eq!(zoom_label(8.0), "Zoom: 8.0x");
    assert_eq!(zoom_label(1.1), "Zoom: 1.1x");
}
