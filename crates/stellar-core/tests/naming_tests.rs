use stellar_core::generate_name;

fn split(name: &str) -> (Vec<&str>, u32) {
    let (words, number) = name.rsplit_once('-').expect("designation has a numeric tail");
    (words.split(' ').collect(), number.parse().expect("numeric tail"))
}

#[test]
fn sun_like_designation() {
    assert_eq!(generate_name(1.0, 73.0, 1.0), "Alpha Stellaris Anomaly-1289");
}

#[test]
fn names_are_pure() {
    for &(m, h, g) in &[(0.3, 12.0, 0.7), (45.0, 99.0, 1.9), (8.0, 0.0, 1.0)] {
        assert_eq!(generate_name(m, h, g), generate_name(m, h, g));
    }
}

#[test]
fn designation_has_three_words_and_four_digits() {
    let mut m = 0.01;
    while m <= 100.0 {
        for &h in &[0.0, 4.9, 37.0, 73.0, 100.0] {
            for &g in &[0.1, 1.0, 1.99, 2.0] {
                let name = generate_name(m, h, g);
                let (words, number) = split(&name);
                assert_eq!(words.len(), 3, "{name}");
                assert!((1000..=9999).contains(&number), "{name}");
            }
        }
        m *= 1.7;
    }
}

#[test]
fn out_of_range_inputs_still_produce_a_name() {
    for name in [
        generate_name(-5.0, -1.0, -3.0),
        generate_name(f64::NAN, 50.0, 1.0),
        generate_name(1e300, 1e300, 1e300),
    ] {
        let (words, number) = split(&name);
        assert_eq!(words.len(), 3, "{name}");
        assert!((1000..=9999).contains(&number), "{name}");
    }
}
