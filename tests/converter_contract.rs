use cardinal_core::cardinal::{to_cardinal, ConvertError, Converter, DirectConverter, MAX_CARDINAL};

#[test]
fn boundary_values() {
    assert_eq!(to_cardinal(0).unwrap(), "zero");
    assert_eq!(to_cardinal(1000).unwrap(), "one thousand");
}

#[test]
fn unit_values() {
    assert_eq!(to_cardinal(1).unwrap(), "one");
    assert_eq!(to_cardinal(5).unwrap(), "five");
    assert_eq!(to_cardinal(9).unwrap(), "nine");
}

#[test]
fn teen_values_are_irregular_lookups() {
    assert_eq!(to_cardinal(10).unwrap(), "ten");
    assert_eq!(to_cardinal(11).unwrap(), "eleven");
    assert_eq!(to_cardinal(12).unwrap(), "twelve");
    assert_eq!(to_cardinal(13).unwrap(), "thirteen");
    assert_eq!(to_cardinal(15).unwrap(), "fifteen");
    assert_eq!(to_cardinal(19).unwrap(), "nineteen");
}

#[test]
fn tens_multiples_are_single_words() {
    assert_eq!(to_cardinal(20).unwrap(), "twenty");
    assert_eq!(to_cardinal(40).unwrap(), "forty");
    assert_eq!(to_cardinal(50).unwrap(), "fifty");
    assert_eq!(to_cardinal(90).unwrap(), "ninety");
}

#[test]
fn two_digit_composites_are_hyphenated() {
    assert_eq!(to_cardinal(21).unwrap(), "twenty-one");
    assert_eq!(to_cardinal(45).unwrap(), "forty-five");
    assert_eq!(to_cardinal(99).unwrap(), "ninety-nine");
}

#[test]
fn hundreds_rendering_is_conjunction_free() {
    assert_eq!(to_cardinal(100).unwrap(), "one hundred");
    assert_eq!(to_cardinal(101).unwrap(), "one hundred one");
    assert_eq!(to_cardinal(110).unwrap(), "one hundred ten");
    assert_eq!(to_cardinal(115).unwrap(), "one hundred fifteen");
    assert_eq!(to_cardinal(120).unwrap(), "one hundred twenty");
    assert_eq!(to_cardinal(200).unwrap(), "two hundred");
    assert_eq!(to_cardinal(245).unwrap(), "two hundred forty-five");
    assert_eq!(to_cardinal(900).unwrap(), "nine hundred");
    assert_eq!(to_cardinal(909).unwrap(), "nine hundred nine");
    assert_eq!(to_cardinal(999).unwrap(), "nine hundred ninety-nine");
}

#[test]
fn out_of_range_is_an_error_not_a_clamp() {
    assert_eq!(to_cardinal(1001), Err(ConvertError::OutOfRange(1001)));
    assert_eq!(to_cardinal(u16::MAX), Err(ConvertError::OutOfRange(u16::MAX)));
}

#[test]
fn full_domain_is_deterministic_and_well_formed() {
    for n in 0..=MAX_CARDINAL {
        let first = to_cardinal(n).unwrap();
        let second = to_cardinal(n).unwrap();
        assert_eq!(first, second, "non-deterministic output for {n}");

        // No leading/trailing whitespace, no double spaces, and the
        // only punctuation is the hyphen in two-digit composites.
        assert_eq!(first, first.trim(), "untrimmed output for {n}");
        assert!(!first.contains("  "), "double space in output for {n}");
        assert!(!first.contains(" and "), "conjunction in output for {n}");
        assert!(
            first.chars().all(|c| c.is_ascii_lowercase() || c == ' ' || c == '-'),
            "unexpected character in output for {n}: {first:?}"
        );
    }
}

#[test]
fn full_domain_hyphenation_rule() {
    for n in 0..=MAX_CARDINAL {
        let words = to_cardinal(n).unwrap();
        let two_digit_composite = (21..=99).contains(&(n % 100)) && n % 10 != 0;
        assert_eq!(
            words.contains('-'),
            two_digit_composite,
            "hyphenation mismatch for {n}: {words:?}"
        );
    }
}

#[test]
fn direct_converter_matches_free_function() {
    let direct = DirectConverter;
    for n in 0..=MAX_CARDINAL {
        assert_eq!(direct.convert(n).unwrap(), to_cardinal(n).unwrap());
    }
    assert!(direct.convert(1001).is_err());
}
