// Unit tests for the geohash decoder.
//
// Tests the public decode API: known reference points, degenerate input,
// invalid characters, case folding, and the cell-nesting property that
// makes longer geohashes strictly more precise.

use geotopic::geo::geohash::{decode, decode_cell, DecodeError, BASE32};
use geotopic::geo::Coordinate;

// ============================================================
// Reference values
// ============================================================

#[test]
fn all_zero_geohash_is_south_west() {
    let c = decode("0").unwrap();
    assert!(c.lat < 0.0, "lat should be negative, got {}", c.lat);
    assert!(c.lng < 0.0, "lng should be negative, got {}", c.lng);
}

#[test]
fn single_zero_exact_midpoint() {
    // 00000: lng -180..-135 and lat -90..-45
    assert_eq!(decode("0").unwrap(), Coordinate::new(-67.5, -157.5));
}

#[test]
fn all_z_geohash_is_north_east() {
    let c = decode("zzz").unwrap();
    assert!(c.lat > 89.0 && c.lng > 179.0, "got {c:?}");
}

#[test]
fn known_city_geohashes() {
    // (geohash, lat, lng) from public geohash references
    let cases = [
        ("9q8yy", 37.77, -122.42),  // San Francisco
        ("dr5ru", 40.74, -73.98),   // New York
        ("gcpvj", 51.50, -0.13),    // London
        ("u4pruydqqvj", 57.6491, 10.4074),
    ];
    for (code, lat, lng) in cases {
        let c = decode(code).unwrap();
        assert!(
            (c.lat - lat).abs() < 0.05 && (c.lng - lng).abs() < 0.05,
            "{code} decoded to {c:?}, expected ~({lat}, {lng})"
        );
    }
}

// ============================================================
// Degenerate and invalid input
// ============================================================

#[test]
fn empty_geohash_is_origin() {
    assert_eq!(decode("").unwrap(), Coordinate::new(0.0, 0.0));
}

#[test]
fn invalid_character_fails() {
    assert!(matches!(
        decode("!"),
        Err(DecodeError::InvalidCharacter { character: '!', position: 0 })
    ));
}

#[test]
fn excluded_letters_fail() {
    for code in ["a", "u4i", "l", "dr5o"] {
        assert!(decode(code).is_err(), "{code} should not decode");
    }
}

#[test]
fn invalid_character_anywhere_aborts() {
    // Valid prefix doesn't rescue the code
    assert!(decode("u4pruy#").is_err());
    assert!(decode("u4 pruy").is_err());
}

#[test]
fn non_ascii_fails_with_char_position() {
    let err = decode("u4é").unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidCharacter {
            character: 'é',
            position: 2
        }
    );
}

#[test]
fn error_message_names_character() {
    let err = decode("x!").unwrap_err();
    assert!(err.to_string().contains("'!'"), "got: {err}");
}

#[test]
fn uppercase_is_case_folded() {
    assert_eq!(decode("U4PRUY").unwrap(), decode("u4pruy").unwrap());
    assert_eq!(decode("Dr5Ru").unwrap(), decode("dr5ru").unwrap());
}

// ============================================================
// Determinism and precision
// ============================================================

#[test]
fn decode_is_deterministic() {
    for code in ["u4pruy", "9q8yy", "s", "zzzzzzzz"] {
        let first = decode(code).unwrap();
        for _ in 0..3 {
            assert_eq!(decode(code).unwrap(), first);
        }
    }
}

#[test]
fn long_geohash_stays_in_range() {
    let code = "u4pruydqqvjxxxxxxxxxxxxx";
    assert!(code.len() >= 20);
    let cell = decode_cell(code).unwrap();
    assert!(cell.center.lat.is_finite() && cell.center.lng.is_finite());
    assert!((-90.0..=90.0).contains(&cell.center.lat));
    assert!((-180.0..=180.0).contains(&cell.center.lng));
    assert!(cell.lat_half_width > 0.0 && cell.lat_half_width < 1e-15);
}

#[test]
fn appending_symbol_stays_inside_parent_cell() {
    for prefix in ["", "0", "u4pr", "9q8yy", "zzz", "bcdefg"] {
        let parent = decode_cell(prefix).unwrap();
        for &symbol in BASE32 {
            let child = format!("{prefix}{}", symbol as char);
            let point = decode(&child).unwrap();
            assert!(
                parent.contains(&point),
                "{child} decoded to {point:?}, outside the cell of {prefix:?}"
            );
        }
    }
}

#[test]
fn each_character_shrinks_the_cell() {
    let mut previous = decode_cell("").unwrap();
    let code = "u4pruydqqvj";
    for end in 1..=code.len() {
        let cell = decode_cell(&code[..end]).unwrap();
        assert!(cell.lat_half_width < previous.lat_half_width || cell.lng_half_width < previous.lng_half_width);
        assert!(previous.contains(&cell.center));
        previous = cell;
    }
}
