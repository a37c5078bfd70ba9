// Geohash decoding — base-32 location code to cell midpoint.
//
// Every character carries 5 bits. Bits alternate between refining longitude
// and latitude, starting with longitude. Each bit halves the current range
// and keeps the upper half on 1, the lower half on 0. The decoded point is
// the center of the final cell.
//
// Only decoding is supported. Chat clients attach the geohash; we just need
// to put it back on a map.

use thiserror::Error;

use super::Coordinate;

/// The geohash base-32 alphabet (no a, i, l, o).
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const INVALID: u8 = u8::MAX;

/// ASCII byte -> alphabet index, `INVALID` for anything outside the alphabet.
static LOOKUP: [u8; 128] = build_lookup();

const fn build_lookup() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < BASE32.len() {
        table[BASE32[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Reasons a geohash cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character outside the base-32 alphabet. `position` is the
    /// zero-based character index within the input.
    #[error("invalid geohash character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// A decoded geohash cell: its midpoint and half-extents in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeohashCell {
    pub center: Coordinate,
    pub lat_half_width: f64,
    pub lng_half_width: f64,
}

impl GeohashCell {
    /// The whole world, which is also what an empty geohash decodes to.
    const WORLD: GeohashCell = GeohashCell {
        center: Coordinate { lat: 0.0, lng: 0.0 },
        lat_half_width: 90.0,
        lng_half_width: 180.0,
    };

    /// Whether a coordinate lies inside this cell (edges included).
    pub fn contains(&self, point: &Coordinate) -> bool {
        (point.lat - self.center.lat).abs() <= self.lat_half_width
            && (point.lng - self.center.lng).abs() <= self.lng_half_width
    }
}

/// Map one character to its 5-bit value. Input is case-folded first, so
/// `"U4PRUY"` and `"u4pruy"` decode identically.
fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    let value = LOOKUP[c.to_ascii_lowercase() as usize];
    (value != INVALID).then_some(value)
}

/// Canonical spelling of a geohash: ASCII lowercase, matching how
/// `decode` folds its input. Use this wherever geohashes are compared or
/// grouped.
pub fn normalize(geohash: &str) -> String {
    geohash.to_ascii_lowercase()
}

/// Decode a geohash into its cell.
///
/// An empty geohash yields the whole-world cell centered on (0, 0). The
/// first invalid character aborts the decode; there is no partial result.
pub fn decode_cell(geohash: &str) -> Result<GeohashCell, DecodeError> {
    let mut cell = GeohashCell::WORLD;
    let mut even = true;

    for (position, character) in geohash.chars().enumerate() {
        let value = symbol_value(character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;

        for bit in (0..5).rev() {
            let on = value & (1 << bit) != 0;
            if even {
                cell.lng_half_width /= 2.0;
                if on {
                    cell.center.lng += cell.lng_half_width;
                } else {
                    cell.center.lng -= cell.lng_half_width;
                }
            } else {
                cell.lat_half_width /= 2.0;
                if on {
                    cell.center.lat += cell.lat_half_width;
                } else {
                    cell.center.lat -= cell.lat_half_width;
                }
            }
            even = !even;
        }
    }

    Ok(cell)
}

/// Decode a geohash into the midpoint of its cell.
pub fn decode(geohash: &str) -> Result<Coordinate, DecodeError> {
    decode_cell(geohash).map(|cell| cell.center)
}
