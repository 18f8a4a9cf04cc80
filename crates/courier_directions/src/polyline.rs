use geo_types::{Coord, LineString};
use thiserror::Error;

/// Precision used by the directions API overview polylines.
pub const DEFAULT_PRECISION: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolylineError {
    #[error("polyline ends in the middle of a value at byte {0}")]
    Truncated(usize),

    #[error("invalid polyline byte {byte:#x} at {index}")]
    InvalidByte { byte: u8, index: usize },

    #[error("polyline value too large at byte {0}")]
    Overflow(usize),
}

/// Decodes an encoded polyline into a line string, x = longitude and y = latitude.
pub fn decode(encoded: &str, precision: u32) -> Result<LineString<f64>, PolylineError> {
    let factor = 10_f64.powi(precision as i32);
    let bytes = encoded.as_bytes();

    let mut coords = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat += decode_value(bytes, &mut index)?;
        lng += decode_value(bytes, &mut index)?;

        coords.push(Coord {
            x: lng as f64 / factor,
            y: lat as f64 / factor,
        });
    }

    Ok(LineString::new(coords))
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes.get(*index).ok_or(PolylineError::Truncated(*index))?;
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidByte {
                byte,
                index: *index,
            });
        }
        if shift > 55 {
            return Err(PolylineError::Overflow(*index));
        }

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        *index += 1;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}
