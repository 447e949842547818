//! The semantic rules for header fields.
//!
//! These are kept apart from the parsing so that the same checks run on
//! headers read from a stream and on headers built in code.

use super::*;

/// The largest width or height the format allows.
pub const MAX_DIMENSION: u32 = (1 << 31) - 1;

/// Checks a width and height are both in `1 ..= 2^31-1`.
pub fn check_dimensions(width: u32, height: u32) -> Result<(), ValidationError> {
  match width {
    0 => return Err(ValidationError::ZeroWidth),
    w if w > MAX_DIMENSION => return Err(ValidationError::WidthTooLarge(w)),
    _ => (),
  }
  match height {
    0 => Err(ValidationError::ZeroHeight),
    h if h > MAX_DIMENSION => Err(ValidationError::HeightTooLarge(h)),
    _ => Ok(()),
  }
}

/// Checks the bit depth is one of the depths allowed for the color type.
///
/// | color type | bit depths |
/// |:-:|:-|
/// | 0 | 1, 2, 4, 8, 16 |
/// | 2 | 8, 16 |
/// | 3 | 1, 2, 4, 8 |
/// | 4 | 8, 16 |
/// | 6 | 8, 16 |
pub fn check_bit_depth(color_type: PngColorType, bit_depth: u8) -> Result<(), ValidationError> {
  let allowed: &[u8] = match color_type {
    PngColorType::Y => &[1, 2, 4, 8, 16],
    PngColorType::RGB => &[8, 16],
    PngColorType::Index => &[1, 2, 4, 8],
    PngColorType::YA => &[8, 16],
    PngColorType::RGBA => &[8, 16],
  };
  if allowed.contains(&bit_depth) {
    Ok(())
  } else {
    Err(ValidationError::IllegalBitDepth { bit_depth, color_type: color_type as u8 })
  }
}

/// Checks the compression, filter, and interlace method bytes.
pub fn check_methods(compression: u8, filter: u8, interlace: u8) -> Result<(), ValidationError> {
  if compression != 0 {
    return Err(ValidationError::CompressionMethod(compression));
  }
  if filter != 0 {
    return Err(ValidationError::FilterMethod(filter));
  }
  if interlace > 1 {
    return Err(ValidationError::InterlaceMethod(interlace));
  }
  Ok(())
}

/// Runs every header rule against the raw field values, in stream order.
///
/// Returns the parsed color type since that's the one field that needs
/// converting.
pub fn check_header_fields(
  width: u32, height: u32, bit_depth: u8, color_type: u8, compression: u8, filter: u8,
  interlace: u8,
) -> Result<PngColorType, ValidationError> {
  check_dimensions(width, height)?;
  let color_type = PngColorType::try_from(color_type)?;
  check_bit_depth(color_type, bit_depth)?;
  check_methods(compression, filter, interlace)?;
  Ok(color_type)
}
