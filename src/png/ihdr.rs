use super::*;

/// The color type of a PNG's pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into the palette
  Index = 3,
  /// Greyscale with alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl TryFrom<u8> for PngColorType {
  type Error = ValidationError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::Y,
      2 => Self::RGB,
      3 => Self::Index,
      4 => Self::YA,
      6 => Self::RGBA,
      other => return Err(ValidationError::UnknownColorType(other)),
    })
  }
}
impl PngColorType {
  /// Number of channels per pixel.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Y | Self::Index => 1,
      Self::YA => 2,
      Self::RGB => 3,
      Self::RGBA => 4,
    }
  }
}

/// Image Header
///
/// The fields are always ones that passed validation: you either get this by
/// decoding a valid header chunk or by calling [`IHDR::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IHDR {
  pub(crate) width: u32,
  pub(crate) height: u32,
  pub(crate) bit_depth: u8,
  pub(crate) color_type: PngColorType,
  pub(crate) compression_method: u8,
  pub(crate) filter_method: u8,
  pub(crate) interlace_method: u8,
  pub(crate) crc: [u8; 4],
}
impl IHDR {
  /// The payload length of every header chunk.
  pub const LEN: u32 = 13;

  /// Builds a validated header, computing a fresh integrity code.
  pub fn new(
    width: u32, height: u32, bit_depth: u8, color_type: PngColorType, is_interlaced: bool,
  ) -> Result<Self, ValidationError> {
    check_dimensions(width, height)?;
    check_bit_depth(color_type, bit_depth)?;
    let mut out = Self {
      width,
      height,
      bit_depth,
      color_type,
      compression_method: 0,
      filter_method: 0,
      interlace_method: u8::from(is_interlaced),
      crc: [0; 4],
    };
    out.crc = out.compute_crc().to_be_bytes();
    Ok(out)
  }

  /// Parses and validates a header payload.
  ///
  /// The `crc` is stored as given, it's not checked here.
  pub(crate) fn from_payload(payload: [u8; 13], crc: [u8; 4]) -> Result<Self, ValidationError> {
    let [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method] =
      payload;
    let width = u32::from_be_bytes([w0, w1, w2, w3]);
    let height = u32::from_be_bytes([h0, h1, h2, h3]);
    let color_type = check_header_fields(
      width,
      height,
      bit_depth,
      color_type,
      compression_method,
      filter_method,
      interlace_method,
    )?;
    Ok(Self {
      width,
      height,
      bit_depth,
      color_type,
      compression_method,
      filter_method,
      interlace_method,
      crc,
    })
  }

  /// The 13 payload bytes of this header.
  #[must_use]
  pub fn to_payload(&self) -> [u8; 13] {
    let mut out = [0_u8; 13];
    out[0..4].copy_from_slice(&self.width.to_be_bytes());
    out[4..8].copy_from_slice(&self.height.to_be_bytes());
    out[8] = self.bit_depth;
    out[9] = self.color_type as u8;
    out[10] = self.compression_method;
    out[11] = self.filter_method;
    out[12] = self.interlace_method;
    out
  }

  /// The CRC of this chunk's tag and payload.
  #[inline]
  #[must_use]
  pub fn compute_crc(&self) -> u32 {
    chunk_crc(PngChunkTy::IHDR.as_bytes(), &self.to_payload())
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }
  #[inline]
  #[must_use]
  pub const fn bit_depth(&self) -> u8 {
    self.bit_depth
  }
  #[inline]
  #[must_use]
  pub const fn color_type(&self) -> PngColorType {
    self.color_type
  }
  /// Always 0.
  #[inline]
  #[must_use]
  pub const fn compression_method(&self) -> u8 {
    self.compression_method
  }
  /// Always 0.
  #[inline]
  #[must_use]
  pub const fn filter_method(&self) -> u8 {
    self.filter_method
  }
  /// 0 (no interlace) or 1 (Adam7).
  #[inline]
  #[must_use]
  pub const fn interlace_method(&self) -> u8 {
    self.interlace_method
  }
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method == 1
  }
  /// The integrity code bytes, as they'll be written.
  #[inline]
  #[must_use]
  pub const fn crc(&self) -> [u8; 4] {
    self.crc
  }
}
