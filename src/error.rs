use crate::png::PngChunkTy;

/// Result alias for everything in this crate that can fail.
pub type PngResult<T> = Result<T, PngError>;

/// An error from decoding or encoding a PNG container.
///
/// The first error encountered aborts the whole operation.
#[derive(thiserror::Error, Debug)]
pub enum PngError {
  /// The stream ended early, or the underlying reader/writer failed.
  ///
  /// A truncated stream shows up with [`std::io::ErrorKind::UnexpectedEof`].
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  /// The signature or a chunk's framing didn't match the format.
  #[error("format error: {0}")]
  Format(#[from] FormatError),

  /// A header field broke one of the format's rules.
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),

  /// A chunk's integrity code was wrong.
  #[error("integrity error: {0}")]
  Integrity(#[from] IntegrityError),
}

/// Which broad category a [`PngError`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PngErrorKind {
  Io,
  Format,
  Validation,
  Integrity,
}

impl PngError {
  /// The category of this error, without the details.
  #[inline]
  #[must_use]
  pub fn kind(&self) -> PngErrorKind {
    match self {
      Self::Io(_) => PngErrorKind::Io,
      Self::Format(_) => PngErrorKind::Format,
      Self::Validation(_) => PngErrorKind::Validation,
      Self::Integrity(_) => PngErrorKind::Integrity,
    }
  }
}

/// Structural problems with the byte stream.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
  /// The first 8 bytes weren't the PNG signature.
  #[error("bad file signature {found:02X?}")]
  BadSignature {
    /// What was there instead.
    found: [u8; 8],
  },

  /// A fixed-size chunk declared some other length.
  #[error("{ty} chunk must have length {expected}, found {found}")]
  BadChunkLength {
    /// The chunk type.
    ty: PngChunkTy,
    /// The length that chunk type always has.
    expected: u32,
    /// The length declared in the stream.
    found: u32,
  },
}

/// A header field outside of what the format allows.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
  /// Width was 0.
  #[error("image width is zero")]
  ZeroWidth,
  /// Height was 0.
  #[error("image height is zero")]
  ZeroHeight,
  /// Width was over `2^31 - 1`.
  #[error("image width {0} is larger than 2^31-1")]
  WidthTooLarge(u32),
  /// Height was over `2^31 - 1`.
  #[error("image height {0} is larger than 2^31-1")]
  HeightTooLarge(u32),
  /// The color type byte isn't one of 0, 2, 3, 4, or 6.
  #[error("unknown color type {0}")]
  UnknownColorType(u8),
  /// The bit depth isn't allowed with the color type.
  #[error("bit depth {bit_depth} is not allowed with color type {color_type}")]
  IllegalBitDepth {
    /// Declared bit depth.
    bit_depth: u8,
    /// Declared color type.
    color_type: u8,
  },
  /// Compression method wasn't 0.
  #[error("compression method {0} is not 0")]
  CompressionMethod(u8),
  /// Filter method wasn't 0.
  #[error("filter method {0} is not 0")]
  FilterMethod(u8),
  /// Interlace method wasn't 0 or 1.
  #[error("interlace method {0} is not 0 or 1")]
  InterlaceMethod(u8),
}

/// An integrity code that didn't check out.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityError {
  /// The CRC stored after the chunk differs from the CRC of its tag and data.
  #[error("{ty} chunk declared crc {declared:#010X} but the actual crc is {actual:#010X}")]
  CrcMismatch {
    /// The chunk type.
    ty: PngChunkTy,
    /// The value stored in the stream.
    declared: u32,
    /// The value computed from the chunk.
    actual: u32,
  },

  /// The end chunk's code wasn't `AE 42 60 82`.
  #[error("end chunk code {found:02X?} is not the fixed end code")]
  BadEndCode {
    /// What was there instead.
    found: [u8; 4],
  },
}
