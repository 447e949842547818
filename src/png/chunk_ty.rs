use super::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// The four byte type tag of a chunk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkTy(pub AsciiArray<4>);
#[allow(nonstandard_style)]
impl PngChunkTy {
  /// Image Header
  pub const IHDR: Self = Self(AsciiArray(*b"IHDR"));
  /// Palette
  pub const PLTE: Self = Self(AsciiArray(*b"PLTE"));
  /// Image Data
  pub const IDAT: Self = Self(AsciiArray(*b"IDAT"));
  /// Image End
  pub const IEND: Self = Self(AsciiArray(*b"IEND"));

  /// The tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    self.0.as_bytes()
  }
}
impl From<[u8; 4]> for PngChunkTy {
  #[inline]
  #[must_use]
  fn from(tag: [u8; 4]) -> Self {
    Self(AsciiArray(tag))
  }
}
impl Debug for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(&self.0, f)
  }
}
impl Display for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&self.0, f)
  }
}

/// What a tag means to this codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
  /// The 8 byte file signature.
  FileSignature,
  /// `IHDR`
  Header,
  /// `PLTE`
  Palette,
  /// `IDAT`
  Data,
  /// `IEND`
  End,
  /// Anything else. These get skipped.
  Unknown,
}
impl ChunkKind {
  /// Classifies a tag by exact length and exact bytes.
  ///
  /// An 8 byte tag can only be the signature and a 4 byte tag can only be a
  /// chunk type. A tag of any other length, or one that merely starts with a
  /// known tag, is [`Unknown`](ChunkKind::Unknown).
  ///
  /// ```
  /// # use pngframe::png::ChunkKind;
  /// assert_eq!(ChunkKind::classify(b"IDAT"), ChunkKind::Data);
  /// assert_eq!(ChunkKind::classify(b"IDATA"), ChunkKind::Unknown);
  /// assert_eq!(ChunkKind::classify(b"tEXt"), ChunkKind::Unknown);
  /// ```
  #[must_use]
  pub fn classify(tag: &[u8]) -> Self {
    if tag == PNG_SIGNATURE {
      return Self::FileSignature;
    }
    match <[u8; 4]>::try_from(tag) {
      Ok(t) => Self::of(PngChunkTy::from(t)),
      Err(_) => Self::Unknown,
    }
  }

  /// Classifies an already-framed chunk type.
  #[inline]
  #[must_use]
  pub fn of(ty: PngChunkTy) -> Self {
    match ty {
      PngChunkTy::IHDR => Self::Header,
      PngChunkTy::PLTE => Self::Palette,
      PngChunkTy::IDAT => Self::Data,
      PngChunkTy::IEND => Self::End,
      _ => Self::Unknown,
    }
  }
}
