use super::*;

/// An RGB value, 8-bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct RGB8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

/// Palette
///
/// This codec models a palette as exactly one RGB entry, so the chunk payload
/// is always 3 bytes. Longer palette chunks are rejected as a format error.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PLTE {
  pub(crate) entry: RGB8,
  pub(crate) crc: [u8; 4],
}
impl PLTE {
  /// The payload length of every palette chunk.
  pub const LEN: u32 = 3;

  /// Builds a palette chunk, computing a fresh integrity code.
  #[must_use]
  pub fn new(entry: RGB8) -> Self {
    let mut out = Self { entry, crc: [0; 4] };
    out.crc = out.compute_crc().to_be_bytes();
    out
  }

  #[inline]
  #[must_use]
  pub(crate) fn from_payload(payload: [u8; 3], crc: [u8; 4]) -> Self {
    Self { entry: bytemuck::cast(payload), crc }
  }

  /// The 3 payload bytes.
  #[inline]
  #[must_use]
  pub fn to_payload(&self) -> [u8; 3] {
    bytemuck::cast(self.entry)
  }

  /// The single palette entry.
  #[inline]
  #[must_use]
  pub const fn entry(&self) -> RGB8 {
    self.entry
  }

  #[inline]
  #[must_use]
  pub const fn crc(&self) -> [u8; 4] {
    self.crc
  }

  #[inline]
  #[must_use]
  pub fn compute_crc(&self) -> u32 {
    chunk_crc(PngChunkTy::PLTE.as_bytes(), &self.to_payload())
  }
}
impl Debug for PLTE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let RGB8 { r, g, b } = self.entry;
    f.debug_tuple("PLTE").field(&[r, g, b]).finish()
  }
}
