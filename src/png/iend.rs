use super::*;

/// The integrity code of an empty end chunk: the CRC of just `IEND`.
pub const IEND_CRC: [u8; 4] = [0xAE, 0x42, 0x60, 0x82];

/// Image End
///
/// Has no payload. The only legal integrity code is [`IEND_CRC`], so
/// [`Default`] is the only way to make one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IEND {
  crc: [u8; 4],
}
impl Default for IEND {
  #[inline]
  #[must_use]
  fn default() -> Self {
    let mut out = Self { crc: [0; 4] };
    out.crc = out.compute_crc().to_be_bytes();
    out
  }
}
impl IEND {
  /// The payload length of every end chunk.
  pub const LEN: u32 = 0;

  #[inline]
  #[must_use]
  pub const fn crc(&self) -> [u8; 4] {
    self.crc
  }

  #[inline]
  #[must_use]
  pub fn compute_crc(&self) -> u32 {
    chunk_crc(PngChunkTy::IEND.as_bytes(), &[])
  }
}
