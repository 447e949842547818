use super::*;

/// Image Data.
///
/// * Image data is stored with Zlib compression applied, but this type doesn't
///   care. The bytes are kept exactly as they were read.
/// * Images can have more than one IDAT chunk. Each one is kept as its own
///   value, they're never merged.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IDAT {
  pub(crate) data: Vec<u8>,
  pub(crate) crc: [u8; 4],
}
impl IDAT {
  /// Builds a data chunk, computing a fresh integrity code.
  #[must_use]
  pub fn new(data: Vec<u8>) -> Self {
    let crc = chunk_crc(PngChunkTy::IDAT.as_bytes(), &data).to_be_bytes();
    Self { data, crc }
  }

  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.data
  }

  #[inline]
  #[must_use]
  pub const fn crc(&self) -> [u8; 4] {
    self.crc
  }

  #[inline]
  #[must_use]
  pub fn compute_crc(&self) -> u32 {
    chunk_crc(PngChunkTy::IDAT.as_bytes(), &self.data)
  }
}
impl Debug for IDAT {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("IDAT").field(&&self.data[..self.data.len().min(12)]).field(&self.data.len()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_idat_debug_is_truncated() {
    let idat = IDAT::new((0..100).collect());
    assert_eq!(format!("{idat:?}"), "IDAT([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], 100)");
  }

  #[test]
  fn test_empty_idat_crc() {
    let idat = IDAT::new(Vec::new());
    assert_eq!(idat.crc(), [0x35, 0xAF, 0x06, 0x1E]);
    assert_eq!(u32::from_be_bytes(idat.crc()), idat.compute_crc());
  }
}
