//! The CRC-32 used for PNG chunk integrity codes.
//!
//! This is the reflected `0xEDB88320` polynomial, seeded with all bits set and
//! inverted at the end. The lookup table is computed by a `const fn`, so it's
//! built exactly once and is immutable for the life of the program.

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

fn update_crc(mut crc: u32, bytes: &[u8]) -> u32 {
  for &byte in bytes {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc
}

/// Computes the CRC-32 of a byte slice.
///
/// ```
/// # use pngframe::png::png_crc;
/// assert_eq!(png_crc(b""), 0);
/// assert_eq!(png_crc(b"123456789"), 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn png_crc(bytes: &[u8]) -> u32 {
  update_crc(u32::MAX, bytes) ^ u32::MAX
}

/// An incremental CRC-32.
///
/// Chunks are checksummed over their tag followed by their data, and this lets
/// you feed the two parts in without first gluing them together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc32(u32);
impl Default for Crc32 {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::new()
  }
}
impl Crc32 {
  /// A fresh checksum state.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self(u32::MAX)
  }

  /// Feeds more bytes in.
  #[inline]
  pub fn update(&mut self, bytes: &[u8]) -> &mut Self {
    self.0 = update_crc(self.0, bytes);
    self
  }

  /// The checksum of everything fed in so far.
  #[inline]
  #[must_use]
  pub const fn finish(&self) -> u32 {
    self.0 ^ u32::MAX
  }
}

/// The integrity code for a chunk with the given tag and data.
#[inline]
#[must_use]
pub fn chunk_crc(tag: &[u8; 4], data: &[u8]) -> u32 {
  Crc32::new().update(tag).update(data).finish()
}
