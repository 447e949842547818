#![forbid(unsafe_code)]

//! Just has shorthands for the big-endian stream reads the PNG framing needs.

use std::io::{self, Read};

#[inline]
#[must_use]
pub fn u32_be(bytes: [u8; 4]) -> u32 {
  u32::from_be_bytes(bytes)
}

/// Reads exactly `N` bytes, or fails with `UnexpectedEof`.
#[inline]
pub fn read_byte_array<const N: usize, R: Read + ?Sized>(r: &mut R) -> io::Result<[u8; N]> {
  let mut a = [0_u8; N];
  r.read_exact(&mut a)?;
  Ok(a)
}

/// Reads exactly `len` bytes into a new buffer, or fails with `UnexpectedEof`.
///
/// The buffer is grown as data actually arrives, so a huge declared length on
/// a short stream doesn't allocate the declared amount up front.
pub fn read_byte_vec<R: Read + ?Sized>(r: &mut R, len: u32) -> io::Result<Vec<u8>> {
  let mut v = Vec::new();
  let got = r.take(u64::from(len)).read_to_end(&mut v)?;
  if got as u64 != u64::from(len) {
    return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
  }
  Ok(v)
}

/// Consumes and discards exactly `len` bytes, or fails with `UnexpectedEof`.
pub fn skip_bytes<R: Read + ?Sized>(r: &mut R, len: u64) -> io::Result<()> {
  let skipped = io::copy(&mut r.take(len), &mut io::sink())?;
  if skipped != len {
    return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
  }
  Ok(())
}
