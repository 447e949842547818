use super::*;

/// Writes a container out as PNG bytes.
///
/// Chunks go out in the order header, palette, each data chunk in sequence,
/// end. Empty slots are skipped. Each chunk's stored integrity code is written
/// as-is, so a decoded chunk replays its original code and a chunk built in
/// code writes the one computed when it was made.
#[tracing::instrument(level = "debug", skip_all, fields(idat_count = png.idat.len()))]
pub fn encode_png<W: Write>(png: &PngContainer, mut w: W) -> PngResult<()> {
  w.write_all(&PNG_SIGNATURE)?;
  if let Some(ihdr) = &png.ihdr {
    write_chunk(&mut w, PngChunkTy::IHDR, &ihdr.to_payload(), ihdr.crc)?;
  }
  if let Some(plte) = &png.plte {
    write_chunk(&mut w, PngChunkTy::PLTE, &plte.to_payload(), plte.crc)?;
  }
  for idat in &png.idat {
    write_chunk(&mut w, PngChunkTy::IDAT, &idat.data, idat.crc)?;
  }
  if let Some(iend) = &png.iend {
    write_chunk(&mut w, PngChunkTy::IEND, &[], iend.crc())?;
  }
  w.flush()?;
  Ok(())
}

/// Writes one chunk: length, tag, data, integrity code.
pub fn write_chunk<W: Write + ?Sized>(
  w: &mut W, ty: PngChunkTy, data: &[u8], crc: [u8; 4],
) -> PngResult<()> {
  let len = u32::try_from(data.len())
    .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "chunk data is over 4GiB"))?;
  tracing::trace!(?ty, len, "writing chunk");
  w.write_all(&len.to_be_bytes())?;
  w.write_all(ty.as_bytes())?;
  w.write_all(data)?;
  w.write_all(&crc)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_write_chunk_framing() {
    let mut out = Vec::new();
    write_chunk(&mut out, PngChunkTy::PLTE, &[1, 2, 3], [9, 8, 7, 6]).unwrap();
    assert_eq!(out, b"\0\0\0\x03PLTE\x01\x02\x03\x09\x08\x07\x06");
  }

  #[test]
  fn test_empty_container_is_just_signature() {
    let mut out = Vec::new();
    encode_png(&PngContainer::new(), &mut out).unwrap();
    assert_eq!(out, PNG_SIGNATURE);
  }
}
