use super::*;

/// Where a [`PngDecoder`] is in the stream.
///
/// Decoding goes from the signature to a loop of chunk headers, each
/// followed by the step for that kind of chunk, until the end chunk puts the
/// decoder in `Done`. Any error puts it in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeState {
  /// Nothing has been read yet.
  ExpectSignature,
  /// The next thing in the stream is a chunk's length and tag.
  ExpectChunkHeader,
  /// An `IHDR` chunk with this declared length is next.
  DecodeHeader(u32),
  /// A `PLTE` chunk with this declared length is next.
  DecodePalette(u32),
  /// An `IDAT` chunk with this declared length is next.
  DecodeData(u32),
  /// An `IEND` chunk with this declared length is next.
  DecodeEnd(u32),
  /// A chunk this codec doesn't know is next, and will be skipped.
  SkipUnknown(PngChunkTy, u32),
  /// The end chunk was decoded.
  Done,
  /// Decoding hit an error and stopped.
  Failed,
}

/// Decodes a PNG byte stream into a [`PngContainer`], one chunk at a time.
///
/// Every chunk this codec understands has its integrity code checked. Chunks
/// it doesn't understand are skipped over entirely (data and integrity code)
/// so that the next chunk header is read from the right place.
#[derive(Debug)]
pub struct PngDecoder<R> {
  r: R,
  state: DecodeState,
  bytes_read: u64,
}
impl<R: Read> PngDecoder<R> {
  /// Wraps a reader. Nothing is read until you decode.
  #[inline]
  #[must_use]
  pub const fn new(r: R) -> Self {
    Self { r, state: DecodeState::ExpectSignature, bytes_read: 0 }
  }

  #[inline]
  #[must_use]
  pub const fn state(&self) -> DecodeState {
    self.state
  }

  /// How many bytes have been consumed from the reader so far.
  #[inline]
  #[must_use]
  pub const fn bytes_read(&self) -> u64 {
    self.bytes_read
  }

  /// Gives back the reader, positioned just after the last byte consumed.
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> R {
    self.r
  }

  /// Decodes chunks into `png` until the end chunk.
  ///
  /// On error the container keeps whatever chunks were decoded before the
  /// failure, and the decoder is left in [`DecodeState::Failed`]. Calling
  /// this again after it's finished does nothing (after success) or errors
  /// (after failure).
  #[tracing::instrument(level = "debug", skip_all)]
  pub fn decode_into(&mut self, png: &mut PngContainer) -> PngResult<()> {
    loop {
      match self.state {
        DecodeState::Done => return Ok(()),
        DecodeState::Failed => {
          return Err(PngError::Io(io::Error::other("this decoder already failed")));
        }
        _ => (),
      }
      if let Err(err) = self.step(png) {
        tracing::warn!(%err, bytes_read = self.bytes_read, "png decode failed");
        self.state = DecodeState::Failed;
        return Err(err);
      }
    }
  }

  fn step(&mut self, png: &mut PngContainer) -> PngResult<()> {
    let state = self.state;
    self.state = match state {
      DecodeState::ExpectSignature => {
        let found: [u8; 8] = self.read_array()?;
        if ChunkKind::classify(&found) != ChunkKind::FileSignature {
          return Err(FormatError::BadSignature { found }.into());
        }
        DecodeState::ExpectChunkHeader
      }
      DecodeState::ExpectChunkHeader => {
        let len = u32_be(self.read_array()?);
        let ty = PngChunkTy::from(self.read_array::<4>()?);
        tracing::trace!(?ty, len, "chunk header");
        match ChunkKind::of(ty) {
          ChunkKind::Header => DecodeState::DecodeHeader(len),
          ChunkKind::Palette => DecodeState::DecodePalette(len),
          ChunkKind::Data => DecodeState::DecodeData(len),
          ChunkKind::End => DecodeState::DecodeEnd(len),
          ChunkKind::Unknown | ChunkKind::FileSignature => DecodeState::SkipUnknown(ty, len),
        }
      }
      DecodeState::DecodeHeader(len) => {
        expect_len(PngChunkTy::IHDR, IHDR::LEN, len)?;
        let payload: [u8; 13] = self.read_array()?;
        let crc = self.read_checked_crc(PngChunkTy::IHDR, &payload)?;
        png.ihdr = Some(IHDR::from_payload(payload, crc)?);
        DecodeState::ExpectChunkHeader
      }
      DecodeState::DecodePalette(len) => {
        expect_len(PngChunkTy::PLTE, PLTE::LEN, len)?;
        let payload: [u8; 3] = self.read_array()?;
        let crc = self.read_checked_crc(PngChunkTy::PLTE, &payload)?;
        png.plte = Some(PLTE::from_payload(payload, crc));
        DecodeState::ExpectChunkHeader
      }
      DecodeState::DecodeData(len) => {
        let data = read_byte_vec(&mut self.r, len)?;
        self.bytes_read += u64::from(len);
        let crc = self.read_checked_crc(PngChunkTy::IDAT, &data)?;
        png.idat.push(IDAT { data, crc });
        DecodeState::ExpectChunkHeader
      }
      DecodeState::DecodeEnd(len) => {
        expect_len(PngChunkTy::IEND, IEND::LEN, len)?;
        let found: [u8; 4] = self.read_array()?;
        if found != IEND_CRC {
          return Err(IntegrityError::BadEndCode { found }.into());
        }
        png.iend = Some(IEND::default());
        DecodeState::Done
      }
      DecodeState::SkipUnknown(ty, len) => {
        tracing::debug!(?ty, len, "skipping unknown chunk");
        let skip = u64::from(len) + 4;
        skip_bytes(&mut self.r, skip)?;
        self.bytes_read += skip;
        DecodeState::ExpectChunkHeader
      }
      DecodeState::Done | DecodeState::Failed => state,
    };
    Ok(())
  }

  fn read_array<const N: usize>(&mut self) -> io::Result<[u8; N]> {
    let a = read_byte_array(&mut self.r)?;
    self.bytes_read += N as u64;
    Ok(a)
  }

  /// Reads the trailing integrity code and checks it against the chunk.
  fn read_checked_crc(&mut self, ty: PngChunkTy, data: &[u8]) -> PngResult<[u8; 4]> {
    let crc: [u8; 4] = self.read_array()?;
    let declared = u32_be(crc);
    let actual = chunk_crc(ty.as_bytes(), data);
    if declared != actual {
      return Err(IntegrityError::CrcMismatch { ty, declared, actual }.into());
    }
    Ok(crc)
  }
}

fn expect_len(ty: PngChunkTy, expected: u32, found: u32) -> Result<(), FormatError> {
  if expected == found {
    Ok(())
  } else {
    Err(FormatError::BadChunkLength { ty, expected, found })
  }
}
