use super::*;

/// An owned PNG, held as its decoded chunks.
///
/// Every slot starts empty. Decoding fills the slots in as chunks arrive, and
/// image data chunks are kept in the order they were read. Encoding writes the
/// slots back out in the fixed order header, palette, data, end, no matter
/// what order the chunks were originally in.
///
/// All buffers are owned by the container. Dropping it (or passing it to
/// [`release`]) frees everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PngContainer {
  pub(crate) ihdr: Option<IHDR>,
  pub(crate) plte: Option<PLTE>,
  pub(crate) idat: Vec<IDAT>,
  pub(crate) iend: Option<IEND>,
}
impl PngContainer {
  /// A container with no chunks at all.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { ihdr: None, plte: None, idat: Vec::new(), iend: None }
  }

  /// Decodes a whole PNG stream.
  ///
  /// If you want to keep the partially filled container when decoding fails,
  /// use [`PngDecoder::decode_into`] instead.
  pub fn decode<R: Read>(r: R) -> PngResult<Self> {
    let mut png = Self::new();
    PngDecoder::new(r).decode_into(&mut png)?;
    Ok(png)
  }

  /// Decodes PNG bytes held in memory.
  #[inline]
  pub fn from_png_bytes(bytes: &[u8]) -> PngResult<Self> {
    Self::decode(bytes)
  }

  /// Encodes this container to a stream.
  #[inline]
  pub fn encode<W: Write>(&self, w: W) -> PngResult<()> {
    encode_png(self, w)
  }

  /// Encodes this container into a new byte vec.
  pub fn to_png_bytes(&self) -> PngResult<Vec<u8>> {
    let mut out = Vec::with_capacity(self.encoded_len());
    self.encode(&mut out)?;
    Ok(out)
  }

  /// How many bytes [`encode`](Self::encode) will write.
  #[must_use]
  pub fn encoded_len(&self) -> usize {
    const FRAME: usize = 4 + 4 + 4;
    let mut total = PNG_SIGNATURE.len();
    if self.ihdr.is_some() {
      total += FRAME + IHDR::LEN as usize;
    }
    if self.plte.is_some() {
      total += FRAME + PLTE::LEN as usize;
    }
    total += self.idat.iter().map(|idat| FRAME + idat.data.len()).sum::<usize>();
    if self.iend.is_some() {
      total += FRAME;
    }
    total
  }

  #[inline]
  #[must_use]
  pub const fn ihdr(&self) -> Option<&IHDR> {
    self.ihdr.as_ref()
  }
  #[inline]
  #[must_use]
  pub const fn plte(&self) -> Option<&PLTE> {
    self.plte.as_ref()
  }
  #[inline]
  #[must_use]
  pub const fn iend(&self) -> Option<&IEND> {
    self.iend.as_ref()
  }
  /// The image data chunks, in the order they were read or pushed.
  #[inline]
  #[must_use]
  pub fn idat_chunks(&self) -> &[IDAT] {
    &self.idat
  }
  #[inline]
  #[must_use]
  pub fn idat_count(&self) -> usize {
    self.idat.len()
  }
  /// Total payload bytes over all the image data chunks.
  #[must_use]
  pub fn idat_bytes_len(&self) -> usize {
    self.idat.iter().map(|idat| idat.data.len()).sum()
  }
  /// If both the header and the end chunk are present.
  #[inline]
  #[must_use]
  pub const fn is_complete(&self) -> bool {
    self.ihdr.is_some() && self.iend.is_some()
  }

  #[inline]
  pub fn set_ihdr(&mut self, ihdr: IHDR) {
    self.ihdr = Some(ihdr);
  }
  #[inline]
  pub fn set_plte(&mut self, plte: PLTE) {
    self.plte = Some(plte);
  }
  /// Appends an image data chunk after all the existing ones.
  #[inline]
  pub fn push_idat(&mut self, idat: IDAT) {
    self.idat.push(idat);
  }
  #[inline]
  pub fn set_iend(&mut self, iend: IEND) {
    self.iend = Some(iend);
  }
}

/// Releases a container and everything it owns.
///
/// The header, the palette, each data chunk's buffer and then the data chunk
/// list, and the end chunk are all freed here. Passing `None` does nothing.
pub fn release(png: Option<PngContainer>) {
  let Some(PngContainer { ihdr, plte, idat, iend }) = png else {
    return;
  };
  tracing::debug!(
    has_ihdr = ihdr.is_some(),
    has_plte = plte.is_some(),
    idat_count = idat.len(),
    has_iend = iend.is_some(),
    "releasing png container"
  );
  drop(ihdr);
  drop(plte);
  for chunk in idat {
    drop(chunk.data);
  }
  drop(iend);
}
