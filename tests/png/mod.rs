use pngframe::{png::*, PngError, PngErrorKind};
use walkdir::WalkDir;

fn png_fixtures() -> Vec<(String, Vec<u8>)> {
  WalkDir::new("tests/")
    .into_iter()
    .filter_map(|e| e.ok())
    .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
    .map(|e| (e.path().display().to_string(), std::fs::read(e.path()).unwrap()))
    .collect()
}

#[test]
fn test_PngContainer_decodes_fixtures() {
  super::init_tracing();
  let fixtures = png_fixtures();
  assert!(fixtures.len() >= 4, "fixtures missing: {fixtures:?}");
  for (path, bytes) in fixtures {
    println!("{path}");
    let png = PngContainer::from_png_bytes(&bytes).unwrap_or_else(|e| panic!("{path}: {e}"));
    assert!(png.is_complete(), "{path}");
    assert!(png.idat_count() > 0, "{path}");

    let out = png.to_png_bytes().unwrap();
    assert!(out.len() <= bytes.len(), "{path}");
    let again = PngContainer::from_png_bytes(&out).unwrap();
    assert_eq!(png, again, "{path}");
    assert_eq!(again.to_png_bytes().unwrap(), out, "{path}");
  }
}

#[test]
fn test_split_idat_fixture() {
  let bytes = std::fs::read("tests/png/fixtures/rgba_split_idat.png").unwrap();
  let png = PngContainer::decode(std::io::Cursor::new(&bytes)).unwrap();
  let ihdr = png.ihdr().unwrap();
  assert_eq!((ihdr.width(), ihdr.height()), (4, 4));
  assert_eq!(ihdr.color_type(), PngColorType::RGBA);
  // three separate chunks, never merged
  assert_eq!(png.idat_count(), 3);
  // gAMA and tEXt are skipped and not written back
  let out = png.to_png_bytes().unwrap();
  assert_eq!(bytes.len() - out.len(), (12 + 4) + (12 + 23));
}

#[test]
fn test_indexed_fixture_has_one_palette_entry() {
  let bytes = std::fs::read("tests/png/fixtures/indexed_one_entry.png").unwrap();
  let png = PngContainer::from_png_bytes(&bytes).unwrap();
  assert_eq!(png.ihdr().unwrap().color_type(), PngColorType::Index);
  assert_eq!(png.plte().unwrap().entry(), RGB8 { r: 250, g: 10, b: 90 });
  assert_eq!(png.to_png_bytes().unwrap(), bytes);
}

#[test]
fn test_stream_position_after_decode() {
  let bytes = std::fs::read("tests/png/fixtures/rgba_split_idat.png").unwrap();
  let mut cursor = std::io::Cursor::new(&bytes);
  let mut decoder = PngDecoder::new(&mut cursor);
  let mut png = PngContainer::new();
  decoder.decode_into(&mut png).unwrap();
  assert_eq!(decoder.bytes_read(), bytes.len() as u64);
  assert_eq!(cursor.position(), bytes.len() as u64);
}

#[test]
fn test_write_to_file_and_back() {
  let bytes = std::fs::read("tests/png/fixtures/grey_1x1.png").unwrap();
  let png = PngContainer::from_png_bytes(&bytes).unwrap();
  let path = std::env::temp_dir().join(format!("pngframe_{}.png", std::process::id()));
  png.encode(std::io::BufWriter::new(std::fs::File::create(&path).unwrap())).unwrap();
  let written = std::fs::read(&path).unwrap();
  std::fs::remove_file(&path).unwrap();
  assert_eq!(written, bytes);
}

#[test]
fn test_PngDecoder_no_panics() {
  // totally random data should never panic the decoder
  for _ in 0..50 {
    let v = super::rand_bytes(1024);
    let err = PngContainer::from_png_bytes(&v).unwrap_err();
    assert_eq!(err.kind(), PngErrorKind::Format);
  }
  // and neither should random data after a real signature
  for _ in 0..50 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(1024));
    match PngContainer::from_png_bytes(&v) {
      Ok(_) => (),
      Err(PngError::Io(_) | PngError::Format(_) | PngError::Validation(_) | PngError::Integrity(_)) => (),
    }
  }
}

#[test]
fn test_truncation_anywhere_is_an_error() {
  let bytes = std::fs::read("tests/png/fixtures/indexed_one_entry.png").unwrap();
  for end in 0..bytes.len() {
    let err = PngContainer::from_png_bytes(&bytes[..end]).unwrap_err();
    assert_eq!(err.kind(), PngErrorKind::Io, "end: {end}");
  }
}

#[test]
fn test_release_partial_container() {
  let mut bytes = std::fs::read("tests/png/fixtures/grey_1x1.png").unwrap();
  // break the IDAT crc
  let idat_crc = 8 + 25 + 8 + 10;
  bytes[idat_crc] ^= 0xFF;
  let mut png = PngContainer::new();
  let err = PngDecoder::new(bytes.as_slice()).decode_into(&mut png).unwrap_err();
  assert_eq!(err.kind(), PngErrorKind::Integrity);
  assert!(png.ihdr().is_some());
  release(Some(png));
  release(None);
}
