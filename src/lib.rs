#![cfg_attr(docs_rs, feature(doc_cfg))]

//! A crate for reading and writing the PNG chunk container.
//!
//! This handles the *framing* of PNG data: the file signature, the sequence of
//! length-prefixed, type-tagged chunks, and the CRC-32 integrity code trailing
//! each chunk. The structural fields of the header are validated against the
//! format's rules, but the compressed image data is never inflated. Chunk
//! payloads other than the header and palette are kept as opaque bytes.
//!
//! ```
//! use pngframe::png::*;
//! # fn main() -> Result<(), pngframe::PngError> {
//! let mut png = PngContainer::new();
//! png.set_ihdr(IHDR::new(1, 1, 8, PngColorType::Y, false)?);
//! png.push_idat(IDAT::new(vec![0x78, 0x01]));
//! png.set_iend(IEND::default());
//!
//! let bytes = png.to_png_bytes()?;
//! let again = PngContainer::from_png_bytes(&bytes)?;
//! assert_eq!(png, again);
//! # Ok(())
//! # }
//! ```

pub mod ascii_array;
pub use ascii_array::*;

mod error;
pub use error::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod png;
