//! Holds all the tools for reading and writing the PNG chunk container.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! The general format of a PNG is an 8 byte signature followed by "chunks".
//! Each chunk is a big-endian `u32` length, a 4 byte type tag, that many bytes
//! of data, and then a CRC-32 of the tag and data. There's four "critical"
//! chunk types, and they're the ones this module understands:
//! * **Header** ([`IHDR`]) - The image's dimensions, pixel format, and if the
//!   image is interlaced or not. Every field is checked against the rules of
//!   the format when it's decoded.
//! * **Palette** ([`PLTE`]) - Here this is always a single `RGB8` entry.
//! * **Image Data** ([`IDAT`]) - One or more chunks of compressed data. This
//!   module never decompresses them, it just keeps each chunk's bytes.
//! * **End** ([`IEND`]) - The last chunk. It has no data, so its CRC is always
//!   the same value, [`IEND_CRC`].
//!
//! Any other chunk type is skipped while decoding and isn't written back out.
//!
//! ## Decoding
//!
//! [`PngContainer::decode`] reads from any [`Read`] and gives you the filled
//! container, or the first error hit. A [`PngDecoder`] does the same thing but
//! lets you keep the partially filled container and see how far into the
//! stream it got.
//!
//! ```no_run
//! use pngframe::png::*;
//! # fn f() -> pngframe::PngResult<()> {
//! let file = std::fs::File::open("image.png")?;
//! let png = PngContainer::decode(std::io::BufReader::new(file))?;
//! println!("{:?}", png.ihdr());
//! # Ok(())
//! # }
//! ```
//!
//! ## Encoding
//!
//! [`PngContainer::encode`] writes the signature and then the chunks that are
//! present, always as header, palette, data, end. If the original stream had
//! its chunks in a different order (or had chunks this module skips), the
//! output bytes won't match the input bytes, but decoding the output gives an
//! equal container.

use core::fmt::{Debug, Display};
use std::io::{self, Read, Write};

use crate::*;

mod crc32;
pub use crc32::*;

mod chunk_ty;
pub use chunk_ty::*;

mod validate;
pub use validate::*;

mod ihdr;
pub use ihdr::*;

mod plte;
pub use plte::*;

mod idat;
pub use idat::*;

mod iend;
pub use iend::*;

mod container;
pub use container::*;

mod decoder;
pub use decoder::*;

mod encoder;
pub use encoder::*;
