//! Zero-copy reading support for VelocyPack in Rust.
//!
//! VelocyPack is a compact, self-describing binary encoding of JSON-like
//! values. This crate implements the read side: a [`Slice`] is a view over
//! a byte buffer whose first byte is a VelocyPack type tag, and it answers
//! questions about the encoded value — its type, its byte footprint, its
//! scalar contents, the members of an array or object, and attribute
//! lookup — without copying the underlying bytes.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, [`SliceBuf`] implements the
//! `serde::Serialize` and `serde::Deserialize` traits.
//!
//! ## VelocyPack binary format
//!
//! Every value starts with a head byte that selects its type and layout;
//! all multi-byte integer fields are little-endian:
//!
//! ```text
//! 0x00        : none (absence of a value)
//! 0x01        : empty array
//! 0x02..=0x05 : array without index table, all members of equal size;
//!               total-length field of 1, 2, 4 or 8 bytes
//! 0x06..=0x09 : array with index table and member count; offset-entry
//!               widths 1, 2, 4 or 8 bytes
//! 0x0a        : empty object
//! 0x0b..=0x0e : object with index table sorted by key; widths 1, 2, 4, 8
//! 0x0f..=0x12 : object with unsorted index table; widths 1, 2, 4, 8
//! 0x13        : compact array: variable-length total size after the
//!               head, member count stored backwards at the tail
//! 0x14        : compact object, same frame as 0x13
//! 0x17        : illegal marker
//! 0x18        : null
//! 0x19, 0x1a  : false, true
//! 0x1b        : double, 8 bytes IEEE-754 binary64
//! 0x1c        : UTC date, int64 milliseconds since the epoch
//! 0x1d        : external (one platform pointer; never dereferenced)
//! 0x1e, 0x1f  : minKey, maxKey
//! 0x20..=0x27 : signed int of 1..8 payload bytes, two's complement
//! 0x28..=0x2f : unsigned int of 1..8 payload bytes
//! 0x30..=0x39 : small int 0..9
//! 0x3a..=0x3f : small int -6..-1
//! 0x40..=0xbe : UTF-8 string of (head - 0x40) bytes
//! 0xbf        : long UTF-8 string with 8-byte length field
//! 0xc0..=0xc7 : binary, length field of (head - 0xbf) bytes
//! 0xc8..=0xcf : positive packed BCD, length field of (head - 0xc7) bytes
//! 0xd0..=0xd7 : negative packed BCD, length field of (head - 0xcf) bytes
//! 0xf0..=0xff : custom types
//! ```
//!
//! Variable-length size fields carry 7 bits per byte with the top bit set
//! on every byte except the last. The member count of the compact forms is
//! stored in the same scheme but mirrored, and is decoded backwards from
//! the last byte of the value.
//!
//! ## Usage
//!
//! ### Scalars
//!
//! ```rust
//! use velocypack::{Slice, ValueType};
//!
//! let bytes = [0x28, 0x33];
//! let slice = Slice::new(&bytes);
//! assert_eq!(slice.value_type(), ValueType::UInt);
//! assert_eq!(slice.byte_size().unwrap(), 2);
//! assert_eq!(slice.uint().unwrap(), 0x33);
//! ```
//!
//! ### Objects and arrays
//!
//! ```rust
//! use velocypack::SliceBuf;
//!
//! // {"a": 1, "b": 2, "c": 3}, sorted object with 1-byte offsets
//! let object = SliceBuf::from_hex("0b0f03416131416232416333030609");
//! assert_eq!(object.len().unwrap(), 3);
//! let value = object.get("b").unwrap().unwrap();
//! assert_eq!(value.int().unwrap(), 2);
//! assert!(object.get("z").unwrap().is_none());
//! ```
//!
//! ### Iteration
//!
//! ```rust
//! use velocypack::SliceBuf;
//!
//! // ["a", "b"] as a compact array
//! let array = SliceBuf::from_hex("13074161416202");
//! let mut strings = Vec::new();
//! for value in array.array_iter().unwrap() {
//!     strings.push(value.unwrap().string().unwrap());
//! }
//! assert_eq!(strings, ["a", "b"]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod binary;
mod format;
mod slice;
mod translator;
mod util;
mod value_type;

#[cfg(feature = "serde")]
mod serde;

pub use self::{
    format::{CompactFormatter, FormatError, FormatResult, Formatter, JsonFormat, PrettyFormatter},
    slice::{ArrayIterator, ObjectIterator, Slice, SliceBuf, SliceError, SliceResult},
    translator::{AttributeTranslator, BasicAttributeTranslator},
    value_type::ValueType,
};
