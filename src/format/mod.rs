//! JSON output.

use crate::slice::{Slice, SliceError};
use crate::translator::AttributeTranslator;
use crate::ValueType;
pub use pretty::PrettyFormatter;
use std::error::Error;
use std::fmt;
use std::fmt::Display;

mod pretty;

/// Possible errors that can arise during JSON serialization.
#[derive(Debug)]
pub enum FormatError {
    FmtError(fmt::Error),
    SliceError(SliceError),
    /// A Double that has no JSON representation (NaN or infinite).
    InvalidNumber,
    /// A value type that has no JSON representation.
    UnsupportedType(ValueType),
}

impl Display for FormatError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FmtError(e) => write!(f, "{}", e),
            FormatError::SliceError(e) => write!(f, "{}", e),
            FormatError::InvalidNumber => write!(f, "number has no JSON representation"),
            FormatError::UnsupportedType(t) => {
                write!(f, "value of type {} has no JSON representation", t)
            }
        }
    }
}

impl Error for FormatError {}

pub type FormatResult<T> = std::result::Result<T, FormatError>;

impl From<fmt::Error> for FormatError {
    #[inline]
    fn from(e: fmt::Error) -> Self {
        FormatError::FmtError(e)
    }
}

impl From<SliceError> for FormatError {
    #[inline]
    fn from(e: SliceError) -> Self {
        FormatError::SliceError(e)
    }
}

/// Serializes slices as JSON. Scalar and container traversal is shared;
/// implementations control the layout through the four hooks at the
/// bottom of the trait, whose defaults produce the compact form.
pub trait Formatter {
    /// The translator used to resolve integer object keys. Without one,
    /// serializing an integer-keyed object fails.
    #[inline]
    fn translator(&self) -> Option<&dyn AttributeTranslator> {
        None
    }

    #[inline]
    fn format<W: fmt::Write>(&mut self, slice: &Slice, writer: &mut W) -> FormatResult<()> {
        self.write_slice(slice, writer)
    }

    fn write_slice<W: fmt::Write>(&mut self, slice: &Slice, writer: &mut W) -> FormatResult<()> {
        match slice.value_type() {
            ValueType::Null => {
                writer.write_str("null")?;
                Ok(())
            }
            ValueType::Bool => {
                writer.write_str(if slice.bool()? { "true" } else { "false" })?;
                Ok(())
            }
            ValueType::Int | ValueType::SmallInt => {
                write!(writer, "{}", slice.int()?)?;
                Ok(())
            }
            ValueType::UInt => {
                write!(writer, "{}", slice.uint()?)?;
                Ok(())
            }
            ValueType::Double => {
                let value = slice.double()?;
                if !value.is_finite() {
                    return Err(FormatError::InvalidNumber);
                }
                write!(writer, "{}", value)?;
                Ok(())
            }
            ValueType::String => write_escaped_str(slice.string()?, writer),
            ValueType::Array => self.write_array(slice, writer),
            ValueType::Object => self.write_object(slice, writer),
            other => Err(FormatError::UnsupportedType(other)),
        }
    }

    fn write_array<W: fmt::Write>(&mut self, slice: &Slice, writer: &mut W) -> FormatResult<()> {
        self.begin_container('[', writer)?;

        let mut it = slice.array_iter()?;
        let mut members = 0;
        while it.is_valid() {
            self.before_member(members == 0, writer)?;
            self.write_slice(it.value()?, writer)?;
            members += 1;
            it.advance()?;
        }

        self.end_container(']', members, writer)
    }

    fn write_object<W: fmt::Write>(&mut self, slice: &Slice, writer: &mut W) -> FormatResult<()> {
        self.begin_container('{', writer)?;

        let mut it = slice.object_iter()?;
        let mut members = 0;
        while it.is_valid() {
            // keys must resolve to strings, translating integer keys
            let key = it.key_raw()?.make_key(self.translator())?;
            let value = it.value()?;
            self.before_member(members == 0, writer)?;
            write_escaped_str(key.string()?, writer)?;
            self.after_key(writer)?;
            self.write_slice(value, writer)?;
            members += 1;
            it.advance()?;
        }

        self.end_container('}', members, writer)
    }

    /// Called before the members of a container; `open` is `[` or `{`.
    #[inline]
    fn begin_container<W: fmt::Write>(&mut self, open: char, writer: &mut W) -> FormatResult<()> {
        writer.write_char(open)?;
        Ok(())
    }

    /// Called after the members of a container, with how many were
    /// written.
    #[inline]
    fn end_container<W: fmt::Write>(
        &mut self,
        close: char,
        _members: usize,
        writer: &mut W,
    ) -> FormatResult<()> {
        writer.write_char(close)?;
        Ok(())
    }

    /// Called before every member of a container.
    #[inline]
    fn before_member<W: fmt::Write>(&mut self, first: bool, writer: &mut W) -> FormatResult<()> {
        if !first {
            writer.write_char(',')?;
        }
        Ok(())
    }

    /// Called between an object key and its value.
    #[inline]
    fn after_key<W: fmt::Write>(&mut self, writer: &mut W) -> FormatResult<()> {
        writer.write_char(':')?;
        Ok(())
    }
}

/// Writes `value` as a quoted JSON string. Unescaped runs are flushed in
/// one piece; the two-character sequences cover the bytes JSON names, any
/// other control character becomes a `\u` escape.
fn write_escaped_str<W: fmt::Write>(value: &str, writer: &mut W) -> FormatResult<()> {
    writer.write_char('"')?;

    let mut start = 0;
    for (i, byte) in value.bytes().enumerate() {
        let replacement = match byte {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            0x08 => "\\b",
            b'\t' => "\\t",
            b'\n' => "\\n",
            0x0c => "\\f",
            b'\r' => "\\r",
            b if b < 0x20 => "",
            _ => continue,
        };
        // escaped bytes are ASCII, so both sides of the cut are valid
        writer.write_str(&value[start..i])?;
        if replacement.is_empty() {
            write!(writer, "\\u{:04x}", byte)?;
        } else {
            writer.write_str(replacement)?;
        }
        start = i + 1;
    }

    writer.write_str(&value[start..])?;
    writer.write_char('"')?;
    Ok(())
}

pub struct CompactFormatter<'t> {
    translator: Option<&'t dyn AttributeTranslator>,
}

impl<'t> CompactFormatter<'t> {
    #[inline]
    pub const fn new() -> Self {
        Self { translator: None }
    }

    #[inline]
    pub const fn with_translator(translator: &'t dyn AttributeTranslator) -> Self {
        Self {
            translator: Some(translator),
        }
    }
}

impl Formatter for CompactFormatter<'_> {
    #[inline]
    fn translator(&self) -> Option<&dyn AttributeTranslator> {
        self.translator
    }
}

/// Lazily serializing `Display` adapter around a slice.
pub struct JsonFormat<'a> {
    slice: &'a Slice,
    pretty: bool,
    translator: Option<&'a dyn AttributeTranslator>,
}

impl<'a> JsonFormat<'a> {
    #[inline]
    pub const fn new(slice: &'a Slice, pretty: bool) -> Self {
        Self {
            slice,
            pretty,
            translator: None,
        }
    }

    #[inline]
    pub const fn with_translator(
        slice: &'a Slice,
        pretty: bool,
        translator: &'a dyn AttributeTranslator,
    ) -> Self {
        Self {
            slice,
            pretty,
            translator: Some(translator),
        }
    }
}

impl fmt::Display for JsonFormat<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = if self.pretty {
            let mut fmt = match self.translator {
                Some(t) => PrettyFormatter::with_translator(t),
                None => PrettyFormatter::new(),
            };
            fmt.format(self.slice, f)
        } else {
            let mut fmt = match self.translator {
                Some(t) => CompactFormatter::with_translator(t),
                None => CompactFormatter::new(),
            };
            fmt.format(self.slice, f)
        };
        result.map_err(|_| fmt::Error)
    }
}

impl Slice {
    /// Serializes the slice as JSON into the given writer.
    #[inline]
    pub fn format_to<W: fmt::Write>(&self, pretty: bool, writer: &mut W) -> FormatResult<()> {
        if pretty {
            PrettyFormatter::new().format(self, writer)
        } else {
            CompactFormatter::new().format(self, writer)
        }
    }

    /// The compact JSON representation of the slice.
    #[inline]
    pub fn json_string(&self) -> FormatResult<String> {
        let mut buf = String::new();
        self.format_to(false, &mut buf)?;
        Ok(buf)
    }

    /// The compact JSON representation of a slice containing translated
    /// integer keys.
    #[inline]
    pub fn json_string_with(&self, translator: &dyn AttributeTranslator) -> FormatResult<String> {
        let mut buf = String::new();
        CompactFormatter::with_translator(translator).format(self, &mut buf)?;
        Ok(buf)
    }
}
