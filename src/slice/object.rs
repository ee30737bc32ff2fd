//! Object navigation.

use crate::slice::{check_overflow, index_entry_size, Slice, SliceBuf, SliceError, SliceResult};
use crate::translator::AttributeTranslator;
use crate::ValueType;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Sorted objects with at least this many entries are searched binarily;
/// below it a linear scan wins.
const SORTED_SEARCH_ENTRIES_THRESHOLD: usize = 4;

impl Slice {
    /// Extracts the key of the object member at the given index. The
    /// index follows the index table for indexed objects (sorted order
    /// for heads `0x0b..=0x0e`) and storage order for compact ones.
    ///
    /// Passing a translator resolves integer keys to their attribute
    /// names; `None` returns keys as they are stored.
    #[inline]
    pub fn key_at(
        &self,
        index: usize,
        translator: Option<&dyn AttributeTranslator>,
    ) -> SliceResult<Cow<'_, Slice>> {
        self.check_type(ValueType::Object)?;
        self.get_nth_key(index, translator)
    }

    /// Extracts the value of the object member at the given index.
    #[inline]
    pub fn value_at(&self, index: usize) -> SliceResult<&Slice> {
        self.check_type(ValueType::Object)?;
        self.get_nth_value(index)
    }

    /// Looks up the given attribute, returning `None` when the object
    /// does not contain it. Integer keys fail with
    /// `NeedsAttributeTranslator`; use [`Slice::get_with`] for objects
    /// with translated keys.
    #[inline]
    pub fn get<T: AsRef<str>>(&self, attribute: T) -> SliceResult<Option<&Slice>> {
        self.get_with(attribute, None)
    }

    /// Looks up the given attribute, resolving integer keys through the
    /// translator.
    pub fn get_with<T: AsRef<str>>(
        &self,
        attribute: T,
        translator: Option<&dyn AttributeTranslator>,
    ) -> SliceResult<Option<&Slice>> {
        self.check_type(ValueType::Object)?;
        let attribute = attribute.as_ref();

        let h = self.head();
        if h == 0x0a {
            // special case, empty object
            return Ok(None);
        }

        if h == 0x14 {
            // compact object, no index table
            return self.get_from_compact_object(attribute, translator);
        }

        let offset_size = index_entry_size(h);
        let end = check_overflow(self.read_integer_at(1, offset_size)?)?;

        // read the number of members and locate the index table
        let (n, ie_base) = if offset_size < 8 {
            let n = check_overflow(self.read_integer_at(1 + offset_size, offset_size)?)?;
            let base = end.checked_sub(n * offset_size).ok_or(SliceError::Internal)?;
            (n, base)
        } else {
            let count_pos = end.checked_sub(offset_size).ok_or(SliceError::Internal)?;
            let n = check_overflow(self.read_integer_at(count_pos, offset_size)?)?;
            let base = end
                .checked_sub(n * offset_size + offset_size)
                .ok_or(SliceError::Internal)?;
            (n, base)
        };

        if n == 1 {
            // just one attribute: there is no index table, compare
            // directly against the only key
            let key = self.slice_from(self.find_data_offset(h)?)?;
            if key.is_string() {
                if key.is_equal_string(attribute)? {
                    return Ok(Some(key.next()?));
                }
            } else if key.is_small_int() || key.is_uint() {
                let translator = translator.ok_or(SliceError::NeedsAttributeTranslator)?;
                if key.translate_unchecked(translator).is_equal_string(attribute)? {
                    return Ok(Some(key.next()?));
                }
            }
            // no match or invalid key type
            return Ok(None);
        }

        if n >= SORTED_SEARCH_ENTRIES_THRESHOLD && (0x0b..=0x0e).contains(&h) {
            return self.search_object_key_binary(attribute, ie_base, n, offset_size, translator);
        }

        self.search_object_key_linear(attribute, ie_base, offset_size, n, translator)
    }

    /// Returns true if the object contains the given attribute.
    #[inline]
    pub fn contains_key<T: AsRef<str>>(&self, attribute: T) -> SliceResult<bool> {
        Ok(self.get(attribute)?.is_some())
    }

    /// Gets an iterator over the members of an object.
    #[inline]
    pub fn object_iter(&self) -> SliceResult<ObjectIterator<'_>> {
        ObjectIterator::new(self)
    }

    /// Resolves this slice as an object key: strings pass through,
    /// integer keys are translated to their attribute names. Any other
    /// type fails with `InvalidKeyType`.
    pub fn make_key(
        &self,
        translator: Option<&dyn AttributeTranslator>,
    ) -> SliceResult<Cow<'_, Slice>> {
        if self.is_string() {
            return Ok(Cow::Borrowed(self));
        }
        if self.is_small_int() || self.is_uint() {
            let translator = translator.ok_or(SliceError::NeedsAttributeTranslator)?;
            return Ok(Cow::Owned(self.translate_unchecked(translator)));
        }
        Err(SliceError::InvalidKeyType)
    }

    /// Translates an integer key into its attribute name, encoded as a
    /// String slice.
    pub fn translate(&self, translator: &dyn AttributeTranslator) -> SliceResult<SliceBuf> {
        if !self.is_small_int() && !self.is_uint() {
            return Err(SliceError::InvalidKeyType);
        }
        Ok(self.translate_unchecked(translator))
    }
}

impl Slice {
    pub(crate) fn get_nth_key(
        &self,
        index: usize,
        translator: Option<&dyn AttributeTranslator>,
    ) -> SliceResult<Cow<'_, Slice>> {
        let offset = self.get_nth_offset(index)?;
        let key = self.slice_from(offset)?;
        match translator {
            Some(_) => key.make_key(translator),
            None => Ok(Cow::Borrowed(key)),
        }
    }

    pub(crate) fn get_nth_value(&self, index: usize) -> SliceResult<&Slice> {
        let offset = self.get_nth_offset(index)?;
        // the value sits directly behind the stored key
        self.slice_from(offset)?.next()
    }

    fn get_from_compact_object(
        &self,
        attribute: &str,
        translator: Option<&dyn AttributeTranslator>,
    ) -> SliceResult<Option<&Slice>> {
        let mut it = ObjectIterator::new(self)?;
        while it.is_valid() {
            let key = it.key_raw()?;
            if key.make_key(translator)?.is_equal_string(attribute)? {
                return Ok(Some(key.next()?));
            }
            it.advance()?;
        }
        // not found
        Ok(None)
    }

    /// Linear scan over the index table.
    fn search_object_key_linear(
        &self,
        attribute: &str,
        ie_base: usize,
        offset_size: usize,
        n: usize,
        translator: Option<&dyn AttributeTranslator>,
    ) -> SliceResult<Option<&Slice>> {
        for index in 0..n {
            let entry_pos = ie_base + index * offset_size;
            let key_offset = check_overflow(self.read_integer_at(entry_pos, offset_size)?)?;
            let key = self.slice_from(key_offset)?;

            if key.is_string() {
                if !key.is_equal_string(attribute)? {
                    continue;
                }
            } else if key.is_small_int() || key.is_uint() {
                let translator = translator.ok_or(SliceError::NeedsAttributeTranslator)?;
                if !key.translate_unchecked(translator).is_equal_string(attribute)? {
                    continue;
                }
            } else {
                // invalid key type
                return Ok(None);
            }

            // key is identical, return the value that follows it
            return Ok(Some(key.next()?));
        }

        // nothing found
        Ok(None)
    }

    /// Binary search over the sorted index table. Keys are ordered
    /// byte-lexicographically after translation, so string comparison on
    /// the raw bytes steers the bounds.
    fn search_object_key_binary(
        &self,
        attribute: &str,
        ie_base: usize,
        n: usize,
        offset_size: usize,
        translator: Option<&dyn AttributeTranslator>,
    ) -> SliceResult<Option<&Slice>> {
        debug_assert!(n > 0);

        let mut l = 0;
        let mut r = n - 1;
        let mut index = r / 2;

        loop {
            let entry_pos = ie_base + index * offset_size;
            let key_offset = check_overflow(self.read_integer_at(entry_pos, offset_size)?)?;
            let key = self.slice_from(key_offset)?;

            let res = if key.is_string() {
                key.compare_string(attribute)?
            } else if key.is_small_int() || key.is_uint() {
                let translator = translator.ok_or(SliceError::NeedsAttributeTranslator)?;
                key.translate_unchecked(translator).compare_string(attribute)?
            } else {
                // invalid key
                return Ok(None);
            };

            match res {
                Ordering::Equal => {
                    // found, return the value behind the key
                    let key_size = key.byte_size()?;
                    return Ok(Some(key.slice_from(key_size)?));
                }
                Ordering::Greater => {
                    if index == 0 {
                        return Ok(None);
                    }
                    r = index - 1;
                }
                Ordering::Less => {
                    l = index + 1;
                }
            }
            if r < l {
                return Ok(None);
            }

            // determine the new midpoint
            index = l + (r - l) / 2;
        }
    }

    /// The value of a UInt or non-negative SmallInt, 0 for anything else.
    fn uint_unchecked(&self) -> u64 {
        let h = self.head();
        if (0x28..=0x2f).contains(&h) {
            return self
                .read_integer_at(1, (h - 0x27) as usize)
                .unwrap_or(0);
        }
        if (0x30..=0x39).contains(&h) {
            return (h - 0x30) as u64;
        }
        0
    }

    /// Translates an integer key without type checks. An id unknown to
    /// the translator yields the none slice.
    pub(crate) fn translate_unchecked(&self, translator: &dyn AttributeTranslator) -> SliceBuf {
        let id = self.uint_unchecked();
        match translator.id_to_string(id) {
            Some(key) => SliceBuf::string(key),
            None => SliceBuf::none(),
        }
    }
}

/// A forward cursor over the members of an object, yielding successive
/// (key, value) pairs.
///
/// Stepping is sequential for every layout: the cursor starts at the
/// first stored key and advances past key and value per step. For sorted
/// objects this walks the members in storage order, which may differ from
/// the index-table order used by [`Slice::key_at`].
pub struct ObjectIterator<'a> {
    slice: &'a Slice,
    position: usize,
    size: usize,
    current: Option<&'a Slice>,
}

impl<'a> ObjectIterator<'a> {
    /// Creates an iterator at position 0 of the given object slice.
    pub fn new(slice: &'a Slice) -> SliceResult<Self> {
        slice.check_type(ValueType::Object)?;
        let size = slice.len()?;
        let mut current = None;
        if size > 0 {
            let h = slice.head();
            let first = if h == 0x14 {
                // compact object: the first key follows the length field
                slice.get_nth_offset(0)?
            } else {
                slice.find_data_offset(h)?
            };
            current = Some(slice.slice_from(first)?);
        }
        Ok(ObjectIterator {
            slice,
            position: 0,
            size,
            current,
        })
    }

    /// True while the cursor points at a member.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.position < self.size
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    /// The key at the current position, optionally translated.
    pub fn key(
        &self,
        translator: Option<&dyn AttributeTranslator>,
    ) -> SliceResult<Cow<'a, Slice>> {
        let key = self.key_raw()?;
        match translator {
            Some(_) => key.make_key(translator),
            None => Ok(Cow::Borrowed(key)),
        }
    }

    /// The value at the current position.
    pub fn value(&self) -> SliceResult<&'a Slice> {
        if self.position >= self.size {
            return Err(SliceError::IndexOutOfBounds {
                len: self.size,
                index: self.position,
            });
        }
        match self.current {
            Some(current) => current.next(),
            None => self.slice.get_nth_value(self.position),
        }
    }

    /// Moves the cursor to the next member.
    pub fn advance(&mut self) -> SliceResult<()> {
        self.position += 1;
        if self.position < self.size {
            if let Some(current) = self.current {
                // skip over key and value
                match current.next().and_then(|value| value.next()) {
                    Ok(next) => self.current = Some(next),
                    Err(e) => {
                        self.current = None;
                        return Err(e);
                    }
                }
            }
        } else {
            self.current = None;
        }
        Ok(())
    }

    /// The stored key at the current position, never translated.
    pub(crate) fn key_raw(&self) -> SliceResult<&'a Slice> {
        if self.position >= self.size {
            return Err(SliceError::IndexOutOfBounds {
                len: self.size,
                index: self.position,
            });
        }
        match self.current {
            Some(current) => Ok(current),
            None => {
                let offset = self.slice.get_nth_offset(self.position)?;
                self.slice.slice_from(offset)
            }
        }
    }
}

impl<'a> Iterator for ObjectIterator<'a> {
    type Item = SliceResult<(&'a Slice, &'a Slice)>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.is_valid() {
            return None;
        }
        let entry = match (self.key_raw(), self.value()) {
            (Ok(key), Ok(value)) => Ok((key, value)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        if let Err(e) = self.advance() {
            return Some(Err(e));
        }
        Some(entry)
    }
}
