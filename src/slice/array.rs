//! Array navigation.

use crate::slice::{Slice, SliceError, SliceResult};
use crate::ValueType;

impl Slice {
    /// Extracts the array member at the given index.
    #[inline]
    pub fn at(&self, index: usize) -> SliceResult<&Slice> {
        self.check_type(ValueType::Array)?;
        let offset = self.get_nth_offset(index)?;
        self.slice_from(offset)
    }

    /// Gets an iterator over the members of an array.
    #[inline]
    pub fn array_iter(&self) -> SliceResult<ArrayIterator<'_>> {
        ArrayIterator::new(self)
    }
}

/// A forward cursor over the members of an array. Stepping is sequential:
/// the cursor advances by the byte size of the current member, which works
/// uniformly for all array layouts since members are stored contiguously.
pub struct ArrayIterator<'a> {
    slice: &'a Slice,
    position: usize,
    size: usize,
    current: Option<&'a Slice>,
}

impl<'a> ArrayIterator<'a> {
    /// Creates an iterator at position 0 of the given array slice.
    pub fn new(slice: &'a Slice) -> SliceResult<Self> {
        slice.check_type(ValueType::Array)?;
        let size = slice.len()?;
        let current = if size > 0 { Some(slice.at(0)?) } else { None };
        Ok(ArrayIterator {
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

    /// The member at the current position.
    pub fn value(&self) -> SliceResult<&'a Slice> {
        if self.position >= self.size {
            return Err(SliceError::IndexOutOfBounds {
                len: self.size,
                index: self.position,
            });
        }
        match self.current {
            Some(current) => Ok(current),
            None => self.slice.at(self.position),
        }
    }

    /// Moves the cursor to the next member.
    pub fn advance(&mut self) -> SliceResult<()> {
        self.position += 1;
        if self.position < self.size {
            if let Some(current) = self.current {
                match current.next() {
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
}

impl<'a> Iterator for ArrayIterator<'a> {
    type Item = SliceResult<&'a Slice>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.is_valid() {
            return None;
        }
        let value = self.value();
        if let Err(e) = self.advance() {
            return Some(Err(e));
        }
        Some(value)
    }
}
