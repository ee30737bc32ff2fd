//! Array navigation tests.

use velocypack::{Slice, SliceError, ValueType};

fn assert_members(slice: &Slice, expected: &[i64]) {
    assert_eq!(slice.len().unwrap(), expected.len());
    for (index, value) in expected.iter().enumerate() {
        assert_eq!(slice.at(index).unwrap().int().unwrap(), *value);
    }
    assert!(matches!(
        slice.at(expected.len()).unwrap_err(),
        SliceError::IndexOutOfBounds { .. }
    ));

    // indexed access and sequential stepping cover the same byte ranges
    if !expected.is_empty() {
        let mut current = slice.at(0).unwrap();
        for index in 1..expected.len() {
            current = current.next().unwrap();
            assert_eq!(current.as_bytes(), slice.at(index).unwrap().as_bytes());
        }
    }

    // the iterator agrees with indexed access
    let mut count = 0;
    for (index, value) in slice.array_iter().unwrap().enumerate() {
        assert_eq!(value.unwrap().int().unwrap(), expected[index]);
        count += 1;
    }
    assert_eq!(count, expected.len());
}

#[test]
fn test_array_empty() {
    let bytes = [0x01];
    let slice = Slice::new(&bytes);
    assert_eq!(slice.value_type(), ValueType::Array);
    assert!(slice.is_array());
    assert!(slice.is_empty_array());
    assert_eq!(slice.byte_size().unwrap(), 1);
    assert_eq!(slice.len().unwrap(), 0);
    assert!(slice.is_empty().unwrap());
    assert!(matches!(
        slice.at(0).unwrap_err(),
        SliceError::IndexOutOfBounds { .. }
    ));

    let mut it = slice.array_iter().unwrap();
    assert!(!it.is_valid());
    assert!(it.value().is_err());
}

#[test]
fn test_array_without_index_table() {
    // three SmallInts, 1-byte total-length field
    let bytes = [0x02, 0x05, 0x31, 0x32, 0x33];
    let slice = Slice::new(&bytes);
    assert_eq!(slice.value_type(), ValueType::Array);
    assert!(!slice.is_empty_array());
    assert_eq!(slice.byte_size().unwrap(), 5);
    assert_members(slice, &[1, 2, 3]);
}

#[test]
fn test_array_without_index_table_padded() {
    // same members, but the builder reserved more size-field bytes and
    // zero-padded up to the data
    let bytes = [0x02, 0x08, 0x00, 0x00, 0x00, 0x31, 0x32, 0x33];
    let slice = Slice::new(&bytes);
    assert_eq!(slice.byte_size().unwrap(), 8);
    assert_members(slice, &[1, 2, 3]);
}

#[test]
fn test_array_length_field_widths() {
    // 2-byte total-length field
    let bytes = [0x03, 0x06, 0x00, 0x31, 0x32, 0x33];
    let slice = Slice::new(&bytes);
    assert_eq!(slice.byte_size().unwrap(), 6);
    assert_members(slice, &[1, 2, 3]);

    // 4-byte total-length field
    let bytes = [0x04, 0x08, 0x00, 0x00, 0x00, 0x31, 0x32, 0x33];
    let slice = Slice::new(&bytes);
    assert_eq!(slice.byte_size().unwrap(), 8);
    assert_members(slice, &[1, 2, 3]);

    // multi-byte members
    let bytes = [0x02, 0x08, 0x28, 0x0a, 0x28, 0x14, 0x28, 0x1e];
    let slice = Slice::new(&bytes);
    assert_members(slice, &[10, 20, 30]);
}

#[test]
fn test_array_with_index_table() {
    let bytes = [0x06, 0x09, 0x03, 0x31, 0x32, 0x33, 0x03, 0x04, 0x05];
    let slice = Slice::new(&bytes);
    assert_eq!(slice.value_type(), ValueType::Array);
    assert_eq!(slice.byte_size().unwrap(), 9);
    assert_members(slice, &[1, 2, 3]);

    // 2-byte offsets
    let bytes = [
        0x07, 0x0e, 0x00, 0x03, 0x00, 0x31, 0x32, 0x33, 0x05, 0x00, 0x06, 0x00, 0x07, 0x00,
    ];
    let slice = Slice::new(&bytes);
    assert_eq!(slice.byte_size().unwrap(), 14);
    assert_members(slice, &[1, 2, 3]);
}

#[test]
fn test_array_with_index_table_single_member() {
    // a single member is stored without an index table lookup path
    let bytes = [0x06, 0x05, 0x01, 0x31, 0x03];
    let slice = Slice::new(&bytes);
    assert_members(slice, &[1]);
}

#[test]
fn test_array_compact() {
    let bytes = [0x13, 0x06, 0x31, 0x32, 0x33, 0x03];
    let slice = Slice::new(&bytes);
    assert_eq!(slice.value_type(), ValueType::Array);
    assert_eq!(slice.byte_size().unwrap(), 6);
    assert_members(slice, &[1, 2, 3]);
}

#[test]
fn test_array_compact_long() {
    // 200 members force multi-byte length and count fields
    let mut bytes = vec![0x13, 0xcd, 0x01];
    for _ in 0..200 {
        bytes.push(0x31);
    }
    // trailing count 200, stored mirrored
    bytes.push(0x01);
    bytes.push(0xc8);
    assert_eq!(bytes.len(), 205);

    let slice = Slice::new(&bytes);
    assert_eq!(slice.byte_size().unwrap(), 205);
    assert_eq!(slice.len().unwrap(), 200);
    assert_eq!(slice.at(0).unwrap().small_int().unwrap(), 1);
    assert_eq!(slice.at(199).unwrap().small_int().unwrap(), 1);
    assert!(slice.at(200).is_err());
}

#[test]
fn test_array_iterator_cursor() {
    let bytes = [0x02, 0x05, 0x31, 0x32, 0x33];
    let slice = Slice::new(&bytes);

    let mut it = slice.array_iter().unwrap();
    assert!(it.is_valid());
    assert!(it.is_first());
    assert_eq!(it.value().unwrap().small_int().unwrap(), 1);

    it.advance().unwrap();
    assert!(it.is_valid());
    assert!(!it.is_first());
    assert_eq!(it.value().unwrap().small_int().unwrap(), 2);

    it.advance().unwrap();
    assert_eq!(it.value().unwrap().small_int().unwrap(), 3);

    it.advance().unwrap();
    assert!(!it.is_valid());
    assert!(matches!(
        it.value().unwrap_err(),
        SliceError::IndexOutOfBounds { .. }
    ));
}

#[test]
fn test_array_type_mismatch() {
    let bytes = [0x28, 0x33];
    let slice = Slice::new(&bytes);
    assert!(matches!(
        slice.at(0).unwrap_err(),
        SliceError::UnexpectedType { .. }
    ));
    assert!(slice.array_iter().is_err());
    assert!(slice.len().is_err());
}

#[test]
fn test_nested_arrays() {
    // [[1, 2], []], outer compact
    let bytes = [0x13, 0x08, 0x02, 0x04, 0x31, 0x32, 0x01, 0x02];
    let slice = Slice::new(&bytes);
    assert_eq!(slice.byte_size().unwrap(), 8);

    let inner = slice.at(0).unwrap();
    assert_eq!(inner.value_type(), ValueType::Array);
    assert_eq!(inner.byte_size().unwrap(), 4);
    assert_eq!(inner.len().unwrap(), 2);
    assert_eq!(inner.at(1).unwrap().small_int().unwrap(), 2);

    let second = slice.at(1).unwrap();
    assert!(second.is_empty_array());
}
