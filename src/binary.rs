//! VelocyPack binary format tables.
//!
//! Everything in the format is keyed by the head byte of a value. The
//! tables below are consulted before any other decoding work: the value
//! type, the statically known byte lengths, the offset-entry width of the
//! indexed container forms and the smallest possible position of the first
//! member of a container.

use crate::ValueType;
use std::mem::size_of;

/// Byte size of an External value: head plus one platform pointer.
pub const EXTERNAL_LENGTH: usize = 1 + size_of::<*const u8>();

/// Byte size of a UTCDate value: head plus an 8-byte integer.
pub const UTC_DATE_LENGTH: usize = 1 + size_of::<i64>();

/// Heads `0x40..=0xbe` embed the string length; longer strings use head
/// `0xbf` with an 8-byte length field.
pub const MAX_SHORT_STRING_LENGTH: usize = 126;

const NO: ValueType = ValueType::None;
const IL: ValueType = ValueType::Illegal;
const NU: ValueType = ValueType::Null;
const BO: ValueType = ValueType::Bool;
const AR: ValueType = ValueType::Array;
const OB: ValueType = ValueType::Object;
const DB: ValueType = ValueType::Double;
const UD: ValueType = ValueType::UTCDate;
const EX: ValueType = ValueType::External;
const MI: ValueType = ValueType::MinKey;
const MA: ValueType = ValueType::MaxKey;
const IN: ValueType = ValueType::Int;
const UI: ValueType = ValueType::UInt;
const SI: ValueType = ValueType::SmallInt;
const ST: ValueType = ValueType::String;
const BI: ValueType = ValueType::Binary;
const BC: ValueType = ValueType::BCD;
const CU: ValueType = ValueType::Custom;

/// Head byte to value type. Heads `0x15`, `0x16` and `0xd8..=0xef` are
/// unassigned and map to `None`.
pub(crate) static VALUE_TYPES: [ValueType; 256] = [
    //   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    NO, AR, AR, AR, AR, AR, AR, AR, AR, AR, OB, OB, OB, OB, OB, OB, // 0x0_
    OB, OB, OB, AR, OB, NO, NO, IL, NU, BO, BO, DB, UD, EX, MI, MA, // 0x1_
    IN, IN, IN, IN, IN, IN, IN, IN, UI, UI, UI, UI, UI, UI, UI, UI, // 0x2_
    SI, SI, SI, SI, SI, SI, SI, SI, SI, SI, SI, SI, SI, SI, SI, SI, // 0x3_
    ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, // 0x4_
    ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, // 0x5_
    ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, // 0x6_
    ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, // 0x7_
    ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, // 0x8_
    ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, // 0x9_
    ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, // 0xa_
    ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, ST, // 0xb_
    BI, BI, BI, BI, BI, BI, BI, BI, BC, BC, BC, BC, BC, BC, BC, BC, // 0xc_
    BC, BC, BC, BC, BC, BC, BC, BC, NO, NO, NO, NO, NO, NO, NO, NO, // 0xd_
    NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, // 0xe_
    CU, CU, CU, CU, CU, CU, CU, CU, CU, CU, CU, CU, CU, CU, CU, CU, // 0xf_
];

/// Statically known total byte lengths, 0 where the length is dynamic.
/// Covers the one-byte types, Double, UInt, SmallInt, the short string
/// range (1 + embedded length) and the reserved fixed Custom heads
/// `0xf0..=0xf3`.
pub(crate) static FIXED_TYPE_LENGTHS: [u8; 256] = [
    //    1    2    3    4    5    6    7    8    9    A    B    C    D    E    F
      1,   1,   0,   0,   0,   0,   0,   0,   0,   0,   1,   0,   0,   0,   0,   0, // 0x0_
      0,   0,   0,   0,   0,   0,   0,   1,   1,   1,   1,   9,   0,   0,   1,   1, // 0x1_
      0,   0,   0,   0,   0,   0,   0,   0,   2,   3,   4,   5,   6,   7,   8,   9, // 0x2_
      1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1, // 0x3_
      1,   2,   3,   4,   5,   6,   7,   8,   9,  10,  11,  12,  13,  14,  15,  16, // 0x4_
     17,  18,  19,  20,  21,  22,  23,  24,  25,  26,  27,  28,  29,  30,  31,  32, // 0x5_
     33,  34,  35,  36,  37,  38,  39,  40,  41,  42,  43,  44,  45,  46,  47,  48, // 0x6_
     49,  50,  51,  52,  53,  54,  55,  56,  57,  58,  59,  60,  61,  62,  63,  64, // 0x7_
     65,  66,  67,  68,  69,  70,  71,  72,  73,  74,  75,  76,  77,  78,  79,  80, // 0x8_
     81,  82,  83,  84,  85,  86,  87,  88,  89,  90,  91,  92,  93,  94,  95,  96, // 0x9_
     97,  98,  99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, // 0xa_
    113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127,   0, // 0xb_
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0, // 0xc_
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0, // 0xd_
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0, // 0xe_
      2,   3,   5,   9,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0, // 0xf_
];

/// Width in bytes of one offset-table entry (and of the total-length
/// field) for the indexed container heads `0x02..=0x12`. Only consulted
/// for container heads.
pub(crate) static WIDTH_MAP: [u8; 32] = [
    0, // 0x00
    0, 1, 2, 4, 8, // 0x01..=0x05, arrays without count field
    1, 2, 4, 8, // 0x06..=0x09, arrays with count field
    0, 1, 2, 4, 8, // 0x0a..=0x0e, empty and sorted objects
    1, 2, 4, 8, // 0x0f..=0x12, unsorted objects
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Smallest byte position at which member data may begin, per container
/// head. The real data offset can be larger when the builder chose an
/// over-wide size field; see `Slice::find_data_offset`.
pub(crate) static FIRST_SUB_MAP: [u8; 32] = [
    0, // 0x00
    1, 2, 3, 5, 9, // 0x01..=0x05, arrays without count field
    3, 5, 9, 9, // 0x06..=0x09, arrays with count field
    1, 3, 5, 9, 9, // 0x0a..=0x0e, empty and sorted objects
    3, 5, 9, 9, // 0x0f..=0x12, unsorted objects
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];
