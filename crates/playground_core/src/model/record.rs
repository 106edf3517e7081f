//! ABI-stable numeric record.
//!
//! # Responsibility
//! - Define the `#[repr(C)]` aggregate passed by pointer to `sum_structs`
//!   and returned by value from it.
//!
//! # Invariants
//! - Field order is `x`, `y`, `z`; widths are 4, 4 and 8 bytes.
//! - Size is 16 bytes; alignment is that of `f64` (8 on 64-bit targets,
//!   4 on i686 Linux), matching the C compiler for the same target.
//! - The layout matches the C declaration
//!   `struct { int x; float y; double z; }`.

use serde::{Deserialize, Serialize};
use std::mem::{align_of, offset_of, size_of};

/// Fixed-layout record summed field-wise by `sum_structs`.
///
/// Any change to this type is an ABI break for every shared module built
/// against it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRecord {
    /// C `int`.
    pub x: i32,
    /// C `float`.
    pub y: f32,
    /// C `double`.
    pub z: f64,
}

impl NumericRecord {
    pub const fn new(x: i32, y: f32, z: f64) -> Self {
        Self { x, y, z }
    }
}

pub const NUMERIC_RECORD_SIZE: usize = 16;
pub const NUMERIC_RECORD_ALIGN: usize = align_of::<f64>();

const _: () = {
    assert!(size_of::<NumericRecord>() == NUMERIC_RECORD_SIZE);
    assert!(align_of::<NumericRecord>() == NUMERIC_RECORD_ALIGN);
    assert!(offset_of!(NumericRecord, x) == 0);
    assert!(offset_of!(NumericRecord, y) == 4);
    assert!(offset_of!(NumericRecord, z) == 8);
    assert!(size_of::<i32>() == size_of::<std::ffi::c_int>());
    assert!(size_of::<f32>() == size_of::<std::ffi::c_float>());
    assert!(size_of::<f64>() == size_of::<std::ffi::c_double>());
};

#[cfg(test)]
mod tests {
    use super::NumericRecord;

    #[test]
    fn default_record_is_zeroed() {
        let record = NumericRecord::default();
        assert_eq!(record, NumericRecord::new(0, 0.0, 0.0));
    }

    #[test]
    fn record_bytes_follow_c_field_order() {
        let record = NumericRecord::new(7, 1.5, -2.0);
        // SAFETY: `NumericRecord` is `repr(C)` with no padding (4 + 4 + 8).
        let bytes: [u8; 16] = unsafe { std::mem::transmute(record) };
        assert_eq!(&bytes[0..4], &7_i32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &1.5_f32.to_ne_bytes());
        assert_eq!(&bytes[8..16], &(-2.0_f64).to_ne_bytes());
    }
}
