//! Scalar, vector and record summation.

use crate::model::record::NumericRecord;

/// Returns `(a + b) + c`.
pub fn sum_scalars(a: f32, b: f32, c: f32) -> f32 {
    a + b + c
}

/// Accumulates `in2` and `in3` into `target` over `[0, len)`.
///
/// Elements of `target` at or past `len` are left untouched.
///
/// # Panics
/// Panics when any of the three buffers holds fewer than `len` elements.
pub fn sum_vectors(target: &mut [f32], in2: &[f32], in3: &[f32], len: usize) {
    let lanes = target[..len]
        .iter_mut()
        .zip(&in2[..len])
        .zip(&in3[..len]);
    for ((out, b), c) in lanes {
        *out = *out + *b + *c;
    }
}

/// Non-mutating form of [`sum_vectors`]: returns a fresh buffer of `len`
/// elements and leaves all inputs untouched.
///
/// # Panics
/// Panics when any of the three buffers holds fewer than `len` elements.
pub fn summed_vectors(in1: &[f32], in2: &[f32], in3: &[f32], len: usize) -> Vec<f32> {
    let mut out = in1[..len].to_vec();
    sum_vectors(&mut out, in2, in3, len);
    out
}

/// Adds two records field by field.
///
/// `x` wraps on overflow (two's complement); `y` and `z` follow IEEE addition.
pub fn sum_structs(s1: &NumericRecord, s2: &NumericRecord) -> NumericRecord {
    NumericRecord {
        x: s1.x.wrapping_add(s2.x),
        y: s1.y + s2.y,
        z: s1.z + s2.z,
    }
}
