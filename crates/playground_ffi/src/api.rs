//! C ABI exports resolved at run time by name.
//!
//! # Responsibility
//! - Export `sum_scalars`, `sum_vectors` and `sum_structs` unmangled with
//!   the C calling convention.
//! - Match the core kernels bit-for-bit (same evaluation order).
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary for inputs
//!   that meet the pointer/length contract.
//! - Records cross the boundary as `binary_playground_core::NumericRecord`.

use binary_playground_core::{kernels, NumericRecord};
use log::warn;

/// `float sum_scalars(float a, float b, float c)`
///
/// # FFI contract
/// - Pure, never fails.
#[no_mangle]
pub extern "C" fn sum_scalars(a: f32, b: f32, c: f32) -> f32 {
    kernels::sum_scalars(a, b, c)
}

/// `void sum_vectors(float *v1, const float *v2, const float *v3, size_t len)`
///
/// Writes `v1[i] + v2[i] + v3[i]` into `v1[i]` for `i < len`.
///
/// # FFI contract
/// - A null pointer with non-zero `len` leaves `v1` untouched.
///
/// # Safety
/// Each non-null pointer must be valid for `len` elements and `v1` must be
/// writable. The buffers may alias each other, as in C without `restrict`.
#[no_mangle]
pub unsafe extern "C" fn sum_vectors(v1: *mut f32, v2: *const f32, v3: *const f32, len: usize) {
    if len == 0 {
        return;
    }
    if v1.is_null() || v2.is_null() || v3.is_null() {
        warn!("event=ffi_call module=ffi status=rejected call=sum_vectors reason=null_pointer");
        return;
    }
    // Raw element access only: slice borrows would be unsound for aliased buffers.
    for i in 0..len {
        *v1.add(i) = *v1.add(i) + *v2.add(i) + *v3.add(i);
    }
}

/// `MyStruct sum_structs(const MyStruct *s1, const MyStruct *s2)`
///
/// # FFI contract
/// - A null argument yields a zeroed record.
///
/// # Safety
/// Each non-null pointer must reference a live, aligned `NumericRecord`.
#[no_mangle]
pub unsafe extern "C" fn sum_structs(
    s1: *const NumericRecord,
    s2: *const NumericRecord,
) -> NumericRecord {
    match (s1.as_ref(), s2.as_ref()) {
        (Some(s1), Some(s2)) => kernels::sum_structs(s1, s2),
        _ => {
            warn!("event=ffi_call module=ffi status=rejected call=sum_structs reason=null_pointer");
            NumericRecord::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{sum_scalars, sum_structs, sum_vectors};
    use binary_playground_core::module::{
        ModuleSymbols, ResolvedSymbol, ScalarSumFn, StructSumFn, VectorSumFn,
    };
    use binary_playground_core::{BackendKind, Dispatcher, NumericRecord, Operation};
    use std::ptr;

    #[test]
    fn sum_scalars_matches_core_kernel() {
        assert_eq!(sum_scalars(1.0, 2.0, 3.0), 6.0);
    }

    #[test]
    fn sum_vectors_writes_into_first_pointer() {
        let mut v1 = [1.0_f32, 2.0, 3.0];
        let v2 = [0.5_f32, 0.5, 0.5];
        let v3 = [0.1_f32, 0.2, 0.3];
        unsafe { sum_vectors(v1.as_mut_ptr(), v2.as_ptr(), v3.as_ptr(), v1.len()) };

        let mut expected = [1.0_f32, 2.0, 3.0];
        binary_playground_core::sum_vectors(&mut expected, &v2, &v3, 3);
        assert_eq!(v1, expected);
    }

    #[test]
    fn sum_vectors_accepts_aliased_buffers() {
        let mut v = [1.0_f32, 2.0, 3.0];
        let p = v.as_mut_ptr();
        unsafe { sum_vectors(p, p, p, 3) };
        assert_eq!(v, [3.0, 6.0, 9.0]);
    }

    #[test]
    fn sum_vectors_ignores_null_pointers() {
        let mut v1 = [1.0_f32, 2.0];
        let v2 = [1.0_f32, 1.0];
        unsafe { sum_vectors(v1.as_mut_ptr(), v2.as_ptr(), ptr::null(), 2) };
        assert_eq!(v1, [1.0, 2.0]);
    }

    #[test]
    fn sum_structs_handles_valid_and_null_inputs() {
        let s1 = NumericRecord::new(1, 2.5, 3.25);
        let s2 = NumericRecord::new(4, 1.5, 0.75);
        assert_eq!(
            unsafe { sum_structs(&s1, &s2) },
            NumericRecord::new(5, 4.0, 4.0)
        );
        assert_eq!(
            unsafe { sum_structs(&s1, ptr::null()) },
            NumericRecord::default()
        );
    }

    #[test]
    fn exports_satisfy_loader_signatures() {
        let symbols = ModuleSymbols {
            scalars: Some(ResolvedSymbol::from_static(sum_scalars as ScalarSumFn)),
            vectors: Some(ResolvedSymbol::from_static(sum_vectors as VectorSumFn)),
            structs: Some(ResolvedSymbol::from_static(sum_structs as StructSumFn)),
        };
        let dispatcher = Dispatcher::new(true, symbols);
        for operation in Operation::ALL {
            assert_eq!(dispatcher.backend_for(operation), BackendKind::Module);
        }

        let mut v1 = [1.0_f32, 2.0, 3.0];
        dispatcher.sum_vectors(&mut v1, &[0.5, 0.5, 0.5], &[0.1, 0.2, 0.3], 3);
        let mut local = [1.0_f32, 2.0, 3.0];
        binary_playground_core::sum_vectors(&mut local, &[0.5, 0.5, 0.5], &[0.1, 0.2, 0.3], 3);
        assert_eq!(v1, local);
        assert_eq!(dispatcher.sum_scalars(1.0, 2.0, 3.0), 6.0);
    }
}
