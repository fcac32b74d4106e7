//! Recursive top-down merge sort over an array of element addresses.
//!
//! The input is cloned once into private storage and the engine then merges
//! machine addresses pointing at successive elements of that clone, never
//! into the caller's buffer. Addresses are only dereferenced for
//! comparisons, so the clone stays untouched while the address table is
//! permuted. After the recursion the sorted address order is the sorted
//! record order, and one pass copies the clone's records back into the
//! caller's buffer. Unlike the indexed engine no second clone is needed at
//! finalization, the addresses already resolve to stable private storage.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::stable::network;

sort_impl!("merge_ptr_stable");

/// Sorts the slice. Stable.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Copy,
{
    merge_sort_ptr(v, |a, b| a.cmp(b));
}

/// Sorts the slice with a comparator function. Stable; a panicking
/// comparator unwinds out before the copy-back pass, leaving `v` untouched.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_ptr(v, compare);
}

fn merge_sort_ptr<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 || mem::size_of::<T>() == 0 {
        return;
    }

    // Private clone of the input. The address table points in here, never at
    // the caller's buffer, so permuting addresses cannot alias the records
    // being compared.
    let snapshot = v.to_vec();
    let base = snapshot.as_ptr();

    // Both address tables start out identity-initialized, for the same
    // role-swap reason as the indexed engine's two identity permutations.
    let mut ptrs: Vec<*const T> = (0..len)
        .map(|i| {
            // SAFETY: `i < len`, in bounds of the clone.
            unsafe { base.add(i) }
        })
        .collect();
    let mut merge_ptrs = ptrs.clone();

    let mut is_le = |a: &*const T, b: &*const T| {
        // SAFETY: Every entry of both tables points at a live element of
        // `snapshot` for the whole recursion.
        unsafe { compare(&**a, &**b) != Ordering::Greater }
    };

    // SAFETY: The two tables are disjoint and each hold `len` addresses.
    unsafe {
        merge_sort_rec(ptrs.as_mut_ptr(), merge_ptrs.as_mut_ptr(), len, &mut is_le);
    }

    // Copy back in sorted address order. Only reached if the comparator
    // never panicked; on panic the unwind leaves `v` untouched.
    for (slot, p) in v.iter_mut().zip(ptrs.iter()) {
        // SAFETY: `p` points at a live element of `snapshot`.
        *slot = unsafe { **p };
    }
}

/// Sorts the `len` addresses at `ptrs`, using the `len` addresses at
/// `merge_ptrs` as auxiliary space. On entry both tables hold the same set
/// of addresses for the range being sorted.
///
/// SAFETY: `ptrs` and `merge_ptrs` must each be valid for reads and writes
/// of `len` addresses and must not overlap.
unsafe fn merge_sort_rec<T, F>(
    ptrs: *mut *const T,
    merge_ptrs: *mut *const T,
    len: usize,
    is_le: &mut F,
) where
    F: FnMut(&*const T, &*const T) -> bool,
{
    if len <= 2 {
        if len == 2 {
            network::sort2(ptrs, is_le);
        }
        return;
    } else if len == 3 {
        network::sort3(ptrs, is_le);
        return;
    }

    let mid = len / 2;

    merge_sort_rec(merge_ptrs, ptrs, mid, is_le);
    merge_sort_rec(merge_ptrs.add(mid), ptrs.add(mid), len - mid, is_le);

    let mut lhs = merge_ptrs as *const *const T;
    let mut rhs = merge_ptrs.add(mid) as *const *const T;
    let lhs_end = rhs;
    let rhs_end = merge_ptrs.add(len) as *const *const T;
    let mut dst = ptrs;

    // Two-cursor merge moving one machine word per comparison.
    loop {
        let take_lhs = is_le(&*lhs, &*rhs);

        *dst = if take_lhs { *lhs } else { *rhs };
        dst = dst.add(1);
        lhs = lhs.add(take_lhs as usize);
        rhs = rhs.add(!take_lhs as usize);

        if lhs == lhs_end {
            ptr::copy_nonoverlapping(rhs, dst, rhs_end.offset_from(rhs) as usize);
            break;
        }
        if rhs == rhs_end {
            ptr::copy_nonoverlapping(lhs, dst, lhs_end.offset_from(lhs) as usize);
            break;
        }
    }
}
