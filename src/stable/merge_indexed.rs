//! Recursive top-down merge sort over a u32 index permutation.
//!
//! The records themselves never move during the O(n log n) merge work, only
//! 4 byte indices into the live buffer do. Once the permutation is fully
//! sorted, a single gather pass clones the buffer and writes each slot from
//! the clone at its sorted index. The clone is required: the indices refer
//! to the unmodified buffer, so applying the permutation in place would
//! overwrite records before they are read.
//!
//! Moving indices instead of records is a net win once records are clearly
//! wider than the index, paid for with the extra O(n) clone and gather.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::stable::network;

sort_impl!("merge_indexed_stable");

/// The index permutation is fixed at 32 bits, wide enough for any practical
/// in-memory buffer while halving the auxiliary footprint of 64 bit units.
const MAX_LEN: usize = u32::MAX as usize;

/// Sorts the slice. Stable, *O*(*n* \* log(*n*)) comparisons, records move
/// exactly twice (into the gather clone and back) no matter how large they
/// are.
///
/// # Panics
///
/// Panics if `v.len() > u32::MAX as usize`.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Copy,
{
    merge_sort_indexed(v, |a, b| a.cmp(b));
}

/// Sorts the slice with a comparator function. See [`sort`].
///
/// A panicking comparator unwinds out before the gather pass, leaving `v`
/// exactly as it was.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_indexed(v, compare);
}

fn merge_sort_indexed<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 || mem::size_of::<T>() == 0 {
        return;
    }

    assert!(
        len <= MAX_LEN,
        "merge_indexed is limited to u32::MAX elements"
    );

    // Both index arrays start as the identity permutation. The recursion
    // swaps their source and scratch roles at every level, and ranges of
    // three or fewer elements are sorted in whichever array is the source at
    // that depth, so unsorted ranges must already hold identity values in
    // both.
    let mut index: Vec<u32> = (0..len as u32).collect();
    let mut merge_index = index.clone();

    let base = v.as_ptr();
    let mut is_le = |a: &u32, b: &u32| {
        // SAFETY: Both arrays stay permutations of 0..len throughout, so
        // every index resolves to a live record.
        unsafe { compare(&*base.add(*a as usize), &*base.add(*b as usize)) != Ordering::Greater }
    };

    // SAFETY: The two arrays are disjoint and each hold `len` indices.
    unsafe {
        merge_sort_rec(index.as_mut_ptr(), merge_index.as_mut_ptr(), len, &mut is_le);
    }

    // Gather pass: clone once, then write every slot from the clone at its
    // sorted index. Reaching this point means the comparator never panicked;
    // if it did, the unwind left `v` untouched.
    let snapshot = v.to_vec();
    for (slot, idx) in v.iter_mut().zip(index.iter()) {
        *slot = snapshot[*idx as usize];
    }
}

/// Sorts the `len` indices at `index`, using the `len` indices at
/// `merge_index` as auxiliary space. On entry both arrays hold the same
/// permutation of the range being sorted.
///
/// SAFETY: `index` and `merge_index` must each be valid for reads and writes
/// of `len` indices and must not overlap.
unsafe fn merge_sort_rec<F>(index: *mut u32, merge_index: *mut u32, len: usize, is_le: &mut F)
where
    F: FnMut(&u32, &u32) -> bool,
{
    if len <= 2 {
        if len == 2 {
            network::sort2(index, is_le);
        }
        return;
    } else if len == 3 {
        network::sort3(index, is_le);
        return;
    }

    let mid = len / 2;

    merge_sort_rec(merge_index, index, mid, is_le);
    merge_sort_rec(merge_index.add(mid), index.add(mid), len - mid, is_le);

    let mut lhs = merge_index as *const u32;
    let mut rhs = merge_index.add(mid) as *const u32;
    let lhs_end = rhs;
    let rhs_end = merge_index.add(len) as *const u32;
    let mut dst = index;

    // Same two-cursor merge as the direct engine, but the unit copied per
    // comparison is a 4 byte index rather than a whole record.
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
