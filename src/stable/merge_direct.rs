//! Recursive top-down merge sort that physically copies whole records
//! between the caller's buffer and a same-sized auxiliary buffer.
//!
//! The two buffers swap the source and scratch roles at every recursion
//! level, so a merged sub-result is never copied back into place: each merge
//! writes directly into the region that is the source at the parent level,
//! and the final whole-range merge always lands in the caller's buffer.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::stable::network;

sort_impl!("merge_direct_stable");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and
/// *O*(*n* \* log(*n*)) worst-case. It allocates one auxiliary buffer the
/// size of `v`, released before returning on every path, including when a
/// comparison panics.
///
/// `T: Copy` is required because records move as plain bit copies; types
/// with ownership-bearing fields cannot be sorted by this engine.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Copy,
{
    merge_sort(v, |a, b| a.cmp(b));
}

/// Sorts the slice with a comparator function.
///
/// The comparator must define a total order for the guarantees to hold. If
/// it does not, the output is an unspecified sequence of bitwise copies of
/// input records; no out-of-bounds access occurs. Elements comparing equal
/// keep their input order. Any state the comparison needs can be captured
/// by the closure, the engine threads it through untouched.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, compare);
}

fn merge_sort<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 || mem::size_of::<T>() == 0 {
        // Nothing to move for n <= 1 or zero-sized records, and no
        // comparator calls either.
        return;
    }

    // The scratch buffer starts out as a clone of the input, the recursion
    // then ping-pongs between the two regions. A comparator panic unwinds
    // through here and drops the Vec, the caller's buffer is left holding
    // valid bitwise copies of input records.
    let mut scratch = Vec::with_capacity(len);

    // SAFETY: `scratch` has capacity for `len` elements and `T: Copy`, so
    // bitwise duplication of the input is sound.
    unsafe {
        ptr::copy_nonoverlapping(v.as_ptr(), scratch.as_mut_ptr(), len);
        scratch.set_len(len);
    }

    let mut is_le = |a: &T, b: &T| compare(a, b) != Ordering::Greater;

    // SAFETY: `v` and `scratch` are disjoint regions of `len` initialized
    // elements each.
    unsafe {
        merge_sort_rec(v.as_mut_ptr(), scratch.as_mut_ptr(), len, &mut is_le);
    }
}

/// Sorts the `len` records at `v`, using the `len` records at `scratch` as
/// auxiliary space. On entry both regions hold the same multiset of records.
///
/// SAFETY: `v` and `scratch` must each be valid for reads and writes of
/// `len` initialized records and must not overlap.
unsafe fn merge_sort_rec<T, F>(v: *mut T, scratch: *mut T, len: usize, is_le: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if len <= 2 {
        if len == 2 {
            network::sort2(v, is_le);
        }
        return;
    } else if len == 3 {
        network::sort3(v, is_le);
        return;
    }

    let mid = len / 2;

    // Roles swap: the children sort the scratch halves, using our source
    // region as their scratch, then the merge below writes back into it.
    merge_sort_rec(scratch, v, mid, is_le);
    merge_sort_rec(scratch.add(mid), v.add(mid), len - mid, is_le);

    let mut lhs = scratch as *const T;
    let mut rhs = scratch.add(mid) as *const T;
    let lhs_end = rhs;
    let rhs_end = scratch.add(len) as *const T;
    let mut dst = v;

    // Two-cursor merge, ties take the left run. The loop exits the moment
    // either run is exhausted and appends the sorted remainder of the other
    // run with one bulk copy, which keeps the per-element exhaustion check
    // out of the comparison loop.
    loop {
        let take_lhs = is_le(&*lhs, &*rhs);

        ptr::copy_nonoverlapping(if take_lhs { lhs } else { rhs }, dst, 1);
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
