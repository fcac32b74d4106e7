//! Testbed crate comparing three stable merge-sort engines that differ only
//! in how indirection is used to avoid moving large records during the merge
//! work: whole-record copies, a u32 index permutation, or an address table.
//!
//! All engines sort trivially-copyable fixed-size records by an arbitrary
//! caller-supplied ordering, in place from the caller's perspective.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Copy,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Copy,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod stable;
