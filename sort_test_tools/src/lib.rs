/// Engine-addressing seam shared by tests and benchmarks.
///
/// The engines move records as raw bytes, so they are only defined for
/// trivially-copyable element types. `Copy` is the Rust spelling of that
/// contract; types with ownership-bearing fields are rejected at compile
/// time instead of being silently bit-copied.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Copy;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Copy,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
pub mod records;
