//! Fixed comparison-count sorting networks for the merge engines' base cases.
//!
//! Generic over the indirection unit `U` the engine moves around: the record
//! itself, a u32 index, or an element address. `is_le` resolves two units to
//! records and reports `compare(a, b) <= 0`; ties picking the left unit is
//! what keeps the engines stable. All selections are value selects, so the
//! comparison count is fixed regardless of input order: 1 for two elements,
//! 3 for three.

/// Sorts the two units at `v[0..2]`.
///
/// SAFETY: The caller must ensure `v` is valid for reads and writes of two
/// units.
#[inline]
pub(crate) unsafe fn sort2<U, F>(v: *mut U, is_le: &mut F)
where
    U: Copy,
    F: FnMut(&U, &U) -> bool,
{
    let a = *v;
    let b = *v.add(1);

    let a_le_b = is_le(&a, &b);

    *v = if a_le_b { a } else { b };
    *v.add(1) = if a_le_b { b } else { a };
}

/// Sorts the three units at `v[0..3]`.
///
/// SAFETY: The caller must ensure `v` is valid for reads and writes of three
/// units.
#[inline]
pub(crate) unsafe fn sort3<U, F>(v: *mut U, is_le: &mut F)
where
    U: Copy,
    F: FnMut(&U, &U) -> bool,
{
    let a = *v;
    let b = *v.add(1);
    let c = *v.add(2);

    let a_le_b = is_le(&a, &b);
    let a_le_c = is_le(&a, &c);
    let b_le_c = is_le(&b, &c);

    let min_a_c = if a_le_c { a } else { c };
    let max_a_c = if a_le_c { c } else { a };
    let min_b_c = if b_le_c { b } else { c };
    let max_b_c = if b_le_c { c } else { b };

    *v = if a_le_b { min_a_c } else { min_b_c };
    *v.add(1) = if a_le_b {
        if b_le_c {
            b
        } else {
            max_a_c
        }
    } else if a_le_c {
        a
    } else {
        max_b_c
    };
    *v.add(2) = if a_le_b { max_b_c } else { max_a_c };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le(a: &(i32, u8), b: &(i32, u8)) -> bool {
        a.0 <= b.0
    }

    #[test]
    fn sort2_stable() {
        let mut comps = 0;
        for input in [[(1, 0), (2, 1)], [(2, 0), (1, 1)], [(1, 0), (1, 1)]] {
            let mut v = input;
            unsafe {
                sort2(v.as_mut_ptr(), &mut |a, b| {
                    comps += 1;
                    le(a, b)
                });
            }
            assert!(v[0].0 <= v[1].0);
            if v[0].0 == v[1].0 {
                assert!(v[0].1 < v[1].1);
            }
        }
        assert_eq!(comps, 3);
    }

    #[test]
    fn sort3_all_orders_stable() {
        // Keys drawn from {0, 1} cover every tie shape, {0, 1, 2} every
        // strict order.
        let mut comps = 0;
        for keys in [0i32, 1, 2].iter().flat_map(|&a| {
            [0i32, 1, 2]
                .into_iter()
                .flat_map(move |b| [0i32, 1, 2].into_iter().map(move |c| [a, b, c]))
        }) {
            let mut v = [(keys[0], 0u8), (keys[1], 1), (keys[2], 2)];
            unsafe {
                sort3(v.as_mut_ptr(), &mut |a, b| {
                    comps += 1;
                    le(a, b)
                });
            }
            assert!(v[0].0 <= v[1].0 && v[1].0 <= v[2].0);
            for w in v.windows(2) {
                if w[0].0 == w[1].0 {
                    assert!(w[0].1 < w[1].1);
                }
            }
        }
        assert_eq!(comps, 27 * 3);
    }
}
