//! Fixed-size, trivially-copyable record types for exercising the
//! element-size axis of the sort engines. All of them are `Copy` and compare
//! only through their `Ord` impl, never by raw bytes.

use std::cmp::Ordering;

/// 16 byte record with a deliberately expensive comparison.
#[repr(C)]
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Ratio16 {
    num: f64,
    den: f64,
}

impl Ratio16 {
    pub fn new(val: i32) -> Self {
        // Shift into a range where num grows linearly and den logarithmically,
        // so num / den is strictly increasing in val and both stay normal.
        let val_f = (val as f64) + (i32::MAX as f64) + 10.0;

        let num = val_f + 0.25;
        let den = val_f.log(3.7);

        assert!(num.is_normal() && den.is_normal() && den < num);

        Self { num, den }
    }
}

// The constructor only ever produces normal, comparable floats.
impl Eq for Ratio16 {}

impl PartialOrd for Ratio16 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Simulate an expensive comparison function.
        let this_ratio = self.num / self.den;
        let other_ratio = other.num / other.den;

        this_ratio.partial_cmp(&other_ratio)
    }
}

impl Ord for Ratio16 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap()
    }
}

/// 1 KiB record. Large enough that moving it during every merge step is
/// clearly more expensive than moving a 4 or 8 byte indirection unit.
#[repr(C)]
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct OneKilobyte {
    lanes: [i64; 128],
}

impl OneKilobyte {
    pub fn new(val: i32) -> Self {
        let mut lanes = [0i64; 128];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = val as i64 + i as i64;
        }

        Self { lanes }
    }

    fn key(&self) -> i64 {
        self.lanes[0] + self.lanes[63] + self.lanes[127]
    }
}

impl PartialOrd for OneKilobyte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OneKilobyte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Record carrying a sort key plus a tag invisible to the comparator,
/// used to observe whether equal keys keep their input order.
#[repr(C)]
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct KeyTag {
    pub key: i32,
    pub tag: i32,
}

impl KeyTag {
    pub fn new(key: i32, tag: i32) -> Self {
        Self { key, tag }
    }
}

impl PartialOrd for KeyTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KeyTag {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.key, self.tag).cmp(&(other.key, other.tag))
    }
}
