use std::{cmp::Ordering, fmt, ops::Add};

/// A distance key: an `f64` with a total order.
///
/// Plain `f64` is not `Ord` because of NaN and signed zeros. Comparing with
/// [`f64::total_cmp`] gives every value a place in the order, which is what
/// the indexed queues need to pick a minimum. Shortest-path distances are
/// always non-negative sums of finite weights (or `+inf` for "not reached"),
/// so the exotic corners of the total order never matter in practice.
#[derive(Debug, Copy, Clone)]
#[repr(transparent)]
pub struct TotalF64(pub f64);

impl TotalF64 {
    pub const ZERO: TotalF64 = TotalF64(0.0);
    pub const INFINITY: TotalF64 = TotalF64(f64::INFINITY);

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for TotalF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for TotalF64 {
    fn from(x: f64) -> Self {
        TotalF64(x)
    }
}

impl From<TotalF64> for f64 {
    fn from(x: TotalF64) -> Self {
        x.0
    }
}

impl Add<f64> for TotalF64 {
    type Output = TotalF64;

    fn add(self, weight: f64) -> TotalF64 {
        TotalF64(self.0 + weight)
    }
}

impl fmt::Display for TotalF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_sorts_after_every_distance() {
        let mut values = [
            TotalF64::INFINITY,
            TotalF64(3.5),
            TotalF64::ZERO,
            TotalF64(1e300),
        ];
        values.sort();
        assert_eq!(values[0], TotalF64::ZERO);
        assert_eq!(values[1], TotalF64(3.5));
        assert_eq!(values[2], TotalF64(1e300));
        assert_eq!(values[3], TotalF64::INFINITY);
    }

    #[test]
    fn adding_a_weight_keeps_exact_sums() {
        // reconstruction relies on recomputing the very same sum
        let d = TotalF64(0.1) + 0.2;
        assert_eq!(d, TotalF64(0.1 + 0.2));
        assert_eq!(TotalF64::INFINITY + 5.0, TotalF64::INFINITY);
    }

    #[test]
    fn signed_zeros_are_distinct_but_ordered() {
        assert_ne!(TotalF64(0.0), TotalF64(-0.0));
        assert!(TotalF64(-0.0) < TotalF64(0.0));
    }

    #[test]
    fn nan_has_a_place_in_the_order() {
        let nan = TotalF64(f64::NAN);
        assert_eq!(nan, TotalF64(f64::NAN));
        assert!(nan > TotalF64::INFINITY);
    }

    #[test]
    fn finiteness_and_conversions() {
        assert!(TotalF64(2.0).is_finite());
        assert!(!TotalF64::INFINITY.is_finite());
        let raw: f64 = TotalF64::from(4.25).into();
        assert_eq!(raw, 4.25);
        assert_eq!(format!("{}", TotalF64(1.5)), "1.5");
    }
}
