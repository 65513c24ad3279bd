//! Order-count allocation
//!
//! Expands announcements into orders. A whole mean gives every announcement
//! the same count. A fractional mean is approximated by randomized rounding:
//! the announcements are split between the floor and ceiling of the mean in
//! the proportion the fraction dictates, and a uniform shuffle decides which
//! announcements get which count.
//!
//! For example, 1.2 orders per announcement over 10 announcements yields
//! eight announcements with 1 order and two with 2 orders.

use serde::{Deserialize, Serialize};

use crate::config::MAX_ORDERS_PER_ANNOUNCEMENT;
use crate::core::rounding::{is_whole, round_half_down, round_half_up};
use crate::rng::RandomSource;

/// Order count per announcement, parallel to the announcement sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCountAssignment {
    counts: Vec<u32>,
}

impl OrderCountAssignment {
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of orders across all announcements
    pub fn total_orders(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }
}

/// Split `n` slots into a floor bucket and a ceiling bucket.
///
/// The ceiling bucket receives the `ratio` share. The floor share rounds half
/// down and the ceiling share rounds half up, so the two always add up to
/// `n`; anything else is a logic fault and panics.
///
/// # Example
/// ```
/// use poisson_arrivals::arrivals::allocation::split_counts;
///
/// assert_eq!(split_counts(10, 0.2), (8, 2));
/// assert_eq!(split_counts(4, 0.5), (2, 2));
/// ```
pub fn split_counts(n: usize, ratio: f64) -> (usize, usize) {
    let floor_count = round_half_down(share(1.0 - ratio, n));
    let ceil_count = round_half_up(share(ratio, n));

    assert_eq!(
        floor_count + ceil_count,
        n as i64,
        "floor/ceiling split of {} slots with ratio {} is inconsistent",
        n,
        ratio
    );

    (floor_count as usize, ceil_count as usize)
}

const SHARE_RESOLUTION: f64 = 1e9;

/// `fraction * n` snapped to a 1e-9 grid.
///
/// Products such as `0.7 * 5` carry binary noise around exact half-integers
/// (3.4999999999999996 vs 1.5000000000000002); snapping keeps a tie a tie on
/// both sides of the split.
fn share(fraction: f64, n: usize) -> f64 {
    (fraction * n as f64 * SHARE_RESOLUTION).round() / SHARE_RESOLUTION
}

/// Draw `n` integers whose mean approximates `mean` as closely as integers allow.
///
/// A whole `mean` returns `n` copies of it without touching `rng`. Otherwise
/// the result holds only `floor(mean)` and `ceil(mean)`, in the proportions
/// given by [`split_counts`], in uniformly random order. A mean below one
/// mixes zeros and ones. `mean` must be positive and no larger than
/// [`MAX_ORDERS_PER_ANNOUNCEMENT`].
pub fn randomized_rounding<R: RandomSource>(rng: &mut R, n: usize, mean: f64) -> Vec<u32> {
    assert!(
        mean > 0.0 && mean <= MAX_ORDERS_PER_ANNOUNCEMENT,
        "mean {} is outside the order count range",
        mean
    );

    if is_whole(mean) {
        return vec![mean as u32; n];
    }

    let floor = mean.floor();
    let ceiling = mean.ceil();
    let (floor_count, ceil_count) = split_counts(n, mean - floor);

    let mut values = Vec::with_capacity(n);
    values.extend(std::iter::repeat(floor as u32).take(floor_count));
    values.extend(std::iter::repeat(ceiling as u32).take(ceil_count));
    rng.shuffle(&mut values);
    values
}

/// Assign an order count to every announcement.
pub fn allocate_order_counts<R: RandomSource>(
    rng: &mut R,
    announcements: &[u64],
    orders_per_announcement: f64,
) -> OrderCountAssignment {
    OrderCountAssignment::new(randomized_rounding(
        rng,
        announcements.len(),
        orders_per_announcement,
    ))
}

/// Repeat every announcement timestamp by its order count, in sequence order.
pub fn expand_orders(announcements: &[u64], assignment: &OrderCountAssignment) -> Vec<u64> {
    assert_eq!(
        announcements.len(),
        assignment.len(),
        "{} announcements but {} order counts",
        announcements.len(),
        assignment.len()
    );

    let mut orders = Vec::with_capacity(assignment.total_orders());
    for (&time, &count) in announcements.iter().zip(assignment.counts()) {
        orders.extend(std::iter::repeat(time).take(count as usize));
    }
    orders
}

/// Allocate order counts and expand them into the final timestamp sequence.
pub fn allocate<R: RandomSource>(
    rng: &mut R,
    announcements: &[u64],
    orders_per_announcement: f64,
) -> Vec<u64> {
    let assignment = allocate_order_counts(rng, announcements, orders_per_announcement);
    expand_orders(announcements, &assignment)
}
