//! Arrival-time sampler
//!
//! Announcements follow a Poisson process: inter-arrival gaps are drawn from
//! an exponential distribution, discretized to whole minutes and accumulated
//! until the scenario horizon is reached.

use log::trace;

use crate::core::rounding::round_half_down;
use crate::rng::{RandomSource, ScenarioRng};

/// Sample the announcement timestamps of one scenario.
///
/// `announcement_rate` is in announcements per hour, so gaps have a mean of
/// `60 / announcement_rate` minutes. Gaps are drawn from a child source
/// seeded with one draw from `rng`.
///
/// The result is strictly increasing, every element is below
/// `scenario_length`, and it is never empty: when the very first gap already
/// overshoots the horizon, the running sum is reset and sampling starts over.
/// That retry is unbounded, so a rate the horizon can never accommodate
/// loops for a long time. Both parameters must be positive.
///
/// # Example
/// ```
/// use poisson_arrivals::arrivals::sampler::sample_announcements;
/// use poisson_arrivals::ScenarioRng;
///
/// let mut rng = ScenarioRng::new(42);
/// let announcements = sample_announcements(&mut rng, 480, 10.0);
/// assert!(!announcements.is_empty());
/// assert!(announcements.windows(2).all(|w| w[0] < w[1]));
/// assert!(announcements.iter().all(|&t| t < 480));
/// ```
pub fn sample_announcements<R: RandomSource>(
    rng: &mut R,
    scenario_length: u64,
    announcement_rate: f64,
) -> Vec<u64> {
    let rate_per_minute = announcement_rate / 60.0;
    let mut gaps = ScenarioRng::new(rng.next_seed());

    let mut sum: u64 = 0;
    let mut announcements = Vec::new();
    let mut restarts = 0usize;

    loop {
        let gap = round_half_down(gaps.exponential(rate_per_minute)).max(0) as u64;

        // Gaps below one minute would duplicate the previous timestamp; only
        // the first announcement may land on zero.
        if gap == 0 && !announcements.is_empty() {
            continue;
        }

        sum = sum.saturating_add(gap);
        if sum < scenario_length {
            announcements.push(sum);
        } else if announcements.is_empty() {
            restarts += 1;
            trace!(
                "first gap {} overshoots horizon {}, restarting (restart #{})",
                gap,
                scenario_length,
                restarts
            );
            sum = 0;
        } else {
            break;
        }
    }

    announcements
}
