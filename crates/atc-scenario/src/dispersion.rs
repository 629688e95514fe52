//! Integer parameter dispersion around a target mean.
//!
//! Each fleet parameter (speed, takeoff time, landing time) is drawn so that
//! individual planes differ while the fleet total stays at `n × mean`:
//!
//! ```text
//! low  = max(1, ⌊mean · (1 − spread)⌋)
//! high = ⌊mean · (1 + spread)⌋
//! v[0..n-1] ~ U[low, high]
//! v[n-1]    = n · mean − Σ v[0..n-1]
//! ```
//!
//! If the closing value would fall below 1, the smallest drawn value absorbs
//! the deficit (floored at 1) and the closing value is pinned to 1.  In that
//! case the total can exceed `n × mean`.

use atc_core::SimRng;

/// Relative spread used for every fleet parameter.
pub const DEFAULT_SPREAD: f64 = 0.3;

/// `n` positive integers whose sum is `n × mean` except when the floor at 1
/// forces it higher.
///
/// `n == 0` yields an empty vector; `n == 1` yields `[mean]`.
pub fn dispersed_values(n: usize, mean: u32, spread: f64, rng: &mut SimRng) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }

    let m = mean as f64;
    let low = ((m * (1.0 - spread)).floor() as i64).max(1);
    let high = ((m * (1.0 + spread)).floor() as i64).max(low);

    let mut vals: Vec<i64> = (0..n - 1).map(|_| rng.gen_range(low..=high)).collect();
    let mut last = n as i64 * mean as i64 - vals.iter().sum::<i64>();

    if last < 1 {
        let deficit = 1 - last;
        if let Some(min) = vals.iter_mut().min_by_key(|v| **v) {
            *min = (*min - deficit).max(1);
        }
        last = 1;
    }
    vals.push(last);

    vals.into_iter().map(|v| v.clamp(1, u32::MAX as i64) as u32).collect()
}
