use std::time::Duration;

use rand::Rng;

/// Spreads `base_secs` by a random fraction of `variance`.
///
/// The result lies in `[base - 0.5 * variance * base, base + 0.5 * variance * base]`.
/// A base of zero always yields zero.
pub fn variate<R: Rng + ?Sized>(rng: &mut R, base_secs: u64, variance: f64) -> f64 {
    let base = base_secs as f64;
    let delta = (rng.random::<f64>() - 0.5) * variance;
    base + base * delta
}

/// [`variate`] rounded to the nearest whole second.
pub fn jittered_wait<R: Rng + ?Sized>(rng: &mut R, base_secs: u64, variance: f64) -> Duration {
    let secs = variate(rng, base_secs, variance).round().max(0.0);
    Duration::from_secs(secs as u64)
}
