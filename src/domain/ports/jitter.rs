//! Jitter source port.

/// Bounded random source for score jitter.
///
/// Every sample lies in `[0.0, 1.0)`, or exactly `1.0` for fixed sources
/// pinned to the upper bound.
pub trait JitterSource: Send + Sync {
    /// Draw the next sample.
    fn sample(&self) -> f64;
}
