/// A single tunable search coefficient.
///
/// The search consumes `value`, a real number. The tuning protocol sees the
/// scaled integer `value * divisor`, so a fractional coefficient like 0.80
/// can be tuned over an integer-only protocol as 80 with divisor 100.
pub struct Tunable {
    pub name: &'static str,
    value: f64,
    pub divisor: f64,
    pub max: i64,
    pub step: i64,
}

impl Tunable {
    /// Creates a tunable from its externally-scaled default value.
    /// Panics on a zero divisor; that is a startup misconfiguration,
    /// not a runtime condition.
    pub fn new(name: &'static str, default: i64, divisor: f64) -> Self {
        assert!(divisor != 0.0, "tunable {} declared with zero divisor", name);

        Tunable {
            name: name,
            value: default as f64 / divisor,
            divisor: divisor,
            max: 0,
            step: 1,
        }
    }

    /// Declares the maximum value accepted over the tuning protocol.
    /// The minimum is always 0.
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    /// Declares the suggested perturbation size for an auto-tuner.
    /// Advisory only, never used in computation.
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Gets the internal value consumed by the search.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Gets the externally-scaled integer representation.
    /// Truncates toward zero rather than rounding, matching the convention
    /// the tuning harness expects from the report formats.
    pub fn external_value(&self) -> i64 {
        (self.value * self.divisor) as i64
    }

    /// Replaces the value from an externally-scaled integer.
    /// No bounds check is performed; the tuning harness owns legality,
    /// so out-of-range values simply take effect.
    pub fn set_external(&mut self, external: i64) {
        self.value = external as f64 / self.divisor;
    }
}
