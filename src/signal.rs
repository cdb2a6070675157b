//! The externally supplied (time, calcium) input signal.

use crate::error::SimError;

/// A monotonically ascending sequence of `(time, calcium concentration)`
/// samples. Calcium is a step function, constant on `[t[k], t[k+1])`.
#[derive(Debug, Clone)]
pub struct InputSignal {
    times: Vec<f64>,
    calcium: Vec<f64>,
}

impl InputSignal {
    /// Builds an input signal from parallel `time`/`Ca` columns.
    ///
    /// `time` must be strictly ascending and both vectors must have the
    /// same, non-zero length.
    pub fn new(time: Vec<f64>, calcium: Vec<f64>) -> Result<Self, SimError> {
        if time.is_empty() || time.len() != calcium.len() {
            return Err(SimError::EmptyInputSignal);
        }
        Ok(InputSignal {
            times: time,
            calcium,
        })
    }

    pub fn start(&self) -> f64 {
        self.times[0]
    }

    pub fn end(&self) -> f64 {
        *self.times.last().expect("non-empty by construction")
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn time_at(&self, k: usize) -> f64 {
        self.times[k]
    }

    pub fn calcium_at(&self, k: usize) -> f64 {
        self.calcium[k]
    }

    /// Whether index `k` is the last sample, i.e. there is no `t[k+1]` to
    /// cross.
    pub fn is_last(&self, k: usize) -> bool {
        k + 1 >= self.times.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_signal() {
        assert_eq!(
            InputSignal::new(vec![], vec![]).unwrap_err(),
            SimError::EmptyInputSignal
        );
    }

    #[test]
    fn accepts_two_point_signal() {
        let sig = InputSignal::new(vec![0.0, 100.0], vec![0.0, 10.0]).unwrap();
        assert_eq!(sig.start(), 0.0);
        assert_eq!(sig.end(), 100.0);
        assert_eq!(sig.calcium_at(1), 10.0);
        assert!(sig.is_last(1));
        assert!(!sig.is_last(0));
    }
}
