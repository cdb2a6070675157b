//! The output schedule: the fixed sequence of times at which the trajectory
//! is sampled, independent of event times.

use crate::error::SimError;

const MIN_TIMESTEP: f64 = 5e-5;

#[derive(Debug, Clone)]
pub enum OutputSchedule {
    /// Uniform grid `t0, t0+dt, t0+2dt, ...` up to `end_time`.
    Uniform { times: Vec<f64> },
    /// An explicit, ascending sequence of sample times.
    Explicit { times: Vec<f64> },
}

impl OutputSchedule {
    /// Builds a uniform grid schedule starting at `start`, per spec.md §4.3:
    /// `nintervals = floor((endTime - startTime) / dt + 0.5) + 1`.
    pub fn uniform(start: f64, timestep: f64, end_time: f64) -> Result<Self, SimError> {
        if timestep < MIN_TIMESTEP {
            return Err(SimError::InvalidTimestep { value: timestep });
        }
        if end_time <= start {
            return Err(SimError::EndTimeNotAfterStart {
                start,
                end: end_time,
            });
        }
        let nintervals = ((end_time - start) / timestep + 0.5).floor() as usize + 1;
        let times = (0..nintervals).map(|i| start + i as f64 * timestep).collect();
        Ok(OutputSchedule::Uniform { times })
    }

    /// Builds an explicit schedule from a caller-supplied ascending
    /// sequence of sample times.
    pub fn explicit(times: Vec<f64>) -> Result<Self, SimError> {
        if times.is_empty() {
            return Err(SimError::NonAscendingOutputTimes);
        }
        if times.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SimError::NonAscendingOutputTimes);
        }
        Ok(OutputSchedule::Explicit { times })
    }

    pub fn times(&self) -> &[f64] {
        match self {
            OutputSchedule::Uniform { times } | OutputSchedule::Explicit { times } => times,
        }
    }

    pub fn len(&self) -> usize {
        self.times().len()
    }

    pub fn is_empty(&self) -> bool {
        self.times().is_empty()
    }

    pub fn end_time(&self) -> f64 {
        *self.times().last().expect("non-empty by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_rejects_small_timestep() {
        assert_eq!(
            OutputSchedule::uniform(0.0, 1e-6, 10.0).unwrap_err(),
            SimError::InvalidTimestep { value: 1e-6 }
        );
    }

    #[test]
    fn uniform_length_matches_formula() {
        let s = OutputSchedule::uniform(0.0, 1.0, 10.0).unwrap();
        assert_eq!(s.len(), 11);
        assert_eq!(s.times()[0], 0.0);
        assert_eq!(s.times()[10], 10.0);
    }

    #[test]
    fn explicit_rejects_non_ascending() {
        assert_eq!(
            OutputSchedule::explicit(vec![0.0, 2.0, 1.0]).unwrap_err(),
            SimError::NonAscendingOutputTimes
        );
    }
}
