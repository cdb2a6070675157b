//! Stochastic simulation of calcium-activated signaling proteins under
//! Gillespie's Direct Method.
//!
//! Given a calcium input signal (a `(time, concentration)` step function)
//! and one of the six reaction models this crate ships
//! ([`ModelId`]), [`simulate`] advances the Stochastic Simulation Algorithm
//! from the model's initial state, synchronizing the algorithm's own event
//! clock with the input signal's sample boundaries, and returns a
//! [`Trajectory`] sampled at a caller-chosen output schedule.
//!
//! ```no_run
//! use std::collections::HashMap;
//! use calcium_kinetics::{ModelId, ModelParamOverrides, SimParams, InputSignal, simulate};
//!
//! let signal = InputSignal::new(vec![0.0, 100.0], vec![0.0, 10.0]).unwrap();
//! let sim_params = SimParams::uniform(1.0, 100.0);
//! let overrides = ModelParamOverrides::default();
//! let (trajectory, warnings) = simulate(ModelId::Calmodulin, &signal, &sim_params, &overrides, 1)
//!     .unwrap();
//! assert!(warnings.is_empty());
//! println!("{} rows", trajectory.len());
//! ```
//!
//! Every public entry point here returns `Result<_, SimError>` rather than
//! panicking; malformed input (a non-ascending output schedule, a timestep
//! below the engine's resolution, an empty calcium signal) is reported
//! through [`SimError`], while unknown override keys are reported as
//! non-fatal [`SimWarning`]s alongside the successful result.

pub mod error;
pub mod gillespie;
pub mod model;
pub mod models;
pub mod param;
pub mod schedule;
pub mod signal;
pub mod trajectory;

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub use error::{SimError, SimWarning};
pub use model::{Model, ModelId};
pub use param::Parameters;
pub use schedule::OutputSchedule;
pub use signal::InputSignal;
pub use trajectory::Trajectory;

/// Simulation-run knobs that are independent of the reaction model: the
/// output schedule and a few per-run controls.
#[derive(Debug, Clone)]
pub enum SimParams {
    /// Samples the trajectory on a uniform grid of the given timestep,
    /// running until `end_time`.
    Uniform { timestep: f64, end_time: f64 },
    /// Samples the trajectory at an explicit, ascending sequence of times.
    Explicit { times: Vec<f64> },
}

impl SimParams {
    pub fn uniform(timestep: f64, end_time: f64) -> Self {
        SimParams::Uniform { timestep, end_time }
    }

    pub fn explicit(times: Vec<f64>) -> Self {
        SimParams::Explicit { times }
    }

    fn to_schedule(&self, start: f64) -> Result<OutputSchedule, SimError> {
        match self {
            SimParams::Uniform { timestep, end_time } => {
                OutputSchedule::uniform(start, *timestep, *end_time)
            }
            SimParams::Explicit { times } => OutputSchedule::explicit(times.clone()),
        }
    }
}

/// User overrides for a model's defaults (spec.md §4.2): any subset of the
/// model's volume, initial concentrations, and propensity-equation
/// parameters, keyed by name. Unknown keys are dropped and reported as
/// [`SimWarning`]s rather than failing the run.
#[derive(Debug, Clone, Default)]
pub struct ModelParamOverrides {
    pub volume: Option<HashMap<String, f64>>,
    pub initial_concentrations: Option<HashMap<String, f64>>,
    pub parameters: Option<HashMap<String, f64>>,
}

/// Runs one stochastic trajectory of `model_id` driven by `signal`, sampled
/// per `sim_params`, seeded with `seed`.
///
/// Returns the trajectory together with any [`SimWarning`]s raised while
/// merging `overrides` into the model's defaults.
pub fn simulate(
    model_id: ModelId,
    signal: &InputSignal,
    sim_params: &SimParams,
    overrides: &ModelParamOverrides,
    seed: u64,
) -> Result<(Trajectory, Vec<SimWarning>), SimError> {
    let model = model_id.descriptor();
    let mut warnings = Vec::new();

    let (params, param_warnings) =
        param::merge_parameters(model.default_parameters(), overrides.parameters.as_ref());
    warnings.extend(param_warnings);

    let (initial_concentrations, init_warnings) = param::merge_initial_concentrations(
        model.default_initial_concentrations(),
        overrides.initial_concentrations.as_ref(),
    );
    warnings.extend(init_warnings);

    let (volume, vol_warnings) =
        param::merge_volume(model.default_volume(), overrides.volume.as_ref());
    warnings.extend(vol_warnings);

    let schedule = sim_params.to_schedule(signal.start())?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let trajectory = gillespie::run(
        model.as_ref(),
        &params,
        &initial_concentrations,
        volume,
        signal,
        &schedule,
        &mut rng,
        None,
    )?;

    Ok((trajectory, warnings))
}

/// Like [`simulate`], but polls `cancelled` once per engine iteration and
/// aborts the run with [`SimError::Cancelled`] the first time it returns
/// `true` (spec.md §5).
pub fn simulate_cancellable(
    model_id: ModelId,
    signal: &InputSignal,
    sim_params: &SimParams,
    overrides: &ModelParamOverrides,
    seed: u64,
    cancelled: &mut dyn FnMut() -> bool,
) -> Result<(Trajectory, Vec<SimWarning>), SimError> {
    let model = model_id.descriptor();
    let mut warnings = Vec::new();

    let (params, param_warnings) =
        param::merge_parameters(model.default_parameters(), overrides.parameters.as_ref());
    warnings.extend(param_warnings);

    let (initial_concentrations, init_warnings) = param::merge_initial_concentrations(
        model.default_initial_concentrations(),
        overrides.initial_concentrations.as_ref(),
    );
    warnings.extend(init_warnings);

    let (volume, vol_warnings) =
        param::merge_volume(model.default_volume(), overrides.volume.as_ref());
    warnings.extend(vol_warnings);

    let schedule = sim_params.to_schedule(signal.start())?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let trajectory = gillespie::run(
        model.as_ref(),
        &params,
        &initial_concentrations,
        volume,
        signal,
        &schedule,
        &mut rng,
        Some(cancelled),
    )?;

    Ok((trajectory, warnings))
}
