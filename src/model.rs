//! The Model Descriptor abstraction (spec.md §4.1): the uniform extension
//! mechanism that plugs a reaction network's propensities, stoichiometry,
//! and defaults into the generic SSA engine.
//!
//! This replaces the original implementation's preprocessor-macro
//! name-mangling and file-scope mutable buffers (spec.md §9) with a trait
//! object passed by reference into the engine; the engine owns its own
//! per-run state and never reaches into globals.

use crate::param::Parameters;

/// A reaction network: species, reactions, default parameters and initial
/// conditions, and the propensity/stoichiometry functions that drive the
/// SSA engine.
pub trait Model {
    /// Human-readable model name.
    fn name(&self) -> &'static str;

    /// Species names, in the order that fixes the species index space.
    fn species_names(&self) -> &[&'static str];

    fn species_count(&self) -> usize {
        self.species_names().len()
    }

    fn reaction_count(&self) -> usize;

    /// Default propensity-equation parameters.
    fn default_parameters(&self) -> &[(&'static str, f64)];

    /// Default initial concentrations (nmol/L), in species-index order.
    fn default_initial_concentrations(&self) -> &[(&'static str, f64)];

    /// Default system volume (L).
    fn default_volume(&self) -> f64;

    /// Writes the cumulative propensity vector for the current state.
    ///
    /// `out_cumulative[k]` must equal the sum of absolute propensities of
    /// reactions `0..=k`; the last slot is the total propensity
    /// (spec.md §3, §4.1).
    fn compute_cumulative_propensities(
        &self,
        params: &Parameters,
        counts: &[i64],
        calcium_now: f64,
        out_cumulative: &mut [f64],
    );

    /// Stoichiometry matrix, indexed `[species][reaction]`.
    fn stoichiometry(&self) -> &'static [&'static [i32]];
}

/// Enumerates the six reaction models this crate implements, and dispatches
/// to the matching [`Model`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelId {
    Calmodulin,
    Calcineurin,
    CaMKII,
    Pkc,
    Ano1,
    GlycogenPhosphorylase,
}

impl ModelId {
    pub fn descriptor(self) -> Box<dyn Model> {
        match self {
            ModelId::Calmodulin => Box::new(crate::models::calmodulin::Calmodulin),
            ModelId::Calcineurin => Box::new(crate::models::calcineurin::Calcineurin),
            ModelId::CaMKII => Box::new(crate::models::camkii::CaMKII),
            ModelId::Pkc => Box::new(crate::models::pkc::Pkc),
            ModelId::Ano1 => Box::new(crate::models::ano1::Ano1),
            ModelId::GlycogenPhosphorylase => {
                Box::new(crate::models::glycogen_phosphorylase::GlycogenPhosphorylase)
            }
        }
    }
}
