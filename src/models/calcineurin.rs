//! Calcineurin: power-law activation in calcium (Fisher 2006).
//!
//! Rate law transcribed from
//! `examples/original_source/src/calcineurin_model.cpp`. That source
//! revision omits a `vols`/`init_conc` block; this crate supplies the same
//! volume and initial condition shape as Calmodulin, the structurally
//! identical 2-state model (see DESIGN.md).

use crate::model::Model;
use crate::param::Parameters;

pub struct Calcineurin;

const SPECIES: [&str; 2] = ["Prot_inact", "Prot_act"];

const PARAMS: [(&str, f64); 3] = [("k_on", 1.0), ("k_off", 1.0), ("p", 3.0)];

const INIT_CONC: [(&str, f64); 2] = [("Prot_inact", 5.0), ("Prot_act", 0.0)];

impl Model for Calcineurin {
    fn name(&self) -> &'static str {
        "calcineurin"
    }

    fn species_names(&self) -> &[&'static str] {
        &SPECIES
    }

    fn reaction_count(&self) -> usize {
        2
    }

    fn default_parameters(&self) -> &[(&'static str, f64)] {
        &PARAMS
    }

    fn default_initial_concentrations(&self) -> &[(&'static str, f64)] {
        &INIT_CONC
    }

    fn default_volume(&self) -> f64 {
        5e-14
    }

    fn compute_cumulative_propensities(
        &self,
        params: &Parameters,
        counts: &[i64],
        calcium_now: f64,
        out_cumulative: &mut [f64],
    ) {
        let k_on = params.get("k_on");
        let k_off = params.get("k_off");
        let p = params.get("p");

        let a0 = k_on * calcium_now.powf(p) * counts[0] as f64;
        let a1 = k_off * counts[1] as f64;

        out_cumulative[0] = a0;
        out_cumulative[1] = out_cumulative[0] + a1;
    }

    fn stoichiometry(&self) -> &'static [&'static [i32]] {
        &[&[-1, 1], &[1, -1]]
    }
}
