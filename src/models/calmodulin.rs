//! Calmodulin: Hill activation in calcium, linear deactivation.
//!
//! Rate law and defaults transcribed from
//! `examples/original_source/src/calmodulin_model.cpp`.

use crate::model::Model;
use crate::param::Parameters;

pub struct Calmodulin;

const SPECIES: [&str; 2] = ["Prot_inact", "Prot_act"];

const PARAMS: [(&str, f64); 4] = [
    ("k_on", 0.025),
    ("k_off", 0.005),
    ("Km", 1.0),
    ("h", 4.0),
];

const INIT_CONC: [(&str, f64); 2] = [("Prot_inact", 5.0), ("Prot_act", 0.0)];

impl Model for Calmodulin {
    fn name(&self) -> &'static str {
        "calmodulin"
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
        let km = params.get("Km");
        let h = params.get("h");

        let ca_h = calcium_now.powf(h);
        let a0 = k_on * ca_h / (km.powf(h) + ca_h) * counts[0] as f64;
        let a1 = k_off * counts[1] as f64;

        out_cumulative[0] = a0;
        out_cumulative[1] = out_cumulative[0] + a1;
    }

    fn stoichiometry(&self) -> &'static [&'static [i32]] {
        // species x reaction, R1 = activation, R2 = deactivation
        &[&[-1, 1], &[1, -1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::{merge_initial_concentrations, merge_parameters};

    #[test]
    fn two_state_conservation() {
        let model = Calmodulin;
        let (params, _) = merge_parameters(model.default_parameters(), None);
        let mut counts = [5_i64, 0];
        let total = counts[0] + counts[1];
        let mut cumulative = [0.0; 2];
        for ca in [0.0, 1.0, 5.0, 20.0] {
            model.compute_cumulative_propensities(&params, &counts, ca, &mut cumulative);
            // simulate one of each reaction firing and check the invariant holds
            let stm = model.stoichiometry();
            for r in 0..2 {
                let mut next = counts;
                for (s, row) in stm.iter().enumerate() {
                    next[s] += row[r];
                }
                assert_eq!(next[0] + next[1], total);
            }
        }
        let _ = merge_initial_concentrations(model.default_initial_concentrations(), None);
        counts = [5, 0];
        assert_eq!(counts[0] + counts[1], total);
    }

    #[test]
    fn zero_calcium_has_no_activation_propensity() {
        let model = Calmodulin;
        let (params, _) = merge_parameters(model.default_parameters(), None);
        let counts = [5_i64, 0];
        let mut cumulative = [0.0; 2];
        model.compute_cumulative_propensities(&params, &counts, 0.0, &mut cumulative);
        assert_eq!(cumulative[0], 0.0);
    }
}
