//! Glycogen Phosphorylase: Hill activation in calcium, glucose-modulated
//! reverse rate (Gall 2000).
//!
//! Rate law and defaults transcribed from
//! `examples/original_source/src/glycphos_model.cpp`.

use crate::model::Model;
use crate::param::Parameters;

pub struct GlycogenPhosphorylase;

const SPECIES: [&str; 2] = ["Prot_inact", "Prot_act"];

const PARAMS: [(&str, f64); 11] = [
    ("VpM1", 1.5),
    ("VpM2", 0.6),
    ("alpha", 9.0),
    ("gamma", 9.0),
    ("K11", 0.1),
    ("Kp2", 0.2),
    ("Ka1_conc", 1e7),
    ("Ka2_conc", 1e7),
    ("Ka5_conc", 500.0),
    ("Ka6_conc", 500.0),
    ("gluc_conc", 1e7),
];

const INIT_CONC: [(&str, f64); 2] = [("Prot_inact", 5.0), ("Prot_act", 0.0)];

impl Model for GlycogenPhosphorylase {
    fn name(&self) -> &'static str {
        "glycogen_phosphorylase"
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
        let vp_m1 = params.get("VpM1");
        let vp_m2 = params.get("VpM2");
        let alpha = params.get("alpha");
        let gamma = params.get("gamma");
        let k11 = params.get("K11");
        let kp2 = params.get("Kp2");
        let ka1 = params.get("Ka1_conc");
        let ka2 = params.get("Ka2_conc");
        let ka5 = params.get("Ka5_conc");
        let ka6 = params.get("Ka6_conc");
        let gluc = params.get("gluc_conc");

        let total = (counts[0] + counts[1]) as f64;
        let active = counts[1] as f64 / total;

        let ca4 = calcium_now.powi(4);
        let ka5_4 = ka5.powi(4);
        let ka6_4 = ka6.powi(4);

        // VpM1/VpM2 are given in min^-1 in the source; /60 converts to s^-1.
        let a0 = vp_m1 / 60.0 * (1.0 + gamma * ca4 / (ka5_4 + ca4)) * (1.0 - active)
            / (k11 / (1.0 + ca4 / ka6_4) + 1.0 - active)
            * total;
        let a1 = vp_m2 / 60.0 * (1.0 + alpha * gluc / (ka1 + gluc)) * active
            / (kp2 / (1.0 + gluc / ka2) + active)
            * total;

        out_cumulative[0] = a0;
        out_cumulative[1] = out_cumulative[0] + a1;
    }

    fn stoichiometry(&self) -> &'static [&'static [i32]] {
        &[&[-1, 1], &[1, -1]]
    }
}
