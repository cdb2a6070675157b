//! CaMKII: cooperative autophosphorylation with calcium/calmodulin binding
//! and phosphatase dephosphorylation.
//!
//! Rate law, defaults and stoichiometry transcribed from
//! `examples/original_source/src/camkii_model.cpp`.

use crate::model::Model;
use crate::param::Parameters;

pub struct CaMKII;

const SPECIES: [&str; 5] = ["W_I", "W_B", "W_P", "W_T", "W_A"];

const PARAMS: [(&str, f64); 20] = [
    ("a", -0.22),
    ("b", 1.826),
    ("c", 0.1),
    ("k_IB", 0.01),
    ("k_BI", 0.8),
    ("k_PT", 1.0),
    ("k_TP", 1e-12),
    ("k_TA", 0.0008),
    ("k_AT", 0.01),
    ("k_AA", 0.29),
    ("c_B", 0.75),
    ("c_P", 1.0),
    ("c_T", 0.8),
    ("c_A", 0.8),
    ("camT", 1000.0),
    ("Kd", 1000.0),
    ("Vm_phos", 0.005),
    ("Kd_phos", 0.3),
    ("totalC", 40.0),
    ("h", 4.0),
];

const INIT_CONC: [(&str, f64); 5] = [
    ("W_I", 40.0),
    ("W_B", 0.0),
    ("W_P", 0.0),
    ("W_T", 0.0),
    ("W_A", 0.0),
];

impl Model for CaMKII {
    fn name(&self) -> &'static str {
        "camkii"
    }

    fn species_names(&self) -> &[&'static str] {
        &SPECIES
    }

    fn reaction_count(&self) -> usize {
        10
    }

    fn default_parameters(&self) -> &[(&'static str, f64)] {
        &PARAMS
    }

    fn default_initial_concentrations(&self) -> &[(&'static str, f64)] {
        &INIT_CONC
    }

    fn default_volume(&self) -> f64 {
        5e-15
    }

    fn compute_cumulative_propensities(
        &self,
        params: &Parameters,
        counts: &[i64],
        calcium_now: f64,
        out_cumulative: &mut [f64],
    ) {
        let a = params.get("a");
        let b = params.get("b");
        let c = params.get("c");
        let k_ib = params.get("k_IB");
        let k_bi = params.get("k_BI");
        let k_pt = params.get("k_PT");
        let k_tp = params.get("k_TP");
        let k_ta = params.get("k_TA");
        let k_at = params.get("k_AT");
        let k_aa = params.get("k_AA");
        let c_b = params.get("c_B");
        let c_p = params.get("c_P");
        let c_t = params.get("c_T");
        let c_a = params.get("c_A");
        let cam_t = params.get("camT");
        let kd = params.get("Kd");
        let vm_phos = params.get("Vm_phos");
        let kd_phos = params.get("Kd_phos");
        let total_c = params.get("totalC");
        let h = params.get("h");

        let w_i = counts[0] as f64;
        let w_b = counts[1] as f64;
        let w_p = counts[2] as f64;
        let w_t = counts[3] as f64;
        let w_a = counts[4] as f64;

        let ca_h = calcium_now.powf(h);
        let cam_bound = cam_t * ca_h / (ca_h + kd.powf(h));

        let active_subunits = (w_b + w_p + w_t + w_a) / total_c;
        let prob = a * active_subunits
            + b * active_subunits.powi(2)
            + c * active_subunits.powi(3);

        let a0 = w_i * k_ib * cam_bound;
        let a1 = k_bi * w_b;
        let a2 = total_c * k_aa * prob * (c_b * w_b / total_c.powi(2))
            * (2.0 * c_b * w_b + c_p * w_p + c_t * w_t + c_a * w_a);
        let a3 = k_pt * w_p;
        let a4 = k_tp * w_t * ca_h;
        let a5 = k_ta * w_t;
        let a6 = k_at * w_a * (cam_t - cam_bound);
        let a7 = vm_phos * w_p / (kd_phos + w_p / total_c);
        let a8 = vm_phos * w_t / (kd_phos + w_t / total_c);
        let a9 = vm_phos * w_a / (kd_phos + w_a / total_c);

        out_cumulative[0] = a0;
        out_cumulative[1] = out_cumulative[0] + a1;
        out_cumulative[2] = out_cumulative[1] + a2;
        out_cumulative[3] = out_cumulative[2] + a3;
        out_cumulative[4] = out_cumulative[3] + a4;
        out_cumulative[5] = out_cumulative[4] + a5;
        out_cumulative[6] = out_cumulative[5] + a6;
        out_cumulative[7] = out_cumulative[6] + a7;
        out_cumulative[8] = out_cumulative[7] + a8;
        out_cumulative[9] = out_cumulative[8] + a9;
    }

    fn stoichiometry(&self) -> &'static [&'static [i32]] {
        &[
            // W_I
            &[-1, 1, 0, 0, 0, 0, 0, 0, 0, 1],
            // W_B
            &[1, -1, -1, 0, 0, 0, 0, 1, 1, 0],
            // W_P
            &[0, 0, 1, -1, 1, 0, 0, -1, 0, 0],
            // W_T
            &[0, 0, 0, 1, -1, -1, 1, 0, -1, 0],
            // W_A
            &[0, 0, 0, 0, 0, 1, -1, 0, 0, -1],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::merge_parameters;

    fn total(counts: &[i64; 5]) -> i64 {
        counts.iter().sum()
    }

    #[test]
    fn five_state_conservation_holds() {
        let model = CaMKII;
        let (params, _) = merge_parameters(model.default_parameters(), None);
        let counts: [i64; 5] = [40, 0, 0, 0, 0];
        let expected = total(&counts);
        let mut cumulative = [0.0; 10];
        model.compute_cumulative_propensities(&params, &counts, 1000.0, &mut cumulative);
        let stm = model.stoichiometry();
        for r in 0..10 {
            let mut next = counts;
            for (s, row) in stm.iter().enumerate() {
                next[s] += row[r];
            }
            assert_eq!(total(&next), expected);
        }
    }

    #[test]
    fn stoichiometry_columns_sum_to_zero() {
        let model = CaMKII;
        let stm = model.stoichiometry();
        for r in 0..10 {
            let col_sum: i32 = stm.iter().map(|row| row[r]).sum();
            assert_eq!(col_sum, 0, "reaction {r} does not conserve subunit count");
        }
    }
}
