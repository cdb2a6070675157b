//! Protein Kinase C: ten reversible binding/translocation pairs between
//! cytosolic and membrane-associated forms, gated by calcium, arachidonic
//! acid (AA) and diacylglycerol (DAG), the latter two held at fixed
//! concentrations.
//!
//! Rate law, defaults and stoichiometry transcribed from
//! `examples/original_source/src/pkc_model.cpp`.

use crate::model::Model;
use crate::param::Parameters;

pub struct Pkc;

const SPECIES: [&str; 11] = [
    "PKC_inact",
    "CaPKC",
    "DAGCaPKC",
    "AADAGPKC_inact",
    "AADAGPKC_act",
    "PKCbasal",
    "AAPKC",
    "CaPKCmemb",
    "AACaPKC",
    "DAGPKCmemb",
    "DAGPKC",
];

const PARAMS: [(&str, f64); 22] = [
    ("k1", 1.0),
    ("k2", 50.0),
    ("k3", 1.2e-7),
    ("k4", 0.1),
    ("k5", 1.2705),
    ("k6", 3.5026),
    ("k7", 1.2e-7),
    ("k8", 0.1),
    ("k9", 1.0),
    ("k10", 0.1),
    ("k11", 2.0),
    ("k12", 0.2),
    ("k13", 0.0006),
    ("k14", 0.5),
    ("k15", 7.998e-6),
    ("k16", 8.6348),
    ("k17", 6e-7),
    ("k18", 0.1),
    ("k19", 1.8e-5),
    ("k20", 2.0),
    ("AA", 11000.0),
    ("DAG", 5000.0),
];

const INIT_CONC: [(&str, f64); 11] = [
    ("PKC_inact", 1000.0),
    ("CaPKC", 0.0),
    ("DAGCaPKC", 0.0),
    ("AADAGPKC_inact", 0.0),
    ("AADAGPKC_act", 0.0),
    ("PKCbasal", 20.0),
    ("AAPKC", 0.0),
    ("CaPKCmemb", 0.0),
    ("AACaPKC", 0.0),
    ("DAGPKCmemb", 0.0),
    ("DAGPKC", 0.0),
];

impl Model for Pkc {
    fn name(&self) -> &'static str {
        "pkc"
    }

    fn species_names(&self) -> &[&'static str] {
        &SPECIES
    }

    fn reaction_count(&self) -> usize {
        20
    }

    fn default_parameters(&self) -> &[(&'static str, f64)] {
        &PARAMS
    }

    fn default_initial_concentrations(&self) -> &[(&'static str, f64)] {
        &INIT_CONC
    }

    fn default_volume(&self) -> f64 {
        1e-15
    }

    fn compute_cumulative_propensities(
        &self,
        params: &Parameters,
        counts: &[i64],
        calcium_now: f64,
        out_cumulative: &mut [f64],
    ) {
        let k1 = params.get("k1");
        let k2 = params.get("k2");
        let k3 = params.get("k3");
        let k4 = params.get("k4");
        let k5 = params.get("k5");
        let k6 = params.get("k6");
        let k7 = params.get("k7");
        let k8 = params.get("k8");
        let k9 = params.get("k9");
        let k10 = params.get("k10");
        let k11 = params.get("k11");
        let k12 = params.get("k12");
        let k13 = params.get("k13");
        let k14 = params.get("k14");
        let k15 = params.get("k15");
        let k16 = params.get("k16");
        let k17 = params.get("k17");
        let k18 = params.get("k18");
        let k19 = params.get("k19");
        let k20 = params.get("k20");
        let aa = params.get("AA");
        let dag = params.get("DAG");

        let x0 = counts[0] as f64;
        let x1 = counts[1] as f64;
        let x2 = counts[2] as f64;
        let x3 = counts[3] as f64;
        let x4 = counts[4] as f64;
        let x5 = counts[5] as f64;
        let x6 = counts[6] as f64;
        let x7 = counts[7] as f64;
        let x8 = counts[8] as f64;
        let x9 = counts[9] as f64;
        let x10 = counts[10] as f64;

        let a0 = k1 * x0;
        let a1 = k2 * x5;
        let a2 = k3 * aa * x0;
        let a3 = k4 * x6;
        let a4 = k5 * x1;
        let a5 = k6 * x7;
        let a6 = k7 * aa * x1;
        let a7 = k8 * x8;
        let a8 = k9 * x2;
        let a9 = k10 * x9;
        let a10 = k11 * x3;
        let a11 = k12 * x4;
        let a12 = calcium_now * k13 * x0;
        let a13 = k14 * x1;
        let a14 = k15 * dag * x1;
        let a15 = k16 * x2;
        let a16 = k17 * dag * x0;
        let a17 = k18 * x10;
        let a18 = k19 * aa * x10;
        let a19 = k20 * x3;

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
        out_cumulative[10] = out_cumulative[9] + a10;
        out_cumulative[11] = out_cumulative[10] + a11;
        out_cumulative[12] = out_cumulative[11] + a12;
        out_cumulative[13] = out_cumulative[12] + a13;
        out_cumulative[14] = out_cumulative[13] + a14;
        out_cumulative[15] = out_cumulative[14] + a15;
        out_cumulative[16] = out_cumulative[15] + a16;
        out_cumulative[17] = out_cumulative[16] + a17;
        out_cumulative[18] = out_cumulative[17] + a18;
        out_cumulative[19] = out_cumulative[18] + a19;
    }

    fn stoichiometry(&self) -> &'static [&'static [i32]] {
        &[
            // PKC_inact
            &[-1, 1, -1, 1, 0, 0, 0, 0, 0, 0, 0, 0, -1, 1, 0, 0, -1, 1, 0, 0],
            // CaPKC
            &[0, 0, 0, 0, -1, 1, -1, 1, 0, 0, 0, 0, 1, -1, -1, 1, 0, 0, 0, 0],
            // DAGCaPKC
            &[0, 0, 0, 0, 0, 0, 0, 0, -1, 1, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0],
            // AADAGPKC_inact
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 1, 0, 0, 0, 0, 0, 0, 1, -1],
            // AADAGPKC_act
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0, 0, 0],
            // PKCbasal
            &[1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            // AAPKC
            &[0, 0, 1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            // CaPKCmemb
            &[0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            // AACaPKC
            &[0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            // DAGPKCmemb
            &[0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            // DAGPKC
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -1, -1, 1],
        ]
    }
}
