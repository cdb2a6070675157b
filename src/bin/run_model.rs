//! Demo binary: runs one of the six reaction models against a simple
//! calcium pulse and prints the resulting trajectory to stdout as CSV.
//!
//! Plays the same role as rebop's own `vilar` binary (a runnable example
//! alongside the library), adapted to this crate's models and CLI shape.

use std::env;
use std::process::ExitCode;

use calcium_kinetics::{InputSignal, ModelId, ModelParamOverrides, SimParams};

fn usage() -> String {
    "usage: run_model <model> [seed]\n\
     models: calmodulin, calcineurin, camkii, pkc, ano1, glycogen_phosphorylase"
        .to_string()
}

fn parse_model(name: &str) -> Option<ModelId> {
    match name {
        "calmodulin" => Some(ModelId::Calmodulin),
        "calcineurin" => Some(ModelId::Calcineurin),
        "camkii" => Some(ModelId::CaMKII),
        "pkc" => Some(ModelId::Pkc),
        "ano1" => Some(ModelId::Ano1),
        "glycogen_phosphorylase" => Some(ModelId::GlycogenPhosphorylase),
        _ => None,
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(model_name) = args.get(1) else {
        eprintln!("{}", usage());
        return ExitCode::FAILURE;
    };
    let Some(model_id) = parse_model(model_name) else {
        eprintln!("unknown model '{model_name}'\n{}", usage());
        return ExitCode::FAILURE;
    };
    let seed: u64 = args
        .get(2)
        .map(|s| s.parse().unwrap_or(0))
        .unwrap_or(0);

    log::info!("running {model_name} with seed {seed}");

    // A minimal calcium pulse: baseline, a step up, then back down.
    let signal = InputSignal::new(
        vec![0.0, 10.0, 20.0, 100.0],
        vec![50.0, 1000.0, 50.0, 50.0],
    )
    .expect("hardcoded demo signal is well-formed");
    let sim_params = SimParams::uniform(0.1, 100.0);
    let overrides = ModelParamOverrides::default();

    let (trajectory, warnings) =
        match calcium_kinetics::simulate(model_id, &signal, &sim_params, &overrides, seed) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("simulation failed: {err}");
                return ExitCode::FAILURE;
            }
        };

    for warning in &warnings {
        log::warn!("{warning}");
    }

    print!("time,Ca");
    for name in trajectory.species_names() {
        print!(",{name}");
    }
    println!();

    for row in 0..trajectory.len() {
        print!("{},{}", trajectory.time(row), trajectory.calcium(row));
        for col in 0..trajectory.species_names().len() {
            print!(",{}", trajectory.species(row, col));
        }
        println!();
    }

    ExitCode::SUCCESS
}
