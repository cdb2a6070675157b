//! Parameter Store (spec.md §4.1) and the default/override merge (§4.2).
//!
//! Propensity functions never do string-keyed lookups in the hot path: a
//! model resolves its named defaults into a dense [`Parameters`] vector
//! once, at merge time, and reads positionally afterwards (spec.md §9,
//! "Parameter lookup in hot paths").

use std::collections::HashMap;

use crate::error::SimWarning;

/// A read-only, positionally-indexed parameter vector.
#[derive(Debug, Clone)]
pub struct Parameters {
    values: Vec<f64>,
    index: HashMap<&'static str, usize>,
}

impl Parameters {
    pub fn get(&self, name: &'static str) -> f64 {
        self.values[self.index[name]]
    }
}

/// Merges `overrides` into `defaults`, preserving the key set of `defaults`.
/// Unknown override keys are dropped and reported as warnings; the run
/// proceeds using the default value for that key (spec.md §4.2, §7).
pub fn merge_parameters(
    defaults: &[(&'static str, f64)],
    overrides: Option<&HashMap<String, f64>>,
) -> (Parameters, Vec<SimWarning>) {
    let mut values: Vec<f64> = defaults.iter().map(|(_, v)| *v).collect();
    let mut index = HashMap::with_capacity(defaults.len());
    for (i, (name, _)) in defaults.iter().enumerate() {
        index.insert(*name, i);
    }
    let mut warnings = Vec::new();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            match index.get(key.as_str()) {
                Some(&i) => values[i] = *value,
                None => {
                    log::warn!("unknown parameter key '{key}', default value kept");
                    warnings.push(SimWarning::UnknownParameter(key.clone()));
                }
            }
        }
    }
    (Parameters { values, index }, warnings)
}

/// Merges user-supplied initial concentrations (nmol/L) into a model's
/// defaults, preserving the defaults' declaration order — that order fixes
/// the species index assignment used by propensities and stoichiometry
/// (spec.md §4.2).
pub fn merge_initial_concentrations(
    defaults: &[(&'static str, f64)],
    overrides: Option<&HashMap<String, f64>>,
) -> (Vec<f64>, Vec<SimWarning>) {
    let mut values: Vec<f64> = defaults.iter().map(|(_, v)| *v).collect();
    let mut warnings = Vec::new();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            match defaults.iter().position(|(name, _)| *name == key) {
                Some(i) => values[i] = *value,
                None => {
                    log::warn!("unknown initial-concentration key '{key}', default value kept");
                    warnings.push(SimWarning::UnknownInitialConcentration(key.clone()));
                }
            }
        }
    }
    (values, warnings)
}

/// Merges a user-supplied volume override (keyed `"vol"`) into the
/// model's default volume.
pub fn merge_volume(
    default_volume: f64,
    overrides: Option<&HashMap<String, f64>>,
) -> (f64, Vec<SimWarning>) {
    let mut volume = default_volume;
    let mut warnings = Vec::new();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            if key == "vol" {
                volume = *value;
            } else {
                log::warn!("unknown volume key '{key}', default value kept");
                warnings.push(SimWarning::UnknownVolumeKey(key.clone()));
            }
        }
    }
    (volume, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_known_key_and_warns_on_unknown() {
        let defaults = [("k_on", 0.025), ("k_off", 0.005)];
        let mut overrides = HashMap::new();
        overrides.insert("k_on".to_string(), 1.0);
        overrides.insert("bogus".to_string(), 2.0);
        let (params, warnings) = merge_parameters(&defaults, Some(&overrides));
        assert_eq!(params.get("k_on"), 1.0);
        assert_eq!(params.get("k_off"), 0.005);
        assert_eq!(warnings, vec![SimWarning::UnknownParameter("bogus".into())]);
    }

    #[test]
    fn initial_concentrations_preserve_declaration_order() {
        let defaults = [("Prot_inact", 5.0), ("Prot_act", 0.0)];
        let (values, warnings) = merge_initial_concentrations(&defaults, None);
        assert_eq!(values, vec![5.0, 0.0]);
        assert!(warnings.is_empty());
    }
}
