//! The derived-state record produced by one evaluation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wobos_core::{Diagnostics, WobosResult};

use crate::development::DevelopmentOutputs;
use crate::dimensions::TurbineDimensions;
use crate::electrical::ElectricalOutputs;
use crate::installation::InstallationOutputs;
use crate::port::PortOutputs;
use crate::soft_costs::SoftCostOutputs;
use crate::substructure::SubstructureOutputs;

/// Every intermediate and final value of a BOS evaluation, grouped by stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BosResult {
    pub dimensions: TurbineDimensions,
    pub substructure: SubstructureOutputs,
    pub electrical: ElectricalOutputs,
    pub installation: InstallationOutputs,
    pub port: PortOutputs,
    pub development: DevelopmentOutputs,
    pub soft_costs: SoftCostOutputs,
    /// Recoveries made while evaluating (clamps, skipped candidates, snaps).
    pub diagnostics: Diagnostics,
}

impl BosResult {
    pub fn total_bos_cost(&self) -> f64 {
        self.soft_costs.total_bos_cost
    }

    pub fn total_capital_cost(&self) -> f64 {
        self.soft_costs.total_capital_cost
    }

    /// Top-level cost categories in reporting order. They sum to
    /// [`total_bos_cost`](Self::total_bos_cost).
    pub fn breakdown(&self) -> Vec<(&'static str, f64)> {
        let dev = &self.development;
        vec![
            ("substructure", self.substructure.total_cost),
            ("electrical", self.electrical.total_cost),
            ("installation", self.installation.total_cost),
            ("port_and_staging", self.port.total_cost),
            ("engineering_and_management", dev.enm_cost),
            ("development", dev.development_cost),
            ("soft_costs", self.soft_costs.soft_cost),
        ]
    }

    /// Flattens every numeric output into a dotted-path map, e.g.
    /// `electrical.array.cable1_cost` or
    /// `installation.turbine_ledger.entries[0].cost`.
    ///
    /// Text fields, absent optionals and the diagnostics are left out.
    pub fn to_variable_map(&self) -> WobosResult<BTreeMap<String, f64>> {
        let mut vars = BTreeMap::new();
        if let Value::Object(stages) = serde_json::to_value(self)? {
            for (stage, value) in &stages {
                if stage == "diagnostics" {
                    continue;
                }
                flatten(stage, value, &mut vars);
            }
        }
        Ok(vars)
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, f64>) {
    match value {
        Value::Number(n) => {
            if let Some(x) = n.as_f64() {
                out.insert(prefix.to_string(), x);
            }
        }
        Value::Object(fields) => {
            for (name, inner) in fields {
                flatten(&format!("{prefix}.{name}"), inner, out);
            }
        }
        Value::Array(items) => {
            for (idx, inner) in items.iter().enumerate() {
                flatten(&format!("{prefix}[{idx}]"), inner, out);
            }
        }
        Value::Null | Value::Bool(_) | Value::String(_) => {}
    }
}
