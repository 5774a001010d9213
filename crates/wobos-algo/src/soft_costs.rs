//! Insurance, contingency, construction financing and the BOS totals.
//!
//! ```text
//! capex     = installation + development + electrical + E&M + port&staging + substructure
//! insurance = rate · (turbine capital + capex)
//! contingency = procurement · (turbine capital + capex - installation)
//!             + install · installation
//! soft      = insurance + commissioning + decommissioning + contingency
//! financing = (finance factor - 1) · (turbine capital + capex + soft)
//! total BOS = capex + soft + financing
//! total capital = total BOS + turbine capital
//! ```

use serde::{Deserialize, Serialize};
use wobos_core::{FinancialConfig, PlantConfig};

use crate::development::{DevelopmentOutputs, HardCosts};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftCostOutputs {
    pub bos_capex: f64,
    pub construction_insurance_cost: f64,
    pub contingency_cost: f64,
    pub finance_factor: f64,
    pub construction_finance_cost: f64,
    /// Insurance, commissioning, decommissioning, contingency and financing.
    pub soft_cost: f64,
    pub total_bos_cost: f64,
    pub turbine_capital_cost: f64,
    pub total_capital_cost: f64,
}

/// Multiplier on capital spent during construction.
///
/// Each yearly draw `d` is weighted by `1 + (1 - tax) * ((1 + idc)^(d + 0.5) - 1)`.
/// The exponent is the draw fraction itself, not the year it falls in.
pub fn finance_factor(fin: &FinancialConfig) -> f64 {
    let growth = 1.0 + fin.interest_during_construction;
    fin.capital_draws
        .iter()
        .map(|&draw| draw * (1.0 + (1.0 - fin.tax_rate) * (growth.powf(draw + 0.5) - 1.0)))
        .sum()
}

pub fn evaluate(
    config: &PlantConfig,
    hard: &HardCosts,
    dev: &DevelopmentOutputs,
) -> SoftCostOutputs {
    let fin = &config.financial;
    let turbine_capital_cost = config.turbine_capital_cost();

    let bos_capex = hard.installation
        + dev.development_cost
        + hard.electrical
        + dev.enm_cost
        + hard.port_and_staging
        + hard.substructure;

    let construction_insurance_cost =
        fin.construction_insurance * (turbine_capital_cost + bos_capex);
    let contingency_cost = fin.procurement_contingency
        * (turbine_capital_cost + bos_capex - hard.installation)
        + fin.install_contingency * hard.installation;

    let pre_finance = construction_insurance_cost
        + dev.commissioning_cost
        + dev.decommissioning_cost
        + contingency_cost;

    let finance_factor = finance_factor(fin);
    let construction_finance_cost =
        (finance_factor - 1.0) * (turbine_capital_cost + bos_capex + pre_finance);
    let soft_cost = pre_finance + construction_finance_cost;

    let total_bos_cost = bos_capex + soft_cost;

    SoftCostOutputs {
        bos_capex,
        construction_insurance_cost,
        contingency_cost,
        finance_factor,
        construction_finance_cost,
        soft_cost,
        total_bos_cost,
        turbine_capital_cost,
        total_capital_cost: total_bos_cost + turbine_capital_cost,
    }
}
