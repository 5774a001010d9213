//! Runs the evaluation stages in dependency order.

use tracing::{debug, info};
use wobos_core::{validate, Diagnostics, PlantConfig, WobosResult};

use crate::development::{self, HardCosts};
use crate::result::BosResult;
use crate::{dimensions, electrical, installation, port, soft_costs, substructure};

/// Evaluate the full BOS cost of one plant.
///
/// The configuration is validated first; an invalid field is reported as
/// [`wobos_core::WobosError::Validation`] and no stage runs.
pub fn evaluate(config: &PlantConfig) -> WobosResult<BosResult> {
    validate(config)?;

    let mut diag = Diagnostics::new();
    let fleet = config.fleet();

    let dimensions = dimensions::evaluate(config);
    let substructure = substructure::evaluate(config, &dimensions, &mut diag);
    let electrical = electrical::evaluate(config, &substructure, &fleet, &mut diag)?;
    let installation = installation::evaluate(
        config,
        &dimensions,
        &substructure,
        &electrical,
        &fleet,
        &mut diag,
    );
    let port = port::evaluate(
        config,
        &dimensions,
        &substructure,
        &electrical,
        &installation.schedule,
        &fleet,
    );

    let hard = HardCosts {
        substructure: substructure.total_cost,
        electrical: electrical.total_cost,
        installation: installation.total_cost,
        port_and_staging: port.total_cost,
    };
    debug!(hard_total = hard.total(), "hard costs complete");

    let development = development::evaluate(config, &hard, &installation.schedule);
    let soft_costs = soft_costs::evaluate(config, &hard, &development);

    info!(
        substructure = %config.variants.substructure,
        turbines = config.site.n_turbines,
        total_bos_cost = soft_costs.total_bos_cost,
        diagnostics = diag.issues.len(),
        "BOS evaluation complete"
    );

    Ok(BosResult {
        dimensions,
        substructure,
        electrical,
        installation,
        port,
        development,
        soft_costs,
        diagnostics: diag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wobos_core::{SubstructureKind, WobosError};

    #[test]
    fn test_invalid_config_is_rejected_before_evaluation() {
        let mut config = PlantConfig::default();
        config.turbine.rating_mw = 0.0;
        let err = evaluate(&config).unwrap_err();
        assert!(matches!(err, WobosError::Validation { .. }));
        assert_eq!(err.field(), Some("turbine.rating_mw"));
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        for kind in [
            SubstructureKind::Monopile,
            SubstructureKind::Jacket,
            SubstructureKind::Spar,
            SubstructureKind::Semisubmersible,
        ] {
            let mut config = PlantConfig::default();
            config.variants.substructure = kind;
            if kind.is_floating() {
                config.site.water_depth_m = 250.0;
            }
            let result = evaluate(&config).unwrap();
            let sum: f64 = result.breakdown().iter().map(|(_, v)| v).sum();
            let total = result.total_bos_cost();
            assert!(total.is_finite() && total > 0.0, "{kind:?}");
            assert!((sum - total).abs() / total < 1e-12, "{kind:?}");
        }
    }

    #[test]
    fn test_grand_total_adds_turbine_capital() {
        let config = PlantConfig::default();
        let result = evaluate(&config).unwrap();
        assert_eq!(
            result.total_capital_cost(),
            result.total_bos_cost() + config.turbine_capital_cost()
        );
    }

    #[test]
    fn test_variable_map_exposes_stage_scalars() {
        let result = evaluate(&PlantConfig::default()).unwrap();
        let vars = result.to_variable_map().unwrap();
        assert_eq!(vars["soft_costs.total_bos_cost"], result.total_bos_cost());
        assert_eq!(
            vars["installation.schedule.total_days"],
            result.installation.schedule.total_days
        );
        assert!(vars.contains_key("installation.turbine_ledger.entries[0].cost"));
        assert!(!vars.keys().any(|k| k.starts_with("diagnostics")));
        assert!(vars.values().all(|v| v.is_finite()));
    }
}
