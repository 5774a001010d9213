//! Text renderings of an evaluation for the terminal.

use std::io::Write;

use anyhow::Result;
use tabwriter::TabWriter;
use wobos_algo::installation::Ledger;
use wobos_algo::BosResult;
use wobos_core::PlantConfig;

use crate::cli::LedgerPhase;

/// Cost breakdown table with $/kW alongside each category.
pub fn write_breakdown<W: Write>(out: W, config: &PlantConfig, result: &BosResult) -> Result<()> {
    let kw = config.plant_capacity_mw() * 1000.0;
    let mut writer = TabWriter::new(out);
    writeln!(
        writer,
        "Plant: {} x {} MW {} ({} MW)",
        config.site.n_turbines,
        config.turbine.rating_mw,
        config.variants.substructure,
        config.plant_capacity_mw()
    )?;
    writeln!(writer)?;
    writeln!(writer, "CATEGORY\tCOST ($)\t$/kW")?;
    for (name, cost) in result.breakdown() {
        writeln!(writer, "{name}\t{cost:.0}\t{:.2}", cost / kw)?;
    }
    let total = result.total_bos_cost();
    writeln!(writer, "total_bos_cost\t{total:.0}\t{:.2}", total / kw)?;
    let capital = result.total_capital_cost();
    writeln!(writer, "total_capital_cost\t{capital:.0}\t{:.2}", capital / kw)?;
    writeln!(writer)?;

    let elec = &result.electrical;
    writeln!(writer, "Array cables:\t{}", elec.array.selection.label())?;
    writeln!(
        writer,
        "Export cable:\t{} x {}",
        elec.export.n_cables,
        elec.export.selection.label()
    )?;
    writeln!(writer, "Substations:\t{}", elec.n_substations())?;
    writeln!(
        writer,
        "Installation:\t{} days",
        result.installation.schedule.total_days
    )?;
    writeln!(writer)?;
    write!(writer, "{}", result.diagnostics)?;
    writer.flush()?;
    Ok(())
}

/// One `path = value` line per scalar output, sorted by path.
pub fn write_flat<W: Write>(mut out: W, result: &BosResult) -> Result<()> {
    for (path, value) in result.to_variable_map()? {
        writeln!(out, "{path} = {value}")?;
    }
    Ok(())
}

fn ledgers(result: &BosResult, phase: LedgerPhase) -> Vec<(&'static str, &Ledger)> {
    let inst = &result.installation;
    let all = [
        (LedgerPhase::Turbine, "turbine", &inst.turbine_ledger),
        (LedgerPhase::Substructure, "substructure", &inst.substructure_ledger),
        (LedgerPhase::Electrical, "electrical", &inst.electrical_ledger),
        (LedgerPhase::Mobilization, "mobilization", &inst.mobilization_ledger),
    ];
    all.into_iter()
        .filter(|(p, _, _)| phase == LedgerPhase::All || *p == phase)
        .map(|(_, name, ledger)| (name, ledger))
        .collect()
}

/// Vessel charges per phase, each followed by its subtotal.
pub fn write_ledgers<W: Write>(out: W, result: &BosResult, phase: LedgerPhase) -> Result<()> {
    let mut writer = TabWriter::new(out);
    writeln!(writer, "PHASE\tID\tVESSEL\tROLE\tDAYS\tCOST ($)")?;
    for (name, ledger) in ledgers(result, phase) {
        for entry in &ledger.entries {
            writeln!(
                writer,
                "{name}\t{}\t{}\t{}\t{}\t{:.0}",
                entry.vessel_id, entry.name, entry.role, entry.days, entry.cost
            )?;
        }
        writeln!(writer, "{name}\t\t\ttotal\t\t{:.0}", ledger.total())?;
    }
    writer.flush()?;
    Ok(())
}
