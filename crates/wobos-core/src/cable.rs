//! Cable catalogs and cable selections.
//!
//! A catalog is a list of voltage options, each carrying an ordered list of
//! gauges. Order matters: the cable optimizers break cost ties in favour of
//! the candidate encountered first (voltage, then gauge).

use serde::{Deserialize, Serialize};

/// One array cable gauge at a given voltage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrayCableSpec {
    /// Conductor cross section (mm²).
    pub size_mm2: f64,
    /// Procurement cost ($/m).
    pub cost_per_m: f64,
    pub mass_kg_per_m: f64,
    /// Cost of each turbine interface (hang-off, termination).
    pub turbine_interface_cost: f64,
    /// Cost of each substation interface.
    pub substation_interface_cost: f64,
    pub current_rating_a: f64,
}

/// One export cable gauge at a given voltage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportCableSpec {
    pub size_mm2: f64,
    pub cost_per_m: f64,
    pub mass_kg_per_m: f64,
    pub substation_interface_cost: f64,
    pub current_rating_a: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayVoltageOption {
    pub voltage_kv: f64,
    pub cables: Vec<ArrayCableSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportVoltageOption {
    pub voltage_kv: f64,
    pub cables: Vec<ExportCableSpec>,
}

/// Candidate tables searched by the cable optimizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CableCatalogs {
    pub array: Vec<ArrayVoltageOption>,
    pub export: Vec<ExportVoltageOption>,
}

impl Default for CableCatalogs {
    fn default() -> Self {
        Self::reference()
    }
}

const ARRAY_SIZES: [f64; 11] = [
    95.0, 120.0, 150.0, 185.0, 240.0, 300.0, 400.0, 500.0, 630.0, 800.0, 1000.0,
];
const ARRAY_CURRENT: [f64; 11] = [
    300.0, 340.0, 375.0, 420.0, 480.0, 530.0, 590.0, 655.0, 715.0, 775.0, 825.0,
];

// (cost $/m, mass kg/m, turbine interface $, substation interface $)
const ARRAY_33KV: [(f64, f64, f64, f64); 11] = [
    (185.889, 20.384, 8410.0, 19610.0),
    (202.788, 22.854, 8615.0, 19815.0),
    (208.421, 23.912, 8861.0, 20062.0),
    (236.586, 25.676, 9149.0, 20349.0),
    (270.384, 28.910, 9600.0, 20800.0),
    (315.448, 32.242, 10092.0, 21292.0),
    (360.512, 37.142, 10913.0, 22113.0),
    (422.475, 42.336, 11733.0, 22933.0),
    (478.805, 48.706, 12800.0, 24000.0),
    (585.832, 57.428, 14195.0, 25395.0),
    (698.492, 66.738, 15836.0, 27036.0),
];

const ARRAY_66KV: [(f64, f64, f64, f64); 11] = [
    (225.320, 21.6, 8831.0, 20591.0),
    (242.219, 23.8, 9046.0, 20806.0),
    (253.485, 25.7, 9304.0, 21065.0),
    (281.650, 28.0, 9606.0, 21366.0),
    (326.714, 31.3, 10080.0, 21840.0),
    (383.044, 34.3, 10597.0, 22357.0),
    (433.741, 39.2, 11459.0, 23219.0),
    (506.970, 45.4, 12320.0, 24080.0),
    (574.566, 52.0, 13440.0, 25200.0),
    (704.125, 60.1, 14905.0, 26665.0),
    (844.950, 71.7, 16628.0, 28388.0),
];

const EXPORT_SIZES: [f64; 10] = [
    300.0, 400.0, 500.0, 630.0, 800.0, 1000.0, 1200.0, 1600.0, 2000.0, 2500.0,
];
const EXPORT_CURRENT: [f64; 10] = [
    530.0, 590.0, 655.0, 715.0, 775.0, 825.0, 990.0, 1061.0, 1299.0, 1375.0,
];

// (cost $/m, mass kg/m, substation interface $)
const EXPORT_132KV: [(f64, f64, f64); 10] = [
    (433.504, 48.0, 57500.0),
    (520.489, 51.1, 60000.0),
    (596.388, 58.0, 62500.0),
    (689.479, 65.2, 65000.0),
    (843.823, 74.0, 67500.0),
    (1006.054, 85.4, 70000.0),
    (1168.284, 113.147, 72500.0),
    (1492.745, 131.387, 75000.0),
    (1818.332, 149.627, 77500.0),
    (2223.908, 172.427, 80000.0),
];

const EXPORT_220KV: [(f64, f64, f64); 10] = [
    (495.411, 71.9, 57500.0),
    (578.187, 76.5, 60000.0),
    (681.863, 81.3, 62500.0),
    (788.620, 86.7, 65000.0),
    (966.623, 95.3, 67500.0),
    (1159.271, 104.0, 70000.0),
    (1336.148, 113.147, 72500.0),
    (1676.499, 131.387, 75000.0),
    (2042.784, 149.627, 77500.0),
    (2498.703, 172.427, 80000.0),
];

fn array_option(voltage_kv: f64, rows: &[(f64, f64, f64, f64); 11]) -> ArrayVoltageOption {
    let cables = rows
        .iter()
        .zip(ARRAY_SIZES)
        .zip(ARRAY_CURRENT)
        .map(|((&(cost, mass, turb, subs), size), current)| ArrayCableSpec {
            size_mm2: size,
            cost_per_m: cost,
            mass_kg_per_m: mass,
            turbine_interface_cost: turb,
            substation_interface_cost: subs,
            current_rating_a: current,
        })
        .collect();
    ArrayVoltageOption { voltage_kv, cables }
}

fn export_option(voltage_kv: f64, rows: &[(f64, f64, f64); 10]) -> ExportVoltageOption {
    let cables = rows
        .iter()
        .zip(EXPORT_SIZES)
        .zip(EXPORT_CURRENT)
        .map(|((&(cost, mass, subs), size), current)| ExportCableSpec {
            size_mm2: size,
            cost_per_m: cost,
            mass_kg_per_m: mass,
            substation_interface_cost: subs,
            current_rating_a: current,
        })
        .collect();
    ExportVoltageOption { voltage_kv, cables }
}

impl CableCatalogs {
    /// Reference 33/66 kV array and 132/220 kV export tables.
    pub fn reference() -> Self {
        Self {
            array: vec![
                array_option(33.0, &ARRAY_33KV),
                array_option(66.0, &ARRAY_66KV),
            ],
            export: vec![
                export_option(132.0, &EXPORT_132KV),
                export_option(220.0, &EXPORT_220KV),
            ],
        }
    }

    pub fn array_cable(&self, voltage_kv: f64, size_mm2: f64) -> Option<ArrayCableSpec> {
        self.array
            .iter()
            .find(|opt| opt.voltage_kv == voltage_kv)
            .and_then(|opt| opt.cables.iter().find(|c| c.size_mm2 == size_mm2))
            .copied()
    }

    pub fn export_cable(&self, voltage_kv: f64, size_mm2: f64) -> Option<ExportCableSpec> {
        self.export
            .iter()
            .find(|opt| opt.voltage_kv == voltage_kv)
            .and_then(|opt| opt.cables.iter().find(|c| c.size_mm2 == size_mm2))
            .copied()
    }

    /// Total number of (voltage, cable 1, cable 2) candidates the array search visits.
    pub fn array_candidate_count(&self) -> usize {
        self.array
            .iter()
            .map(|opt| {
                let m = opt.cables.len();
                m * m.saturating_sub(1) / 2
            })
            .sum()
    }
}

/// The pair of array cables used by the plant.
///
/// Cable 1 connects turbines along a string; cable 2 carries the combined
/// string load back to the substation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrayCableSelection {
    pub voltage_kv: f64,
    pub cable1: ArrayCableSpec,
    pub cable2: ArrayCableSpec,
}

impl ArrayCableSelection {
    /// Look up a selection in `catalogs` by voltage and the two gauges.
    pub fn from_catalog(
        catalogs: &CableCatalogs,
        voltage_kv: f64,
        size1_mm2: f64,
        size2_mm2: f64,
    ) -> Option<Self> {
        Some(Self {
            voltage_kv,
            cable1: catalogs.array_cable(voltage_kv, size1_mm2)?,
            cable2: catalogs.array_cable(voltage_kv, size2_mm2)?,
        })
    }

    pub fn label(&self) -> String {
        format!(
            "{} kV / {} + {} mm²",
            self.voltage_kv, self.cable1.size_mm2, self.cable2.size_mm2
        )
    }
}

impl Default for ArrayCableSelection {
    fn default() -> Self {
        let option = array_option(33.0, &ARRAY_33KV);
        Self {
            voltage_kv: option.voltage_kv,
            cable1: option.cables[0],
            cable2: option.cables[1],
        }
    }
}

/// The export cable used by the plant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportCableSelection {
    pub voltage_kv: f64,
    pub cable: ExportCableSpec,
}

impl ExportCableSelection {
    pub fn from_catalog(catalogs: &CableCatalogs, voltage_kv: f64, size_mm2: f64) -> Option<Self> {
        Some(Self {
            voltage_kv,
            cable: catalogs.export_cable(voltage_kv, size_mm2)?,
        })
    }

    pub fn label(&self) -> String {
        format!("{} kV / {} mm²", self.voltage_kv, self.cable.size_mm2)
    }
}

impl Default for ExportCableSelection {
    fn default() -> Self {
        let option = export_option(220.0, &EXPORT_220KV);
        Self {
            voltage_kv: option.voltage_kv,
            cable: option.cables[0],
        }
    }
}
