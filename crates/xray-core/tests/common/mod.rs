#![allow(dead_code)]

use xrayref::engine::{PropertyTable, Resolver};

pub const ELEMENTS_CSV: &str = "\
z,symbol,name,language,atomic_weight,mass_density_kg_per_m3,reference
26,Fe,Iron,en,55.845,7874,ref1
26,,Fer,fr,,,ref1
26,,,,58.0,,ref2
13,Al,Aluminium,en,26.9815,2700,ref1
";

pub const SUBSHELLS_CSV: &str = "\
z,subshell,binding_energy_ev,radiative_width_ev,nonradiative_width_ev,occupancy,reference
26,K,7112.0,0.68,0.55,2,ref1
26,L3,706.8,,,4,ref1
26,LIII,708.1,,,,ref2
";

pub const TRANSITIONS_CSV: &str = "\
z,destination,source,secondary_destination,satellite,energy_ev,probability,relative_weight,reference
26,K,L3,,,6403.84,0.1966,1.0,ref1
26,K,L2,,,6390.84,0.1002,0.51,ref1
26,K,M3,,,7057.98,0.0235,,ref1
26,K,M2,,,7057.98,0.0121,,ref1
26,K,M5,,,7108.1,0.0003,,ref1
26,L3,M5,,,705.0,0.0003,,ref1
26,L3,M4,,,704.9,0.00004,,ref1
26,L3,M1,,,615.2,0.00001,,ref1
26,L2,M4,,,718.5,0.0002,,ref1
26,L2,M1,,,628.0,0.00001,,ref1
26,L1,M3,,,792.0,0.00002,,ref1
26,L1,M2,,,792.0,0.00001,,ref1
26,K,L3,,,6404.0,,,conflicting2020
26,K,L2,L3,,5480.0,,,ref1
13,K,L3,,,1486.70,0.0245,1.0,ref1
13,K,L2,,,1486.27,0.0123,0.5,ref1
13,K,M3,,,1557.45,0.0003,,ref1
13,K,L3,,3,1496.2,0.002,,ref1
";

/// Built-in symbols plus the Fe and Al fixture rows.
pub fn fixture_table() -> PropertyTable {
    let mut table = PropertyTable::builtin().expect("built-in table");
    table
        .read_elements_csv(ELEMENTS_CSV.as_bytes(), "elements.csv")
        .expect("element fixture");
    table
        .read_subshells_csv(SUBSHELLS_CSV.as_bytes(), "subshells.csv")
        .expect("subshell fixture");
    table
        .read_transitions_csv(TRANSITIONS_CSV.as_bytes(), "transitions.csv")
        .expect("transition fixture");
    table
}

pub fn fixture_resolver() -> Resolver {
    Resolver::new(fixture_table())
}
