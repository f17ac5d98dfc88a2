use crate::cli::LinesArgs;
use crate::error::Result;
use xrayref::engine::Resolver;
use xrayref::workflows::{TransitionQuery, get_transitions};

pub fn render(resolver: &Resolver, args: &LinesArgs) -> Result<Vec<String>> {
    let z = resolver.element_atomic_number(&args.element)?;
    let query = TransitionQuery::new()
        .energy_range(args.min_ev, args.max_ev)
        .include_satellite(args.satellites);

    get_transitions(resolver, z, &query)?
        .iter()
        .map(|line| -> Result<String> {
            let energy = line.energy_ev(resolver, None)?;
            Ok(format!("{:<12} {:<12} {:>12.2} eV", line.label(), line.iupac(), energy))
        })
        .collect()
}

pub fn run(resolver: &Resolver, args: LinesArgs) -> Result<()> {
    let rows = render(resolver, &args)?;
    if rows.is_empty() {
        println!("No lines for {} between {} and {} eV.", args.element, args.min_ev, args.max_ev);
    }
    for row in rows {
        println!("{row}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrayref::engine::PropertyTable;

    const TRANSITIONS: &str = "\
z,destination,source,secondary_destination,satellite,energy_ev,probability,relative_weight,reference
13,K,L3,,,1486.70,0.0245,,ref1
13,K,L2,,,1486.27,0.0123,,ref1
13,K,M3,,,1557.45,,,ref1
13,K,L3,,3,1496.2,,,ref1
";

    fn resolver() -> Resolver {
        let mut table = PropertyTable::builtin().unwrap();
        table.read_transitions_csv(TRANSITIONS.as_bytes(), "inline").unwrap();
        Resolver::new(table)
    }

    fn args(min_ev: f64, max_ev: f64, satellites: bool) -> LinesArgs {
        LinesArgs {
            element: "Al".to_string(),
            min_ev,
            max_ev,
            satellites,
        }
    }

    #[test]
    fn rows_follow_line_order() {
        let rows = render(&resolver(), &args(0.0, 1e6, false)).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Al Kβ1"));
        assert!(rows[2].starts_with("Al Kα1"));
        assert!(rows[2].ends_with("1486.70 eV"));
    }

    #[test]
    fn window_and_satellites_are_applied() {
        assert_eq!(render(&resolver(), &args(1490.0, 1500.0, false)).unwrap().len(), 0);
        let rows = render(&resolver(), &args(1490.0, 1500.0, true)).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("Al Kα1[s3]"));
    }
}
