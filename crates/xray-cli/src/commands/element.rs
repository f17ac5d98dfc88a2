use super::{format_optional, optional};
use crate::cli::ElementArgs;
use crate::error::Result;
use xrayref::engine::Resolver;

pub fn render(resolver: &Resolver, args: &ElementArgs) -> Result<Vec<String>> {
    let z = resolver.element_atomic_number(&args.element)?;
    let reference = args.reference.as_deref();

    let symbol = resolver.element_symbol(z, None)?;
    let name = optional(resolver.element_name(z, "en", reference))?;
    let weight = optional(resolver.element_atomic_weight(z, reference))?;
    let density = optional(resolver.element_mass_density_g_per_cm3(z, reference))?;

    Ok(vec![
        format!("{symbol} (Z = {z})"),
        format!("  name:           {}", name.unwrap_or_else(|| "n/a".to_string())),
        format!("  atomic weight:  {}", format_optional(weight, "")),
        format!("  mass density:   {}", format_optional(density, "g/cm3")),
    ])
}

pub fn run(resolver: &Resolver, args: ElementArgs) -> Result<()> {
    for row in render(resolver, &args)? {
        println!("{row}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use xrayref::engine::{LookupError, PropertyTable};

    const ELEMENTS: &str = "\
z,symbol,name,language,atomic_weight,mass_density_kg_per_m3,reference
26,,Iron,en,55.845,7874,ref1
26,,,,58.0,,ref2
";

    fn resolver() -> Resolver {
        let mut table = PropertyTable::builtin().unwrap();
        table.read_elements_csv(ELEMENTS.as_bytes(), "inline").unwrap();
        Resolver::new(table)
    }

    fn args(element: &str, reference: Option<&str>) -> ElementArgs {
        ElementArgs {
            element: element.to_string(),
            reference: reference.map(str::to_string),
        }
    }

    #[test]
    fn element_summary_lists_properties() {
        let rows = render(&resolver(), &args("iron", None)).unwrap();
        assert_eq!(rows[0], "Fe (Z = 26)");
        assert!(rows[1].ends_with("Iron"));
        assert!(rows[2].ends_with("55.845"));
        assert!(rows[3].ends_with("7.874 g/cm3"));
    }

    #[test]
    fn explicit_reference_hides_other_values() {
        let rows = render(&resolver(), &args("Fe", Some("ref2"))).unwrap();
        assert!(rows[1].ends_with("n/a"));
        assert!(rows[2].ends_with("58"));
    }

    #[test]
    fn unknown_element_is_an_error() {
        assert!(matches!(
            render(&resolver(), &args("Kryptonite", None)),
            Err(CliError::Lookup(LookupError::UnknownElement(_)))
        ));
    }
}
