use crate::cli::CompositionArgs;
use crate::error::Result;
use xrayref::engine::Resolver;
use xrayref::workflows::Composition;

pub fn render(resolver: &Resolver, args: &CompositionArgs) -> Result<Vec<String>> {
    let composition = Composition::from_formula(resolver, &args.formula)?;
    let atomic = composition.atomic_fractions(resolver)?;

    let mut rows = vec![composition.to_formula(resolver, args.denominator)?];
    for (&z, &mass) in composition.mass_fractions() {
        let symbol = resolver.element_symbol(z, None)?;
        let atoms = atomic.get(&z).copied().unwrap_or(0.0);
        rows.push(format!(
            "  {symbol:<3} mass {:>8.4} %  atomic {:>8.4} %",
            mass * 100.0,
            atoms * 100.0
        ));
    }
    Ok(rows)
}

pub fn run(resolver: &Resolver, args: CompositionArgs) -> Result<()> {
    for row in render(resolver, &args)? {
        println!("{row}");
    }
    Ok(())
}
