use super::{format_optional, optional};
use crate::cli::LineArgs;
use crate::error::Result;
use tracing::debug;
use xrayref::core::notation::{Encoding, NotationKind};
use xrayref::engine::Resolver;
use xrayref::workflows::{Line, XrayLine, from_string};

fn describe(
    resolver: &Resolver,
    line: &XrayLine,
    encoding: Encoding,
    reference: Option<&str>,
) -> Result<String> {
    let siegbahn = line
        .notation(NotationKind::Siegbahn, encoding)
        .unwrap_or_else(|| line.siegbahn().to_string());
    let iupac = line
        .notation(NotationKind::Iupac, encoding)
        .unwrap_or_else(|| line.iupac().to_string());

    let z = line.z();
    let transition = line.transition();
    let energy = optional(resolver.transition_energy_ev(z, transition, reference))?;
    let wavelength = optional(resolver.transition_wavelength_m(z, transition, reference))?;
    let probability = optional(resolver.transition_probability(z, transition, reference))?;
    let weight = optional(resolver.transition_relative_weight(z, transition, reference))?;

    Ok(format!(
        "{} {siegbahn} ({iupac}): energy {}, wavelength {}, probability {}, relative weight {}",
        line.symbol(),
        format_optional(energy, "eV"),
        format_optional(wavelength.map(|m| m * 1e9), "nm"),
        format_optional(probability, ""),
        format_optional(weight, ""),
    ))
}

/// Renders one line, or a group header followed by its members.
pub fn render(resolver: &Resolver, args: &LineArgs) -> Result<Vec<String>> {
    let encoding: Encoding = args.encoding.parse()?;
    let reference = args.reference.as_deref();
    let text = format!("{} {}", args.element, args.notation);

    let parsed = from_string(resolver, &text)?;
    debug!(line = %parsed, group = parsed.is_group(), "Parsed line notation.");

    match parsed {
        Line::Single(line) => Ok(vec![describe(resolver, &line, encoding, reference)?]),
        Line::Group(group) => {
            let mut output = vec![format!(
                "{} ({}): {} lines, most probable {}",
                group.label(),
                group.iupac(),
                group.len(),
                group.most_probable().siegbahn()
            )];
            for line in group.lines() {
                output.push(format!("  {}", describe(resolver, line, encoding, reference)?));
            }
            Ok(output)
        }
    }
}

pub fn run(resolver: &Resolver, args: LineArgs) -> Result<()> {
    for row in render(resolver, &args)? {
        println!("{row}");
    }
    Ok(())
}
