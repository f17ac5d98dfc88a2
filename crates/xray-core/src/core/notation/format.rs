use super::error::ParseError;
use super::greek;
use super::markup::{iupac_to_latex, siegbahn_to_latex, to_html};
use crate::core::catalog::{catalog_entry, catalog_index};
use crate::core::descriptors::{AtomicShell, AtomicSubshell, Notation, Transition, ValidationError};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const SHELL_LETTERS: [char; 7] = ['K', 'L', 'M', 'N', 'O', 'P', 'Q'];

#[rustfmt::skip]
const ROMAN_NUMERALS: [&str; 13] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII",
];

const ORBITAL_LETTERS: [char; 7] = ['s', 'p', 'd', 'f', 'g', 'h', 'i'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NotationKind {
    Siegbahn,
    Iupac,
    Orbital,
}

impl NotationKind {
    pub fn name(self) -> &'static str {
        match self {
            NotationKind::Siegbahn => "siegbahn",
            NotationKind::Iupac => "iupac",
            NotationKind::Orbital => "orbital",
        }
    }

    pub fn notation(self) -> Result<Arc<Notation>, ValidationError> {
        Notation::new(self.name())
    }
}

impl fmt::Display for NotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NotationKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "siegbahn" => Ok(NotationKind::Siegbahn),
            "iupac" => Ok(NotationKind::Iupac),
            "orbital" => Ok(NotationKind::Orbital),
            _ => Err(ParseError::UnknownNotationKind(s.to_string())),
        }
    }
}

/// Output encodings of a notation. `Utf16` is the canonical Unicode form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Encoding {
    Ascii,
    #[default]
    Utf16,
    Html,
    Latex,
}

impl FromStr for Encoding {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascii" => Ok(Encoding::Ascii),
            "utf16" | "unicode" => Ok(Encoding::Utf16),
            "html" => Ok(Encoding::Html),
            "latex" => Ok(Encoding::Latex),
            _ => Err(ParseError::UnknownEncoding(s.to_string())),
        }
    }
}

fn shell_letter(n: u8) -> Option<char> {
    SHELL_LETTERS.get(usize::from(n).checked_sub(1)?).copied()
}

/// 1-based position of a subshell within its shell, ordered by `l` then `j`.
fn ordinal_in_shell(subshell: &AtomicSubshell) -> usize {
    let l = usize::from(subshell.l());
    if l == 0 {
        1
    } else if u16::from(subshell.j_n()) == AtomicSubshell::j_n_bounds(subshell.l()).0 {
        2 * l
    } else {
        2 * l + 1
    }
}

pub fn atomic_shell_notation(
    shell: &AtomicShell,
    kind: NotationKind,
    _encoding: Encoding,
) -> Option<String> {
    match kind {
        NotationKind::Siegbahn | NotationKind::Iupac => shell_letter(shell.n()).map(String::from),
        NotationKind::Orbital => Some(shell.n().to_string()),
    }
}

/// Notation of a subshell: `LIII` (Siegbahn), `L3` (IUPAC) or `2p3/2` (orbital).
///
/// `None` when the subshell lies beyond the named shells (`n > 7`) or orbital letters.
pub fn atomic_subshell_notation(
    subshell: &AtomicSubshell,
    kind: NotationKind,
    encoding: Encoding,
) -> Option<String> {
    let n = subshell.n();
    let ordinal = ordinal_in_shell(subshell);
    match kind {
        NotationKind::Siegbahn => {
            let letter = shell_letter(n)?;
            if n == 1 {
                return Some(letter.to_string());
            }
            let roman = ROMAN_NUMERALS.get(ordinal - 1)?;
            Some(format!("{letter}{roman}"))
        }
        NotationKind::Iupac => {
            let letter = shell_letter(n)?;
            if n == 1 {
                return Some(letter.to_string());
            }
            Some(match encoding {
                Encoding::Ascii | Encoding::Utf16 => format!("{letter}{ordinal}"),
                Encoding::Html => format!("{letter}<sub>{ordinal}</sub>"),
                Encoding::Latex => format!("{letter}$_{{{ordinal}}}$"),
            })
        }
        NotationKind::Orbital => {
            let l_letter = ORBITAL_LETTERS.get(usize::from(subshell.l()))?;
            let j_n = subshell.j_n();
            Some(match encoding {
                Encoding::Ascii | Encoding::Utf16 => format!("{n}{l_letter}{j_n}/2"),
                Encoding::Html => format!("{n}{l_letter}<sub>{j_n}/2</sub>"),
                Encoding::Latex => format!("{n}{l_letter}$_{{{j_n}/2}}$"),
            })
        }
    }
}

fn satellite_suffix(transition: &Transition) -> String {
    if transition.is_satellite() {
        format!("[s{}]", transition.satellite())
    } else {
        String::new()
    }
}

/// Canonical Unicode Siegbahn name of a transition, with any satellite suffix.
pub fn siegbahn_name(transition: &Transition) -> Option<String> {
    transition_notation(transition, NotationKind::Siegbahn, Encoding::Utf16)
}

/// IUPAC name of a transition with an en dash, e.g. `K–L3`.
pub fn iupac_name(transition: &Transition) -> Option<String> {
    transition_notation(transition, NotationKind::Iupac, Encoding::Utf16)
}

/// Notation of a transition.
///
/// Siegbahn names exist only for the catalog diagram lines (and their satellites).
/// IUPAC names are `destination-source`, followed by the secondary destination for
/// nonradiative transitions (`K-L2L3`). Transitions have no orbital notation.
pub fn transition_notation(
    transition: &Transition,
    kind: NotationKind,
    encoding: Encoding,
) -> Option<String> {
    let suffix = satellite_suffix(transition);
    match kind {
        NotationKind::Siegbahn => {
            let index = catalog_index(transition)?;
            let name = catalog_entry(index).ok()?.siegbahn;
            let body = match encoding {
                Encoding::Ascii => greek::to_ascii(name),
                Encoding::Utf16 => name.to_string(),
                Encoding::Html => to_html(name),
                Encoding::Latex => siegbahn_to_latex(name),
            };
            Some(body + &suffix)
        }
        NotationKind::Iupac => {
            let iupac = |subshell: &AtomicSubshell| {
                atomic_subshell_notation(subshell, NotationKind::Iupac, Encoding::Ascii)
            };
            let mut ascii = format!(
                "{}-{}",
                iupac(transition.destination_subshell())?,
                iupac(transition.source_subshell())?
            );
            if let Some(secondary) = transition.secondary_destination_subshell() {
                ascii.push_str(&iupac(secondary)?);
            }
            let body = match encoding {
                Encoding::Ascii => ascii,
                Encoding::Utf16 => ascii.replace('-', "–"),
                Encoding::Html => to_html(&ascii.replace('-', "–")),
                Encoding::Latex => iupac_to_latex(&ascii),
            };
            Some(body + &suffix)
        }
        NotationKind::Orbital => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{CATALOG_SIZE, TRANSITION_CATALOG, catalog_transition};

    fn subshell(n: u8, l: u8, j_n: u8) -> Arc<AtomicSubshell> {
        AtomicSubshell::new(n, l, j_n).unwrap()
    }

    fn ka1() -> Arc<Transition> {
        Transition::radiative(subshell(2, 1, 3), subshell(1, 0, 1))
    }

    #[test]
    fn shell_notation_uses_letters_or_numbers() {
        let m = AtomicShell::new(3).unwrap();
        assert_eq!(
            atomic_shell_notation(&m, NotationKind::Siegbahn, Encoding::Utf16).as_deref(),
            Some("M")
        );
        assert_eq!(
            atomic_shell_notation(&m, NotationKind::Orbital, Encoding::Ascii).as_deref(),
            Some("3")
        );
        let beyond = AtomicShell::new(8).unwrap();
        assert_eq!(atomic_shell_notation(&beyond, NotationKind::Iupac, Encoding::Ascii), None);
    }

    #[test]
    fn subshell_notation_in_every_system() {
        let l3 = subshell(2, 1, 3);
        let cases = [
            (NotationKind::Siegbahn, Encoding::Ascii, "LIII"),
            (NotationKind::Iupac, Encoding::Ascii, "L3"),
            (NotationKind::Iupac, Encoding::Html, "L<sub>3</sub>"),
            (NotationKind::Iupac, Encoding::Latex, "L$_{3}$"),
            (NotationKind::Orbital, Encoding::Utf16, "2p3/2"),
            (NotationKind::Orbital, Encoding::Html, "2p<sub>3/2</sub>"),
            (NotationKind::Orbital, Encoding::Latex, "2p$_{3/2}$"),
        ];
        for (kind, encoding, expected) in cases {
            assert_eq!(
                atomic_subshell_notation(&l3, kind, encoding).as_deref(),
                Some(expected),
                "{kind} {encoding:?}"
            );
        }
    }

    #[test]
    fn k_subshell_carries_no_index() {
        let k = subshell(1, 0, 1);
        assert_eq!(
            atomic_subshell_notation(&k, NotationKind::Iupac, Encoding::Ascii).as_deref(),
            Some("K")
        );
        assert_eq!(
            atomic_subshell_notation(&k, NotationKind::Siegbahn, Encoding::Ascii).as_deref(),
            Some("K")
        );
    }

    #[test]
    fn subshell_ordinals_follow_l_then_j() {
        let names: Vec<String> = [(4, 0, 1), (4, 1, 1), (4, 1, 3), (4, 2, 3), (4, 2, 5), (4, 3, 5), (4, 3, 7)]
            .into_iter()
            .map(|(n, l, j_n)| {
                atomic_subshell_notation(&subshell(n, l, j_n), NotationKind::Siegbahn, Encoding::Ascii)
                    .unwrap()
            })
            .collect();
        assert_eq!(names, ["NI", "NII", "NIII", "NIV", "NV", "NVI", "NVII"]);
    }

    #[test]
    fn transition_notation_in_every_encoding() {
        let t = ka1();
        let siegbahn = |e| transition_notation(&t, NotationKind::Siegbahn, e).unwrap();
        assert_eq!(siegbahn(Encoding::Ascii), "Ka1");
        assert_eq!(siegbahn(Encoding::Utf16), "Kα1");
        assert_eq!(siegbahn(Encoding::Html), "K&alpha;<sub>1</sub>");
        assert_eq!(siegbahn(Encoding::Latex), r"K$\alpha_{1}$");

        let iupac = |e| transition_notation(&t, NotationKind::Iupac, e).unwrap();
        assert_eq!(iupac(Encoding::Ascii), "K-L3");
        assert_eq!(iupac(Encoding::Utf16), "K–L3");
        assert_eq!(iupac(Encoding::Html), "K&ndash;L<sub>3</sub>");
        assert_eq!(iupac(Encoding::Latex), "K-L$_{3}$");

        assert_eq!(transition_notation(&t, NotationKind::Orbital, Encoding::Ascii), None);
    }

    #[test]
    fn nonradiative_iupac_appends_secondary_destination() {
        let auger = Transition::nonradiative(subshell(2, 1, 1), subshell(1, 0, 1), subshell(2, 1, 3));
        assert_eq!(
            transition_notation(&auger, NotationKind::Iupac, Encoding::Ascii).as_deref(),
            Some("K-L2L3")
        );
        assert_eq!(siegbahn_name(&auger), None);
    }

    #[test]
    fn satellites_carry_a_suffix() {
        let satellite = ka1().with_satellite(3);
        assert_eq!(siegbahn_name(&satellite).as_deref(), Some("Kα1[s3]"));
        assert_eq!(iupac_name(&satellite).as_deref(), Some("K–L3[s3]"));
    }

    #[test]
    fn every_catalog_line_formats_to_its_name() {
        for index in 0..CATALOG_SIZE {
            let transition = catalog_transition(index).unwrap();
            assert_eq!(
                siegbahn_name(&transition).as_deref(),
                Some(TRANSITION_CATALOG[index].siegbahn)
            );
        }
    }

    #[test]
    fn notation_kinds_and_encodings_parse_case_insensitively() {
        assert_eq!("IUPAC".parse::<NotationKind>().unwrap(), NotationKind::Iupac);
        assert_eq!("Latex".parse::<Encoding>().unwrap(), Encoding::Latex);
        assert!("greek".parse::<NotationKind>().is_err());
        assert_eq!(NotationKind::Orbital.notation().unwrap().name(), "orbital");
    }
}
