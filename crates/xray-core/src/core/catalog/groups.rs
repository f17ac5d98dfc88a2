use super::transitions::{CatalogEntry, TRANSITION_CATALOG};

/// How a group picks its members among the catalog diagram lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Lines whose Siegbahn name starts with the prefix.
    SiegbahnPrefix(&'static str),
    /// Lines filling a vacancy in the subshell at this catalog index.
    Destination(u8),
}

/// The named groups of X-ray lines that a notation may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKind {
    KFamily,
    LFamily,
    MFamily,
    NFamily,
    Ka,
    Kb,
    La,
    Lb,
    Lg,
    Ma,
    Mb,
    Mg,
    LI,
    LII,
    LIII,
    MI,
    MII,
    MIII,
    MIV,
    MV,
}

impl GroupKind {
    pub const ALL: [GroupKind; 20] = [
        GroupKind::KFamily,
        GroupKind::LFamily,
        GroupKind::MFamily,
        GroupKind::NFamily,
        GroupKind::Ka,
        GroupKind::Kb,
        GroupKind::La,
        GroupKind::Lb,
        GroupKind::Lg,
        GroupKind::Ma,
        GroupKind::Mb,
        GroupKind::Mg,
        GroupKind::LI,
        GroupKind::LII,
        GroupKind::LIII,
        GroupKind::MI,
        GroupKind::MII,
        GroupKind::MIII,
        GroupKind::MIV,
        GroupKind::MV,
    ];

    /// The Siegbahn keyword (Unicode) naming this group.
    pub fn keyword(self) -> &'static str {
        match self {
            GroupKind::KFamily => "K",
            GroupKind::LFamily => "L",
            GroupKind::MFamily => "M",
            GroupKind::NFamily => "N",
            GroupKind::Ka => "Kα",
            GroupKind::Kb => "Kβ",
            GroupKind::La => "Lα",
            GroupKind::Lb => "Lβ",
            GroupKind::Lg => "Lγ",
            GroupKind::Ma => "Mα",
            GroupKind::Mb => "Mβ",
            GroupKind::Mg => "Mγ",
            GroupKind::LI => "LI",
            GroupKind::LII => "LII",
            GroupKind::LIII => "LIII",
            GroupKind::MI => "MI",
            GroupKind::MII => "MII",
            GroupKind::MIII => "MIII",
            GroupKind::MIV => "MIV",
            GroupKind::MV => "MV",
        }
    }

    /// The IUPAC label of this group.
    pub fn iupac(self) -> &'static str {
        match self {
            GroupKind::KFamily => "K",
            GroupKind::LFamily => "L",
            GroupKind::MFamily => "M",
            GroupKind::NFamily => "N",
            GroupKind::Ka => "K-L(2,3)",
            GroupKind::Kb => "K-M(2-5)N(2-5)",
            GroupKind::La => "L3-M(4,5)",
            GroupKind::Lb => "L(1-3)-M(2-5)N(1,4-7)O(1,4-5)",
            GroupKind::Lg => "L(1,2)-N(1-6)O(1-3)",
            GroupKind::Ma => "M5-N(6,7)",
            GroupKind::Mb => "M4-N6",
            GroupKind::Mg => "M3-N5",
            GroupKind::LI => "L1",
            GroupKind::LII => "L2",
            GroupKind::LIII => "L3",
            GroupKind::MI => "M1",
            GroupKind::MII => "M2",
            GroupKind::MIII => "M3",
            GroupKind::MIV => "M4",
            GroupKind::MV => "M5",
        }
    }

    pub fn selection(self) -> Selection {
        match self {
            GroupKind::LI => Selection::Destination(2),
            GroupKind::LII => Selection::Destination(3),
            GroupKind::LIII => Selection::Destination(4),
            GroupKind::MI => Selection::Destination(5),
            GroupKind::MII => Selection::Destination(6),
            GroupKind::MIII => Selection::Destination(7),
            GroupKind::MIV => Selection::Destination(8),
            GroupKind::MV => Selection::Destination(9),
            other => Selection::SiegbahnPrefix(other.keyword()),
        }
    }

    /// Matches a Unicode Siegbahn keyword such as `Kα` or `LIII`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    pub fn matches(self, entry: &CatalogEntry) -> bool {
        match self.selection() {
            Selection::SiegbahnPrefix(prefix) => entry.siegbahn.starts_with(prefix),
            Selection::Destination(index) => entry.destination == index,
        }
    }

    /// Catalog indices of every diagram line belonging to this group.
    pub fn catalog_members(self) -> Vec<usize> {
        TRANSITION_CATALOG
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.matches(entry))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::transitions::siegbahn_index;

    fn names(kind: GroupKind) -> Vec<&'static str> {
        kind.catalog_members()
            .into_iter()
            .map(|index| TRANSITION_CATALOG[index].siegbahn)
            .collect()
    }

    #[test]
    fn keywords_round_trip() {
        for kind in GroupKind::ALL {
            assert_eq!(GroupKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(GroupKind::from_keyword("Kα1"), None);
    }

    #[test]
    fn ka_group_holds_both_ka_lines() {
        assert_eq!(names(GroupKind::Ka), vec!["Kα1", "Kα2"]);
    }

    #[test]
    fn k_family_is_every_k_line() {
        assert_eq!(GroupKind::KFamily.catalog_members(), (0..=6).collect::<Vec<_>>());
    }

    #[test]
    fn shell_groups_select_by_destination() {
        let liii = names(GroupKind::LIII);
        assert!(liii.contains(&"Lα1"));
        assert!(liii.contains(&"L3N2"));
        assert!(!liii.contains(&"Lβ1"));
        assert_eq!(
            GroupKind::MV.catalog_members(),
            vec![71, 72, 73, 74]
        );
    }

    #[test]
    fn mg_group_is_single_line() {
        assert_eq!(
            GroupKind::Mg.catalog_members(),
            vec![siegbahn_index("Mγ").unwrap()]
        );
    }
}
