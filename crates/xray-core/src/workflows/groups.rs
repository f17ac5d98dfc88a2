use super::error::QueryError;
use super::line::XrayLineSet;
use crate::core::catalog::{GroupKind, Selection, catalog_transition, subshell_at};
use crate::core::notation::{Encoding, NotationKind, atomic_subshell_notation};
use crate::engine::{PropertyStore, Resolver};
use tracing::{debug, instrument};

fn labels(kind: GroupKind) -> (String, String) {
    match kind.selection() {
        Selection::Destination(index) => match subshell_at(index) {
            Ok(subshell) => (
                atomic_subshell_notation(&subshell, NotationKind::Siegbahn, Encoding::Utf16)
                    .unwrap_or_else(|| kind.keyword().to_string()),
                atomic_subshell_notation(&subshell, NotationKind::Iupac, Encoding::Utf16)
                    .unwrap_or_else(|| kind.iupac().to_string()),
            ),
            Err(_) => (kind.keyword().to_string(), kind.iupac().to_string()),
        },
        Selection::SiegbahnPrefix(_) => (kind.keyword().to_string(), kind.iupac().to_string()),
    }
}

/// The lines of group `kind` that exist for element `z`.
///
/// Members are the catalog diagram lines selected by the group and known to the
/// store. With `include_satellite`, stored satellites of those lines are added.
#[instrument(skip(resolver), level = "debug")]
pub fn transition_group<S: PropertyStore>(
    resolver: &Resolver<S>,
    z: u8,
    kind: GroupKind,
    include_satellite: bool,
) -> Result<XrayLineSet, QueryError> {
    let mut members = Vec::new();
    for index in kind.catalog_members() {
        let transition = catalog_transition(index)?;
        if resolver.transition_exists(z, &transition, None) {
            members.push(transition);
        }
    }

    if include_satellite {
        let satellites: Vec<_> = resolver
            .element_transitions(z)
            .into_iter()
            .filter(|t| t.is_satellite())
            .filter(|t| members.contains(&t.diagram_line()))
            .collect();
        members.extend(satellites);
    }

    let (siegbahn, iupac) = labels(kind);
    if members.is_empty() {
        let symbol = resolver
            .element_symbol(z, None)
            .unwrap_or_else(|_| format!("Z={z}"));
        return Err(QueryError::EmptyGroup {
            symbol,
            group: iupac,
        });
    }

    debug!(z, group = %siegbahn, members = members.len(), "Built transition group.");
    XrayLineSet::new(resolver, z, &siegbahn, &iupac, members)
}
