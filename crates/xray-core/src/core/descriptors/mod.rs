//! Immutable descriptors of the physical entities the database talks about.
//!
//! Every constructor validates its inputs and interns the result, so descriptors
//! built from equal fields are the same `Arc` and may be used directly as map keys.
//! [`clear_cache`] drops every interned instance; descriptors created afterwards
//! still compare equal to older ones by content.

mod element;
mod error;
mod intern;
mod reference;
mod shell;
mod transition;
mod vocabulary;

pub use element::{Element, MAX_ATOMIC_NUMBER, MIN_ATOMIC_NUMBER};
pub use error::ValidationError;
pub use reference::{Reference, ReferenceDetails, UNATTRIBUTED};
pub use shell::{AtomicShell, AtomicSubshell};
pub use transition::{Transition, TransitionSet};
pub use vocabulary::{Language, Notation};

pub fn clear_cache() {
    element::ELEMENTS.clear();
    shell::SHELLS.clear();
    shell::SUBSHELLS.clear();
    transition::TRANSITIONS.clear();
    transition::TRANSITION_SETS.clear();
    reference::REFERENCES.clear();
    vocabulary::LANGUAGES.clear();
    vocabulary::NOTATIONS.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Arc;

    #[test]
    #[serial(descriptor_cache)]
    fn clear_cache_keeps_content_equality() {
        let before = AtomicSubshell::new(2, 1, 3).unwrap();
        clear_cache();
        let after = AtomicSubshell::new(2, 1, 3).unwrap();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before, after);
        assert!(Arc::ptr_eq(&after, &AtomicSubshell::new(2, 1, 3).unwrap()));
    }
}
