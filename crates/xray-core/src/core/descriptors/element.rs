use super::error::ValidationError;
use super::intern::Interner;
use std::fmt;
use std::sync::Arc;

pub const MIN_ATOMIC_NUMBER: u8 = 1;
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// A chemical element, identified solely by its atomic number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element {
    atomic_number: u8,
}

pub(super) static ELEMENTS: Interner<u8, Element> = Interner::new("Element");

impl Element {
    pub fn new(atomic_number: u8) -> Result<Arc<Self>, ValidationError> {
        ELEMENTS.get_or_try_insert_with(atomic_number, || {
            if !(MIN_ATOMIC_NUMBER..=MAX_ATOMIC_NUMBER).contains(&atomic_number) {
                return Err(ValidationError::AtomicNumberOutOfRange {
                    z: atomic_number,
                    min: MIN_ATOMIC_NUMBER,
                    max: MAX_ATOMIC_NUMBER,
                });
            }
            Ok(Self { atomic_number })
        })
    }

    pub fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    /// Shorthand for [`Element::atomic_number`].
    pub fn z(&self) -> u8 {
        self.atomic_number
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element(z={})", self.atomic_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(descriptor_cache)]
    fn equal_atomic_numbers_share_an_instance() {
        let a = Element::new(26).unwrap();
        let b = Element::new(26).unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.z(), 26);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Element::new(1).is_ok());
        assert!(Element::new(118).is_ok());
    }

    #[test]
    fn out_of_range_atomic_numbers_are_rejected() {
        assert_eq!(
            Element::new(0).unwrap_err(),
            ValidationError::AtomicNumberOutOfRange {
                z: 0,
                min: 1,
                max: 118
            }
        );
        assert!(matches!(
            Element::new(119),
            Err(ValidationError::AtomicNumberOutOfRange { z: 119, .. })
        ));
    }

    #[test]
    fn elements_order_by_atomic_number() {
        let fe = Element::new(26).unwrap();
        let cu = Element::new(29).unwrap();
        assert!(fe < cu);
        assert_eq!(fe.to_string(), "Element(z=26)");
    }
}
