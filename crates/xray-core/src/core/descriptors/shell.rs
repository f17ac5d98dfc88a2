use super::error::ValidationError;
use super::intern::Interner;
use std::fmt;
use std::sync::Arc;

/// An atomic shell, identified by its principal quantum number `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomicShell {
    n: u8,
}

pub(super) static SHELLS: Interner<u8, AtomicShell> = Interner::new("AtomicShell");

impl AtomicShell {
    pub fn new(n: u8) -> Result<Arc<Self>, ValidationError> {
        SHELLS.get_or_try_insert_with(n, || {
            if n < 1 {
                return Err(ValidationError::PrincipalQuantumNumberOutOfRange { n });
            }
            Ok(Self { n })
        })
    }

    pub fn principal_quantum_number(&self) -> u8 {
        self.n
    }

    pub fn n(&self) -> u8 {
        self.n
    }
}

impl fmt::Display for AtomicShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtomicShell(n={})", self.n)
    }
}

/// An atomic subshell `(n, l, j)`, where the total angular momentum `j` is kept
/// as its numerator `j_n = 2j` so that it stays an exact integer.
///
/// Valid subshells satisfy `0 <= l <= n - 1` and `j_n` is either `|2l - 1|` or
/// `2l + 1`, that is `j = l ± 1/2` (only `j = 1/2` when `l = 0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomicSubshell {
    shell: Arc<AtomicShell>,
    l: u8,
    j_n: u8,
}

pub(super) static SUBSHELLS: Interner<(u8, u8, u8), AtomicSubshell> =
    Interner::new("AtomicSubshell");

impl AtomicSubshell {
    pub fn new(n: u8, l: u8, j_n: u8) -> Result<Arc<Self>, ValidationError> {
        SUBSHELLS.get_or_try_insert_with((n, l, j_n), || {
            let shell = AtomicShell::new(n)?;
            Self::validate(n, l, j_n)?;
            Ok(Self { shell, l, j_n })
        })
    }

    pub fn from_shell(shell: &AtomicShell, l: u8, j_n: u8) -> Result<Arc<Self>, ValidationError> {
        Self::new(shell.n(), l, j_n)
    }

    fn validate(n: u8, l: u8, j_n: u8) -> Result<(), ValidationError> {
        let lmax = n - 1;
        if l > lmax {
            return Err(ValidationError::AzimuthalQuantumNumberOutOfRange { n, l, max: lmax });
        }

        let (jmin_n, jmax_n) = Self::j_n_bounds(l);
        let j_n_wide = u16::from(j_n);
        if j_n_wide != jmin_n && j_n_wide != jmax_n {
            return Err(ValidationError::TotalAngularMomentumOutOfRange {
                l,
                j_n,
                min: jmin_n,
                max: jmax_n,
            });
        }

        Ok(())
    }

    /// The two admissible values of `j_n` for a given `l`; identical when `l = 0`.
    pub fn j_n_bounds(l: u8) -> (u16, u16) {
        let two_l = 2 * u16::from(l);
        (two_l.abs_diff(1), two_l + 1)
    }

    pub fn atomic_shell(&self) -> &Arc<AtomicShell> {
        &self.shell
    }

    pub fn principal_quantum_number(&self) -> u8 {
        self.shell.n()
    }

    pub fn n(&self) -> u8 {
        self.shell.n()
    }

    pub fn azimuthal_quantum_number(&self) -> u8 {
        self.l
    }

    pub fn l(&self) -> u8 {
        self.l
    }

    pub fn total_angular_momentum_numerator(&self) -> u8 {
        self.j_n
    }

    pub fn j_n(&self) -> u8 {
        self.j_n
    }

    pub fn total_angular_momentum(&self) -> f64 {
        f64::from(self.j_n) / 2.0
    }

    pub fn j(&self) -> f64 {
        self.total_angular_momentum()
    }
}

impl fmt::Display for AtomicSubshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AtomicSubshell(n={}, l={}, j={}/2)",
            self.shell.n(),
            self.l,
            self.j_n
        )
    }
}
