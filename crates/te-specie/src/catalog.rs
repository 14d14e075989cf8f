//! Ready-made specie records for common gases.

use te_core::Real;

use crate::specie::Specie;

/// Gases frequently modelled as perfect gases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownSpecie {
    O2,
    N2,
    H2,
    He,
    Ar,
    CO2,
    CO,
    H2O,
    CH4,
    /// Dry air, treated as one pseudo-pure specie.
    Air,
}

impl KnownSpecie {
    pub const ALL: [KnownSpecie; 10] = [
        KnownSpecie::O2,
        KnownSpecie::N2,
        KnownSpecie::H2,
        KnownSpecie::He,
        KnownSpecie::Ar,
        KnownSpecie::CO2,
        KnownSpecie::CO,
        KnownSpecie::H2O,
        KnownSpecie::CH4,
        KnownSpecie::Air,
    ];

    /// Entry name and molar mass [kg/kmol] (NIST reference values).
    const fn entry(self) -> (&'static str, Real) {
        match self {
            KnownSpecie::O2 => ("O2", 31.999),
            KnownSpecie::N2 => ("N2", 28.014),
            KnownSpecie::H2 => ("H2", 2.016),
            KnownSpecie::He => ("He", 4.003),
            KnownSpecie::Ar => ("Ar", 39.948),
            KnownSpecie::CO2 => ("CO2", 44.010),
            KnownSpecie::CO => ("CO", 28.010),
            KnownSpecie::H2O => ("H2O", 18.015),
            KnownSpecie::CH4 => ("CH4", 16.043),
            KnownSpecie::Air => ("Air", 28.965),
        }
    }

    /// Entry name written for this gas.
    pub fn key(&self) -> &'static str {
        self.entry().0
    }

    /// Molar mass [kg/kmol].
    pub fn molar_mass(&self) -> Real {
        self.entry().1
    }

    /// Specie record for `n_moles` kmol of this gas, named by its key.
    pub fn specie(&self, n_moles: Real) -> Specie {
        let (name, mol_weight) = self.entry();
        Specie::new(name, n_moles, mol_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpecieModel;
    use std::collections::HashSet;

    #[test]
    fn specie_carries_key_and_molar_mass() {
        let n2 = KnownSpecie::N2.specie(2.0);
        assert_eq!(n2.name(), "N2");
        assert_eq!(n2.moles(), 2.0);
        assert_eq!(n2.molar_mass(), 28.014);
    }

    #[test]
    fn entries_are_unique_and_physical() {
        let keys: HashSet<_> = KnownSpecie::ALL.iter().map(KnownSpecie::key).collect();
        assert_eq!(keys.len(), KnownSpecie::ALL.len());
        for known in KnownSpecie::ALL {
            assert!(known.molar_mass() > 0.0, "{}", known.key());
        }
    }
}
