//! uom-typed accessors over any [`EquationOfState`].

use te_core::units::{
    Density, Pressure, Ratio, SpecHeatCapacity, Temperature, ThermalExpansion, j_per_kg_k,
    kg_per_m3, per_k, unitless,
};
use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin};

use crate::eos::EquationOfState;

/// SI-quantity views of the scalar property functions.
///
/// Blanket-implemented for every [`EquationOfState`].
pub trait EquationOfStateExt: EquationOfState {
    fn density(&self, p: Pressure, t: Temperature) -> Density {
        kg_per_m3(self.rho(p.get::<pascal>(), t.get::<kelvin>()))
    }

    fn compression_factor(&self, p: Pressure, t: Temperature) -> Ratio {
        unitless(self.z(p.get::<pascal>(), t.get::<kelvin>()))
    }

    fn thermal_expansion(&self, p: Pressure, t: Temperature) -> ThermalExpansion {
        per_k(self.c_t_exp(p.get::<pascal>(), t.get::<kelvin>()))
    }

    fn heat_capacity_difference(&self, p: Pressure, t: Temperature) -> SpecHeatCapacity {
        j_per_kg_k(self.cp_m_cv(p.get::<pascal>(), t.get::<kelvin>()))
    }
}

impl<E: EquationOfState> EquationOfStateExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PerfectGas;
    use te_core::units::{k, pa};
    use te_specie::Specie;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, pressure::kilopascal,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn typed_density_matches_scalar() {
        let gas = PerfectGas::new(Specie::new("N2", 1.0, 28.0));
        let rho = gas.density(pa(101_325.0), k(300.0));
        assert_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            gas.rho(101_325.0, 300.0)
        );
    }

    #[test]
    fn converts_non_si_inputs() {
        let gas = PerfectGas::new(Specie::new("N2", 1.0, 28.0));
        let p = Pressure::new::<kilopascal>(101.325);
        let t = Temperature::new::<degree_celsius>(26.85);

        let rho = gas.density(p, t).get::<kilogram_per_cubic_meter>();
        assert!((rho - gas.rho(101_325.0, 300.0)).abs() < 1e-9);
    }

    #[test]
    fn typed_constants() {
        let gas = PerfectGas::new(Specie::new("Ar", 1.0, 39.948));
        let (p, t) = (pa(1.0e5), k(500.0));

        assert_eq!(gas.compression_factor(p, t).value, 1.0);
        assert!((gas.thermal_expansion(p, t).value - 0.002).abs() < 1e-15);
        assert_eq!(
            gas.heat_capacity_difference(p, t)
                .get::<joule_per_kilogram_kelvin>(),
            gas.gas_constant()
        );
    }
}
