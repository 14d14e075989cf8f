//! Equation-of-state trait and capability descriptor.

use te_core::Real;

/// Structural facts about an equation-of-state family.
///
/// Solvers read these to pick specialised numeric paths, e.g. skipping the
/// pressure-density coupling when a model is incompressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EosCapabilities {
    /// Density does not depend on pressure.
    pub incompressible: bool,
    /// Density is constant.
    pub isochoric: bool,
}

impl EosCapabilities {
    /// Density is a function of both pressure and temperature.
    pub const COMPRESSIBLE: Self = Self {
        incompressible: false,
        isochoric: false,
    };

    /// Whether density responds to pressure changes.
    pub const fn density_depends_on_pressure(&self) -> bool {
        !self.incompressible && !self.isochoric
    }
}

/// All properties of one model at one (p, T) point.
///
/// Components that need several properties at the same state can take a
/// pack instead of issuing individual calls.
#[derive(Clone, Debug, PartialEq)]
pub struct EosPropertyPack {
    /// Pressure [Pa]
    pub p: Real,

    /// Temperature [K]
    pub t: Real,

    /// Density [kg/m³]
    pub rho: Real,

    /// Compressibility ρ/p [s²/m²]
    pub psi: Real,

    /// Compression factor (dimensionless)
    pub z: Real,

    /// Thermal expansion coefficient [1/K]
    pub c_t_exp: Real,

    /// Pressure contribution to entropy [J/(kg·K)]
    pub s: Real,

    /// cp - cv [J/(kg·K)]
    pub cp_m_cv: Real,
}

impl EosPropertyPack {
    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Pack(P={:.0}Pa,T={:.1}K,ρ={:.4}kg/m³,ψ={:.4e}s²/m²,Z={:.3},β={:.4e}1/K,s={:.2}J/kg·K,cp-cv={:.2}J/kg·K)",
            self.p, self.t, self.rho, self.psi, self.z, self.c_t_exp, self.s, self.cp_m_cv
        )
    }
}

/// Pressure/temperature closure used by solvers.
///
/// All property functions are pure and take absolute pressure `p` [Pa] and
/// absolute temperature `t` [K]. Inputs are not range checked; callers own
/// that precondition. Implementations must be thread-safe (Send + Sync).
pub trait EquationOfState: Send + Sync {
    /// Structural facts about this model family.
    const CAPABILITIES: EosCapabilities;

    /// Density [kg/m³].
    fn rho(&self, p: Real, t: Real) -> Real;

    /// Compressibility ρ/p [s²/m²].
    fn psi(&self, p: Real, t: Real) -> Real;

    /// Compression factor (dimensionless).
    fn z(&self, p: Real, t: Real) -> Real;

    /// Thermal expansion coefficient [1/K].
    fn c_t_exp(&self, p: Real, t: Real) -> Real;

    /// Pressure contribution to entropy [J/(kg·K)].
    fn s(&self, p: Real, t: Real) -> Real;

    /// Difference of specific heats cp - cv [J/(kg·K)].
    fn cp_m_cv(&self, p: Real, t: Real) -> Real;

    /// Evaluate every property at one point.
    fn property_pack(&self, p: Real, t: Real) -> EosPropertyPack {
        EosPropertyPack {
            p,
            t,
            rho: self.rho(p, t),
            psi: self.psi(p, t),
            z: self.z(p, t),
            c_t_exp: self.c_t_exp(p, t),
            s: self.s(p, t),
            cp_m_cv: self.cp_m_cv(p, t),
        }
    }
}
