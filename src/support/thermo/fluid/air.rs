use uom::si::{f64::MolarMass, molar_mass::kilogram_per_mole};

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl Air {
    /// Molar mass used by the handbook ideal-gas density, kg/mol.
    pub const MOLAR_MASS_KG_PER_MOL: f64 = 0.028_98;

    /// Molar mass of dry air.
    #[must_use]
    pub fn molar_mass() -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(Self::MOLAR_MASS_KG_PER_MOL)
    }
}

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::CoolPropFluid for Air {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "Air";
}
