/// A property model for a specific fluid.
///
/// The associated `Fluid` ties a model to the substance it describes, so a
/// model built for one fluid cannot be handed to code expecting another.
pub trait ThermoModel {
    type Fluid;
}

impl<M: ThermoModel + ?Sized> ThermoModel for &M {
    type Fluid = M::Fluid;
}
