//! Prints a small loss worksheet for a supply branch.
//!
//! ```sh
//! cargo run --example fitting_worksheet -- tabulated
//! cargo run --example fitting_worksheet -- --debug
//! ```
//!
//! The optional argument names the air property model (`tabulated` or
//! `reference`, the latter needs the `coolprop` feature). `--debug` prints
//! the intermediate values of every correlation.

use std::error::Error;

use duct_resistance::{
    models::ventilation::{
        CorrelationVersion, FittingLoss, FlowDirection, JunctionPort,
        duct::{DuctInput, duct},
        elbow::{ElbowInput, elbow},
        tee::{TeeInput, tee},
        transition::{TransitionInput, transition},
    },
    support::{
        geometry::{CrossSection, Orientation},
        thermo::model::{AirModel, PropertyModel},
    },
};
use tracing::Level;
use uom::si::{
    angle::degree,
    f64::{Angle, Length, ThermodynamicTemperature, VolumeRate},
    length::meter,
    pressure::pascal,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_hour,
};

fn main() -> Result<(), Box<dyn Error>> {
    let (flags, names): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|arg| arg.starts_with("--"));

    let level = if flags.iter().any(|flag| flag == "--debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let model = match names.first() {
        Some(name) => name.parse::<PropertyModel>()?,
        None => PropertyModel::default(),
    };
    let air = AirModel::select(model)?;
    println!("air model: {model}");

    let t = ThermodynamicTemperature::new::<degree_celsius>(0.0);
    let m = Length::new::<meter>;
    let m3h = VolumeRate::new::<cubic_meter_per_hour>;
    let main = CrossSection::circular(m(0.16))?;

    let mut rows: Vec<(String, FittingLoss)> = Vec::new();

    let run = DuctInput::new(m3h(600.0), t, main, m(1.37))?;
    rows.push(("duct d160, 1.37 m".into(), duct(&run, &air)?));

    let bend = ElbowInput::new(m3h(600.0), t, main, Angle::new::<degree>(90.0), m(0.185))?;
    rows.push(("bend 90°, revised".into(), elbow(&bend, &air)?));
    rows.push((
        "bend 90°, legacy".into(),
        elbow(&bend.with_version(CorrelationVersion::Legacy), &air)?,
    ));

    let split = TeeInput::new(
        t,
        FlowDirection::Diverging,
        Angle::new::<degree>(90.0),
        JunctionPort::new(main),
        JunctionPort::with_flow(main, m3h(300.0)),
        JunctionPort::with_flow(main, m3h(600.0)),
    )?;
    let losses = tee(&split, &air)?;
    rows.push(("tee to branch".into(), losses.to_branch));
    rows.push(("tee to through".into(), losses.to_through));

    let rectangular = CrossSection::rectangular(m(0.3), m(0.6))?;
    let flat_bend = ElbowInput::new(
        m3h(1000.0),
        t,
        rectangular,
        Angle::new::<degree>(90.0),
        m(0.25),
    )?
    .with_orientation(Orientation::Horizontal);
    rows.push(("bend 300x600, horizontal".into(), elbow(&flat_bend, &air)?));

    let outlet = CrossSection::circular(m(0.125))?;
    let reducer = TransitionInput::new(m3h(300.0), t, main, outlet, m(0.078))?;
    rows.push(("reducer d160 → d125".into(), transition(&reducer, &air)?));

    println!("{:<28} {:>8} {:>8} {:>10}", "fitting", "ζ", "v, m/s", "Δp, Pa");
    let mut total = 0.0;
    for (name, loss) in &rows {
        let dp = loss.pressure_drop.get::<pascal>();
        total += dp;
        println!(
            "{name:<28} {:>8.3} {:>8.2} {:>10.2}",
            loss.coefficient,
            loss.velocity.get::<meter_per_second>(),
            dp
        );
    }
    println!("{:<28} {:>8} {:>8} {total:>10.2}", "total", "", "");

    Ok(())
}
