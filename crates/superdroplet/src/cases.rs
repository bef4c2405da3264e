//! Named initial-condition cases from the coalescence literature.
//!
//! Each case describes an exponential drop-volume distribution
//! `n(x) = (n_0 / X_0) exp(−x / X_0)` together with how long to run it and
//! how often to sample output.
//!
//! # References
//! - Shima et al. (2009) - The super-droplet method
//! - Simmel et al. (2002) - Numerical models of the stochastic collection equation
//! - Bott (1998) - A flux method for the numerical solution of the stochastic
//!   collection equation

use units::{Density, Length, Mass, Time, Volume};

use crate::constants::RHO_WATER;
use crate::error::SuperdropletError;

/// An exponential initial droplet distribution and its run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// Case identifier, e.g. `shima_golo`
    pub name: &'static str,
    /// Total simulated time
    pub t_end: Time,
    /// Interval between output snapshots
    pub plot_dt: Time,
    /// Initial number density of real droplets (m⁻³)
    pub n_0: f64,
    /// Radius of the mean-volume drop
    pub r_0: Length,
    /// Mean drop volume, (4π/3) R₀³
    pub x_0: Volume,
    /// Mean drop mass, X₀ ρ_w
    pub m_0: Mass,
    /// Initial liquid water content (g/m³)
    pub m_tot: f64,
}

impl Case {
    /// Every case name accepted by [`Case::named`].
    pub const NAMES: [&'static str; 11] = [
        "shima_golo",
        "shima_hydro1",
        "shima_hydro2",
        "simmel_golo1",
        "simmel_golo3",
        "simmel_long1",
        "simmel_long2",
        "bott_golo",
        "bott_hydro1",
        "bott_hydro2",
        "bott_hydro2.5",
    ];

    /// Look up a case by name.
    ///
    /// # Example
    /// ```
    /// use superdroplet::Case;
    ///
    /// let case = Case::named("shima_golo").unwrap();
    /// assert_eq!(case.t_end.to_seconds(), 3601.0);
    ///
    /// assert!(Case::named("no_such_case").is_err());
    /// ```
    pub fn named(name: &str) -> Result<Self, SuperdropletError> {
        let shima_r0 = 30.531e-6;
        let simmel_n0 = 3e8;

        let case = match name {
            "shima_golo" => Self::build(
                "shima_golo",
                3601.0,
                1200.0,
                Some(2f64.powi(23)),
                shima_r0,
                1.0,
            ),
            "shima_hydro1" => Self::build(
                "shima_hydro1",
                1801.0,
                600.0,
                Some(2f64.powi(23)),
                shima_r0,
                1.0,
            ),
            "shima_hydro2" => Self::build(
                "shima_hydro2",
                3601.0,
                1200.0,
                Some(27.0 * 2f64.powi(23)),
                shima_r0 / 3.0,
                1.0,
            ),
            "simmel_golo1" => Self::build(
                "simmel_golo1",
                40.0 * 60.0 + 1.0,
                600.0,
                Some(simmel_n0),
                9.3e-6,
                1.0,
            ),
            "simmel_golo3" => Self::build(
                "simmel_golo3",
                15.0 * 60.0 + 1.0,
                300.0,
                Some(simmel_n0),
                13.4e-6,
                3.0,
            ),
            "simmel_long1" => Self::build(
                "simmel_long1",
                40.0 * 60.0 + 1.0,
                600.0,
                Some(simmel_n0),
                9.3e-6,
                1.0,
            ),
            "simmel_long2" => Self::build(
                "simmel_long2",
                15.0 * 60.0 + 1.0,
                300.0,
                Some(1.84e8),
                13.0e-6,
                2.0,
            ),
            "bott_golo" => Self::build(
                "bott_golo",
                3601.0,
                900.0,
                None,
                10e-6,
                1.0,
            ),
            "bott_hydro1" => Self::build(
                "bott_hydro1",
                3601.0,
                900.0,
                None,
                10e-6,
                1.0,
            ),
            "bott_hydro2" => Self::build(
                "bott_hydro2",
                20.0 * 60.0 + 1.0,
                300.0,
                None,
                10e-6,
                2.0,
            ),
            "bott_hydro2.5" => Self::build(
                "bott_hydro2.5",
                3601.0,
                1200.0,
                None,
                10e-6,
                0.5,
            ),
            _ => return Err(SuperdropletError::UnknownCase(name.to_string())),
        };

        Ok(case)
    }

    /// Assemble a case; `n_0 = None` derives the number density from the
    /// liquid water content.
    fn build(
        name: &'static str,
        t_end_s: f64,
        plot_dt_s: f64,
        n_0: Option<f64>,
        r_0_m: f64,
        m_tot: f64,
    ) -> Self {
        let r_0 = Length::from_meters(r_0_m);
        let x_0 = Volume::of_sphere(r_0);
        let m_0 = Density::from_kg_per_m3(RHO_WATER) * x_0;

        Self {
            name,
            t_end: Time::from_seconds(t_end_s),
            plot_dt: Time::from_seconds(plot_dt_s),
            n_0: n_0.unwrap_or_else(|| estimate_n0(r_0, m_tot)),
            r_0,
            x_0,
            m_0,
            m_tot,
        }
    }
}

/// Number density (m⁻³) of drops of radius `r_0` that carry `m_tot` g/m³
/// of liquid water.
pub fn estimate_n0(r_0: Length, m_tot: f64) -> f64 {
    let drop_mass = Density::from_kg_per_m3(RHO_WATER) * Volume::of_sphere(r_0);
    Mass::from_grams(m_tot) / drop_mass
}
