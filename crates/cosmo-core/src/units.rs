// cosmo-core/src/units.rs

use uom::si::f64::{Length as UomLength, MassDensity as UomMassDensity, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Time = UomTime;

/// Length from a value in megaparsecs.
#[inline]
pub fn mpc(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v * constants::KM_PER_MPC)
}

/// Length expressed in megaparsecs.
#[inline]
pub fn in_mpc(l: Length) -> f64 {
    use uom::si::length::kilometer;
    l.get::<kilometer>() / constants::KM_PER_MPC
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Time from a value in gigayears (tropical years).
#[inline]
pub fn gyr(v: f64) -> Time {
    s(v * constants::SECONDS_PER_TROPICAL_YEAR * 1e9)
}

/// Time expressed in gigayears (tropical years).
#[inline]
pub fn in_gyr(t: Time) -> f64 {
    use uom::si::time::second;
    seconds_to_gyr(t.get::<second>())
}

#[inline]
pub fn seconds_to_gyr(v: f64) -> f64 {
    v / constants::SECONDS_PER_TROPICAL_YEAR / 1e9
}

/// Density from a value in g/cm³.
#[inline]
pub fn g_per_cm3(v: f64) -> Density {
    use uom::si::mass_density::gram_per_cubic_centimeter;
    Density::new::<gram_per_cubic_centimeter>(v)
}

/// Physical constants, fixed for the whole process.
pub mod constants {
    /// Speed of light in km/s.
    pub const SPEED_OF_LIGHT_KM_S: f64 = 2.997_924_58e5;
    /// Newtonian gravitational constant in cm³ g⁻¹ s⁻².
    pub const GRAVITATIONAL_CONSTANT_CGS: f64 = 6.672_59e-8;
    pub const KM_PER_MPC: f64 = 3.085_677_58e19;
    pub const SECONDS_PER_TROPICAL_YEAR: f64 = 3.155_692_6e7;
    /// `648 / π` is arcseconds per radian over 1000, so `dA · π / 648` is kpc per arcsec.
    pub const ARCSEC_SCALE_DIVISOR: f64 = 648.0;
}
