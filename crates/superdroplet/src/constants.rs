/// Density of liquid water (kg/m³)
pub const RHO_WATER: f64 = 1000.0;

/// Golovin kernel coefficient B (s⁻¹)
pub const GOLOVIN_B: f64 = 1.5e3;

/// Pi
pub const PI: f64 = std::f64::consts::PI;

/// Volume of a sphere per unit cubed radius, 4π/3
pub const SPHERE_FACTOR: f64 = 4.0 * PI / 3.0;
