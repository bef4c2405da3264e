pub mod density;
pub mod length;
pub mod mass;
pub mod time;
pub mod velocity;
pub mod volume;


pub use density::Density;
pub use length::Length;
pub use mass::Mass;
pub use time::Time;
pub use velocity::Velocity;
pub use volume::Volume;
