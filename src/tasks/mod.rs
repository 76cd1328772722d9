pub mod water_torture;

pub use water_torture::handle_water_torture;
