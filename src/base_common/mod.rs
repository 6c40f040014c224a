pub mod alphabet;
pub mod zeroes;

pub use alphabet::Alphabet;
