pub mod base_binary;
pub mod base_common;
pub mod base_radix;
pub mod codec;
pub mod error;
pub mod presets;

pub use base_common::Alphabet;
pub use codec::{Codec, Mode, Options};
pub use error::Error;
