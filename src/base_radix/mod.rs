pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;
pub use decode::Decoder;
pub use encode::Encoder;

/// Upper bound on the digits of base `to` needed per digit of base `from`.
pub fn ratio(from: usize, to: usize) -> f64 {
    (from as f64).ln() / (to as f64).ln()
}

fn scratch_len(len: usize, ratio: f64) -> usize {
    (len as f64 * ratio).ceil() as usize + 1
}
