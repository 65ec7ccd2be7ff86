pub mod decode;
pub mod encode;
pub mod strategy;

pub use decode::Decoder;
pub use encode::Encoder;
pub use strategy::Strategy;
