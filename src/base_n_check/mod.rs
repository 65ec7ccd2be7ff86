mod checksum;
pub mod decode;
pub mod encode;

pub use checksum::{compute_checksum, CHECKSUM_LEN};
pub use decode::Decoder;
pub use encode::Encoder;
