use sha2::{
    digest::{consts::U32, generic_array::GenericArray},
    Digest, Sha256,
};

pub const CHECKSUM_LEN: usize = 4;

fn sha256(buffer: impl AsRef<[u8]>) -> GenericArray<u8, U32> {
    let mut hasher = Sha256::new();
    hasher.update(buffer);
    hasher.finalize()
}

/// First four bytes of `sha256(sha256(buffer))`.
pub fn compute_checksum(buffer: impl AsRef<[u8]>) -> [u8; CHECKSUM_LEN] {
    let hash = sha256(sha256(buffer));
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash[..CHECKSUM_LEN]);
    checksum
}
