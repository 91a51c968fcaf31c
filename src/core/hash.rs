use std::io::Cursor;
use super::error::{RingError, RingResult};

/// Seed shared by every peer; changing it breaks agreement on owners.
pub const SEED: u32 = 0;

/// MurmurHash3 (x86, 32-bit) of the key, read as a signed 32-bit integer.
pub fn murmur(key: &[u8]) -> RingResult<i32> {
	let digest = murmur3::murmur3_32(&mut Cursor::new(key), SEED)
		.map_err(|e| RingError::HashFailure(e.to_string()))?;
	Ok(digest as i32)
}
