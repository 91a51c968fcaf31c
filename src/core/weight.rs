use serde::{Deserialize, Serialize};
use super::{
	error::RingResult,
	hash::murmur
};

// Multiplier and increment of the classic LCG used by the HRW paper
const A: i128 = 1103515245;
const B: i128 = 12345;

/// Modulus the weight is reduced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Modulus {
	/// 2^31
	#[default]
	Pow31,
	/// 29, i.e. `2 XOR 31`. Only for agreeing with peers that still compute
	/// the modulus that way; every peer has to switch at the same time.
	LegacyXor
}

impl Modulus {
	pub fn value(self) -> i128 {
		match self {
			Modulus::Pow31 => 1 << 31,
			Modulus::LegacyXor => 2 ^ 31
		}
	}
}

/// Weight of a node for a precomputed key hash.
///
/// `(A * ((A * node + B) ^ h) + B) mod M`, with `h` sign-extended before the
/// XOR. The result is always in `[0, M)`.
pub fn mix(node: u32, h: i32, modulus: Modulus) -> u32 {
	let inner = (A * node as i128 + B) ^ h as i128;
	let w = (A * inner + B).rem_euclid(modulus.value());
	// M <= 2^31, so the reduced value fits
	w as u32
}

/// Weight of a node for a key, using the 2^31 modulus.
pub fn weight(node: u32, key: &[u8]) -> RingResult<u32> {
	Ok(mix(node, murmur(key)?, Modulus::Pow31))
}
