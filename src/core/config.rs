use std::default::Default;
use super::weight::Modulus;

#[derive(Clone, Debug)]
pub struct Config {
	/// modulus of the weight formula (all peers must agree)
	pub modulus: Modulus,
	/// max number of concurrent connections buffered
	pub max_connections: u64
}

impl Default for Config {
	fn default() -> Self {
		Self {
			modulus: Modulus::Pow31,
			max_connections: 16
		}
	}
}
