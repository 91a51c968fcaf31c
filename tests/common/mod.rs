#![allow(dead_code)]

use rand::Rng;
use rendezvous_ring::core::Node;

const HEX_DIGITS: &[u8] = b"0123456789abcdefABCDEF";

pub const IP1: &str = "1.1.1.1";
pub const IP2: &str = "2.1.1.2";
pub const IP3: &str = "3.2.2.2";

pub fn init_logger() {
	// tests in one binary share the global logger
	let _ = env_logger::builder().is_test(true).try_init();
}

pub fn node(addr: &str) -> Node {
	Node::parse(addr).unwrap()
}

// Random hex string of length in [0, max_len)
pub fn random_key<T: Rng>(rng: &mut T, max_len: usize) -> String {
	let len = rng.gen_range(0..max_len);
	(0..len)
		.map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
		.collect()
}

pub fn random_keys<T: Rng>(rng: &mut T, count: usize) -> Vec<String> {
	(0..count).map(|_| random_key(rng, 100)).collect()
}
