pub mod node;
pub mod ring;
pub mod hash;
pub mod weight;
pub mod config;
pub mod error;

pub use node::*;
pub use ring::Ring;
pub use config::*;
pub use error::*;
pub use hash::murmur;
pub use weight::{mix, weight, Modulus};
