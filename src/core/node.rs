use std::{
	fmt,
	net::Ipv4Addr,
	str::FromStr
};
use serde::{Deserialize, Serialize};
use super::error::{RingError, RingResult};

/// Numeric projection of a node identifier used by the weight formula.
pub trait NodeId: Ord + Clone + fmt::Display {
	fn numeric_id(&self) -> u32;
}

impl NodeId for u32 {
	fn numeric_id(&self) -> u32 {
		*self
	}
}

impl NodeId for Ipv4Addr {
	fn numeric_id(&self) -> u32 {
		u32::from(*self)
	}
}

/// A server addressed by a dotted-quad IPv4 string.
///
/// Equality, ordering and hashing follow the address string. The numeric id
/// is derived from it, so the two never disagree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Node {
	addr: String,
	id: u32
}

impl Node {
	pub fn parse(addr: &str) -> RingResult<Self> {
		let ip = Ipv4Addr::from_str(addr)
			.map_err(|_| RingError::InvalidNodeIdentifier(addr.to_string()))?;
		Ok(Node {
			addr: addr.to_string(),
			id: u32::from(ip)
		})
	}

	pub fn addr(&self) -> &str {
		&self.addr
	}

	pub fn id(&self) -> u32 {
		self.id
	}
}

impl NodeId for Node {
	fn numeric_id(&self) -> u32 {
		self.id
	}
}

impl FromStr for Node {
	type Err = RingError;

	fn from_str(s: &str) -> RingResult<Self> {
		Node::parse(s)
	}
}

impl TryFrom<String> for Node {
	type Error = RingError;

	fn try_from(addr: String) -> RingResult<Self> {
		Node::parse(&addr)
	}
}

impl From<Node> for String {
	fn from(node: Node) -> String {
		node.addr
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.addr)
	}
}
