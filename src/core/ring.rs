use std::{
	collections::BTreeSet,
	sync::{Arc, PoisonError, RwLock}
};
use log::{debug, trace};
use super::{
	config::Config,
	error::{
		*,
		RingError::*
	},
	hash::murmur,
	node::{Node, NodeId},
	weight::mix
};

/// Set of nodes with highest-random-weight owner selection.
///
/// Membership is an immutable snapshot swapped under a lock: readers clone
/// the current `Arc` and work on it lock-free, writers copy on write. A
/// lookup therefore never sees a half-applied `add` or `remove`.
#[derive(Debug)]
pub struct Ring<N: NodeId = Node> {
	nodes: RwLock<Arc<BTreeSet<N>>>,
	config: Config
}

impl<N: NodeId> Ring<N> {
	pub fn new() -> Self {
		Self::with_config(Vec::new(), Config::default())
	}

	/// Ring pre-seeded with `nodes`; duplicates collapse.
	pub fn with_nodes<I: IntoIterator<Item = N>>(nodes: I) -> Self {
		Self::with_config(nodes, Config::default())
	}

	pub fn with_config<I: IntoIterator<Item = N>>(nodes: I, config: Config) -> Self {
		Ring {
			nodes: RwLock::new(Arc::new(nodes.into_iter().collect())),
			config
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	// The set is replaced atomically, so a poisoned lock still guards a
	// consistent snapshot.
	fn snapshot(&self) -> Arc<BTreeSet<N>> {
		self.nodes.read().unwrap_or_else(PoisonError::into_inner).clone()
	}

	/// Insert a node. Adding a member again is a no-op.
	pub fn add(&self, node: N) {
		let mut nodes = self.nodes.write().unwrap_or_else(PoisonError::into_inner);
		if Arc::make_mut(&mut nodes).insert(node.clone()) {
			debug!("added node {} ({} members)", node, nodes.len());
		}
	}

	/// Remove a member, failing with `NodeNotFound` if it is absent.
	pub fn remove(&self, node: &N) -> RingResult<()> {
		let mut nodes = self.nodes.write().unwrap_or_else(PoisonError::into_inner);
		if !nodes.contains(node) {
			return Err(NodeNotFound(node.to_string()));
		}
		Arc::make_mut(&mut nodes).remove(node);
		debug!("removed node {} ({} members)", node, nodes.len());
		Ok(())
	}

	/// Current membership as an immutable snapshot.
	pub fn nodes(&self) -> Arc<BTreeSet<N>> {
		self.snapshot()
	}

	pub fn contains(&self, node: &N) -> bool {
		self.snapshot().contains(node)
	}

	pub fn len(&self) -> usize {
		self.snapshot().len()
	}

	pub fn is_empty(&self) -> bool {
		self.snapshot().is_empty()
	}

	/// Node owning `key`: the maximum of `(weight, node)` over all members.
	///
	/// Equal weights are broken by the node ordering, so every caller with
	/// the same membership picks the same owner.
	pub fn hash<K: AsRef<[u8]>>(&self, key: K) -> RingResult<N> {
		let key = key.as_ref();
		let nodes = self.snapshot();
		let h = murmur(key)?;
		let modulus = self.config.modulus;
		let (w, owner) = nodes.iter()
			.map(|n| (mix(n.numeric_id(), h, modulus), n))
			.max()
			.ok_or_else(|| EmptyRing(String::from_utf8_lossy(key).into_owned()))?;
		trace!("key {:?} -> {} (weight {})", String::from_utf8_lossy(key), owner, w);
		Ok(owner.clone())
	}

	/// Every member with its weight for `key`, highest `(weight, node)` first.
	/// The head of the list is what `hash` returns.
	pub fn weights<K: AsRef<[u8]>>(&self, key: K) -> RingResult<Vec<(u32, N)>> {
		let h = murmur(key.as_ref())?;
		let modulus = self.config.modulus;
		let mut weights: Vec<_> = self.snapshot()
			.iter()
			.map(|n| (mix(n.numeric_id(), h, modulus), n.clone()))
			.collect();
		weights.sort_unstable_by(|a, b| b.cmp(a));
		Ok(weights)
	}
}

impl<N: NodeId> Default for Ring<N> {
	fn default() -> Self {
		Self::new()
	}
}
