use std::collections::{BTreeSet, HashMap};
use rendezvous_ring::core::{Node, Ring, RingError};
use rand::prelude::*;

// Common mod in tests
mod common;
use common::*;

#[test]
fn test_hash() -> anyhow::Result<()> {
	init_logger();
	let mut rng = StdRng::seed_from_u64(0);
	let keys = random_keys(&mut rng, 300);

	let ring = Ring::with_nodes(vec![node(IP1)]);
	// with only one node, all keys should hash to it
	for k in keys.iter() {
		assert_eq!(ring.hash(k)?, node(IP1));
	}

	ring.add(node(IP2));
	ring.add(node(IP3));
	// but with three nodes, keys should hash roughly equally
	let mut counts: HashMap<Node, usize> = HashMap::new();
	for k in keys.iter() {
		*counts.entry(ring.hash(k)?).or_insert(0) += 1;
	}
	assert_eq!(counts.len(), 3);
	for (n, count) in counts.iter() {
		assert!(*count >= 50, "{} only owns {} of {} keys", n, count, keys.len());
	}

	// now remove ip1 and make sure it never appears
	ring.remove(&node(IP1))?;
	for k in keys.iter() {
		assert_ne!(ring.hash(k)?, node(IP1));
	}
	Ok(())
}

#[test]
fn test_removal_only_moves_keys_of_removed_node() -> anyhow::Result<()> {
	init_logger();
	let mut rng = StdRng::seed_from_u64(42);
	let keys = random_keys(&mut rng, 500);
	let addrs: Vec<_> = (1..=8).map(|i| format!("10.0.{}.{}", i, i * 3)).collect();
	let ring = Ring::with_nodes(addrs.iter().map(|a| node(a)));

	let before: Vec<Node> = keys.iter().map(|k| ring.hash(k)).collect::<Result<_, _>>()?;
	let removed = node(&addrs[3]);
	ring.remove(&removed)?;

	let mut moved = 0;
	for (k, owner) in keys.iter().zip(before.iter()) {
		let after = ring.hash(k)?;
		if *owner == removed {
			moved += 1;
			// falls to the runner-up of the full ring
			assert_ne!(after, removed);
		} else {
			assert_eq!(after, *owner);
		}
	}
	assert!(moved > 0);
	Ok(())
}

#[test]
fn test_addition_only_claims_keys_for_new_node() -> anyhow::Result<()> {
	init_logger();
	let mut rng = StdRng::seed_from_u64(7);
	let keys = random_keys(&mut rng, 500);
	let ring = Ring::with_nodes(vec![node(IP1), node(IP2), node(IP3)]);

	let before: Vec<Node> = keys.iter().map(|k| ring.hash(k)).collect::<Result<_, _>>()?;
	let added = node("4.4.4.4");
	ring.add(added.clone());

	for (k, owner) in keys.iter().zip(before.iter()) {
		let after = ring.hash(k)?;
		assert!(after == *owner || after == added);
	}
	Ok(())
}

#[test]
fn test_independent_rings_agree() -> anyhow::Result<()> {
	let mut rng = StdRng::seed_from_u64(1);
	let keys = random_keys(&mut rng, 200);
	// insertion order must not matter
	let r1 = Ring::with_nodes(vec![node(IP1), node(IP2), node(IP3)]);
	let r2: Ring = Ring::new();
	r2.add(node(IP3));
	r2.add(node(IP1));
	r2.add(node(IP2));
	for k in keys.iter() {
		assert_eq!(r1.hash(k)?, r2.hash(k)?);
	}
	Ok(())
}

#[test]
fn test_errors() {
	let ring: Ring = Ring::new();
	assert!(matches!(ring.hash("anything"), Err(RingError::EmptyRing(_))));
	assert_eq!(
		ring.remove(&node(IP1)),
		Err(RingError::NodeNotFound(IP1.to_string()))
	);
	assert_eq!(
		"not-an-ip".parse::<Node>(),
		Err(RingError::InvalidNodeIdentifier("not-an-ip".to_string()))
	);

	ring.add(node(IP1));
	ring.add(node(IP2));
	ring.remove(&node(IP1)).unwrap();
	assert_eq!(*ring.nodes(), BTreeSet::from([node(IP2)]));
}
