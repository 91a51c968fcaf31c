use std::{net::SocketAddr, sync::Arc};
use futures::{future, prelude::*};
use log::{debug, info, warn};
use tarpc::{
	context,
	server::Channel,
	tokio_serde::formats::Bincode
};
use crate::{
	core::{
		error::*,
		hash::murmur,
		weight::mix,
		Node,
		NodeId,
		Ring
	},
	rpc::*
};

/// Serves a shared `Ring` over tarpc.
#[derive(Clone)]
pub struct RingServer {
	addr: String,
	ring: Arc<Ring>
}

impl RingServer {
	pub fn new(addr: &str, ring: Ring) -> Self {
		RingServer {
			addr: addr.to_string(),
			ring: Arc::new(ring)
		}
	}

	pub fn ring(&self) -> &Arc<Ring> {
		&self.ring
	}

	/// Start the server
	/// Returns once the listener is bound
	pub async fn start(&self) -> ServiceResult<ServerManager> {
		// channel used to shutdown (true means shutdown)
		let (tx, mut rx) = tokio::sync::watch::channel(false);

		let mut listener = tarpc::serde_transport::tcp::listen(&self.addr, Bincode::default).await?;
		let local_addr = listener.local_addr();
		let server = self.clone();
		let max_connections = self.ring.config().max_connections as usize;

		let handle = tokio::spawn(async move {
			listener.config_mut().max_frame_length(usize::MAX);
			let channel_server = server.clone();
			let listener_fut = listener
				.filter_map(|r| future::ready(r.ok()))
				.map(tarpc::server::BaseChannel::with_defaults)
				.map(move |channel| {
					// Clones share the ring through the Arc
					let s = channel_server.clone();
					async move {
						channel.execute(s.serve()).await;
					}
				})
				.buffer_unordered(max_connections)
				.for_each(|_| async {});

			tokio::select! {
				_ = listener_fut => {
					warn!("{}: listener terminated", server.addr);
				},
				_ = rx.changed() => {
					debug!("{}: listener stopped gracefully", server.addr);
				}
			};
		});

		info!("ring service listening at {} ({} nodes)", local_addr, self.ring.len());
		Ok(ServerManager {
			addr: local_addr,
			handle,
			tx
		})
	}
}

#[tarpc::server]
impl RingService for RingServer {
	async fn add_rpc(self, _: context::Context, addr: String) -> RingResult<()> {
		let node = Node::parse(&addr)?;
		self.ring.add(node);
		Ok(())
	}

	async fn remove_rpc(self, _: context::Context, addr: String) -> RingResult<()> {
		let node = Node::parse(&addr)?;
		self.ring.remove(&node)
	}

	async fn nodes_rpc(self, _: context::Context) -> Vec<Node> {
		self.ring.nodes().iter().cloned().collect()
	}

	async fn hash_rpc(self, _: context::Context, key: Vec<u8>) -> RingResult<Node> {
		self.ring.hash(&key)
	}

	// Weight of any valid node, member or not
	async fn weight_rpc(self, _: context::Context, addr: String, key: Vec<u8>) -> RingResult<u32> {
		let node = Node::parse(&addr)?;
		Ok(mix(node.numeric_id(), murmur(&key)?, self.ring.config().modulus))
	}
}

pub struct ServerManager {
	pub addr: SocketAddr,
	pub handle: tokio::task::JoinHandle<()>,
	pub tx: tokio::sync::watch::Sender<bool>
}

impl ServerManager {
	/// Wait for the server to terminate
	pub async fn wait(self) -> ServiceResult<()> {
		self.handle.await?;
		Ok(())
	}

	/// Stop the server gracefully
	pub async fn stop(self) -> ServiceResult<()> {
		self.tx.send(true).map_err(|_| ServiceError::Shutdown)?;
		self.wait().await
	}
}
