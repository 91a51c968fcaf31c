use crate::core::{
	Node,
	RingResult
};

#[tarpc::service]
pub trait RingService {
	// Membership (nodes are sent as address strings and validated on arrival)
	async fn add_rpc(addr: String) -> RingResult<()>;
	async fn remove_rpc(addr: String) -> RingResult<()>;
	async fn nodes_rpc() -> Vec<Node>;

	// Owner lookup
	async fn hash_rpc(key: Vec<u8>) -> RingResult<Node>;
	async fn weight_rpc(addr: String, key: Vec<u8>) -> RingResult<u32>;
}
