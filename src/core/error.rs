use serde::{Deserialize, Serialize};
use thiserror::Error;
use std::result::Result;

/// Errors of the ring itself. Serializable so they survive an RPC hop.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingError {
	#[error("Invalid node identifier {0:?}")]
	InvalidNodeIdentifier(String),
	#[error("No node to hash key {0:?} to: ring is empty")]
	EmptyRing(String),
	#[error("Node {0} is not in the ring")]
	NodeNotFound(String),
	#[error("Failed to hash key: {0}")]
	HashFailure(String)
}

pub type RingResult<T> = Result<T, RingError>;

#[derive(Error, Debug)]
pub enum ServiceError {
	#[error("{0}")]
	Ring(#[from] RingError),
	#[error("RPC error")]
	RpcError(#[from] tarpc::client::RpcError),
	#[error("IO error")]
	IoError(#[from] std::io::Error),
	#[error("Task failed")]
	JoinError(#[from] tokio::task::JoinError),
	#[error("Server already stopped")]
	Shutdown
}

pub type ServiceResult<T> = Result<T, ServiceError>;
