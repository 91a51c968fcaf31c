use crate::{
	core::error::ServiceResult,
	rpc::RingServiceClient
};

use tarpc::tokio_serde::formats::Bincode;

pub async fn setup_client(addr: &str) -> ServiceResult<RingServiceClient> {
	let transport = tarpc::serde_transport::tcp::connect(addr, Bincode::default).await?;
	Ok(RingServiceClient::new(tarpc::client::Config::default(), transport).spawn())
}
