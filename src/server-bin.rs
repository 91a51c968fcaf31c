use rendezvous_ring::{
	core::{
		config::Config,
		Modulus,
		Node,
		Ring,
		RingResult
	},
	server::RingServer
};
use clap::Parser;

#[derive(Parser)]
struct Args {
	/// Local addr to bind (<host>:<port>)
	addr: String,

	/// Seed the ring with a node (IPv4 address), can be repeated
	#[clap(short, long)]
	node: Vec<String>,

	/// Reduce weights modulo 29 to agree with peers using the legacy formula
	#[clap(long)]
	legacy_modulus: bool,

	/// Max number of concurrent client connections
	#[clap(long, default_value_t = 16)]
	max_connections: u64
}


#[tokio::main]
async fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let nodes = args.node.iter()
		.map(|addr| Node::parse(addr))
		.collect::<RingResult<Vec<_>>>()?;

	let config = Config {
		modulus: if args.legacy_modulus {
			Modulus::LegacyXor
		} else {
			Modulus::Pow31
		},
		max_connections: args.max_connections
	};
	let s = RingServer::new(&args.addr, Ring::with_config(nodes, config));
	let manager = s.start().await?;
	manager.wait().await?;
	Ok(())
}
