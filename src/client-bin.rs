use rendezvous_ring::{
	client::setup_client,
	rpc::RingServiceClient
};
use tarpc::context;
use clap::Parser;
use inquire::{Text, CustomUserError};
use anyhow::anyhow;

#[derive(Parser)]
struct Args {
	/// Server addr to connect to (<host>:<port>)
	addr: String,
}

const COMMANDS: [&str; 5] = [
	"add",
	"remove",
	"nodes",
	"hash",
	"weight"
];

fn suggest_command(v: &str) -> Result<Vec<String>, CustomUserError> {
	let mut result = Vec::new();
	for command in COMMANDS {
		if !v.is_empty() && command.starts_with(v) {
			result.push(command.to_string());
		}
	}
	Ok(result)
}

fn complete_command(v: &str) -> Result<Option<String>, CustomUserError> {
	let result = suggest_command(v)?;
	let command = result.first().map(|c| c.clone() + " ");
	Ok(command)
}

async fn execute_command(client: &RingServiceClient, command: &str) -> anyhow::Result<()> {
	let words: Vec<_> = command.split_whitespace().collect();
	if words.is_empty() {
		return Err(anyhow!("invalid command"));
	}

	let ctx = context::current();
	match words[0] {
		"add" => {
			if words.len() != 2 {
				return Err(anyhow!("add: expected one node"));
			}
			client.add_rpc(ctx, words[1].to_string()).await??;
		},
		"remove" => {
			if words.len() != 2 {
				return Err(anyhow!("remove: expected one node"));
			}
			client.remove_rpc(ctx, words[1].to_string()).await??;
		},
		"nodes" => {
			for node in client.nodes_rpc(ctx).await? {
				println!("{}", node);
			}
		},
		"hash" => {
			if words.len() != 2 {
				return Err(anyhow!("hash: expected one key"));
			}
			let node = client.hash_rpc(ctx, words[1].as_bytes().to_vec()).await??;
			println!("{}", node);
		},
		"weight" => {
			if words.len() != 3 {
				return Err(anyhow!("weight: expected a node and a key"));
			}
			let weight = client.weight_rpc(
				ctx,
				words[1].to_string(),
				words[2].as_bytes().to_vec()
			).await??;
			println!("{}", weight);
		},
		_ => {
			return Err(anyhow!("invalid command"));
		}
	};
	Ok(())
}


#[tokio::main]
async fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();
	let client = setup_client(&args.addr).await?;

	loop {
		let command = Text::new("")
			.with_suggester(&suggest_command)
			.with_completer(&complete_command)
			.prompt()?;

		if let Err(e) = execute_command(&client, &command).await {
			println!("Error: {}", e);
		}
	}
}
