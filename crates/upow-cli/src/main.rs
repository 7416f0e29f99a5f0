use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// uPow wallet command-line interface.
#[derive(Parser)]
#[command(name = "upow-wallet-cli")]
#[command(about = "Command-line wallet for the uPow network")]
#[command(version)]
struct Cli {
    /// Node URL.
    #[arg(long, default_value = upow_rpc::DEFAULT_NODE_URL)]
    node: String,

    /// Key store file path.
    #[arg(long)]
    keys: Option<PathBuf>,

    /// Which stored key to act with.
    #[arg(long, default_value = "0")]
    key_index: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new key pair and add it to the key store.
    CreateWallet,

    /// Show total and staked balance.
    Balance,

    /// Send funds to an address.
    Send {
        /// Destination address.
        #[arg(long)]
        address: String,

        /// Amount in coins (e.g., "1.5").
        #[arg(long)]
        amount: String,

        /// Optional message to attach.
        #[arg(long)]
        message: Option<String>,
    },

    /// Send funds to several addresses in one transaction.
    SendMany {
        /// Destination addresses.
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        addresses: Vec<String>,

        /// Amounts in coins, matching the addresses.
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        amounts: Vec<String>,
    },

    /// Lock an amount as stake.
    Stake {
        /// Amount to stake in coins.
        #[arg(long)]
        amount: String,
    },

    /// Release the existing stake.
    Unstake,

    /// Register this address as an inode.
    RegisterInode,

    /// Give up the inode registration.
    DeregisterInode,

    /// Register this address as a validator.
    RegisterValidator,

    /// Cast votes for an address.
    Vote {
        /// Vote range, at most 10.
        #[arg(long)]
        range: String,

        /// Address to vote for.
        #[arg(long)]
        address: String,
    },

    /// Take back every vote cast on an address.
    Revoke {
        /// Address the votes were cast on.
        #[arg(long)]
        address: String,
    },
}

/// Application context shared across commands.
struct AppContext {
    node_url: String,
    keys_path: PathBuf,
    key_index: usize,
}

impl AppContext {
    fn from_cli(cli: &Cli) -> Self {
        let keys_path = cli.keys.clone().unwrap_or_else(default_keys_path);
        Self {
            node_url: cli.node.clone(),
            keys_path,
            key_index: cli.key_index,
        }
    }
}

fn default_keys_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("upow")
        .join("key_pair_list.json")
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let ctx = AppContext::from_cli(&cli);

    let result = match cli.command {
        Commands::CreateWallet => commands::create_wallet(&ctx),
        Commands::Balance => commands::balance(&ctx).await,
        Commands::Send {
            address,
            amount,
            message,
        } => commands::send(&ctx, &address, &amount, message.as_deref()).await,
        Commands::SendMany { addresses, amounts } => {
            commands::send_many(&ctx, &addresses, &amounts).await
        }
        Commands::Stake { amount } => commands::stake(&ctx, &amount).await,
        Commands::Unstake => commands::unstake(&ctx).await,
        Commands::RegisterInode => commands::register_inode(&ctx).await,
        Commands::DeregisterInode => commands::deregister_inode(&ctx).await,
        Commands::RegisterValidator => commands::register_validator(&ctx).await,
        Commands::Vote { range, address } => commands::vote(&ctx, &range, &address).await,
        Commands::Revoke { address } => commands::revoke(&ctx, &address).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
