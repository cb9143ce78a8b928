use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pos-client")]
#[command(about = "Point-of-sale cashier client with an offline sales queue")]
#[command(long_about = "pos-client - a point-of-sale cashier client

Records sales and posts them to the store backend. When the backend is
unreachable the sale is kept in a local queue; run 'pos-client sync' later
to deliver everything still pending.

QUICK START:
  pos-client lookup 4006381333931          Look up a product by barcode
  pos-client sell --barcode 4006381333931  Sell one unit of a scanned product
  pos-client sell --sku A --price 5 -q 2   Sell two units at a given price
  pos-client sync                          Re-post queued sales
  pos-client queue list                    Show the local queue

CONFIGURATION:
  ~/.pos-client/config.yaml holds the backend URL and store id.
  --backend-url / POS_BACKEND_URL and --store-id / POS_STORE_ID override it.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Backend base URL, e.g. <http://localhost:8000>
    #[arg(long, env = "POS_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// Store identifier used to prefix transaction ids
    #[arg(long, env = "POS_STORE_ID", global = true)]
    pub store_id: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). `POS_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a product by barcode
    ///
    /// Queries the backend's product endpoint and prints the SKU, name and
    /// price. Nothing is recorded.
    #[command(alias = "l")]
    Lookup {
        /// Barcode as scanned
        barcode: String,
    },

    /// Record a sale
    ///
    /// Posts the sale to the backend right away. If the backend cannot be
    /// reached, answers with an error status, or times out, the sale is
    /// stored in the local queue instead.
    ///
    /// # Examples
    ///
    ///   pos-client sell --sku A --price 5.0 --qty 2
    ///   pos-client sell --barcode 4006381333931
    #[command(alias = "s")]
    Sell(SellArgs),

    /// Re-post every pending sale in the local queue
    ///
    /// Each pending sale is attempted once. Sales the backend accepts are
    /// marked synced; the rest stay pending for the next run.
    Sync,

    /// Inspect the local sales queue
    ///
    /// # Subcommands
    ///
    ///   list     Show queued sales
    ///   status   Show pending/synced counts
    #[command(alias = "q")]
    Queue(QueueArgs),

    /// Show or initialise configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pos-client completions bash > ~/.local/share/bash-completion/completions/pos-client
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the sell command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("product").required(true).args(["sku", "barcode"])))]
pub struct SellArgs {
    /// Product SKU (requires --price)
    #[arg(long, requires = "price")]
    pub sku: Option<String>,

    /// Unit price for --sku
    #[arg(long)]
    pub price: Option<f64>,

    /// Barcode to look up; SKU and price come from the backend
    #[arg(long, conflicts_with = "price")]
    pub barcode: Option<String>,

    /// Quantity sold
    #[arg(long, short = 'q', default_value_t = 1)]
    pub qty: u32,

    /// Payment status recorded on the sale (defaults to the configured one)
    #[arg(long)]
    pub payment_status: Option<String>,
}

#[derive(Args)]
pub struct QueueArgs {
    #[command(subcommand)]
    pub command: QueueCommands,
}

/// Queue subcommands.
#[derive(Subcommand)]
pub enum QueueCommands {
    /// List queued sales, newest first
    List {
        /// Which sales to show
        #[arg(long, short = 's', value_enum, default_value = "all")]
        status: StatusFilter,

        /// Maximum sales to show
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Show queue counts and the age of the oldest pending sale
    Status,
}

/// Status filter for `queue list`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    Synced,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration and file locations
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
