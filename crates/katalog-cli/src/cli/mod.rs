//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use katalog_core::domain::{ProductDraft, ProductField};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "katalog",
    bin_name = "katalog",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Product catalog with validation and discount pricing",
    long_about = "Katalog validates product submissions, stores accepted \
                  records locally, and lists them with derived sale prices \
                  and discount badges.",
    after_help = "EXAMPLES:\n\
        \x20 katalog add --name Teapot --seller 'Çay Evi' --stock 10 --price 89,90 \\\n\
        \x20             --category Kitchen --images https://img.example/teapot.jpg\n\
        \x20 katalog list\n\
        \x20 katalog show product-1f0c...\n\
        \x20 katalog completions bash > /usr/share/bash-completion/completions/katalog",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Submit a new product.
    #[command(
        visible_alias = "a",
        about = "Submit a new product",
        after_help = "EXAMPLES:\n\
            \x20 katalog add --name Lamp --seller 'Işık' --stock 3 --price 120 \\\n\
            \x20             --discounted 99,90 --category Home --images https://a.jpg,https://b.jpg\n\
            \x20 katalog add --interactive\n\
            \x20 katalog add --name Lamp --price 120 --dry-run"
    )]
    Add(AddArgs),

    /// List stored products.
    #[command(
        visible_alias = "ls",
        about = "List products with their pricing",
        after_help = "EXAMPLES:\n\
            \x20 katalog list\n\
            \x20 katalog list --format json\n\
            \x20 katalog list --format csv > products.csv"
    )]
    List(ListArgs),

    /// Show a single product.
    #[command(
        about = "Show one product in detail",
        after_help = "EXAMPLES:\n\
            \x20 katalog show product-1700000000000"
    )]
    Show(ShowArgs),

    /// Initialise a Katalog configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 katalog init           # default location\n\
            \x20 katalog init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 katalog completions bash > ~/.local/share/bash-completion/completions/katalog\n\
            \x20 katalog completions zsh  > ~/.zfunc/_katalog\n\
            \x20 katalog completions fish > ~/.config/fish/completions/katalog.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Katalog configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 katalog config get display.currency\n\
            \x20 katalog config list\n\
            \x20 katalog config path"
    )]
    Config(ConfigCommands),
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `katalog add`.
///
/// Every field is optional at the argument level so that a missing value is
/// reported by the validator alongside every other failing field.
#[derive(Debug, Default, Args)]
pub struct AddArgs {
    /// Product name.
    #[arg(long = "name", value_name = "TEXT", help = "Product name")]
    pub name: Option<String>,

    /// Seller name.
    #[arg(long = "seller", value_name = "TEXT", help = "Seller name")]
    pub seller: Option<String>,

    /// Stock quantity, whole number.
    #[arg(long = "stock", value_name = "N", help = "Stock quantity")]
    pub stock: Option<String>,

    /// List price. `,` or `.` as the decimal separator.
    #[arg(long = "price", value_name = "AMOUNT", help = "Price")]
    pub price: Option<String>,

    /// Discounted price, strictly lower than the price.
    #[arg(
        long = "discounted",
        value_name = "AMOUNT",
        help = "Discounted price (optional)"
    )]
    pub discounted: Option<String>,

    /// Category name.
    #[arg(long = "category", value_name = "TEXT", help = "Category")]
    pub category: Option<String>,

    /// Comma-separated https image URLs.
    #[arg(
        long = "images",
        value_name = "URLS",
        help = "Comma-separated https image URLs"
    )]
    pub images: Option<String>,

    /// Validate without saving.
    #[arg(long = "dry-run", help = "Validate without saving")]
    pub dry_run: bool,

    /// Prompt for each field instead of reading flags.
    #[arg(
        short = 'i',
        long = "interactive",
        help = "Prompt for each field, re-asking the ones that fail"
    )]
    pub interactive: bool,
}

impl AddArgs {
    /// Collect the flag values into a draft. Absent flags become empty fields.
    pub fn to_draft(&self) -> ProductDraft {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        ProductDraft::new()
            .with(ProductField::ProductName, value(&self.name))
            .with(ProductField::SellerInfo, value(&self.seller))
            .with(ProductField::StockQuantity, value(&self.stock))
            .with(ProductField::Price, value(&self.price))
            .with(ProductField::DiscountedPrice, value(&self.discounted))
            .with(ProductField::Category, value(&self.category))
            .with(ProductField::ProductImages, value(&self.images))
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `katalog list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable cards.
    Table,
    /// One id and name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `katalog show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Product id, as printed by `add` and `list`.
    #[arg(value_name = "ID", help = "Product id")]
    pub id: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `katalog init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `katalog completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `katalog config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `display.currency`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
