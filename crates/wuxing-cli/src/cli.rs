use clap::{Parser, Subcommand};

/// Five-element birth classification and product recommendations
#[derive(Parser, Debug)]
#[command(name = "wuxing")]
#[command(version, about = "Five-element birth classification and product recommendations")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a birth moment and recommend products
    Calculate(CalculateArgs),
    /// Classify raw calendar fields
    Classify(ClassifyArgs),
    /// List countries, or the regions of a country
    Regions(RegionsArgs),
    /// Browse the product catalog
    Products(ProductsArgs),
    /// Create a storefront cart from selected products
    Cart(CartArgs),
}

impl Commands {
    pub fn output_format(&self) -> &str {
        match self {
            Commands::Calculate(args) => &args.output_format,
            Commands::Classify(args) => &args.output_format,
            Commands::Regions(args) => &args.output_format,
            Commands::Products(args) => &args.output_format,
            Commands::Cart(args) => &args.output_format,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct CalculateArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Birth time (HH:MM)
    #[arg(short, long)]
    pub time: String,

    /// Birth country (e.g., 中国)
    #[arg(short, long)]
    pub country: String,

    /// Birth region within the country (e.g., 北京)
    #[arg(short, long)]
    pub region: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub year: i64,

    #[arg(long, allow_hyphen_values = true)]
    pub month: i64,

    #[arg(long, allow_hyphen_values = true)]
    pub day: i64,

    #[arg(long, allow_hyphen_values = true)]
    pub hour: i64,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct RegionsArgs {
    /// List the regions and hour offsets of this country
    #[arg(short, long)]
    pub country: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ProductsArgs {
    /// Only products suited to this element (e.g., wood or 木)
    #[arg(short, long, conflicts_with_all = ["id", "featured", "grouped"])]
    pub element: Option<String>,

    /// Show a single product
    #[arg(long, conflicts_with_all = ["featured", "grouped"])]
    pub id: Option<String>,

    /// Show the first N products
    #[arg(long, num_args = 0..=1, default_missing_value = "3", conflicts_with = "grouped")]
    pub featured: Option<usize>,

    /// Group products by element
    #[arg(long)]
    pub grouped: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct CartArgs {
    /// Product id to add (repeatable)
    #[arg(short, long = "product", required = true)]
    pub products: Vec<String>,

    /// Quantity for each product
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,

    /// Storefront shop name
    #[arg(long, env = "SHOPIFY_SHOP_NAME", default_value = "")]
    pub shop_name: String,

    /// Storefront API key
    #[arg(long, env = "SHOPIFY_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Storefront API secret
    #[arg(long, env = "SHOPIFY_API_SECRET", default_value = "", hide_env_values = true)]
    pub api_secret: String,

    /// Storefront API version
    #[arg(long, env = "SHOPIFY_API_VERSION", default_value = wuxing_core::cart::DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
