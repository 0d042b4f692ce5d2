use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use quote_cart::cart::Cart;
use quote_cart::catalog::Catalog;
use quote_cart::config::{
    ContactNumber, StoreConfig, DEFAULT_BUSINESS_NAME, DEFAULT_CONTACT_NUMBER, DEFAULT_CURRENCY,
};
use quote_cart::handoff;
use quote_cart::intent::IntentReader;
use quote_cart::message;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a CSV stream of cart operations and print the quotation artifact
    Quote {
        /// Input intents CSV file
        intents: PathBuf,

        /// Catalog JSON file. Falls back to the built-in demo catalog.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Which artifact to print
        #[arg(long, value_enum, default_value = "message")]
        emit: Emit,

        /// Business name used in the message greeting
        #[arg(long, default_value = DEFAULT_BUSINESS_NAME)]
        business: String,

        /// Contact number in international format, digits only
        #[arg(long, default_value = DEFAULT_CONTACT_NUMBER)]
        contact: ContactNumber,

        /// Currency marker shown before prices
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,
    },

    /// Filter the catalog by name or id and print matches as CSV
    Search {
        /// Search text, matched against product names and ids
        query: String,

        /// Catalog JSON file. Falls back to the built-in demo catalog.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Emit {
    /// The order message text
    Message,
    /// A wa.me link carrying the order message
    Link,
    /// The tel: dial string
    Dial,
    /// Item and price totals as CSV
    Summary,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Quote {
            intents,
            catalog,
            emit,
            business,
            contact,
            currency,
        } => {
            let config = StoreConfig {
                business_name: business,
                contact,
                currency,
            };
            run_quote(&intents, catalog.as_deref(), emit, &config)
        }
        Command::Search { query, catalog } => run_search(&query, catalog.as_deref()),
    }
}

fn run_quote(
    intents: &Path,
    catalog: Option<&Path>,
    emit: Emit,
    config: &StoreConfig,
) -> Result<()> {
    let mut cart = Cart::new(load_catalog(catalog)?);

    let file = File::open(intents).into_diagnostic()?;
    let reader = IntentReader::new(file);
    for result in reader.intents() {
        match result {
            Ok(intent) => cart.apply(intent),
            Err(e) => {
                eprintln!("Error reading intent: {}", e);
            }
        }
    }

    match emit {
        Emit::Message => println!("{}", message::order_message(&cart, config)),
        Emit::Link => {
            ensure_not_empty(&cart)?;
            let text = message::order_message(&cart, config);
            let link = handoff::messaging_link(&config.contact, &text).into_diagnostic()?;
            println!("{}", link);
        }
        Emit::Dial => {
            ensure_not_empty(&cart)?;
            println!("{}", handoff::dial_link(&config.contact));
        }
        Emit::Summary => {
            let summary = cart.summarize();
            let mut writer = csv::Writer::from_writer(io::stdout().lock());
            writer
                .write_record(["total_items", "total_price"])
                .into_diagnostic()?;
            writer
                .write_record([
                    summary.total_items.to_string(),
                    format!("{:.2}", summary.total_price),
                ])
                .into_diagnostic()?;
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}

fn run_search(query: &str, catalog: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog)?;

    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    writer
        .write_record(["id", "name", "unit_price", "requires_dimensions", "dimension_label"])
        .into_diagnostic()?;
    for product in catalog.filter(query) {
        writer
            .write_record([
                product.id.to_string(),
                product.name.clone(),
                format!("{:.2}", product.unit_price),
                product.requires_dimensions.to_string(),
                product.dimension_label.clone(),
            ])
            .into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            Catalog::from_json(file).into_diagnostic()
        }
        None => Ok(Catalog::sample()),
    }
}

/// Messaging and dialing handoffs need a recipient-ready cart; an empty one
/// has nothing to quote.
fn ensure_not_empty(cart: &Cart) -> Result<()> {
    if cart.is_empty() {
        miette::bail!("cart is empty, nothing to hand off");
    }
    Ok(())
}

/// Log to stderr so stdout stays clean for the emitted artifact.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quote_cart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
