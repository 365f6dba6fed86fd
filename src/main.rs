use anyhow::{Context, Result};
use clap::Parser;
use klara_client::http::KlaraClient;
use klara_client::letters::{DeliveryProduct, LetterService, LettersApi, SendLetter};

/// klara - Klara API client
///
/// Send and inspect letters through the Klara API.
///
/// The access token can be passed with --token or via the KLARA_ACCESS_TOKEN
/// environment variable.
///
/// Examples:
///   klara products
///   klara send-letter --organisation 42 --product fast
#[derive(Parser, Debug)]
#[command(author, version = env!("KLARA_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Access token for the Klara API (also via KLARA_ACCESS_TOKEN)
    #[arg(long = "token", env = "KLARA_ACCESS_TOKEN", value_name = "TOKEN", global = true)]
    pub token: Option<String>,

    /// Klara API URL (defaults to https://api.klara.ch)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the delivery product codes
    Products,

    /// Send a letter for an organisation
    SendLetter(SendLetterArgs),

    /// Show a single letter
    GetLetter(GetLetterArgs),
}

#[derive(clap::Args, Debug)]
pub struct SendLetterArgs {
    /// The organisation to send the letter for
    #[arg(long = "organisation", value_name = "ID")]
    pub organisation: String,

    /// Delivery product code (e.g. "fast", see `klara products`)
    #[arg(long = "product", value_name = "CODE")]
    pub product: DeliveryProduct,

    /// Optional caller reference attached to the letter
    #[arg(long = "reference", value_name = "REF")]
    pub reference: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct GetLetterArgs {
    /// The organisation the letter belongs to
    #[arg(long = "organisation", value_name = "ID")]
    pub organisation: String,

    /// The letter to show
    #[arg(long = "letter", value_name = "ID")]
    pub letter: String,
}

fn letters_api(token: Option<String>, api_url: Option<String>) -> LettersApi {
    let http = reqwest::Client::new();
    let client = match api_url {
        Some(url) => KlaraClient::with_base_url(http, &url, token),
        None => KlaraClient::new(http, token),
    };
    LettersApi::new(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Products => {
            for product in DeliveryProduct::ALL {
                println!("{}", product);
            }
        }
        Commands::SendLetter(args) => {
            let api = letters_api(cli.token, cli.api_url);
            let request = SendLetter {
                product: args.product,
                reference: args.reference,
            };
            let letter = api
                .send_letter(&args.organisation, &request)
                .await
                .context("Failed to send letter")?;
            println!("{}", letter.id);
        }
        Commands::GetLetter(args) => {
            let api = letters_api(cli.token, cli.api_url);
            let letter = api
                .get_letter(&args.organisation, &args.letter)
                .await
                .context("Failed to fetch letter")?;
            println!(
                "{} {} {}",
                letter.id,
                letter.product,
                letter.status.as_deref().unwrap_or("-")
            );
        }
    }
    Ok(())
}
