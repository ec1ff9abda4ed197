//! MyFinance Telegram bot binary.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_TOKEN=xxx API_URL=http://localhost:8000 cargo run -p myfinance-telegram
//! ```

use clap::Parser;
use myfinance_telegram::{BotConfig, FinanceBot};
use tracing_subscriber::EnvFilter;

/// MyFinance Telegram bot - register and query your finances from Telegram.
#[derive(Parser, Debug)]
#[command(name = "myfinance-telegram")]
#[command(about = "Telegram bot front end for the MyFinance API")]
struct Args {
    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load environment variables from a local .env if present
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => "myfinance_telegram=info,myfinance_api=info,teloxide=warn",
        1 => "myfinance_telegram=debug,myfinance_api=debug,teloxide=info",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BotConfig::from_env()?;
    let bot = FinanceBot::new(&config)?;

    match bot.get_me().await {
        Ok(username) => {
            tracing::info!(username = %username, "Bot initialized successfully");
            println!("\n📊 MyFinance Bot");
            println!("   Bot: @{}", username);
            println!("   API: {}", config.api_url);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to reach Telegram");
            return Err(e.into());
        }
    }

    println!("\n💬 Open Telegram and send /start to begin");
    println!("   Press Ctrl+C to stop\n");

    bot.start_polling().await;

    Ok(())
}
