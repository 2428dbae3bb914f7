use std::error::Error;
use std::time::Duration;

use tracing::Level;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    let filter_layer = filter::LevelFilter::from_level(Level::INFO);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter_layer)
        .init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "127.0.0.1".to_string());
    let port: u16 = match args.next() {
        Some(port) => port.parse()?,
        None => 27888,
    };

    tracing::info!("Querying {}:{}...", host, port);

    let status = fearquery::query(&host, port, Duration::from_secs(2)).await;

    if !status.online && !status.error.is_empty() {
        tracing::error!("Query failed: {}", status.error);
    }

    println!("{status}");

    Ok(())
}
