use coinmarketcap::cryptocurrency::{ListingsLatestOptions, MapOptions};
use coinmarketcap::{create_cryptocurrency_client, CmcConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Reads COINMARKETCAP_API_KEY (and optionally COINMARKETCAP_SANDBOX)
    let config = CmcConfig::from_env()?;
    let client = create_cryptocurrency_client(config)?;

    println!("Fetching ID map...");
    match client
        .map(&MapOptions {
            limit: Some(5),
            ..MapOptions::default()
        })
        .await
    {
        Ok(Some(response)) if !response.is_error() => {
            for row in response.data.unwrap_or_default() {
                println!("{:>6}  {:<10} {}", row.id, row.symbol, row.name);
            }
        }
        Ok(Some(response)) => {
            println!(
                "API rejected the call: {}",
                response.error_message().unwrap_or("unknown error")
            );
        }
        Ok(None) => println!("Empty response body"),
        Err(e) => println!("Error fetching ID map: {}", e),
    }

    println!("Fetching top listings...");
    match client
        .listings_latest(&ListingsLatestOptions {
            limit: Some(5),
            convert: Some("USD".to_string()),
            ..ListingsLatestOptions::default()
        })
        .await
    {
        Ok(Some(response)) if !response.is_error() => {
            for coin in response.data.unwrap_or_default() {
                let price = coin
                    .quote
                    .get("USD")
                    .and_then(|q| q.price)
                    .unwrap_or_default();
                println!("{:<10} ${:.2}", coin.symbol, price);
            }
        }
        Ok(Some(response)) => {
            println!(
                "API rejected the call: {}",
                response.error_message().unwrap_or("unknown error")
            );
        }
        Ok(None) => println!("Empty response body"),
        Err(e) => println!("Error fetching listings: {}", e),
    }

    Ok(())
}
