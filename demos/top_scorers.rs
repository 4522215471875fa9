use std::time::Duration;

use fbref_scraper::{BrowserProfile, ClientConfig, FbrefClient, FbrefError};

#[tokio::main]
async fn main() {
    let config = ClientConfig::default()
        .with_profile(BrowserProfile::random())
        .with_wait_time(Duration::from_secs(6));
    let client = FbrefClient::with_config(config).unwrap();

    let seasons = client.get_current_seasons("EPL").await.unwrap();
    println!("Found {} seasons", seasons.len());

    let scorers = client.get_top_scorers("EPL").await.unwrap();
    for (key, scorer) in scorers.iter().take(5) {
        println!("{key}: {} ({}) - {} goals", scorer.name, scorer.club, scorer.goals);
    }

    match client.get_top_scorer("EPL", "2022-2023").await {
        Ok(best) => println!(
            "{}",
            serde_json::to_string_pretty(&best).unwrap()
        ),
        Err(FbrefError::RateLimited { url }) => eprintln!("rate limited on {url}, try again later"),
        Err(e) => eprintln!("{e}"),
    }
}
