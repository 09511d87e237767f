use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;
use yelp_fusion_api::request::{BusinessSearchRequest, ReviewsRequest};
use yelp_fusion_api::YelpClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "Katsuya".to_string());

    let client = match YelpClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Create a .env file with:");
            eprintln!("YELP_API_KEY=your_key_here\n");
            return Ok(());
        }
    };

    let search = BusinessSearchRequest {
        term: name.clone(),
        location: "220 Yonge St, Toronto, ON".to_string(),
        limit: 10,
        ..Default::default()
    };
    let results = client.business_search(&search).await?;

    let business = results
        .businesses
        .iter()
        .find(|b| b.name == name)
        .ok_or_else(|| anyhow!("could not find {}", name))?;

    println!(
        "{} ({} stars, {} reviews)",
        business.name, business.rating, business.review_count
    );

    let reviews = client
        .business_reviews(&ReviewsRequest {
            id: business.id.clone(),
            locale: "en_CA".to_string(),
            ..Default::default()
        })
        .await?;

    for review in &reviews.reviews {
        println!(
            "{} - {}/5 by {}",
            review.time_created, review.rating, review.user.name
        );
        println!("  {}", review.text);
    }

    Ok(())
}
