use yelp_fusion_api::models::Coordinates;
use yelp_fusion_api::request::AutocompleteRequest;
use yelp_fusion_api::YelpClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = match YelpClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let request = AutocompleteRequest {
        text: std::env::args().nth(1).unwrap_or_else(|| "thai".to_string()),
        coordinates: Coordinates::new(43.64784, -79.38872),
        ..Default::default()
    };

    match client.autocomplete(&request).await {
        Ok(res) => {
            println!("Terms:");
            for term in &res.terms {
                println!("  {}", term.text);
            }
            println!("Businesses:");
            for business in &res.businesses {
                println!("  {} (ID: {})", business.name, business.id);
            }
            println!("Categories:");
            for category in &res.categories {
                println!("  {} [{}]", category.title, category.alias);
            }
        }
        Err(e) => eprintln!("Error fetching suggestions: {}", e),
    }
}
