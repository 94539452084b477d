//! Anonymous problem feed
//!
//! Lists reported problems page by page against a running backend:
//!
//! ```sh
//! cargo run --example feed -- http://localhost:8080
//! ```

use safevoice_client::{ClientConfig, ClientError, PageQuery, SafeVoiceClient};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safevoice_client=debug".into()),
        )
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let client = SafeVoiceClient::from_config(ClientConfig::new(base_url))?;
    let problems = client.problems();

    let mut page = 0;
    loop {
        let current = match problems.list(PageQuery::new(page, 10)).await {
            Ok(current) => current,
            Err(err) => {
                eprintln!("{}", err.user_message("Failed to load problems"));
                return Err(err);
            }
        };

        println!(
            "--- page {}/{} ({} total) ---",
            current.page_number + 1,
            current.total_pages,
            current.total_elements
        );
        for problem in &current.content {
            println!(
                "[{}] {:>12}  {}  ({}, {})",
                problem.created_at, problem.status, problem.description, problem.latitude,
                problem.longitude
            );
        }

        if current.is_last {
            break;
        }
        page += 1;
    }

    Ok(())
}
