//! Official workflow: login, then upload resolution evidence
//!
//! ```sh
//! cargo run --example official -- http://localhost:8080 jordan@city.gov secret123 \
//!     6f9619ff-8b86-d011-b42d-00cf4fc964ff ./fixed.jpg
//! ```

use safevoice_client::{ClientConfig, ClientError, ImageUpload, SafeVoiceClient};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safevoice_client=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://localhost:8080".into());
    let email = args.next().expect("email argument required");
    let password = args.next().expect("password argument required");
    let problem_id: uuid::Uuid = args
        .next()
        .expect("problem id argument required")
        .parse()
        .expect("problem id must be a UUID");
    let image_path = args.next().expect("image path argument required");

    let config = ClientConfig::new(base_url).with_token_dir("./.safevoice");
    let client = SafeVoiceClient::from_config(config)?;

    if !client.is_authenticated() {
        let auth = client.auth();
        let response = match auth.login(&email, &password).await {
            Ok(response) => response,
            Err(err) => {
                eprintln!("{}", err.user_message("Login failed"));
                return Err(err);
            }
        };
        client.session().set_token(&response.access_token)?;
        println!("logged in as {}", response.email.as_deref().unwrap_or(&email));
    }

    let bytes = std::fs::read(&image_path)?;
    let file_name = std::path::Path::new(&image_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resolution.jpg")
        .to_string();

    let result = client
        .official()
        .upload_resolution(problem_id, ImageUpload::new(file_name, bytes))
        .await;

    match result {
        Ok(()) => println!("resolution uploaded for {}", problem_id),
        Err(err) if err.is_unauthorized() => {
            // Stored token was revoked server-side; drop it so the next
            // run logs in again.
            client.session().clear()?;
            eprintln!("{}", err.user_message("Session expired, please retry"));
            return Err(err);
        }
        Err(err) => {
            eprintln!("{}", err.user_message("Failed to upload resolution"));
            return Err(err);
        }
    }

    Ok(())
}
