//! Native storefront shell.
//!
//! Restores the persisted session and resolves a path the way the browser
//! app would, printing the resulting page and header as JSON. With
//! `BOOKNEST_EMAIL` and `BOOKNEST_PASSWORD` set it signs in first;
//! `--logout` clears the stored session.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use booknest_api::ApiClient;
    use booknest_api::dto::LoginInput;
    use booknest_auth::SessionManager;
    use booknest_storefront::{FileStore, Storefront, StorefrontConfig};

    booknest_observability::init();

    let config = StorefrontConfig::from_env()?;
    let store = FileStore::open(&config.session_file)?;
    let api = ApiClient::new(config.api.clone(), SessionManager::new(store))
        .with_unauthorized_handler(|| tracing::warn!("session expired; sign in again"));
    let storefront = Storefront::new(api);

    let mut path = String::from("/");
    for arg in std::env::args().skip(1) {
        if arg == "--logout" {
            storefront.logout();
        } else {
            path = arg;
        }
    }

    if let (Ok(email), Ok(password)) = (std::env::var("BOOKNEST_EMAIL"), std::env::var("BOOKNEST_PASSWORD")) {
        let input = LoginInput {
            email,
            mobile: None,
            password,
        };
        if let Err(err) = storefront.login(&input).await {
            anyhow::bail!("login failed: {}", err.banner_or("Login failed"));
        }
    }

    let navigation = storefront.open(&path);
    let header = storefront.header(&navigation.path);
    let out = serde_json::json!({
        "navigation": navigation,
        "header": header,
        "session": storefront.session().snapshot(),
    });
    println!("{}", serde_json::to_string_pretty(&out).context("failed to encode output")?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
