//! URL construction helpers for the Campaign Monitor API.

use url::Url;

use crate::error::CreatesendResult;
use crate::models::CreatesendConfig;

/// Parse a base URL, making sure relative joins append to its path.
pub fn parse_base(raw: &str) -> CreatesendResult<Url> {
    let trimmed = raw.trim_end_matches('/');
    Ok(Url::parse(&format!("{trimmed}/"))?)
}

/// `GET /clients.json`
pub fn clients_url(config: &CreatesendConfig) -> CreatesendResult<Url> {
    Ok(config.base_url.join("clients.json")?)
}

/// `GET /clients/{client_id}/lists.json`
pub fn lists_url(config: &CreatesendConfig, client_id: &str) -> CreatesendResult<Url> {
    Ok(config.base_url.join(&format!(
        "clients/{}/lists.json",
        urlencoding::encode(client_id)
    ))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CreatesendConfig {
        CreatesendConfig {
            base_url: parse_base("https://api.createsend.com/api/v3.2").unwrap(),
            oauth_token_url: Url::parse("https://api.createsend.com/oauth/token").unwrap(),
        }
    }

    #[test]
    fn test_clients_url() {
        assert_eq!(
            clients_url(&config()).unwrap().as_str(),
            "https://api.createsend.com/api/v3.2/clients.json"
        );
    }

    #[test]
    fn test_lists_url_encodes_client_id() {
        assert_eq!(
            lists_url(&config(), "a1b2").unwrap().as_str(),
            "https://api.createsend.com/api/v3.2/clients/a1b2/lists.json"
        );
        assert!(
            lists_url(&config(), "a/b")
                .unwrap()
                .as_str()
                .contains("clients/a%2Fb/lists.json")
        );
    }

    #[test]
    fn test_parse_base_accepts_trailing_slash() {
        assert_eq!(
            parse_base("https://api.createsend.com/api/v3.2/")
                .unwrap()
                .as_str(),
            "https://api.createsend.com/api/v3.2/"
        );
    }
}
