use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
pub const DEFAULT_API_BASE_URL: &str = "https://api.commercegalaxy.online";

pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_PORT)
}

pub fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

/// Game API base handed to the browser client. Trailing slashes are dropped.
pub fn api_base_url() -> String {
    std::env::var("COMMERCE_GALAXY_API_URL")
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset_or_invalid() {
        temp_env::with_var_unset("PORT", || assert_eq!(port(), DEFAULT_PORT));
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert_eq!(port(), DEFAULT_PORT)
        });
        temp_env::with_var("PORT", Some("0"), || assert_eq!(port(), DEFAULT_PORT));
    }

    #[test]
    fn port_reads_env() {
        temp_env::with_var("PORT", Some(" 8081 "), || assert_eq!(port(), 8081));
    }

    #[test]
    fn static_dir_falls_back_on_blank() {
        temp_env::with_var("STATIC_DIR", Some("  "), || {
            assert_eq!(static_dir(), PathBuf::from(DEFAULT_STATIC_DIR))
        });
        temp_env::with_var("STATIC_DIR", Some("/srv/www"), || {
            assert_eq!(static_dir(), PathBuf::from("/srv/www"))
        });
    }

    #[test]
    fn api_base_url_is_normalized() {
        temp_env::with_var("COMMERCE_GALAXY_API_URL", Some("http://localhost:8081/"), || {
            assert_eq!(api_base_url(), "http://localhost:8081")
        });
        temp_env::with_var("COMMERCE_GALAXY_API_URL", Some("/"), || {
            assert_eq!(api_base_url(), DEFAULT_API_BASE_URL)
        });
        temp_env::with_var_unset("COMMERCE_GALAXY_API_URL", || {
            assert_eq!(api_base_url(), DEFAULT_API_BASE_URL)
        });
    }
}
