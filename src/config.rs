//! Environment-backed configuration.

/// Environment variable holding the ElevenLabs API key.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Placeholder substituted when the environment variable is unset.
/// Not a credential; the API rejects requests made with it.
pub const API_KEY_FALLBACK: &str = "dummy-api-key";

/// Resolve the API key: environment first, placeholder otherwise.
pub fn api_key_from_env() -> String {
    let _ = dotenvy::dotenv(); // load .env if present, ignore error
    std::env::var(API_KEY_ENV).unwrap_or_else(|_| API_KEY_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: parallel test threads must not race on the process
    // environment.
    #[test]
    fn api_key_prefers_env_and_falls_back_to_placeholder() {
        std::env::remove_var(API_KEY_ENV);
        assert_eq!(api_key_from_env(), API_KEY_FALLBACK);

        std::env::set_var(API_KEY_ENV, "sk-test-value");
        assert_eq!(api_key_from_env(), "sk-test-value");

        std::env::remove_var(API_KEY_ENV);
    }
}
