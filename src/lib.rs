//! elevenlabs-voices — fetch the ElevenLabs voice catalog as JSON.
//!
//! One HTTP GET against the voices-listing endpoint, API key attached via
//! the `xi-api-key` header. The outcome — the provider's payload on
//! success, a normalized `{error, message}` object on any failure — is
//! rendered as a single JSON line for a parent process to capture.
//!
//! # Quick Start
//!
//! ```no_run
//! use elevenlabs_voices::provider::VoicesClient;
//!
//! # async fn example() -> elevenlabs_voices::error::Result<()> {
//! let client = VoicesClient::new("sk-...".to_string());
//! let catalog = client.fetch_voices().await?;
//! println!("{catalog}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod provider;
