//! Provider integration.

pub mod elevenlabs;
pub mod http;

pub use elevenlabs::VoicesClient;
