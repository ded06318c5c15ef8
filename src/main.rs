//! `fetch-voices` binary entry point.
//!
//! No CLI surface: the API key comes from the environment, the result
//! goes to stdout (success) or stderr (failure) as one JSON line, and
//! the exit code tells the parent process which it was.

use elevenlabs_voices::config;
use elevenlabs_voices::envelope::{self, Rendered};
use elevenlabs_voices::provider::VoicesClient;

#[tokio::main]
async fn main() {
    let client = VoicesClient::new(config::api_key_from_env());
    let result = client.fetch_voices().await;

    let code = match envelope::render(&result) {
        Rendered::Stdout(line) => {
            println!("{line}");
            0
        }
        Rendered::Stderr(line) => {
            eprintln!("{line}");
            1
        }
    };
    std::process::exit(code);
}
