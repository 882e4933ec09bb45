use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::{constants, Result};
use crate::output;
use crate::player;
use crate::simli::simli::Simli;
use crate::simli::structs::text_to_video_stream_request::TextToVideoStreamRequest;

/// Terminal states of a run. Every variant is a handled path; the process
/// exits with the default success code for all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200 with a stream URL: the player page was written (and opened when
    /// browser launch is enabled).
    Opened {
        hls_url: String,
        player_path: PathBuf,
    },
    /// 200 without an `hls_url` field in the body.
    NoStreamUrl,
    /// Any non-200 status.
    Rejected { status: u16, body: String },
}

/// Run the pipeline once: build the payload, call the API, print the decoded
/// body, then branch on status. `open_browser` lets tests skip the launch.
pub async fn run(
    config: &Config,
    client: &Simli,
    output_dir: &Path,
    open_browser: bool,
) -> Result<Outcome> {
    let request = TextToVideoStreamRequest::new(
        config.elevenlabs_api_key.as_str(),
        config.simli_api_key.as_str(),
    );
    let response = client.text_to_video_stream(&request).await?;

    // The decoded body is printed whatever the status.
    println!("{}", response.body);

    if !response.is_success() {
        println!("Error: {}", response.status);
        println!("{}", response.text);
        return Ok(Outcome::Rejected {
            status: response.status,
            body: response.text,
        });
    }

    match response.hls_url() {
        Some(hls_url) => {
            let html = player::render_player(hls_url);
            let player_path = output::write_player_file(output_dir, &html)?;

            if open_browser {
                output::open_in_browser(&player_path)?;
            }

            Ok(Outcome::Opened {
                hls_url: hls_url.to_string(),
                player_path,
            })
        }
        None => {
            println!("{}", constants::NO_STREAM_URL_MESSAGE);
            Ok(Outcome::NoStreamUrl)
        }
    }
}
