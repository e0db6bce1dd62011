//! Last-resort adapter pinned to one pretrained summarization model.

use tracing::debug;
#[cfg(feature = "inference")]
use tracing::warn;

use crate::backends::Request;
use crate::config::Settings;

/// Fixed model used when every preferred backend came up empty.
pub const FALLBACK_MODEL: &str = "google/flan-t5-base";

/// Summarize with the fixed model; any fault collapses to `None`.
#[cfg(feature = "inference")]
pub fn summarize(settings: &Settings, request: &Request) -> Option<String> {
    match try_summarize(settings, request) {
        Ok(summary) => Some(summary),
        Err(error) => {
            warn!(%error, model = FALLBACK_MODEL, "fallback backend failed");
            None
        }
    }
}

#[cfg(feature = "inference")]
fn try_summarize(settings: &Settings, request: &Request) -> super::textgen::Result<String> {
    use super::textgen;
    use crate::backends::MIN_SUMMARY_TOKENS;

    debug!(model = FALLBACK_MODEL, "attempting the fixed fallback model");
    let api = textgen::hub_client(settings)?;
    // Greedy decoding; only max-length comes from the caller.
    let summary = textgen::seq2seq_generate(
        &textgen::cpu_device(),
        &api,
        FALLBACK_MODEL,
        &request.text,
        request.params.max_tokens,
        MIN_SUMMARY_TOKENS,
        textgen::greedy_processor(),
    )?;
    Ok(summary.trim().to_string())
}

/// Stub when the inference stack is compiled out.
#[cfg(not(feature = "inference"))]
pub fn summarize(_settings: &Settings, _request: &Request) -> Option<String> {
    debug!("fallback backend unavailable in this build");
    None
}
