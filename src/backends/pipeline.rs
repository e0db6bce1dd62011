//! General local-inference adapter: seq2seq summarizers and causal chat models.

use tracing::debug;
#[cfg(feature = "inference")]
use tracing::warn;

use crate::backends::Request;
use crate::config::Settings;

/// Encoder-decoder families served by the seq2seq summarization path.
const SEQ2SEQ_FAMILIES: &[&str] = &["bart", "t5", "pegasus"];

/// Whether an identifier names a known encoder-decoder summarization family.
pub fn is_seq2seq(model: &str) -> bool {
    let lower = model.to_lowercase();
    SEQ2SEQ_FAMILIES.iter().any(|family| lower.contains(family))
}

/// Summarize on the CPU device; any fault collapses to `None`.
#[cfg(feature = "inference")]
pub fn summarize(settings: &Settings, request: &Request) -> Option<String> {
    match try_summarize(settings, request) {
        Ok(summary) => Some(summary),
        Err(error) => {
            warn!(%error, model = %request.model, "general backend failed");
            None
        }
    }
}

#[cfg(feature = "inference")]
fn try_summarize(settings: &Settings, request: &Request) -> super::textgen::Result<String> {
    use super::textgen;
    use crate::backends::MIN_SUMMARY_TOKENS;
    use crate::prompt;

    let device = textgen::cpu_device();
    let api = textgen::hub_client(settings)?;

    if is_seq2seq(&request.model) {
        debug!(model = %request.model, "routing through the seq2seq summarization path");
        let summary = textgen::seq2seq_generate(
            &device,
            &api,
            &request.model,
            &request.text,
            request.params.max_tokens,
            MIN_SUMMARY_TOKENS,
            textgen::nucleus_processor(&request.params),
        )?;
        return Ok(summary.trim().to_string());
    }

    let family = prompt::family_for(&request.model);
    let rendered = family.render(&request.text);
    debug!(?family, "routing through the causal generation path");
    let response = textgen::causal_generate(
        &device,
        &api,
        &request.model,
        &rendered,
        &request.params,
        textgen::nucleus_processor(&request.params),
    )?;
    Ok(prompt::extract_after_label(&response, &rendered))
}

/// Stub when the inference stack is compiled out.
#[cfg(not(feature = "inference"))]
pub fn summarize(_settings: &Settings, request: &Request) -> Option<String> {
    debug!(model = %request.model, "general backend unavailable in this build");
    None
}
