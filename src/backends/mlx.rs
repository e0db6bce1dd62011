//! Apple-silicon accelerated adapter for curated `mlx-community/` checkpoints.

use tracing::debug;
#[cfg(feature = "metal")]
use tracing::warn;

use crate::backends::Request;
use crate::config::Settings;

/// Summarize on the Metal device; any fault collapses to `None`.
#[cfg(feature = "metal")]
pub fn summarize(settings: &Settings, request: &Request) -> Option<String> {
    match try_summarize(settings, request) {
        Ok(summary) => Some(summary),
        Err(error) => {
            warn!(%error, model = %request.model, "accelerated backend failed");
            None
        }
    }
}

#[cfg(feature = "metal")]
fn try_summarize(settings: &Settings, request: &Request) -> super::textgen::Result<String> {
    use super::textgen;
    use crate::prompt;

    let device = textgen::metal_device()?;
    let api = textgen::hub_client(settings)?;

    let family = prompt::family_for(&request.model);
    let rendered = family.render(&request.text);
    debug!(?family, prompt_chars = rendered.len(), "accelerated prompt rendered");

    let response = textgen::causal_generate(
        &device,
        &api,
        &request.model,
        &rendered,
        &request.params,
        textgen::temperature_processor(&request.params),
    )?;
    Ok(prompt::extract_before_marker(&response, &rendered, family))
}

/// Stub when the `metal` feature is compiled out.
#[cfg(not(feature = "metal"))]
pub fn summarize(_settings: &Settings, request: &Request) -> Option<String> {
    debug!(model = %request.model, "accelerated backend unavailable in this build");
    None
}
