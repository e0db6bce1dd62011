//! Prompt templating and summary extraction keyed by model family.

/// Chat families recognized by identifier substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    SmolLm,
    Gemma,
    Llama,
    Phi,
    Generic,
}

/// Ordered match table; the first hit wins.
const KNOWN_FAMILIES: &[(&str, Family)] = &[
    ("smollm", Family::SmolLm),
    ("gemma", Family::Gemma),
    ("llama", Family::Llama),
    ("phi", Family::Phi),
];

/// Literal markers that terminate generic-template output.
const STOP_MARKERS: &[&str] = &["Text:", "Summary:", "\n\n", "User:", "Assistant:"];

const SUMMARY_LABEL: &str = "Summary:";

/// Resolve the prompt family for a model identifier.
pub fn family_for(model: &str) -> Family {
    let lower = model.to_lowercase();
    KNOWN_FAMILIES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, family)| *family)
        .unwrap_or(Family::Generic)
}

impl Family {
    /// Render the summarization prompt for this family.
    pub fn render(&self, text: &str) -> String {
        let instruction =
            format!("Summarize the following text in a concise paragraph.\n\n{text}");
        match self {
            Family::SmolLm => format!(
                "<|im_start|>user\n{instruction}<|im_end|>\n<|im_start|>assistant\n"
            ),
            Family::Gemma => format!(
                "<start_of_turn>user\n{instruction}<end_of_turn>\n<start_of_turn>model\n"
            ),
            Family::Llama => format!(
                "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\n{instruction}<|eot_id|><|start_header_id|>assistant<|end_header_id|>\n\n"
            ),
            Family::Phi => format!("<|user|>\n{instruction}<|end|>\n<|assistant|>\n"),
            Family::Generic => {
                format!("Summarize the following text.\n\nText: {text}\n\nSummary:")
            }
        }
    }

    /// End-of-turn marker that closes this family's responses.
    pub fn end_marker(&self) -> Option<&'static str> {
        match self {
            Family::SmolLm => Some("<|im_end|>"),
            Family::Gemma => Some("<end_of_turn>"),
            Family::Llama => Some("<|eot_id|>"),
            Family::Phi => Some("<|end|>"),
            Family::Generic => None,
        }
    }
}

/// Take everything before the family end marker; fall back to stripping the prompt.
pub fn extract_before_marker(response: &str, prompt: &str, family: Family) -> String {
    if let Some(marker) = family.end_marker() {
        if let Some(position) = response.find(marker) {
            return response[..position].trim().to_string();
        }
    }
    strip_prompt(response, prompt)
}

/// Take everything after the last `Summary:` label; fall back to stripping the prompt.
pub fn extract_after_label(response: &str, prompt: &str) -> String {
    match response.rfind(SUMMARY_LABEL) {
        Some(position) => truncate_at_stop(response[position + SUMMARY_LABEL.len()..].trim()),
        None => strip_prompt(response, prompt),
    }
}

/// Truncate generated text at the earliest known stop marker.
pub fn truncate_at_stop(text: &str) -> String {
    let cut = STOP_MARKERS
        .iter()
        .filter_map(|marker| text.find(marker))
        .min()
        .unwrap_or(text.len());
    text[..cut].trim().to_string()
}

fn strip_prompt(response: &str, prompt: &str) -> String {
    response
        .strip_prefix(prompt)
        .unwrap_or(response)
        .trim()
        .to_string()
}
