//! Shared candle plumbing: hub access, tokenizers, and generation loops.

use std::path::PathBuf;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::generation::LogitsProcessor;
use candle_transformers::models::{quantized_llama, t5};
use hf_hub::api::sync::{Api, ApiBuilder};
use thiserror::Error;
use tokenizers::Tokenizer;
use tracing::debug;

use crate::backends::GenerationParams;
use crate::config::Settings;

/// Fixed seed so repeated runs sample the same path.
const SAMPLING_SEED: u64 = 299792458;

/// Token budget applied to causal prompts before generation.
pub const PROMPT_TOKEN_BUDGET: usize = 2048;

/// End-of-sequence strings checked after each sampled token.
const EOS_TOKENS: &[&str] = &[
    "</s>",
    "<|endoftext|>",
    "<|im_end|>",
    "<end_of_turn>",
    "<|eot_id|>",
    "<|end|>",
];

/// Faults raised by the text-generation plumbing.
#[derive(Error, Debug)]
pub enum TextGenError {
    #[error("candle operation error: {0}")]
    Candle(#[from] candle_core::Error),

    #[error("failed to access model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("hub API error: {0}")]
    Hub(#[from] hf_hub::api::sync::ApiError),

    #[error("config parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tokenization error: {0}")]
    Tokenizer(String),

    #[error("no GGUF weights published under {repo}")]
    NoWeights { repo: String },
}

pub type Result<T> = std::result::Result<T, TextGenError>;

/// Build a hub client honoring the configured token and cache directory.
pub fn hub_client(settings: &Settings) -> Result<Api> {
    let mut builder = ApiBuilder::new().with_token(settings.hf_token.clone());
    if let Some(dir) = &settings.model_cache_dir {
        builder = builder.with_cache_dir(dir.clone());
    }
    Ok(builder.build()?)
}

/// CPU device used by the general and fallback paths.
pub fn cpu_device() -> Device {
    Device::Cpu
}

/// Metal device used by the accelerated path.
#[cfg(feature = "metal")]
pub fn metal_device() -> Result<Device> {
    Ok(Device::new_metal(0)?)
}

/// Nucleus sampling from caller params; greedy when sampling is disabled.
pub fn nucleus_processor(params: &GenerationParams) -> LogitsProcessor {
    let temperature = params.sampling_enabled().then_some(params.temperature);
    LogitsProcessor::new(SAMPLING_SEED, temperature, Some(params.top_p))
}

/// Temperature-only sampling for the accelerated path; top-p is not consumed there.
pub fn temperature_processor(params: &GenerationParams) -> LogitsProcessor {
    let temperature = params.sampling_enabled().then_some(params.temperature);
    LogitsProcessor::new(SAMPLING_SEED, temperature, None)
}

/// Greedy decoding, used by the fallback path.
pub fn greedy_processor() -> LogitsProcessor {
    LogitsProcessor::new(SAMPLING_SEED, None, None)
}

/// Fetch and load `tokenizer.json` for a repository.
pub fn load_tokenizer(api: &Api, repo: &str) -> Result<Tokenizer> {
    let path = api.model(repo.to_string()).get("tokenizer.json")?;
    Tokenizer::from_file(path).map_err(|error| TextGenError::Tokenizer(error.to_string()))
}

/// Locate the first GGUF weight file published in a repository.
pub fn resolve_gguf(api: &Api, repo: &str) -> Result<PathBuf> {
    let handle = api.model(repo.to_string());
    let info = handle.info()?;
    let filename = info
        .siblings
        .iter()
        .map(|sibling| sibling.rfilename.clone())
        .find(|name| name.ends_with(".gguf"))
        .ok_or_else(|| TextGenError::NoWeights {
            repo: repo.to_string(),
        })?;
    debug!(%repo, %filename, "resolved quantized weights");
    Ok(handle.get(&filename)?)
}

/// Run a quantized causal model over `prompt`, returning only the generated text.
pub fn causal_generate(
    device: &Device,
    api: &Api,
    repo: &str,
    prompt: &str,
    params: &GenerationParams,
    mut logits_processor: LogitsProcessor,
) -> Result<String> {
    let tokenizer = load_tokenizer(api, repo)?;
    let weights_path = resolve_gguf(api, repo)?;

    let mut file = std::fs::File::open(&weights_path)?;
    let content = candle_core::quantized::gguf_file::Content::read(&mut file)?;
    let mut model = quantized_llama::ModelWeights::from_gguf(content, &mut file, device)?;

    let encoding = tokenizer
        .encode(prompt, true)
        .map_err(|error| TextGenError::Tokenizer(error.to_string()))?;
    let mut tokens = encoding.get_ids().to_vec();
    tokens.truncate(PROMPT_TOKEN_BUDGET);
    debug!(%repo, prompt_tokens = tokens.len(), "running causal generation");

    let eos_ids: Vec<u32> = EOS_TOKENS
        .iter()
        .filter_map(|token| tokenizer.token_to_id(token))
        .collect();

    let mut generated = Vec::new();
    let mut input = Tensor::new(tokens.as_slice(), device)?.unsqueeze(0)?;
    let mut position = 0;

    for _ in 0..params.max_tokens {
        let logits = model.forward(&input, position)?;
        let logits = logits.squeeze(0)?;
        let next_token = logits_processor.sample(&logits)?;

        if eos_ids.contains(&next_token) {
            break;
        }
        generated.push(next_token);

        let (_batch, seq_len) = input.dims2()?;
        position += seq_len;
        input = Tensor::new(&[next_token], device)?.unsqueeze(0)?;
    }

    tokenizer
        .decode(&generated, true)
        .map_err(|error| TextGenError::Tokenizer(error.to_string()))
}

/// Run a T5-class encoder-decoder over `text`, honoring min/max summary length.
pub fn seq2seq_generate(
    device: &Device,
    api: &Api,
    repo: &str,
    text: &str,
    max_length: usize,
    min_length: usize,
    mut logits_processor: LogitsProcessor,
) -> Result<String> {
    let handle = api.model(repo.to_string());
    let config_path = handle.get("config.json")?;
    let tokenizer = load_tokenizer(api, repo)?;
    let weights_path = handle.get("model.safetensors")?;

    let config: t5::Config = serde_json::from_str(&std::fs::read_to_string(config_path)?)?;
    let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };
    let mut model = t5::T5ForConditionalGeneration::load(vb, &config)?;

    let prompt = format!("summarize: {text}");
    let encoding = tokenizer
        .encode(prompt.as_str(), true)
        .map_err(|error| TextGenError::Tokenizer(error.to_string()))?;
    let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
    debug!(%repo, input_tokens = encoding.get_ids().len(), "running seq2seq generation");
    let encoder_output = model.encode(&input_ids)?;

    let decoder_start = config.decoder_start_token_id.unwrap_or(config.pad_token_id) as u32;
    let mut output_tokens = vec![decoder_start];

    for index in 0..max_length {
        let decoder_input = if index == 0 || !config.use_cache {
            Tensor::new(output_tokens.as_slice(), device)?.unsqueeze(0)?
        } else {
            Tensor::new(&output_tokens[output_tokens.len() - 1..], device)?.unsqueeze(0)?
        };
        let logits = model.decode(&decoder_input, &encoder_output)?.squeeze(0)?;
        // eos stays masked until the minimum summary length is reached
        let logits = if output_tokens.len() < min_length {
            suppress_token(&logits, config.eos_token_id as u32)?
        } else {
            logits
        };
        let next_token = logits_processor.sample(&logits)?;

        if next_token as usize == config.eos_token_id {
            break;
        }
        output_tokens.push(next_token);
    }

    tokenizer
        .decode(&output_tokens[1..], true)
        .map_err(|error| TextGenError::Tokenizer(error.to_string()))
}

fn suppress_token(logits: &Tensor, token: u32) -> Result<Tensor> {
    let mut values = logits.to_vec1::<f32>()?;
    if let Some(value) = values.get_mut(token as usize) {
        *value = f32::NEG_INFINITY;
    }
    Ok(Tensor::new(values.as_slice(), logits.device())?)
}
