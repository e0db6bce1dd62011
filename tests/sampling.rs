use summarist::backends::{pipeline, GenerationParams};

fn params(temperature: f64) -> GenerationParams {
    GenerationParams {
        max_tokens: 64,
        temperature,
        top_p: 0.8,
    }
}

#[test]
fn zero_temperature_disables_sampling() {
    assert!(!params(0.0).sampling_enabled());
}

#[test]
fn positive_temperature_enables_sampling() {
    assert!(params(0.3).sampling_enabled());
}

#[test]
fn seq2seq_families_route_to_the_summarization_path() {
    assert!(pipeline::is_seq2seq("facebook/bart-large-cnn"));
    assert!(pipeline::is_seq2seq("google/flan-T5-base"));
    assert!(pipeline::is_seq2seq("google/pegasus-xsum"));
    assert!(!pipeline::is_seq2seq("mistralai/Mistral-7B-Instruct"));
}
