use proptest::prelude::*;
use summarist::prompt::{self, Family};

#[test]
fn gemma_identifiers_use_turn_markup() {
    let family = prompt::family_for("mlx-community/GEMMA-3-1b-it-8bit");
    assert_eq!(family, Family::Gemma);

    let rendered = family.render("hello world");
    assert!(rendered.starts_with("<start_of_turn>user"));
    assert!(rendered.contains("hello world"));
    assert!(rendered.ends_with("<start_of_turn>model\n"));
}

#[test]
fn unknown_identifiers_fall_back_to_generic() {
    let family = prompt::family_for("acme/mystery-model");
    assert_eq!(family, Family::Generic);

    let rendered = family.render("hello");
    assert!(rendered.contains("Summarize the following text"));
    assert!(rendered.ends_with("Summary:"));
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(prompt::family_for("microsoft/PHI-3-mini"), Family::Phi);
    assert_eq!(prompt::family_for("HuggingFaceTB/SmolLM2-1.7B"), Family::SmolLm);
}

#[test]
fn first_match_wins_over_later_families() {
    // the table puts smollm ahead of llama
    assert_eq!(prompt::family_for("smollm-llama-hybrid"), Family::SmolLm);
}

#[test]
fn known_families_carry_end_markers() {
    assert_eq!(Family::Gemma.end_marker(), Some("<end_of_turn>"));
    assert_eq!(Family::Llama.end_marker(), Some("<|eot_id|>"));
    assert_eq!(Family::Generic.end_marker(), None);
}

proptest! {
    #[test]
    fn templater_is_total(text in ".*", model in ".*") {
        let family = prompt::family_for(&model);
        let rendered = family.render(&text);
        prop_assert!(rendered.contains(text.as_str()));
    }
}
