use summarist::prompt::{self, Family};

#[test]
fn marker_bounded_response_extracts_prefix() {
    let rendered = Family::Gemma.render("input");
    let response = "A tight summary.<end_of_turn>\n<start_of_turn>user trailing";
    let extracted = prompt::extract_before_marker(response, &rendered, Family::Gemma);
    assert_eq!(extracted, "A tight summary.");
}

#[test]
fn only_the_first_marker_counts() {
    let rendered = Family::Phi.render("input");
    let response = "First part.<|end|>Second part.<|end|>";
    let extracted = prompt::extract_before_marker(response, &rendered, Family::Phi);
    assert_eq!(extracted, "First part.");
}

#[test]
fn unmarked_response_passes_through_trimmed() {
    let rendered = Family::Gemma.render("input");
    let extracted =
        prompt::extract_before_marker("  A plain continuation.  ", &rendered, Family::Gemma);
    assert_eq!(extracted, "A plain continuation.");
}

#[test]
fn echoed_prompt_is_stripped_when_no_marker() {
    // the generic family has no end marker, so the echoed prompt is stripped instead
    let rendered = Family::Generic.render("input");
    let response = format!("{rendered} An echoed completion.");
    let extracted = prompt::extract_before_marker(&response, &rendered, Family::Generic);
    assert_eq!(extracted, "An echoed completion.");
}

#[test]
fn summary_label_extracts_tail() {
    let rendered = Family::Generic.render("input");
    let response = format!("{rendered} Key points follow.");
    let extracted = prompt::extract_after_label(&response, &rendered);
    assert_eq!(extracted, "Key points follow.");
}

#[test]
fn label_free_response_strips_prompt() {
    let extracted = prompt::extract_after_label("Plain prefix and the rest", "Plain prefix ");
    assert_eq!(extracted, "and the rest");
}

#[test]
fn stop_markers_truncate_generic_output() {
    let response = "Text: source\n\nSummary: First point.\n\nUser: next turn";
    let extracted = prompt::extract_after_label(response, "");
    assert_eq!(extracted, "First point.");
}

#[test]
fn stop_free_text_is_kept_whole() {
    assert_eq!(
        prompt::truncate_at_stop("One sentence, one line."),
        "One sentence, one line."
    );
}
