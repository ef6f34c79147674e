use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn command_completion_matches_by_prefix() {
    let routes = route_table();
    assert_eq!(command_candidates(&routes, "f"), strings(&["fsck"]));
    assert_eq!(command_candidates(&routes, "tou"), strings(&["touch"]));
}

#[test]
fn command_completion_deduplicates_shared_patterns() {
    // ls and ls :key register separately but complete as one command.
    let routes = route_table();
    assert_eq!(command_candidates(&routes, "l"), strings(&["ls", "ll"]));
}

#[test]
fn a_shared_prefix_collapses_to_one_line() {
    let completion = collapse("cat fo", "fo", strings(&["foobar", "foobaz"]));
    assert_eq!(completion, Completion::Line("cat fooba".to_string()));
}

#[test]
fn choices_without_a_longer_shared_prefix_stay_choices() {
    let candidates = strings(&["foo", "bar"]);
    let completion = collapse("cat fo", "fo", candidates.clone());
    assert_eq!(completion, Completion::Candidates(candidates));
}

#[test]
fn an_exact_key_does_not_collapse() {
    let candidates = strings(&["foo"]);
    let completion = collapse("cat foo", "foo", candidates.clone());
    assert_eq!(completion, Completion::Candidates(candidates));
}

#[test]
fn nothing_to_complete_stays_empty() {
    let completion = collapse("cat zz", "zz", Vec::new());
    assert_eq!(completion, Completion::Candidates(Vec::new()));
}

#[test]
fn the_key_is_the_text_after_the_last_space() {
    assert_eq!(completion_key("cat fo"), (4, "fo"));
    assert_eq!(completion_key("cat "), (4, ""));
    assert_eq!(completion_key("ca"), (0, "ca"));
}
