use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_input_has_an_empty_prefix() {
    assert_eq!(longest_common_prefix(&[]), "");
}

#[test]
fn a_single_string_is_its_own_prefix() {
    assert_eq!(longest_common_prefix(&strings(&["foo"])), "foo");
}

#[test]
fn the_shortest_member_can_be_the_prefix() {
    assert_eq!(
        longest_common_prefix(&strings(&["foobar", "foobaz", "foo"])),
        "foo"
    );
}

#[test]
fn disjoint_strings_share_nothing() {
    assert_eq!(longest_common_prefix(&strings(&["a", "b"])), "");
}

#[test]
fn shortening_respects_character_boundaries() {
    assert_eq!(
        longest_common_prefix(&strings(&["caf\u{e9}s", "caf\u{e9}"])),
        "caf\u{e9}"
    );
    assert_eq!(longest_common_prefix(&strings(&["caf\u{e9}", "cafe"])), "caf");
}
