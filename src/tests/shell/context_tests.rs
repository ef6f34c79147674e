use super::*;

#[test]
fn root_prompt_is_bare() {
    assert_eq!(NavContext::Root.prompt(), ">> ");
}

#[test]
fn bound_prompt_names_the_database() {
    let context = NavContext::Database("animals".to_string());
    assert_eq!(context.prompt(), "animals >> ");
    assert_eq!(context.database(), Some("animals"));
}

#[test]
fn root_has_no_database() {
    assert_eq!(NavContext::Root.database(), None);
}
