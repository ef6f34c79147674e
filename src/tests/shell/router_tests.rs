use super::*;

fn routes() -> Vec<Route> {
    route_table()
}

fn matched_pattern(line: &str) -> &'static str {
    let routes = routes();
    let (route, _) = match_route(&routes, line).expect("route should match");
    route.pattern
}

#[test]
fn literal_routes_beat_parameterized_ones() {
    assert_eq!(matched_pattern("cd .."), "cd ..");
    assert_eq!(matched_pattern("cd animals"), "cd :db");
    assert_eq!(matched_pattern("ls"), "ls");
    assert_eq!(matched_pattern("ls aard"), "ls :key");
}

#[test]
fn arity_must_match_exactly() {
    let routes = routes();
    assert!(matches!(
        match_route(&routes, "ls one two"),
        Err(CommandError::UnknownCommand(_))
    ));
    assert!(matches!(
        match_route(&routes, "cp onlyone"),
        Err(CommandError::UnknownCommand(_))
    ));
}

#[test]
fn fsck_resolves_by_argument_count() {
    assert_eq!(matched_pattern("fsck doc1"), "fsck :id");
    assert_eq!(matched_pattern("fsck doc1 3-b"), "fsck :id :rev");
}

#[test]
fn parameters_bind_by_name() {
    let routes = routes();
    let (_, params) = match_route(&routes, "cp a b").expect("cp should match");
    assert_eq!(params.get("sourceid"), "a");
    assert_eq!(params.get("destinationid"), "b");
}

#[test]
fn echo_json_keeps_internal_whitespace() {
    let routes = routes();
    let (route, params) =
        match_route(&routes, r#"echo '{"a": 1, "b": 2}' > doc1"#).expect("echo should match");
    assert_eq!(route.pattern, "echo :json > :id");
    assert_eq!(params.get("json"), r#"'{"a": 1, "b": 2}'"#);
    assert_eq!(params.get("id"), "doc1");
}

#[test]
fn echo_without_redirect_captures_the_whole_tail() {
    let routes = routes();
    let (route, params) =
        match_route(&routes, r#"echo '{"a": 1, "b": 2}'"#).expect("echo should match");
    assert_eq!(route.pattern, "echo :json");
    assert_eq!(params.get("json"), r#"'{"a": 1, "b": 2}'"#);
}

#[test]
fn echo_splits_on_the_last_redirect() {
    let routes = routes();
    let (_, params) =
        match_route(&routes, r#"echo '{"x": "a > b"}' > doc1"#).expect("echo should match");
    assert_eq!(params.get("json"), r#"'{"x": "a > b"}'"#);
    assert_eq!(params.get("id"), "doc1");
}

#[test]
fn unknown_input_is_echoed_back() {
    let routes = routes();
    match match_route(&routes, "frobnicate the db") {
        Err(CommandError::UnknownCommand(line)) => assert_eq!(line, "frobnicate the db"),
        other => panic!("expected UnknownCommand, got {:?}", other.map(|(r, _)| r.pattern)),
    }
}

#[test]
fn bare_echo_matches_nothing() {
    let routes = routes();
    assert!(matches!(
        match_route(&routes, "echo"),
        Err(CommandError::UnknownCommand(_))
    ));
}
