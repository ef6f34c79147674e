use super::*;

use crate::model::RevInfo;

fn revisions(id: &str, winner: &str, revs_info: &[&str], conflicts: &[&str]) -> DocumentRevisions {
    DocumentRevisions {
        id: id.to_string(),
        rev: winner.to_string(),
        revs_info: revs_info
            .iter()
            .map(|rev| RevInfo {
                rev: rev.to_string(),
                status: "available".to_string(),
            })
            .collect(),
        conflicts: conflicts.iter().map(|rev| rev.to_string()).collect(),
    }
}

#[test]
fn descriptors_group_by_generation() {
    let doc = revisions("doc1", "2-z", &["1-x", "2-z", "3-w"], &["2-y"]);
    let groups = revision_groups(&doc);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[&1], vec!["1-x"]);
    assert_eq!(groups[&2], vec!["2-y", "2-z"]);
    assert_eq!(groups[&3], vec!["3-w"]);
}

#[test]
fn forks_render_as_indented_children() {
    let doc = revisions("doc1", "2-z", &["1-x", "2-z", "3-w"], &["2-y"]);
    let rendered = render_revision_tree(&doc);
    assert_eq!(
        rendered,
        "#id = doc1\n##1-x\n##2\n###2-y\n###2-z *\n##3-w"
    );
}

#[test]
fn the_winner_is_starred_outside_forks_too() {
    let doc = revisions("doc1", "3-w", &["1-x", "2-y", "3-w"], &[]);
    let rendered = render_revision_tree(&doc);
    assert_eq!(rendered, "#id = doc1\n##1-x\n##2-y\n##3-w *");
}

#[test]
fn descriptors_without_a_leading_number_are_dropped() {
    let doc = revisions("doc1", "1-a", &["1-a", "bogus"], &[]);
    let groups = revision_groups(&doc);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[&1], vec!["1-a"]);
}

#[test]
fn duplicate_descriptors_collapse_into_the_set() {
    let doc = revisions("doc1", "2-b", &["1-a", "2-b"], &["2-b", "2-c"]);
    let groups = revision_groups(&doc);
    assert_eq!(groups[&2], vec!["2-b", "2-c"]);
}

#[test]
fn generations_iterate_numerically_despite_lexicographic_descriptor_order() {
    let doc = revisions("doc1", "10-a", &["2-b", "10-a"], &[]);
    let generations: Vec<u64> = revision_groups(&doc).into_keys().collect();
    assert_eq!(generations, vec![2, 10]);
}
