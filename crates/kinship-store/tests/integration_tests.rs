//! Integration tests for kinship-store
//!
//! These tests verify the full cycle for members and scoped relationships.

use kinship_domain::traits::RelationshipStore;
use kinship_domain::{Gender, Member, MemberId, RelationshipEdge, RelationshipType, Scope};
use kinship_store::{SqliteStore, StoreError};

fn member(value: u128, name: &str, gender: Gender) -> Member {
    Member::with_id(MemberId::from_value(value), name, gender)
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_add_and_get_member() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let alice = member(1, "Alice", Gender::Female);

    let id = store.add_member(alice.clone()).unwrap();
    assert_eq!(id, alice.id);

    let retrieved = store.get_member(id).unwrap().expect("member should exist");
    assert_eq!(retrieved, alice);

    let by_name = store.find_member_by_name("Alice").unwrap();
    assert_eq!(by_name.map(|m| m.id), Some(alice.id));
    assert!(store.find_member_by_name("Nobody").unwrap().is_none());
}

#[test]
fn test_duplicate_member_rejected() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let alice = member(1, "Alice", Gender::Female);

    assert!(store.add_member(alice.clone()).is_ok());
    assert!(matches!(store.add_member(alice), Err(StoreError::Duplicate)));
}

#[test]
fn test_gender_lookup_defaults_to_unspecified() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.add_member(member(1, "Sam", Gender::Male)).unwrap();

    assert_eq!(store.get_gender(MemberId::from_value(1)).unwrap(), Gender::Male);
    assert_eq!(
        store.get_gender(MemberId::from_value(99)).unwrap(),
        Gender::Unspecified
    );

    store
        .set_gender(MemberId::from_value(1), Gender::Unspecified)
        .unwrap();
    assert_eq!(
        store.get_gender(MemberId::from_value(1)).unwrap(),
        Gender::Unspecified
    );
    assert!(store.set_gender(MemberId::from_value(99), Gender::Male).is_err());
}

#[test]
fn test_edges_are_scoped() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let a = MemberId::from_value(1);
    let b = MemberId::from_value(2);
    let family = Scope::new("family");
    let club = Scope::new("club");

    store
        .add_relationship(RelationshipEdge::parent(family.clone(), a, b))
        .unwrap();
    store
        .add_relationship(RelationshipEdge::partner(club.clone(), a, b))
        .unwrap();

    let family_edges = store.list_edges(&family).unwrap();
    assert_eq!(family_edges.len(), 1);
    assert_eq!(family_edges[0].relationship_type, RelationshipType::Parent);
    assert_eq!(family_edges[0].from, a);
    assert_eq!(family_edges[0].to, b);

    let club_edges = store.list_edges(&club).unwrap();
    assert_eq!(club_edges.len(), 1);
    assert_eq!(club_edges[0].relationship_type, RelationshipType::Partner);

    assert!(store.list_edges(&Scope::new("elsewhere")).unwrap().is_empty());
    assert_eq!(store.list_scopes().unwrap(), vec![club, family]);
}

#[test]
fn test_identical_edge_is_stored_once() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let scope = Scope::new("family");
    let edge = RelationshipEdge::spouse(scope.clone(), MemberId::from_value(1), MemberId::from_value(2));

    store.add_relationship(edge.clone()).unwrap();
    store.add_relationship(edge).unwrap();

    assert_eq!(store.list_edges(&scope).unwrap().len(), 1);
}

#[test]
fn test_remove_symmetric_edge_removes_both_orientations() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let scope = Scope::new("family");
    let a = MemberId::from_value(1);
    let b = MemberId::from_value(2);

    store
        .add_relationship(RelationshipEdge::spouse(scope.clone(), a, b))
        .unwrap();
    store
        .add_relationship(RelationshipEdge::spouse(scope.clone(), b, a))
        .unwrap();
    assert_eq!(store.list_edges(&scope).unwrap().len(), 2);

    let removed = store
        .remove_relationship(&RelationshipEdge::spouse(scope.clone(), a, b))
        .unwrap();
    assert!(removed);
    assert!(store.list_edges(&scope).unwrap().is_empty());
}

#[test]
fn test_remove_parent_edge_respects_direction() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let scope = Scope::new("family");
    let parent = MemberId::from_value(1);
    let child = MemberId::from_value(2);

    store
        .add_relationship(RelationshipEdge::parent(scope.clone(), parent, child))
        .unwrap();

    let wrong_way = store
        .remove_relationship(&RelationshipEdge::parent(scope.clone(), child, parent))
        .unwrap();
    assert!(!wrong_way);
    assert_eq!(store.list_edges(&scope).unwrap().len(), 1);

    let right_way = store
        .remove_relationship(&RelationshipEdge::parent(scope.clone(), parent, child))
        .unwrap();
    assert!(right_way);
}

#[test]
fn test_list_members_is_ordered_by_id() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.add_member(member(3, "Carol", Gender::Female)).unwrap();
    store.add_member(member(1, "Alice", Gender::Female)).unwrap();
    store.add_member(member(2, "Bob", Gender::Male)).unwrap();

    let names: Vec<String> = store
        .list_members()
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_database_persists_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kinship.db");
    let scope = Scope::new("family");

    {
        let mut store = SqliteStore::new(&path).unwrap();
        store.add_member(member(1, "Alice", Gender::Female)).unwrap();
        store
            .add_relationship(RelationshipEdge::parent(
                scope.clone(),
                MemberId::from_value(1),
                MemberId::from_value(2),
            ))
            .unwrap();
    }

    let store = SqliteStore::new(&path).unwrap();
    assert!(store.get_member(MemberId::from_value(1)).unwrap().is_some());
    assert_eq!(store.list_edges(&scope).unwrap().len(), 1);
}
