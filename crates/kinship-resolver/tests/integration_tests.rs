//! Resolution against snapshots loaded from the SQLite store

use kinship_domain::traits::RelationshipStore;
use kinship_domain::{Gender, Member, MemberId, RelationshipEdge, Scope};
use kinship_resolver::{EdgeValidator, GraphBuilder, KinshipResolver, Resolution, ResolverConfig};
use kinship_store::SqliteStore;

fn scope() -> Scope {
    Scope::new("family")
}

fn add(store: &mut SqliteStore, name: &str, gender: Gender) -> MemberId {
    store.add_member(Member::new(name, gender)).unwrap()
}

#[test]
fn test_snapshot_from_store() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let grandma = add(&mut store, "Grandma", Gender::Female);
    let mother = add(&mut store, "Mother", Gender::Female);
    let son = add(&mut store, "Son", Gender::Male);
    let wife = add(&mut store, "Wife", Gender::Female);

    store.add_relationship(RelationshipEdge::parent(scope(), grandma, mother)).unwrap();
    store.add_relationship(RelationshipEdge::parent(scope(), mother, son)).unwrap();
    store.add_relationship(RelationshipEdge::spouse(scope(), son, wife)).unwrap();
    store.add_relationship(RelationshipEdge::spouse(scope(), wife, son)).unwrap();

    let graph = GraphBuilder::load(&store, &scope()).unwrap();
    assert_eq!(graph.member_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.gender(grandma), Gender::Female);

    let resolver = KinshipResolver::default();
    assert_eq!(resolver.label(&graph, son, grandma), "Grandmother");
    assert_eq!(resolver.label(&graph, wife, mother), "Mother-in-law");
    assert_eq!(resolver.label(&graph, grandma, wife), "Granddaughter-in-law");
    assert_eq!(resolver.label(&graph, mother, wife), "Daughter-in-law");
}

#[test]
fn test_resolve_in_store_sees_latest_edges() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let a = add(&mut store, "A", Gender::Unspecified);
    let b = add(&mut store, "B", Gender::Male);

    let resolver = KinshipResolver::default();
    assert_eq!(
        resolver.resolve_in_store(&store, &scope(), a, b).unwrap(),
        Resolution::Unrelated
    );

    store.add_relationship(RelationshipEdge::parent(scope(), b, a)).unwrap();
    let resolution = resolver.resolve_in_store(&store, &scope(), a, b).unwrap();
    assert_eq!(resolution.label(), "Father");

    assert_eq!(
        resolver.resolve_in_store(&store, &scope(), a, a).unwrap(),
        Resolution::Identity
    );
}

#[test]
fn test_scopes_are_resolved_independently() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let a = add(&mut store, "A", Gender::Female);
    let b = add(&mut store, "B", Gender::Male);

    store.add_relationship(RelationshipEdge::spouse(scope(), a, b)).unwrap();
    store.add_relationship(RelationshipEdge::partner(Scope::new("work"), a, b)).unwrap();

    let resolver = KinshipResolver::default();
    let family = resolver.resolve_in_store(&store, &scope(), a, b).unwrap();
    let work = resolver.resolve_in_store(&store, &Scope::new("work"), a, b).unwrap();
    let empty = resolver.resolve_in_store(&store, &Scope::new(""), a, b).unwrap();

    assert_eq!(family.label(), "Spouse");
    assert_eq!(work.label(), "Partner");
    assert_eq!(empty, Resolution::Unrelated);
}

#[test]
fn test_removed_edges_disappear_from_snapshot() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let a = add(&mut store, "A", Gender::Female);
    let b = add(&mut store, "B", Gender::Male);

    store.add_relationship(RelationshipEdge::spouse(scope(), a, b)).unwrap();
    assert!(store.remove_relationship(&RelationshipEdge::spouse(scope(), b, a)).unwrap());

    let graph = GraphBuilder::load(&store, &scope()).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn test_validator_against_store_snapshot() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let a = add(&mut store, "A", Gender::Female);
    let b = add(&mut store, "B", Gender::Male);
    store.add_relationship(RelationshipEdge::parent(scope(), a, b)).unwrap();

    let graph = GraphBuilder::load(&store, &scope()).unwrap();
    let validator = EdgeValidator::new();

    assert!(!validator.validate(&graph, &RelationshipEdge::parent(scope(), b, a)).is_accepted());
    assert!(!validator.validate(&graph, &RelationshipEdge::parent(scope(), a, b)).is_accepted());
    assert!(validator.validate(&graph, &RelationshipEdge::spouse(scope(), a, MemberId::new())).is_accepted());
}

#[test]
fn test_config_from_toml() {
    let config: ResolverConfig = toml::from_str("max_depth = 4\ngendered_terms = false").unwrap();
    assert_eq!(config.max_depth, 4);
    assert_eq!(config.max_paths, ResolverConfig::default().max_paths);

    let resolver = KinshipResolver::new(config).unwrap();
    assert!(!resolver.config().gendered_terms);
}
