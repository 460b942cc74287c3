//! Red-black tree step definitions.

use std::cmp::Ordering;

use cucumber::{given, then, when, World};
use rbkit::rbtree::{Color, Insert, RbLink, RbNode, RbTree, Replace};

use super::parse_list;

#[derive(Debug)]
struct Entry {
    key: i64,
    link: RbLink<usize>,
}

impl RbNode<usize> for Entry {
    fn link(&self) -> &RbLink<usize> {
        &self.link
    }

    fn link_mut(&mut self) -> &mut RbLink<usize> {
        &mut self.link
    }
}

fn by_key(a: &Entry, b: &Entry) -> Ordering {
    a.key.cmp(&b.key)
}

type Tree = RbTree<usize, fn(&Entry, &Entry) -> Ordering>;

/// Test context for tree scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct TreeWorld {
    entries: Vec<Entry>,
    tree: Tree,
    last_slot: Option<usize>,
    last_insert: Option<Insert<usize>>,
    replaced: Option<(usize, usize)>,
    black_height: Option<usize>,
}

impl TreeWorld {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            tree: RbTree::new(by_key as fn(&Entry, &Entry) -> Ordering),
            last_slot: None,
            last_insert: None,
            replaced: None,
            black_height: None,
        }
    }

    /// Add an unlinked entry for `key` and return its slot.
    fn add(&mut self, key: i64) -> usize {
        self.entries.push(Entry {
            key,
            link: RbLink::new(),
        });
        self.entries.len() - 1
    }

    fn insert(&mut self, key: i64) -> Insert<usize> {
        let slot = self.add(key);
        self.last_slot = Some(slot);
        self.tree
            .insert(&mut self.entries, slot)
            .expect("fresh entry is unlinked")
    }

    fn find(&self, key: i64) -> Option<usize> {
        self.tree
            .find_by(&self.entries, &key, |k, entry| k.cmp(&entry.key))
    }

    fn traversal(&self) -> Vec<i64> {
        self.tree
            .iter(&self.entries)
            .map(|slot| self.entries[slot].key)
            .collect()
    }

    fn black_height(&self) -> usize {
        self.tree
            .check(&self.entries)
            .expect("tree is consistent")
            .black_height
    }
}

// --- Given steps ---

#[given("an empty tree")]
fn given_empty_tree(world: &mut TreeWorld) {
    *world = TreeWorld::new();
}

#[given(expr = "the keys {string} are in the tree")]
fn given_keys_in_tree(world: &mut TreeWorld, keys: String) {
    for key in parse_list(&keys) {
        assert_eq!(world.insert(key), Insert::Inserted);
    }
}

#[given("the black height is recorded")]
fn given_black_height_recorded(world: &mut TreeWorld) {
    world.black_height = Some(world.black_height());
}

// --- When steps ---

#[when(expr = "I insert the keys {string}")]
fn when_insert_keys(world: &mut TreeWorld, keys: String) {
    for key in parse_list(&keys) {
        let outcome = world.insert(key);
        world.last_insert = Some(outcome);
    }
}

#[when(expr = "I insert the key {int}")]
fn when_insert_key(world: &mut TreeWorld, key: i64) {
    let outcome = world.insert(key);
    world.last_insert = Some(outcome);
}

#[when(expr = "I delete the key {int}")]
fn when_delete_key(world: &mut TreeWorld, key: i64) {
    let removed = world
        .tree
        .delete_by(&mut world.entries, &key, |k, entry| k.cmp(&entry.key));
    let slot = removed.expect("key is a member");
    assert!(!world.entries[slot].link.is_linked());
}

#[when(expr = "I delete the keys {string}")]
fn when_delete_keys(world: &mut TreeWorld, keys: String) {
    for key in parse_list(&keys) {
        let slot = world.find(key).expect("key is a member");
        world
            .tree
            .delete_node(&mut world.entries, slot)
            .expect("member can be deleted");
        world.tree.check(&world.entries).expect("tree is consistent");
    }
}

#[when(expr = "I replace the key {int} with a new node")]
fn when_replace_key(world: &mut TreeWorld, key: i64) {
    let old = world.find(key).expect("key is a member");
    let new = world.add(key);
    let outcome = world
        .tree
        .replace_node(&mut world.entries, old, new)
        .expect("old is a member and new is unlinked");
    assert_eq!(outcome, Replace::Replaced);
    world.replaced = Some((old, new));
}

// --- Then steps ---

#[then(expr = "the in-order traversal is {string}")]
fn then_traversal(world: &mut TreeWorld, keys: String) {
    assert_eq!(world.traversal(), parse_list(&keys));
}

#[then("the root is black")]
fn then_root_black(world: &mut TreeWorld) {
    let root = world.tree.root().expect("tree is not empty");
    assert_eq!(world.entries[root].link.color(), Color::Black);
}

#[then("the tree passes the consistency check")]
fn then_consistent(world: &mut TreeWorld) {
    let report = world.tree.check(&world.entries).expect("tree is consistent");
    assert_eq!(report.nodes, world.tree.len());
}

#[then("the black height is unchanged")]
fn then_black_height_unchanged(world: &mut TreeWorld) {
    assert_eq!(Some(world.black_height()), world.black_height);
}

#[then("the insert reports a duplicate")]
fn then_duplicate(world: &mut TreeWorld) {
    match world.last_insert {
        Some(Insert::Duplicate(existing)) => {
            let candidate = world.last_slot.expect("an insert happened");
            assert_eq!(world.entries[existing].key, world.entries[candidate].key);
        }
        other => panic!("expected a duplicate, got {other:?}"),
    }
}

#[then("the candidate node is still unlinked")]
fn then_candidate_unlinked(world: &mut TreeWorld) {
    let candidate = world.last_slot.expect("an insert happened");
    assert_eq!(world.entries[candidate].link, RbLink::new());
}

#[then(expr = "the tree holds {int} nodes")]
fn then_tree_holds(world: &mut TreeWorld, count: usize) {
    assert_eq!(world.tree.len(), count);
    assert_eq!(world.traversal().len(), count);
}

#[then("the replacement is linked in place of the old node")]
fn then_replacement_in_place(world: &mut TreeWorld) {
    let (old, new) = world.replaced.expect("a replace happened");
    assert!(world.entries[new].link.is_linked());
    assert!(!world.entries[old].link.is_linked());
    assert_eq!(world.find(world.entries[new].key), Some(new));
}
