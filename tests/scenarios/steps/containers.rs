//! Queue and stack step definitions.

use cucumber::{given, then, when, World};
use rbkit::qs::{QsLink, QsNode, Queue, Stack};

use super::parse_list;

#[derive(Debug)]
struct Item {
    value: i64,
    link: QsLink<usize>,
}

impl QsNode<usize> for Item {
    fn qs_link(&self) -> &QsLink<usize> {
        &self.link
    }

    fn qs_link_mut(&mut self) -> &mut QsLink<usize> {
        &mut self.link
    }
}

/// Test context for queue and stack scenarios.
#[derive(Debug, Default, World)]
pub struct ContainerWorld {
    items: Vec<Item>,
    queue: Queue<usize>,
    stack: Stack<usize>,
    taken: Option<Option<usize>>,
}

impl ContainerWorld {
    fn add(&mut self, value: i64) -> usize {
        self.items.push(Item {
            value,
            link: QsLink::new(),
        });
        self.items.len() - 1
    }

    fn values(&self, slots: impl Iterator<Item = usize>) -> Vec<i64> {
        slots.map(|slot| self.items[slot].value).collect()
    }
}

// --- Given steps ---

#[given(expr = "a queue holding {string}")]
fn given_queue(world: &mut ContainerWorld, values: String) {
    for value in parse_list(&values) {
        let slot = world.add(value);
        world
            .queue
            .enqueue(&mut world.items, slot)
            .expect("fresh item is unlinked");
    }
}

#[given(expr = "a stack holding {string}")]
fn given_stack(world: &mut ContainerWorld, values: String) {
    for value in parse_list(&values) {
        let slot = world.add(value);
        world
            .stack
            .push(&mut world.items, slot)
            .expect("fresh item is unlinked");
    }
}

// --- When steps ---

#[when("I dequeue an item")]
fn when_dequeue(world: &mut ContainerWorld) {
    world.taken = Some(world.queue.dequeue(&mut world.items));
}

#[when("I pop an item")]
fn when_pop(world: &mut ContainerWorld) {
    world.taken = Some(world.stack.pop(&mut world.items));
}

// --- Then steps ---

#[then(expr = "the item is {int}")]
fn then_item_is(world: &mut ContainerWorld, value: i64) {
    let slot = world
        .taken
        .expect("an item was taken")
        .expect("the container was not empty");
    assert_eq!(world.items[slot].value, value);
    assert!(!world.items[slot].link.is_linked());
}

#[then("there is no item")]
fn then_no_item(world: &mut ContainerWorld) {
    assert_eq!(world.taken, Some(None));
}

#[then(expr = "the queue iterates as {string}")]
fn then_queue_iterates(world: &mut ContainerWorld, values: String) {
    let got = world.values(world.queue.iter(&world.items));
    assert_eq!(got, parse_list(&values));
}

#[then(expr = "the stack iterates as {string}")]
fn then_stack_iterates(world: &mut ContainerWorld, values: String) {
    let got = world.values(world.stack.iter(&world.items));
    assert_eq!(got, parse_list(&values));
}
