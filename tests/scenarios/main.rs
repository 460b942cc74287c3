//! Behaviour scenarios for the tree and the queue/stack, run with Cucumber.
//!
//! ```bash
//! cargo test --test scenarios
//! ```

mod steps;

use cucumber::World;
use steps::containers::ContainerWorld;
use steps::tree::TreeWorld;

#[tokio::main]
async fn main() {
    println!("\n=== Running Red-Black Tree Scenarios ===\n");
    TreeWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/features/tree.feature")
        .await;

    println!("\n=== Running Queue and Stack Scenarios ===\n");
    ContainerWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/features/containers.feature")
        .await;
}
