//! Cucumber step definitions.

pub mod containers;
pub mod tree;

/// Parse a comma separated list such as `"5, 3, 8"`. Blank means empty.
pub fn parse_list(list: &str) -> Vec<i64> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse().expect("list items are integers"))
        .collect()
}
