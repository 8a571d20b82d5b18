use crate::error::{Error, Result};
use crate::node::{Node, is_red};
use crate::table::Balancing;

/// Walks the whole tree and reports the first broken invariant.
///
/// * keys strictly increase in order,
/// * every cached subtree size is exact,
/// * red-black trees: black root, no red right links, no two reds in a row,
///   the same number of black nodes on every path down to an empty link,
/// * unbalanced trees: no red nodes at all.
pub(crate) fn validate<K: Ord, V>(root: Option<&Node<K, V>>, balancing: Balancing) -> Result<()> {
    let red_black = balancing == Balancing::RedBlack;
    if red_black && root.is_some_and(|r| r.is_red()) {
        return Err(violation("root is red"));
    }

    // (subtree, exclusive lower bound, exclusive upper bound, black nodes above)
    let mut stack = vec![(root, None::<&K>, None::<&K>, 0usize)];
    let mut black_height = None;
    while let Some((node, lower, upper, blacks)) = stack.pop() {
        let Some(node) = node else {
            if red_black && *black_height.get_or_insert(blacks) != blacks {
                return Err(violation("unequal black height"));
            }
            continue;
        };

        if lower.is_some_and(|lo| &node.key <= lo) || upper.is_some_and(|hi| &node.key >= hi) {
            return Err(violation("keys out of order"));
        }
        if node.size != 1 + Node::size(&node.left) + Node::size(&node.right) {
            return Err(violation("stale subtree size"));
        }

        match balancing {
            Balancing::Unbalanced => {
                if node.is_red() {
                    return Err(violation("red node in an unbalanced tree"));
                }
            }
            Balancing::RedBlack => {
                if is_red(&node.right) {
                    return Err(violation("right-leaning red link"));
                }
                if node.is_red() && is_red(&node.left) {
                    return Err(violation("two red links in a row"));
                }
            }
        }

        let blacks = blacks + usize::from(!node.is_red());
        stack.push((node.right.as_deref(), Some(&node.key), upper, blacks));
        stack.push((node.left.as_deref(), lower, Some(&node.key), blacks));
    }
    Ok(())
}

fn violation(what: &str) -> Error {
    log::debug!("symbol table invariant violated: {what}");
    Error::InvariantViolation(what.to_owned())
}
