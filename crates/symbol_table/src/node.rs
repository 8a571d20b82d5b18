pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Color of the link from a node's parent to the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    pub(crate) fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) size: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, color: Color) -> Self {
        Self {
            key,
            value,
            color,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn size(node: &Link<K, V>) -> usize {
        node.as_ref().map(|n| n.size).unwrap_or(0)
    }

    pub(crate) fn recalc(&mut self) {
        self.size = 1 + Self::size(&self.left) + Self::size(&self.right);
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Empty links count as black.
pub(crate) fn is_red<K, V>(node: &Link<K, V>) -> bool {
    node.as_ref().is_some_and(|n| n.is_red())
}

/// Deep copy of a tree, built bottom-up with an explicit stack so that
/// degenerate (list-shaped) trees do not exhaust the call stack.
pub(crate) fn clone_tree<K: Clone, V: Clone>(root: Option<&Node<K, V>>) -> Link<K, V> {
    enum Step<'a, K, V> {
        Visit(Option<&'a Node<K, V>>),
        Build(&'a Node<K, V>),
    }

    let mut work = vec![Step::Visit(root)];
    let mut built: Vec<Link<K, V>> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            Step::Visit(None) => built.push(None),
            Step::Visit(Some(node)) => {
                work.push(Step::Build(node));
                work.push(Step::Visit(node.right.as_deref()));
                work.push(Step::Visit(node.left.as_deref()));
            }
            Step::Build(node) => {
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    key: node.key.clone(),
                    value: node.value.clone(),
                    color: node.color,
                    size: node.size,
                    left,
                    right,
                })));
            }
        }
    }
    built.pop().flatten()
}

/// Frees a tree one node at a time. The derived drop glue recurses once per
/// level.
pub(crate) fn dismantle<K, V>(root: Link<K, V>) {
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spine(n: u32) -> Link<u32, u32> {
        let mut root = None;
        for k in (0..n).rev() {
            let mut node = Box::new(Node::new(k, k * 2, Color::Black));
            node.right = root;
            node.recalc();
            root = Some(node);
        }
        root
    }

    #[test]
    fn clone_keeps_shape_and_colors() {
        let mut root = Box::new(Node::new(2, 'b', Color::Black));
        root.left = Some(Box::new(Node::new(1, 'a', Color::Red)));
        root.right = Some(Box::new(Node::new(3, 'c', Color::Black)));
        root.recalc();

        let copy = clone_tree(Some(&*root));
        let copy = copy.as_deref().unwrap();
        assert_eq!((copy.key, copy.value, copy.size), (2, 'b', 3));
        let left = copy.left.as_deref().unwrap();
        assert_eq!((left.key, left.color), (1, Color::Red));
        assert_eq!(copy.right.as_ref().map(|n| n.value), Some('c'));
        assert!(clone_tree::<u32, u32>(None).is_none());
    }

    #[test]
    fn deep_spine_clones_and_frees() {
        let root = spine(200_000);
        let copy = clone_tree(root.as_deref());
        assert_eq!(Node::size(&copy), 200_000);
        dismantle(root);
        dismantle(copy);
    }
}
