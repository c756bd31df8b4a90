//! A counting BST. Each distinct value is stored in exactly one node
//! together with the number of times it has been inserted, so duplicate
//! insertions bump a counter instead of growing the tree.
//!
//! Removal here is deliberately blunt: removing a value discards the whole
//! subtree rooted at its node, children included. Nothing is spliced back
//! in. See [`Tree::remove`] before relying on it.
//!
//! # Examples
//!
//! ```
//! use ordtree::counted::{Traversal, Tree};
//!
//! let mut tree = Tree::new(7);
//! tree.insert(5);
//! tree.insert(5);
//! tree.insert(9);
//!
//! // 5 went in twice but occupies a single node.
//! assert_eq!(tree.find(&5), Some(2));
//! assert_eq!(tree.render_ordered(Traversal::InOrder), "5  7  9  \n");
//!
//! tree.remove(&5);
//! assert_eq!(tree.find(&5), None);
//! assert_eq!(tree.render_ordered(Traversal::InOrder), "7  9  \n");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Write};

/// One level's worth of indentation in the graph rendering.
const INDENT: &str = "     ";

/// The order in which [`Tree::render_ordered`] visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Visit the node, then its left subtree, then its right subtree.
    PreOrder,
    /// Visit the left subtree, then the node, then the right subtree.
    /// For a BST this always yields values in strictly ascending order.
    InOrder,
    /// Visit the left subtree, then the right subtree, then the node.
    PostOrder,
}

impl Default for Traversal {
    fn default() -> Self {
        Self::PreOrder
    }
}

impl Traversal {
    /// Maps the numeric modes `1`, `2`, and `3` to [`PreOrder`],
    /// [`InOrder`], and [`PostOrder`] respectively. Any other raw mode
    /// falls back to [`PreOrder`].
    ///
    /// [`PreOrder`]: Traversal::PreOrder
    /// [`InOrder`]: Traversal::InOrder
    /// [`PostOrder`]: Traversal::PostOrder
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::counted::Traversal;
    ///
    /// assert_eq!(Traversal::from_raw(2), Traversal::InOrder);
    /// assert_eq!(Traversal::from_raw(42), Traversal::PreOrder);
    /// ```
    pub fn from_raw(mode: u8) -> Self {
        match mode {
            2 => Self::InOrder,
            3 => Self::PostOrder,
            _ => Self::PreOrder,
        }
    }
}

type Link<T> = Option<Box<Node<T>>>;

/// A `Node` owns its value, the number of times that value has been
/// inserted, and both child subtrees. Exclusive ownership all the way down
/// means no sharing, no back-references, and no cycles by construction.
#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    count: usize,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            count: 1,
            left: None,
            right: None,
        }
    }
}

/// A Binary Search Tree that stores each distinct value once and counts
/// duplicate insertions.
///
/// The tree is seeded with its first value at construction and never
/// rebalances, so its height (and the recursion depth of every operation)
/// is bounded only by the number of distinct values inserted.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Tree<T> {
    /// Generates a new `Tree` whose root holds `seed` with a count of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::counted::Tree;
    ///
    /// let tree = Tree::new(7);
    /// assert_eq!(tree.find(&7), Some(1));
    /// ```
    pub fn new(seed: T) -> Self {
        Self {
            root: Some(Box::new(Node::new(seed))),
        }
    }

    /// Returns `true` if the tree holds no nodes. Only [`Tree::clear`] (or
    /// removing the root's value) can get the tree into this state.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Destroys every node in the tree, leaving it rootless. Children are
    /// torn down before their parents. Calling this on an already-empty
    /// tree is a no-op; a later [`Tree::insert`] re-seeds the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::counted::Tree;
    ///
    /// let mut tree = Tree::new(7);
    /// tree.insert(3);
    ///
    /// tree.clear();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(4);
    /// assert_eq!(tree.find(&4), Some(1));
    /// ```
    pub fn clear(&mut self) {
        Self::drop_subtree(&mut self.root);
    }

    /// Tears down the subtree behind `link` bottom-up and leaves the link
    /// empty. Recursion depth equals the subtree height.
    fn drop_subtree(link: &mut Link<T>) {
        if let Some(node) = link {
            Self::drop_subtree(&mut node.left);
            Self::drop_subtree(&mut node.right);
        }
        *link = None;
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts the given value into the tree. Inserting a value that is
    /// already present increments that node's count instead of creating a
    /// second node. If the tree was cleared, the value becomes the new root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::counted::Tree;
    ///
    /// let mut tree = Tree::new(1);
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.find(&2), Some(2));
    /// ```
    pub fn insert(&mut self, value: T) {
        Self::insert_at(&mut self.root, value);
    }

    fn insert_at(link: &mut Link<T>, value: T) {
        match link {
            None => *link = Some(Box::new(Node::new(value))),
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_at(&mut node.left, value),
                Ordering::Equal => node.count += 1,
                Ordering::Greater => Self::insert_at(&mut node.right, value),
            },
        }
    }

    /// Potentially finds the value in this tree, returning how many times
    /// it has been inserted. If no node holds the value, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::counted::Tree;
    ///
    /// let mut tree = Tree::new(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize> {
        Self::find_at(&self.root, value)
    }

    fn find_at(link: &Link<T>, value: &T) -> Option<usize> {
        let node = link.as_ref()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::find_at(&node.left, value),
            Ordering::Equal => Some(node.count),
            Ordering::Greater => Self::find_at(&node.right, value),
        }
    }

    /// Removes the node holding the given value **and its entire subtree**.
    /// Descendants are not spliced back in; every value reachable beneath
    /// the matched node is discarded with it, whatever its count. Removing
    /// the root's value empties the whole tree. If no node matches, nothing
    /// happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::counted::Tree;
    ///
    /// let mut tree = Tree::new(5);
    /// tree.insert(3);
    /// tree.insert(2);
    /// tree.insert(4);
    ///
    /// // 2 and 4 live beneath 3 and vanish with it.
    /// tree.remove(&3);
    /// assert_eq!(tree.find(&3), None);
    /// assert_eq!(tree.find(&2), None);
    /// assert_eq!(tree.find(&4), None);
    /// assert_eq!(tree.find(&5), Some(1));
    /// ```
    pub fn remove(&mut self, value: &T) {
        Self::remove_at(&mut self.root, value);
    }

    fn remove_at(link: &mut Link<T>, value: &T) {
        if let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => Self::remove_at(&mut node.left, value),
                Ordering::Greater => Self::remove_at(&mut node.right, value),
                Ordering::Equal => Self::drop_subtree(link),
            }
        }
    }
}

impl<T> Tree<T>
where
    T: fmt::Display,
{
    /// Writes every value in the tree to `w` in the given traversal order.
    /// Each value is followed by two spaces and the whole traversal is
    /// terminated by a newline. An empty tree writes only the newline.
    pub fn write_ordered<W: Write>(&self, order: Traversal, w: &mut W) -> fmt::Result {
        if let Some(root) = &self.root {
            root.write_ordered(order, w)?;
        }
        w.write_char('\n')
    }

    /// Renders the tree's values in the given traversal order. See
    /// [`Tree::write_ordered`] for the format.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::counted::{Traversal, Tree};
    ///
    /// let mut tree = Tree::new(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.render_ordered(Traversal::PreOrder), "2  1  3  \n");
    /// assert_eq!(tree.render_ordered(Traversal::InOrder), "1  2  3  \n");
    /// assert_eq!(tree.render_ordered(Traversal::PostOrder), "1  3  2  \n");
    /// ```
    pub fn render_ordered(&self, order: Traversal) -> String {
        let mut out = String::new();
        self.write_ordered(order, &mut out)
            .expect("writing to a String never fails");
        out
    }

    /// Prints the tree's values to stdout in the given traversal order.
    pub fn print_ordered(&self, order: Traversal) {
        print!("{}", self.render_ordered(order));
    }

    /// Writes the shape of the tree to `w`, rotated 90 degrees: the right
    /// subtree on top, five spaces of indent per level, each node as
    /// `value(count)`. An absent child shows up as a blank indented line so
    /// missing branches stay visible. A final newline terminates the dump.
    ///
    /// This is a diagnostic view, not a serialization format.
    pub fn write_graph<W: Write>(&self, w: &mut W) -> fmt::Result {
        if self.root.is_some() {
            Self::write_graph_at(&self.root, 0, w)?;
        }
        w.write_char('\n')
    }

    /// Renders the shape of the tree. See [`Tree::write_graph`] for the
    /// format.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::counted::Tree;
    ///
    /// let tree = Tree::new(1);
    /// assert_eq!(tree.render_graph(), "      \n1(1)\n      \n\n");
    /// ```
    pub fn render_graph(&self) -> String {
        let mut out = String::new();
        self.write_graph(&mut out)
            .expect("writing to a String never fails");
        out
    }

    /// Prints the shape of the tree to stdout. See [`Tree::write_graph`]
    /// for the format.
    pub fn print_graph(&self) {
        print!("{}", self.render_graph());
    }

    fn write_graph_at<W: Write>(link: &Link<T>, level: usize, w: &mut W) -> fmt::Result {
        if let Some(node) = link {
            Self::write_graph_at(&node.right, level + 1, w)?;
        }
        for _ in 0..level {
            w.write_str(INDENT)?;
        }
        match link {
            Some(node) => writeln!(w, "{}({})", node.value, node.count)?,
            None => writeln!(w, " ")?,
        }
        if let Some(node) = link {
            Self::write_graph_at(&node.left, level + 1, w)?;
        }
        Ok(())
    }
}

impl<T> Node<T>
where
    T: fmt::Display,
{
    fn write_ordered<W: Write>(&self, order: Traversal, w: &mut W) -> fmt::Result {
        match order {
            Traversal::PreOrder => {
                write!(w, "{}  ", self.value)?;
                if let Some(left) = &self.left {
                    left.write_ordered(order, w)?;
                }
                if let Some(right) = &self.right {
                    right.write_ordered(order, w)?;
                }
            }
            Traversal::InOrder => {
                if let Some(left) = &self.left {
                    left.write_ordered(order, w)?;
                }
                write!(w, "{}  ", self.value)?;
                if let Some(right) = &self.right {
                    right.write_ordered(order, w)?;
                }
            }
            Traversal::PostOrder => {
                if let Some(left) = &self.left {
                    left.write_ordered(order, w)?;
                }
                if let Some(right) = &self.right {
                    right.write_ordered(order, w)?;
                }
                write!(w, "{}  ", self.value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Seed 7, then 5, 3, 5, 7, 9, 2, 1, 10, 8, 6, 4. Yields:
    ///
    /// ```text
    ///         7(2)
    ///        /    \
    ///     5(2)    9(1)
    ///     /  \    /  \
    ///  3(1) 6(1) 8(1) 10(1)
    ///  /  \
    /// 2(1) 4(1)
    /// /
    /// 1(1)
    /// ```
    fn worked_example() -> Tree<i32> {
        let mut tree = Tree::new(7);
        for value in [5, 3, 5, 7, 9, 2, 1, 10, 8, 6, 4] {
            tree.insert(value);
        }
        tree
    }

    #[test]
    fn in_order_is_ascending() {
        let tree = worked_example();
        assert_eq!(
            tree.render_ordered(Traversal::InOrder),
            "1  2  3  4  5  6  7  8  9  10  \n"
        );
    }

    #[test]
    fn pre_order_visits_node_first() {
        let tree = worked_example();
        assert_eq!(
            tree.render_ordered(Traversal::PreOrder),
            "7  5  3  2  1  4  6  9  8  10  \n"
        );
    }

    #[test]
    fn post_order_visits_node_last() {
        let tree = worked_example();
        assert_eq!(
            tree.render_ordered(Traversal::PostOrder),
            "1  2  4  3  6  5  8  10  9  7  \n"
        );
    }

    #[test]
    fn duplicates_increment_counts() {
        let tree = worked_example();

        assert_eq!(tree.find(&5), Some(2));
        assert_eq!(tree.find(&7), Some(2));
        for singleton in [1, 2, 3, 4, 6, 8, 9, 10] {
            assert_eq!(tree.find(&singleton), Some(1));
        }
    }

    #[test]
    fn repeated_insertion_keeps_one_node() {
        let mut tree = Tree::new(3);
        for _ in 0..4 {
            tree.insert(3);
        }

        assert_eq!(tree.find(&3), Some(5));
        // One node, so one emitted value.
        assert_eq!(tree.render_ordered(Traversal::InOrder), "3  \n");
    }

    #[test]
    fn remove_discards_whole_subtree() {
        let mut tree = worked_example();

        // 3 carries 2, 1, and 4 beneath it. All of them go.
        tree.remove(&3);
        assert_eq!(
            tree.render_ordered(Traversal::InOrder),
            "5  6  7  8  9  10  \n"
        );
        for gone in [1, 2, 3, 4] {
            assert_eq!(tree.find(&gone), None);
        }
    }

    #[test]
    fn reinserting_a_discarded_value_starts_fresh() {
        let mut tree = worked_example();

        tree.remove(&3);
        tree.insert(2);

        // 2 had count 1 and was discarded with 3's subtree; this is a new node.
        assert_eq!(tree.find(&2), Some(1));
        assert_eq!(
            tree.render_ordered(Traversal::InOrder),
            "2  5  6  7  8  9  10  \n"
        );
    }

    #[test]
    fn removing_the_root_empties_the_tree() {
        let mut tree = worked_example();

        tree.remove(&7);
        assert!(tree.is_empty());
        assert_eq!(tree.render_ordered(Traversal::InOrder), "\n");
    }

    #[test]
    fn removing_an_absent_value_is_a_noop() {
        let mut tree = worked_example();
        let before = tree.render_graph();

        tree.remove(&42);
        tree.remove(&-1);

        assert_eq!(tree.render_graph(), before);
    }

    #[test]
    fn clear_is_idempotent_and_reseedable() {
        let mut tree = worked_example();

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.render_ordered(Traversal::InOrder), "\n");
        assert_eq!(tree.render_graph(), "\n");

        tree.clear();
        assert!(tree.is_empty());

        tree.insert(11);
        assert_eq!(tree.find(&11), Some(1));
        assert_eq!(tree.render_ordered(Traversal::InOrder), "11  \n");
    }

    #[test]
    fn graph_rendering_shows_missing_children() {
        let mut tree = Tree::new(2);
        tree.insert(1);
        tree.insert(3);

        // Right subtree on top, five spaces per level, blank indented lines
        // where children are absent.
        let expected = concat!(
            "           \n",
            "     3(1)\n",
            "           \n",
            "2(1)\n",
            "           \n",
            "     1(1)\n",
            "           \n",
            "\n",
        );
        assert_eq!(tree.render_graph(), expected);
    }

    #[test]
    fn graph_rendering_includes_counts() {
        let mut tree = Tree::new(4);
        tree.insert(4);
        tree.insert(4);

        assert_eq!(tree.render_graph(), "      \n4(3)\n      \n\n");
    }

    #[test]
    fn unrecognized_raw_modes_fall_back_to_pre_order() {
        assert_eq!(Traversal::from_raw(1), Traversal::PreOrder);
        assert_eq!(Traversal::from_raw(2), Traversal::InOrder);
        assert_eq!(Traversal::from_raw(3), Traversal::PostOrder);

        assert_eq!(Traversal::from_raw(0), Traversal::PreOrder);
        assert_eq!(Traversal::from_raw(4), Traversal::PreOrder);
        assert_eq!(Traversal::from_raw(u8::MAX), Traversal::PreOrder);

        assert_eq!(Traversal::default(), Traversal::PreOrder);
    }

    #[test]
    fn write_ordered_reaches_any_fmt_sink() {
        let tree = worked_example();

        let mut out = String::new();
        tree.write_ordered(Traversal::InOrder, &mut out)
            .expect("writing to a String never fails");
        assert_eq!(out, tree.render_ordered(Traversal::InOrder));
    }
}
