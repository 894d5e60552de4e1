//! An unbalanced BST of contacts. Each node owns its two children through a `Box` so the whole
//! tree is released when the [`ContactTree`] goes away and no node can be reached twice.
//!
//! Nothing is ever rotated. Inserting names in sorted order produces a tree that is really a
//! linked list; that is an accepted property of this structure.
//!
//! # Examples
//!
//! ```
//! use contacts::contact::ContactRecord;
//! use contacts::error::InsertError;
//! use contacts::tree::ContactTree;
//!
//! let mut tree = ContactTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find("Ana"), None);
//!
//! tree.insert(ContactRecord::new("Ana", "111").unwrap()).unwrap();
//! assert_eq!(tree.find("Ana").map(|c| c.phone()), Some("111"));
//!
//! // A second record with the same name is rejected and the first one is kept.
//! let again = tree.insert(ContactRecord::new("Ana", "222").unwrap());
//! assert!(matches!(again, Err(InsertError::DuplicateKey { .. })));
//! assert_eq!(tree.find("Ana").map(|c| c.phone()), Some("111"));
//!
//! // Removing a contact hands its record back.
//! let removed = tree.remove("Ana");
//! assert_eq!(removed.map(|c| c.phone().to_string()), Some("111".to_string()));
//! assert_eq!(tree.find("Ana"), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::contact::{compare, ContactRecord};
use crate::error::InsertError;

type Link = Option<Box<Node>>;

struct Node {
    record: ContactRecord,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(record: ContactRecord) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
        })
    }
}

/// A contact book ordered by name. Supports inserting, finding, removing, and iterating over
/// contacts in ascending name order.
pub struct ContactTree {
    root: Link,
    len: usize,
}

impl Default for ContactTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ContactTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for ContactTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|c| (c.name(), c.phone())))
            .finish()
    }
}

impl ContactTree {
    /// Generates a new, empty `ContactTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many contacts are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a single contact a height of 1.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node, usize)> = self.root.iter().map(|n| (&**n, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            stack.extend(node.left.iter().map(|n| (&**n, depth + 1)));
            stack.extend(node.right.iter().map(|n| (&**n, depth + 1)));
        }
        tallest
    }

    /// Adds `record` to the tree.
    ///
    /// If a contact with the same name is already stored the candidate is dropped, the tree is
    /// left untouched, and [`InsertError::DuplicateKey`] is returned. Existing phones are never
    /// overwritten.
    ///
    /// This is the only error `insert` itself produces. [`InsertError::Allocation`] comes from
    /// [`ContactRecord::new`] when the record's text cannot be reserved; the node allocated here
    /// aborts on out-of-memory like any other `Box`.
    ///
    /// # Examples
    ///
    /// ```
    /// use contacts::contact::ContactRecord;
    /// use contacts::tree::ContactTree;
    ///
    /// let mut tree = ContactTree::new();
    /// tree.insert(ContactRecord::new("Bob", "1").unwrap()).unwrap();
    ///
    /// assert!(tree.insert(ContactRecord::new("Bob", "2").unwrap()).is_err());
    /// assert_eq!(tree.find("Bob").unwrap().phone(), "1");
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, record: ContactRecord) -> Result<(), InsertError> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match compare(record.name(), node.record.name()) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    tracing::warn!(name = record.name(), "contact already exists, not inserting");
                    let (name, _) = record.into_parts();
                    return Err(InsertError::DuplicateKey { name });
                }
            }
        }

        tracing::debug!(name = record.name(), "inserting contact");
        *link = Some(Node::new_boxed(record));
        self.len += 1;
        Ok(())
    }

    /// Potentially finds the contact stored under `name`. If no node has that name, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use contacts::contact::ContactRecord;
    /// use contacts::tree::ContactTree;
    ///
    /// let mut tree = ContactTree::new();
    /// tree.insert(ContactRecord::new("Bob", "1").unwrap()).unwrap();
    ///
    /// assert_eq!(tree.find("Bob").map(|c| c.phone()), Some("1"));
    /// assert_eq!(tree.find("Carl"), None);
    /// ```
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        let mut link = &self.root;
        while let Some(node) = link {
            match compare(name, node.record.name()) {
                Ordering::Less => link = &node.left,
                Ordering::Equal => return Some(&node.record),
                Ordering::Greater => link = &node.right,
            }
        }
        None
    }

    /// Removes the contact stored under `name` and returns its record. If the tree does not
    /// contain that name, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use contacts::contact::ContactRecord;
    /// use contacts::tree::ContactTree;
    ///
    /// let mut tree = ContactTree::new();
    /// tree.insert(ContactRecord::new("Bob", "1").unwrap()).unwrap();
    ///
    /// assert_eq!(tree.remove("Carl"), None);
    /// assert_eq!(tree.remove("Bob").unwrap().phone(), "1");
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = remove_from(&mut self.root, name);
        match &removed {
            Some(_) => {
                self.len -= 1;
                tracing::debug!(name, "removed contact");
            }
            None => tracing::debug!(name, "nothing to remove"),
        }
        removed
    }

    /// Iterates over every contact in ascending name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, self.len)
    }

    /// Releases every node, leaving an empty tree that can be reused.
    ///
    /// Nodes are freed by rotating left children up until the current node has none, so this
    /// needs neither recursion nor an auxiliary stack no matter how lopsided the tree is.
    pub fn clear(&mut self) {
        let mut freed = 0usize;
        let mut current = self.root.take();
        while let Some(mut node) = current {
            current = match node.left.take() {
                Some(mut left) => {
                    node.left = left.right.take();
                    left.right = Some(node);
                    Some(left)
                }
                None => {
                    freed += 1;
                    node.right.take()
                }
            };
        }

        if freed > 0 {
            tracing::debug!(freed, "tree torn down");
        }
        self.len = 0;
    }
}

/// Returns the node holding the smallest name in the subtree rooted at `node`.
fn find_minimum(node: &Node) -> &Node {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current
}

/// Removes the node named `name` from the subtree hanging off `link`.
fn remove_from(mut link: &mut Link, name: &str) -> Option<ContactRecord> {
    loop {
        let ordering = compare(name, link.as_deref()?.record.name());
        match ordering {
            Ordering::Less => link = &mut link.as_mut()?.left,
            Ordering::Greater => link = &mut link.as_mut()?.right,
            Ordering::Equal => break,
        }
    }

    let node = link.as_deref_mut()?;
    let successor_name = match (&node.left, &node.right) {
        (Some(_), Some(right)) => Some(find_minimum(right).record.name().to_owned()),
        _ => None,
    };

    match successor_name {
        // Two children. The successor's record moves into this node and the successor's own node,
        // which has no left child, is spliced out of the right subtree.
        Some(successor_name) => {
            tracing::trace!(name, successor = %successor_name, "replacing with in-order successor");
            let successor = remove_from(&mut node.right, &successor_name)?;
            Some(mem::replace(&mut node.record, successor))
        }
        None => {
            let Node {
                record,
                left,
                right,
            } = *link.take()?;
            *link = if left.is_none() { right } else { left };
            Some(record)
        }
    }
}

impl<'a> IntoIterator for &'a ContactTree {
    type Item = &'a ContactRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the contacts of a [`ContactTree`], created by [`ContactTree::iter`].
///
/// Keeps the path of not-yet-visited ancestors on an explicit stack so it never recurses.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: &'a Link, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ContactRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
