//! # Directory Engine
//!
//! The ordered contact store: an unbalanced binary search tree keyed by name.
//!
//! Entries live in an arena (`Vec<Entry>`) and refer to their children by
//! index. Freed slots go on a free list and are reused by later inserts.
//! Deletion tracks the link that holds the target (and, for the two-child
//! case, the link that holds the in-order successor) and rewires by index.
//!
//! ## Invariants
//!
//! - For every entry, all names in the left subtree are strictly less and
//!   all names in the right subtree strictly greater than its own.
//! - Names are unique.
//! - Every index reachable from `root` points at a live slot.
//! - No balance guarantee: insertion order decides the shape.

use crate::{Contact, Order, PhonebookError};
use std::cmp::Ordering;

// =============================================================================
// ARENA ENTRIES
// =============================================================================

/// Stable index of an entry in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntryId(usize);

/// One tree node.
#[derive(Debug, Clone, Default)]
struct Entry {
    contact: Contact,
    left: Option<EntryId>,
    right: Option<EntryId>,
}

impl Entry {
    fn leaf(contact: Contact) -> Self {
        Self {
            contact,
            left: None,
            right: None,
        }
    }
}

/// The slot an entry hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Root,
    Left(EntryId),
    Right(EntryId),
}

/// Outcome of walking down from the root towards a name.
enum Descent {
    /// The name is present at `id`, held by `link`.
    Found { id: EntryId, link: Link },
    /// The name is absent; a new entry would be attached at `link`.
    Vacant(Link),
}

// =============================================================================
// DIRECTORY
// =============================================================================

/// An ordered name/phone directory.
///
/// All operations are synchronous tree walks. The directory holds no locks;
/// callers serialize access.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    /// Arena of entries. Dead slots are kept for reuse.
    slots: Vec<Entry>,
    /// Indices of dead slots.
    free: Vec<EntryId>,
    root: Option<EntryId>,
    len: usize,
}

impl Directory {
    /// Create a new empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the directory holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Insert a new contact.
    ///
    /// Returns `DuplicateKey` and leaves the directory untouched if the name
    /// is already present. An existing phone is never overwritten.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<(), PhonebookError> {
        let contact = Contact::new(name, phone);
        match self.descend(&contact.name) {
            Descent::Found { .. } => Err(PhonebookError::DuplicateKey(contact.name)),
            Descent::Vacant(link) => {
                let id = self.alloc(Entry::leaf(contact));
                self.set_link(link, Some(id));
                self.len += 1;
                Ok(())
            }
        }
    }

    /// Remove a contact by exact name and return it.
    ///
    /// - No children: the holding link is cleared.
    /// - One child: the child takes the removed entry's place.
    /// - Two children: the in-order successor (leftmost entry of the right
    ///   subtree) is copied into the target slot and the successor's own
    ///   slot is spliced out. Only the successor's arena slot is freed.
    pub fn remove(&mut self, name: &str) -> Result<Contact, PhonebookError> {
        let (id, link) = match self.descend(name) {
            Descent::Found { id, link } => (id, link),
            Descent::Vacant(_) => return Err(PhonebookError::NotFound(name.to_string())),
        };

        let (left, right) = {
            let entry = self.entry(id);
            (entry.left, entry.right)
        };

        let removed = match (left, right) {
            (None, None) => {
                self.set_link(link, None);
                self.release(id)
            }
            (Some(child), None) | (None, Some(child)) => {
                self.set_link(link, Some(child));
                self.release(id)
            }
            (Some(_), Some(right)) => {
                let mut successor = right;
                let mut successor_link = Link::Right(id);
                while let Some(next) = self.entry(successor).left {
                    successor_link = Link::Left(successor);
                    successor = next;
                }

                // The successor has no left child, so unlinking it is a
                // zero-or-one child splice of its right subtree.
                let successor_right = self.entry(successor).right;
                self.set_link(successor_link, successor_right);
                let promoted = self.release(successor);
                std::mem::replace(&mut self.entry_mut(id).contact, promoted)
            }
        };

        self.len -= 1;
        Ok(removed)
    }

    /// Replace the phone of an existing contact.
    ///
    /// The key and the tree shape are untouched.
    pub fn modify(
        &mut self,
        name: &str,
        new_phone: impl Into<String>,
    ) -> Result<(), PhonebookError> {
        match self.descend(name) {
            Descent::Found { id, .. } => {
                self.entry_mut(id).contact.phone = new_phone.into();
                Ok(())
            }
            Descent::Vacant(_) => Err(PhonebookError::NotFound(name.to_string())),
        }
    }

    /// Drop every contact and reset to empty. Idempotent.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Insert records in the order given, skipping names already present.
    ///
    /// Returns the number of records inserted. Sorted input degrades to a
    /// linear chain, so loading `n` sorted records costs O(n²).
    pub fn hydrate<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Contact>,
    {
        let mut inserted = 0;
        for record in records {
            match self.insert(record.name, record.phone) {
                Ok(()) => inserted += 1,
                Err(e) => tracing::debug!("Skipping record during hydrate: {}", e),
            }
        }
        inserted
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Get the contact stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Contact> {
        match self.descend(name) {
            Descent::Found { id, .. } => Some(&self.entry(id).contact),
            Descent::Vacant(_) => None,
        }
    }

    /// Check if a contact with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Emit every contact whose name contains `query`, in ascending order.
    pub fn search_by_name<F>(&self, query: &str, sink: F) -> usize
    where
        F: FnMut(&Contact),
    {
        self.emit_matching(|c| c.name.contains(query), sink)
    }

    /// Emit every contact whose phone contains `query`, in ascending order.
    pub fn search_by_phone<F>(&self, query: &str, sink: F) -> usize
    where
        F: FnMut(&Contact),
    {
        self.emit_matching(|c| c.phone.contains(query), sink)
    }

    /// Name matches followed by phone matches.
    ///
    /// A contact matching on both fields is emitted twice.
    pub fn search<F>(&self, query: &str, mut sink: F) -> usize
    where
        F: FnMut(&Contact),
    {
        self.search_by_name(query, &mut sink) + self.search_by_phone(query, &mut sink)
    }

    // -------------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------------

    /// Iterate over all contacts in the given order.
    pub fn iter(&self, order: Order) -> Iter<'_> {
        Iter::new(self, order)
    }

    /// Emit every contact in increasing name order.
    pub fn show_ascending<F>(&self, sink: F) -> usize
    where
        F: FnMut(&Contact),
    {
        self.show(Order::Ascending, sink)
    }

    /// Emit every contact in decreasing name order.
    pub fn show_descending<F>(&self, sink: F) -> usize
    where
        F: FnMut(&Contact),
    {
        self.show(Order::Descending, sink)
    }

    /// Emit every contact in the given order.
    pub fn show<F>(&self, order: Order, mut sink: F) -> usize
    where
        F: FnMut(&Contact),
    {
        let mut emitted = 0;
        for contact in self.iter(order) {
            sink(contact);
            emitted += 1;
        }
        emitted
    }

    /// All contacts in ascending name order, ready for the store.
    #[must_use]
    pub fn dump(&self) -> Vec<Contact> {
        self.iter(Order::Ascending).cloned().collect()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn entry(&self, id: EntryId) -> &Entry {
        &self.slots[id.0]
    }

    fn entry_mut(&mut self, id: EntryId) -> &mut Entry {
        &mut self.slots[id.0]
    }

    fn alloc(&mut self, entry: Entry) -> EntryId {
        if let Some(id) = self.free.pop() {
            self.slots[id.0] = entry;
            id
        } else {
            self.slots.push(entry);
            EntryId(self.slots.len() - 1)
        }
    }

    /// Free a slot and hand back its contact. The caller must already have
    /// unlinked it from the tree.
    fn release(&mut self, id: EntryId) -> Contact {
        let entry = std::mem::take(self.entry_mut(id));
        self.free.push(id);
        entry.contact
    }

    fn set_link(&mut self, link: Link, child: Option<EntryId>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.entry_mut(parent).left = child,
            Link::Right(parent) => self.entry_mut(parent).right = child,
        }
    }

    /// Iterative walk from the root. A chain of any length is walked
    /// without growing the call stack.
    fn descend(&self, name: &str) -> Descent {
        let mut link = Link::Root;
        let mut current = self.root;
        while let Some(id) = current {
            let entry = self.entry(id);
            match name.cmp(entry.contact.name.as_str()) {
                Ordering::Equal => return Descent::Found { id, link },
                Ordering::Less => {
                    link = Link::Left(id);
                    current = entry.left;
                }
                Ordering::Greater => {
                    link = Link::Right(id);
                    current = entry.right;
                }
            }
        }
        Descent::Vacant(link)
    }

    /// Full in-order pass; substring predicates cannot prune subtrees.
    fn emit_matching<P, F>(&self, predicate: P, mut sink: F) -> usize
    where
        P: Fn(&Contact) -> bool,
        F: FnMut(&Contact),
    {
        let mut emitted = 0;
        for contact in self.iter(Order::Ascending).filter(|c| predicate(*c)) {
            sink(contact);
            emitted += 1;
        }
        emitted
    }
}

// =============================================================================
// ITERATOR
// =============================================================================

/// Stack-based in-order iterator over a `Directory`.
///
/// Uses an explicit stack instead of recursion, so a degenerate chain of any
/// length is walked without growing the call stack.
#[derive(Debug)]
pub struct Iter<'a> {
    directory: &'a Directory,
    order: Order,
    stack: Vec<EntryId>,
}

impl<'a> Iter<'a> {
    fn new(directory: &'a Directory, order: Order) -> Self {
        let mut iter = Self {
            directory,
            order,
            stack: Vec::new(),
        };
        iter.push_spine(directory.root);
        iter
    }

    /// Push `from` and its chain of near-side children.
    fn push_spine(&mut self, mut from: Option<EntryId>) {
        while let Some(id) = from {
            self.stack.push(id);
            let entry = self.directory.entry(id);
            from = match self.order {
                Order::Ascending => entry.left,
                Order::Descending => entry.right,
            };
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let entry = self.directory.entry(id);
        let far = match self.order {
            Order::Ascending => entry.right,
            Order::Descending => entry.left,
        };
        self.push_spine(far);
        Some(&entry.contact)
    }
}

// =============================================================================
// TESTS
// =============================================================================
