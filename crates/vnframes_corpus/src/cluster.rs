//! Gold cluster labels derived from class ids.

use std::collections::HashMap;
use std::hash::Hash;

use vnframes_foundation::{Error, Result};
use vnframes_model::{ClassId, class_of_member};

/// Assigns each distinct key the next integer, starting at 1.
#[derive(Clone, Debug)]
pub struct SequentialIdAllocator<K> {
    ids: HashMap<K, usize>,
}

impl<K: Eq + Hash> SequentialIdAllocator<K> {
    /// Creates an allocator that has assigned nothing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
        }
    }

    /// Returns the id of a key, assigning a new one on first sight.
    pub fn id(&mut self, key: K) -> usize {
        let next = self.ids.len() + 1;
        *self.ids.entry(key).or_insert(next)
    }

    /// Returns the number of ids assigned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no id has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<K: Eq + Hash> Default for SequentialIdAllocator<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Labels every item by a key, numbering keys in first-seen order.
pub fn label_by<T, K, F>(items: &[T], mut key: F) -> Result<Vec<usize>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> Result<K>,
{
    let mut allocator = SequentialIdAllocator::new();
    items
        .iter()
        .map(|item| key(item).map(|k| allocator.id(k)))
        .collect()
}

fn member_class(member: &str) -> Result<ClassId> {
    let class = class_of_member(member).ok_or_else(|| Error::invalid_class_id(member))?;
    ClassId::parse(class)
}

/// Cluster labels over `verb#class-id` members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterLabels {
    /// By top-level class (`give-13.1-1` and `give-13.1` share a label).
    pub toplevel: Vec<usize>,
    /// By full class id.
    pub subclass: Vec<usize>,
    /// By the integer part of the class code.
    pub integer: Vec<usize>,
}

impl ClusterLabels {
    /// Labels matrix members.
    ///
    /// # Errors
    ///
    /// Returns an invalid class id error for a member without a class.
    pub fn from_members<S: AsRef<str>>(members: &[S]) -> Result<Self> {
        Ok(Self {
            toplevel: label_by(members, |m| Ok(member_class(m.as_ref())?.toplevel_key()))?,
            subclass: label_by(members, |m| Ok(member_class(m.as_ref())?.as_str().to_string()))?,
            integer: label_by(members, |m| Ok(member_class(m.as_ref())?.code_int()))?,
        })
    }
}

/// Cluster labels over the class ids of a shortened matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortClusterLabels {
    /// By top-level class.
    pub toplevel: Vec<usize>,
    /// By the integer part of the class code.
    pub integer: Vec<usize>,
}

impl ShortClusterLabels {
    /// Labels shortened members, which are class ids.
    ///
    /// # Errors
    ///
    /// Returns an invalid class id error for a malformed class id.
    pub fn from_classes<S: AsRef<str>>(classes: &[S]) -> Result<Self> {
        Ok(Self {
            toplevel: label_by(classes, |c| Ok(ClassId::parse(c.as_ref())?.toplevel_key()))?,
            integer: label_by(classes, |c| Ok(ClassId::parse(c.as_ref())?.code_int()))?,
        })
    }
}
