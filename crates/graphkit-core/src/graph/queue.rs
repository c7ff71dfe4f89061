//! Indexed binary min-heap over vertex handles
//!
//! Every queued vertex remembers its heap position, so a caller that lowers a
//! vertex's key can re-position it with [`IndexedMinHeap::decrease_key`] in
//! O(log n) instead of searching the heap.

use crate::graph::types::VertexId;

/// Strict "less than" used to order keys
pub type Comparator<K> = fn(&K, &K) -> bool;

fn partial_lt<K: PartialOrd>(a: &K, b: &K) -> bool {
    a < b
}

/// Binary min-heap of `(vertex, key)` entries with a per-vertex position table
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K> {
    heap: Vec<(VertexId, K)>,
    /// Heap position of each queued vertex, indexed by arena slot
    position: Vec<Option<usize>>,
    less: Comparator<K>,
}

impl<K: PartialOrd> IndexedMinHeap<K> {
    /// Heap over vertices with slot indices below `slots`, ordered by `<`
    pub fn new(slots: usize) -> Self {
        Self::with_comparator(slots, partial_lt::<K>)
    }
}

impl<K> IndexedMinHeap<K> {
    /// Heap ordered by an explicit comparator. Equal keys keep their
    /// relative heap order: items only move on a strict `less`.
    pub fn with_comparator(slots: usize, less: Comparator<K>) -> Self {
        IndexedMinHeap {
            heap: Vec::new(),
            position: vec![None; slots],
            less,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: VertexId) -> bool {
        self.position.get(item.0).is_some_and(Option::is_some)
    }

    /// Current key of a queued vertex
    pub fn key(&self, item: VertexId) -> Option<&K> {
        let pos = self.position.get(item.0).copied().flatten()?;
        Some(&self.heap[pos].1)
    }

    /// Queue a vertex. A vertex that is already queued is re-keyed instead.
    pub fn insert(&mut self, item: VertexId, key: K) {
        if self.contains(item) {
            self.decrease_key(item, key);
            return;
        }
        if item.0 >= self.position.len() {
            self.position.resize(item.0 + 1, None);
        }
        self.heap.push((item, key));
        let last = self.heap.len() - 1;
        self.position[item.0] = Some(last);
        self.sift_up(last);
    }

    /// Remove and return the vertex with the smallest key
    pub fn extract_min(&mut self) -> Option<(VertexId, K)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (item, key) = self.heap.pop()?;
        self.position[item.0] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, key))
    }

    /// Lower the key of a queued vertex and sift it up from its recorded
    /// position. Returns false if the vertex is not queued or the new key is
    /// not smaller.
    pub fn decrease_key(&mut self, item: VertexId, key: K) -> bool {
        let Some(pos) = self.position.get(item.0).copied().flatten() else {
            return false;
        };
        if !(self.less)(&key, &self.heap[pos].1) {
            return false;
        }
        self.heap[pos].1 = key;
        self.sift_up(pos);
        true
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].0 .0] = Some(a);
        self.position[self.heap[b].0 .0] = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !(self.less)(&self.heap[pos].1, &self.heap[parent].1) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && (self.less)(&self.heap[right].1, &self.heap[left].1) {
                smallest = right;
            }
            if !(self.less)(&self.heap[smallest].1, &self.heap[pos].1) {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}
