use std::collections::HashMap;
use std::sync::Arc;

use crate::window::{self, PageButton, WindowError};

pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowKey {
    pub num_pages: usize,
    pub page_index: usize,
    pub num_siblings: usize,
}

/// Memoizes resolver output keyed by its three inputs. Once `capacity`
/// entries are held the map is cleared before the next insert.
#[derive(Debug)]
pub struct WindowCache {
    entries: HashMap<WindowKey, Arc<[PageButton]>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for WindowCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl WindowCache {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::new(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    pub fn get_or_compute(
        &mut self,
        num_pages: usize,
        page_index: usize,
        num_siblings: usize,
    ) -> Result<Arc<[PageButton]>, WindowError> {
        let key = WindowKey {
            num_pages,
            page_index,
            num_siblings,
        };
        if let Some(cached) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(Arc::clone(cached));
        }

        self.misses += 1;
        let buttons: Arc<[PageButton]> =
            window::compute_pagination_window(num_pages, page_index, num_siblings)?.into();
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.insert(key, Arc::clone(&buttons));
        Ok(buttons)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
