use std::cell::Cell;

use crate::core::errors::Result;
use crate::core::traits::preferences::PageSizeStore;

/// Page-size preference that lives only as long as the process.
///
/// Used with `--no-persist` and in tests.
#[derive(Debug, Default)]
pub struct MemoryPageSizeStore {
    size: Cell<Option<usize>>,
}

impl MemoryPageSizeStore {
    pub fn with(size: usize) -> Self {
        Self {
            size: Cell::new(Some(size)),
        }
    }
}

impl PageSizeStore for MemoryPageSizeStore {
    fn load(&self) -> Option<usize> {
        self.size.get()
    }

    fn save(&self, size: usize) -> Result<()> {
        self.size.set(Some(size));
        Ok(())
    }
}
