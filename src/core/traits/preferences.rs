use crate::core::errors::Result;

/// Port for persisting the preferred page size between sessions.
pub trait PageSizeStore {
    /// The stored size, if any. Unreadable storage counts as absent.
    fn load(&self) -> Option<usize>;

    /// Remember `size` for the next session.
    fn save(&self, size: usize) -> Result<()>;
}

impl<T: PageSizeStore + ?Sized> PageSizeStore for Box<T> {
    fn load(&self) -> Option<usize> {
        (**self).load()
    }

    fn save(&self, size: usize) -> Result<()> {
        (**self).save(size)
    }
}
