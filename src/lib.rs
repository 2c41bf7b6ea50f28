//! A collection of list data structures designed for performance and
//! checked position handles.

/// A collection of list data structures and algorithms designed for
/// performance
pub mod lists {
    pub use lattix_lists::forwardlist::list::ListError;
    pub use lattix_lists::forwardlist::list::SingleLinkedList;
    /// This module contains structs specific to the [`SingleLinkedList`]
    pub mod forwardlist {
        pub use lattix_lists::forwardlist::cursor::Cursor;
        pub use lattix_lists::forwardlist::iter::IntoIter;
        pub use lattix_lists::forwardlist::iter::Iter;
        pub use lattix_lists::forwardlist::iter::IterMut;
    }
}
