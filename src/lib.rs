//! A collection of data structures built around stable handles.

/// A collection of list data structures built around stable entry
/// handles
pub mod lists {
    pub use linkage_lists::linkedlist::list::LinkedList;
    /// This module contains structs specific to the [`LinkedList`]
    pub mod linkedlist {
        pub use linkage_lists::linkedlist::iter::Entries;
        pub use linkage_lists::linkedlist::iter::Iter;
        pub use linkage_lists::linkedlist::iter::IterMut;
        pub use linkage_lists::linkedlist::node::Entry;
    }
}
