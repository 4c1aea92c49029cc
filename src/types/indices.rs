//! Strongly-typed index newtypes.
//!
//! Cell and connection indices are both plain `usize` underneath; keeping
//! them apart stops a connection number from being used to index a per-cell
//! field.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }
    };
}

define_index!(
    /// Linear (active) cell index.
    ///
    /// Addresses one entry of any per-cell field produced by a
    /// [`ConnectivityGraph`](crate::graph::ConnectivityGraph).
    ///
    /// # Example
    ///
    /// ```
    /// use ecl_flux::types::CellIndex;
    ///
    /// let pressure = vec![250.0e5, 240.0e5];
    /// assert_eq!(pressure[CellIndex::new(1)], 240.0e5);
    /// ```
    CellIndex,
    "C"
);

define_index!(
    /// Connection index, the position of a neighbour pair in the graph's
    /// connection list and in every flux vector.
    ConnectionIndex,
    "N"
);
