// Shared 2 and 3 element sorting networks, generic over the indirection unit.
pub(crate) mod network;

// Moves whole records between the buffer and a same-sized auxiliary buffer.
pub mod merge_direct;

// Moves a u32 permutation, records are gathered once at the end.
pub mod merge_indexed;

// Moves element addresses into a private clone, copied back once at the end.
pub mod merge_ptr;
