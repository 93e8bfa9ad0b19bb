//! Storage backends implementing the `StateStore` SPI

mod memory;

pub use memory::MemoryStateStore;
