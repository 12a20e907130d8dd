mod facades;
pub use facades::*;
