pub mod change;
pub mod dynamic;
pub mod greedy;

// Re-export all modules
pub use change::*;
pub use dynamic::*;
pub use greedy::*;
