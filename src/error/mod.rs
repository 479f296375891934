// Errors as reported against a named source

mod display;

// Re-export all public symbols
pub use display::*;
