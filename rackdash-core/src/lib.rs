pub mod catalog;
pub mod model;

// View composition and filtering
pub mod allocation;
pub mod relevance;
pub mod view;

// Chat assistant stub
pub mod chat;

// Compiled-in record set
mod builtin;
