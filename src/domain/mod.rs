// Domain types and value objects
mod ticker;

pub use ticker::Ticker;
