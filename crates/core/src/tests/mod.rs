//! Test harnesses for trait implementations

mod store;

pub use store::StoreTestSuite;
