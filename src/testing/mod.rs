//! In-crate fakes for the ports.


pub use ports::{FakeGit, FakeToolRunner, MemoryConfigStore};
