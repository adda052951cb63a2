mod env;
mod fake_dispatch;
mod fake_git;
mod memory_store;

pub use env::EnvVarGuard;
pub use fake_dispatch::FakeDispatchClient;
pub use fake_git::{FAKE_REMOTE, FakeGit};
pub use memory_store::{MemoryDocumentStore, fixed_mtime};
