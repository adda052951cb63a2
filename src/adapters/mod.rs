pub mod assets;
pub mod dispatch;
pub mod filesystem;
pub mod git;
