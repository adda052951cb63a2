#![allow(dead_code, unused_imports)]

pub(crate) mod git_repository;
pub(crate) mod test_context;

pub(crate) use test_context::{OWNER, TestContext};
