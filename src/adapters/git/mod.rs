mod git_command;

pub use git_command::GitCommandAdapter;
