pub mod add;
pub mod common;
pub mod completions;
pub mod delete;
pub mod encode;
pub mod export;
pub mod list;
pub mod location;
pub mod search;
pub mod suggest;
