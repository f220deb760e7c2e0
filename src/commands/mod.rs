pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod show;
pub mod sort;
pub mod status;
