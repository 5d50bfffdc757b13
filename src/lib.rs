pub mod catalog;
pub mod common;
pub mod notes;
pub mod player;
pub mod storage;
