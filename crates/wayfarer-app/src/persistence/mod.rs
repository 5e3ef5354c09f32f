//! Saving and restoring [`AppState`](crate::state::AppState) between runs.

mod dto;
pub mod storage;
