pub mod agents;
pub mod components;
pub mod objects;
pub mod pages;
pub mod state;
pub mod storage;
pub mod utils;
