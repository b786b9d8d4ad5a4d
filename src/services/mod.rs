// Service module exports

pub mod ids;
pub mod render;
pub mod settings;
pub mod storage;
pub mod timeline;
