// Adapters layer: concrete implementations for the outside world (filesystem, uploads).

pub mod intake;
pub mod storage;
