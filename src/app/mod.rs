// Application layer: async orchestration around the core heuristic.

pub mod backend;
pub mod engine;
pub mod render;
pub mod session;
