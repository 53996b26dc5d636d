// Domain layer: value types and ports. Nothing here depends on the CLI or tokio.

pub mod model;
pub mod ports;
