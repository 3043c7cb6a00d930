// Domain layer: tool/probe models and the process port. No I/O here.

pub mod model;
pub mod ports;
