// Domain layer: course records, run report types and ports (interfaces).

pub mod model;
pub mod ports;
