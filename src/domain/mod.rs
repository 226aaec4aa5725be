// Domain layer: exercise models and ports (interfaces). No external
// dependencies beyond std/serde where reporting needs it.

pub mod model;
pub mod ports;
