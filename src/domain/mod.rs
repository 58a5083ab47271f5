// Domain layer: shared value types and ports. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
