// Domain layer: the list contract, storage port and scenario model types.

pub mod model;
pub mod ports;
