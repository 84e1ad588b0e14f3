// Domain layer: models and ports. Nothing here touches the filesystem or the network.

pub mod model;
pub mod ports;
