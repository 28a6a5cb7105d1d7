// Domain layer: product model and ports. No IO here.

pub mod model;
pub mod ports;
