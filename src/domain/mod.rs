// Domain layer: the course record and the ports (interfaces) the core depends on.

pub mod model;
pub mod ports;
