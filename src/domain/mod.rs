// Domain layer: the check-in record and the input port. No I/O here.

pub mod model;
pub mod ports;
