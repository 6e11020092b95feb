// Domain layer: the occupancy model and the ports the app drives.

pub mod model;
pub mod ports;
