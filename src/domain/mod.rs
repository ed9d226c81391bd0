// Domain layer: value types handed to the expression builders, recipe steps and the runner's ports.

pub mod model;
pub mod ports;
pub mod step;
