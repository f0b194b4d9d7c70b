// Domain layer: the bootcamp examples themselves plus the ports the plot pipeline runs on.

pub mod arithmetic;
pub mod model;
pub mod pets;
pub mod ports;
pub mod taylor;
