// Domain layer: the toy types each principle is shown with, plus the ports
// the application layer is written against.

pub mod document;
pub mod journal;
pub mod machines;
pub mod model;
pub mod ports;
pub mod product;
pub mod shapes;
pub mod specification;
