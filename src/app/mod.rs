// Application layer: demonstrations and the services they use.

pub mod demos;
pub mod persistence;
