pub mod runner;

pub use crate::domain::model::{DemoReport, Principle};
pub use crate::domain::ports::{Demonstration, Storage};
pub use crate::utils::error::Result;
