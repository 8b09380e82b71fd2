pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;

pub use interface_segregation::InterfaceSegregationDemo;
pub use liskov_substitution::LiskovSubstitutionDemo;
pub use open_closed::OpenClosedDemo;
pub use single_responsibility::SingleResponsibilityDemo;

use crate::adapters::storage::LocalStorage;
use crate::config::toml_config::SamplerConfig;
use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;

/// Builds the demonstration for `principle` from the resolved configuration.
pub fn build_demo(principle: Principle, config: &SamplerConfig) -> Box<dyn Demonstration> {
    match principle {
        Principle::InterfaceSegregation => {
            Box::new(InterfaceSegregationDemo::new(&config.devices.document))
        }
        Principle::LiskovSubstitution => Box::new(LiskovSubstitutionDemo::new(
            config.shapes.initial_height,
            config.shapes.probe_width,
        )),
        Principle::OpenClosed => Box::new(OpenClosedDemo::new(
            config.catalog.products.clone(),
            config.query.clone(),
        )),
        Principle::SingleResponsibility => {
            let storage = LocalStorage::new(config.journal.output_path.clone());
            Box::new(SingleResponsibilityDemo::new(storage, config.journal.clone()))
        }
    }
}
