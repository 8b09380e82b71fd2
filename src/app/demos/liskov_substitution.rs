use crate::domain::model::{DemoReport, Principle};
use crate::domain::ports::Demonstration;
use crate::domain::shapes::{use_it, Rectangle, RectangleFactory, Shape, Square};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct LiskovSubstitutionDemo {
    initial_height: u32,
    probe_width: u32,
}

impl LiskovSubstitutionDemo {
    pub fn new(initial_height: u32, probe_width: u32) -> Self {
        Self {
            initial_height,
            probe_width,
        }
    }

    fn check(&self, label: &str, shape: &mut dyn Shape, report: &mut DemoReport) {
        let check = use_it(shape, self.probe_width);
        if !check.holds() {
            tracing::warn!("{} cannot stand in for a rectangle: {}", label, check);
        }
        report.line(format!("{}: {}", label, check));
    }
}

#[async_trait]
impl Demonstration for LiskovSubstitutionDemo {
    fn principle(&self) -> Principle {
        Principle::LiskovSubstitution
    }

    async fn run(&self) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.principle());

        let mut rectangle = Rectangle::default();
        rectangle.set_height(self.initial_height);
        self.check("Rectangle", &mut rectangle, &mut report);

        let mut square = Square::default();
        square.set_height(self.initial_height);
        self.check("Square", &mut square, &mut report);

        let mut factory_rectangle =
            RectangleFactory::new_rectangle(self.initial_height, self.initial_height);
        self.check("Factory rectangle", &mut factory_rectangle, &mut report);

        let mut factory_square = RectangleFactory::new_square(self.initial_height);
        self.check("Factory square", &mut factory_square, &mut report);

        Ok(report)
    }
}
