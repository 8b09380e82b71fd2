use crate::config::toml_config::QueryConfig;
use crate::domain::model::{DemoReport, Principle};
use crate::domain::ports::Demonstration;
use crate::domain::product::{Color, Product, ProductType, Size};
use crate::domain::specification::{
    AndSpecification, BetterFilter, ColorSpecification, Filter, MultiSpecification,
    ProductFilter, SizeSpecification, Specification, TypeSpecification,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct OpenClosedDemo {
    products: Vec<Product>,
    query: QueryConfig,
}

impl OpenClosedDemo {
    pub fn new(products: Vec<Product>, query: QueryConfig) -> Self {
        Self { products, query }
    }

    fn report_matches<'a>(
        report: &mut DemoReport,
        label: &str,
        matches: impl Iterator<Item = &'a Product>,
    ) {
        let mut count = 0;
        for product in matches {
            report.line(format!("{} - {}", label, product.name));
            count += 1;
        }
        tracing::debug!("{}: {} match(es)", label, count);
    }

    fn better(&self, report: &mut DemoReport, label: &str, spec: &dyn Specification<Product>) {
        Self::report_matches(report, label, BetterFilter.filter(&self.products, spec));
    }
}

#[async_trait]
impl Demonstration for OpenClosedDemo {
    fn principle(&self) -> Principle {
        Principle::OpenClosed
    }

    async fn run(&self) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.principle());
        let products = &self.products;

        // A new criterion means another method on ProductFilter.
        let pf = ProductFilter;
        Self::report_matches(
            &mut report,
            "Filter By Color BLUE",
            pf.filter_by_color(products, Color::Blue),
        );
        Self::report_matches(
            &mut report,
            "Filter By Size SHORT",
            pf.filter_by_size(products, Size::Short),
        );
        Self::report_matches(
            &mut report,
            "Filter By Size SHORT and Color RED",
            pf.filter_by_color_and_size(products, Size::Short, Color::Red),
        );

        report.line("Better Solution ....");

        self.better(
            &mut report,
            "BetterFilter By Color BLUE",
            &ColorSpecification::new(Color::Blue),
        );
        self.better(
            &mut report,
            "BetterFilter By Size SHORT",
            &SizeSpecification::new(Size::Short),
        );
        self.better(
            &mut report,
            "BetterFilter(AndSpecification) By Size SHORT and Color RED",
            &AndSpecification::new(
                ColorSpecification::new(Color::Red),
                SizeSpecification::new(Size::Short),
            ),
        );
        self.better(
            &mut report,
            "BetterFilter(MultiSpecification) By Size SHORT and Color RED",
            &MultiSpecification::default()
                .with(ColorSpecification::new(Color::Red))
                .with(SizeSpecification::new(Size::Short)),
        );
        self.better(
            &mut report,
            "BetterFilter(MultiSpecification) By Size SHORT, Color BLUE and Type BELT",
            &MultiSpecification::default()
                .with(ColorSpecification::new(Color::Blue))
                .with(SizeSpecification::new(Size::Short))
                .with(TypeSpecification::new(ProductType::Belt)),
        );

        if let Some(spec) = self.query.to_specification() {
            let label = format!("BetterFilter(Query) By {}", self.query.describe());
            self.better(&mut report, &label, &spec);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::sample_catalog;

    #[tokio::test]
    async fn test_stock_walk_through() {
        let demo = OpenClosedDemo::new(sample_catalog(), QueryConfig::default());
        let report = demo.run().await.unwrap();

        assert_eq!(
            report.lines,
            vec![
                "Filter By Color BLUE - P1",
                "Filter By Color BLUE - P3",
                "Filter By Color BLUE - P5",
                "Filter By Size SHORT - P1",
                "Filter By Size SHORT - P2",
                "Filter By Size SHORT - P4",
                "Filter By Size SHORT - P5",
                "Filter By Size SHORT and Color RED - P2",
                "Better Solution ....",
                "BetterFilter By Color BLUE - P1",
                "BetterFilter By Color BLUE - P3",
                "BetterFilter By Color BLUE - P5",
                "BetterFilter By Size SHORT - P1",
                "BetterFilter By Size SHORT - P2",
                "BetterFilter By Size SHORT - P4",
                "BetterFilter By Size SHORT - P5",
                "BetterFilter(AndSpecification) By Size SHORT and Color RED - P2",
                "BetterFilter(MultiSpecification) By Size SHORT and Color RED - P2",
                "BetterFilter(MultiSpecification) By Size SHORT, Color BLUE and Type BELT - P5",
            ]
        );
    }

    #[tokio::test]
    async fn test_query_adds_lines() {
        let query = QueryConfig {
            color: Some(Color::Green),
            ..Default::default()
        };
        let report = OpenClosedDemo::new(sample_catalog(), query).run().await.unwrap();
        assert_eq!(
            report.lines.last().map(String::as_str),
            Some("BetterFilter(Query) By Color GREEN - P4")
        );
    }

    #[tokio::test]
    async fn test_empty_catalog_only_prints_heading() {
        let report = OpenClosedDemo::new(Vec::new(), QueryConfig::default())
            .run()
            .await
            .unwrap();
        assert_eq!(report.lines, vec!["Better Solution ...."]);
    }
}
