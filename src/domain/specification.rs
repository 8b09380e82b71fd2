//! Product filtering, first as a filter type that grows a method per
//! criterion and then as composable specifications that a single generic
//! filter accepts.

use crate::domain::product::{Color, Product, ProductType, Size};

/// Grows a new method for every new criterion.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn filter_by_color<'a>(
        &self,
        products: &'a [Product],
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.color == color)
    }

    pub fn filter_by_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.size == size)
    }

    pub fn filter_by_color_and_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products
            .iter()
            .filter(move |p| p.color == color && p.size == size)
    }
}

pub trait Specification<T: ?Sized> {
    fn is_satisfied(&self, item: &T) -> bool;

    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpecification {
    kind: ProductType,
}

impl TypeSpecification {
    pub fn new(kind: ProductType) -> Self {
        Self { kind }
    }
}

impl Specification<Product> for TypeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.kind == self.kind
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T>
    for AndSpecification<A, B>
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// All of any number of specifications. Empty means "everything".
pub struct MultiSpecification<T: ?Sized> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T: ?Sized> MultiSpecification<T> {
    pub fn new(specs: Vec<Box<dyn Specification<T>>>) -> Self {
        Self { specs }
    }

    pub fn with(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Default for MultiSpecification<T> {
    fn default() -> Self {
        Self { specs: Vec::new() }
    }
}

impl<T: ?Sized> Specification<T> for MultiSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }
}

pub trait Filter<T> {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a>;
}

/// The one filter every new specification works with unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(items.iter().filter(move |item| spec.is_satisfied(item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::sample_catalog;
    use std::cell::Cell;
    use std::rc::Rc;

    fn names<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        products.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_product_filter_by_single_attribute() {
        let products = sample_catalog();
        let pf = ProductFilter;
        assert_eq!(
            names(pf.filter_by_color(&products, Color::Blue)),
            vec!["P1", "P3", "P5"]
        );
        assert_eq!(
            names(pf.filter_by_size(&products, Size::Short)),
            vec!["P1", "P2", "P4", "P5"]
        );
        assert_eq!(
            names(pf.filter_by_color_and_size(&products, Size::Short, Color::Red)),
            vec!["P2"]
        );
    }

    #[test]
    fn test_and_specification_requires_both() {
        let products = sample_catalog();
        let spec = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Short));

        let matched: Vec<&Product> = BetterFilter.filter(&products, &spec).collect();
        assert_eq!(names(matched.iter().copied()), vec!["P1", "P5"]);
        for product in matched {
            assert_eq!(product.color, Color::Blue);
            assert_eq!(product.size, Size::Short);
        }
    }

    #[test]
    fn test_better_filter_agrees_with_product_filter() {
        let products = sample_catalog();
        let pf = ProductFilter;

        for &color in Color::ALL {
            for &size in Size::ALL {
                let spec = AndSpecification::new(
                    ColorSpecification::new(color),
                    SizeSpecification::new(size),
                );
                assert_eq!(
                    names(BetterFilter.filter(&products, &spec)),
                    names(pf.filter_by_color_and_size(&products, size, color)),
                );
            }
        }
    }

    #[test]
    fn test_multi_specification_of_three() {
        let products = sample_catalog();
        let spec = MultiSpecification::<Product>::default()
            .with(ColorSpecification::new(Color::Blue))
            .with(SizeSpecification::new(Size::Short))
            .with(TypeSpecification::new(ProductType::Belt));
        assert_eq!(spec.len(), 3);
        assert_eq!(names(BetterFilter.filter(&products, &spec)), vec!["P5"]);
    }

    #[test]
    fn test_empty_multi_specification_matches_everything() {
        let products = sample_catalog();
        let spec = MultiSpecification::<Product>::default();
        assert!(spec.is_empty());
        assert_eq!(BetterFilter.filter(&products, &spec).count(), products.len());
    }

    struct Counting {
        result: bool,
        calls: Rc<Cell<usize>>,
    }

    impl Specification<Product> for Counting {
        fn is_satisfied(&self, _item: &Product) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.result
        }
    }

    #[test]
    fn test_multi_specification_stops_at_first_failure() {
        let calls = Rc::new(Cell::new(0));
        let spec = MultiSpecification::<Product>::new(vec![
            Box::new(ColorSpecification::new(Color::Red)),
            Box::new(Counting {
                result: true,
                calls: Rc::clone(&calls),
            }),
        ]);
        let product = Product::new("P1", Color::Blue, Size::Short, ProductType::Pant);
        assert!(!spec.is_satisfied(&product));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_filter_works_for_any_item_type() {
        let numbers = [1, 4, 9, 16, 25];
        struct Even;
        impl Specification<i32> for Even {
            fn is_satisfied(&self, item: &i32) -> bool {
                item % 2 == 0
            }
        }
        let evens: Vec<_> = BetterFilter.filter(&numbers, &Even).copied().collect();
        assert_eq!(evens, vec![4, 16]);
    }
}
