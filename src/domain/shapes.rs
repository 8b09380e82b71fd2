//! Rectangles and squares. `Square` honours its own geometry but breaks
//! callers written against `Shape`; the factory sidesteps that by only ever
//! producing rectangles.

use serde::Serialize;
use std::fmt;

pub trait Shape {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

/// Keeps both sides equal whichever setter is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }

    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaCheck {
    pub expected: u64,
    pub actual: u64,
}

impl AreaCheck {
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for AreaCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected Area: {} Actual Area: {}",
            self.expected, self.actual
        )
    }
}

/// Written against the rectangle contract: changing the width must leave
/// the height alone.
pub fn use_it(shape: &mut dyn Shape, probe_width: u32) -> AreaCheck {
    let height = shape.height();
    shape.set_width(probe_width);

    let check = AreaCheck {
        expected: u64::from(height) * u64::from(probe_width),
        actual: shape.area(),
    };
    if !check.holds() {
        tracing::debug!("substitution broke: {}", check);
    }
    check
}

pub struct RectangleFactory;

impl RectangleFactory {
    pub fn new_rectangle(width: u32, height: u32) -> Rectangle {
        Rectangle::new(width, height)
    }

    pub fn new_square(side: u32) -> Rectangle {
        Rectangle::new(side, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_area_consistent(shape: &dyn Shape) {
        assert_eq!(
            shape.area(),
            u64::from(shape.width()) * u64::from(shape.height())
        );
    }

    #[test]
    fn test_area_tracks_setters() {
        let mut shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::default()),
            Box::new(Square::default()),
            Box::new(RectangleFactory::new_square(3)),
        ];

        for shape in shapes.iter_mut() {
            assert_area_consistent(shape.as_ref());
            shape.set_width(7);
            assert_area_consistent(shape.as_ref());
            shape.set_height(4);
            assert_area_consistent(shape.as_ref());
        }
    }

    #[test]
    fn test_square_setters_keep_sides_equal() {
        let mut square = Square::new(2);
        square.set_height(5);
        assert_eq!(square.width(), 5);
        square.set_width(9);
        assert_eq!(square.height(), 9);
        assert_eq!(square.area(), 81);
    }

    #[test]
    fn test_rectangle_substitutes() {
        let mut rectangle = Rectangle::default();
        rectangle.set_height(5);
        let check = use_it(&mut rectangle, 10);
        assert_eq!(check, AreaCheck { expected: 50, actual: 50 });
        assert!(check.holds());
    }

    #[test]
    fn test_square_breaks_substitution() {
        let mut square = Square::default();
        square.set_height(5);
        let check = use_it(&mut square, 10);
        assert_eq!(check.expected, 50);
        assert_eq!(check.actual, 100);
        assert!(!check.holds());
    }

    #[test]
    fn test_factory_shapes_substitute() {
        let mut rectangle = RectangleFactory::new_rectangle(5, 5);
        let mut square = RectangleFactory::new_square(5);
        assert!(use_it(&mut rectangle, 10).holds());
        assert_eq!(
            use_it(&mut square, 10).to_string(),
            "Expected Area: 50 Actual Area: 50"
        );
    }

    #[test]
    fn test_area_does_not_overflow() {
        let rectangle = Rectangle::new(u32::MAX, u32::MAX);
        assert_eq!(rectangle.area(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }
}
