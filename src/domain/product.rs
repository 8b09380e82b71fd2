use crate::utils::error::SamplerError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! attribute_enum {
    ($name:ident, $field:literal, { $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($name::$variant => write!(f, "{}", $label),)+
                }
            }
        }

        impl FromStr for $name {
            type Err = SamplerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_uppercase();
                match wanted.as_str() {
                    $($label $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(SamplerError::InvalidConfigValueError {
                        field: $field.to_string(),
                        value: s.to_string(),
                        reason: format!(
                            "Expected one of: {}",
                            [$($label),+].join(", ")
                        ),
                    }),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

attribute_enum!(Color, "color", {
    Red => "RED",
    Green => "GREEN",
    Blue => "BLUE",
});

attribute_enum!(Size, "size", {
    Short => "SHORT",
    Medium => "MEDIUM",
    Long => "LONG",
});

attribute_enum!(ProductType, "type", {
    TShirt => "TSHIRT" | "T-SHIRT",
    Pant => "PANT",
    Belt => "BELT",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
    #[serde(rename = "type")]
    pub kind: ProductType,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size, kind: ProductType) -> Self {
        Self {
            name: name.into(),
            color,
            size,
            kind,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {} {})", self.name, self.color, self.size, self.kind)
    }
}

pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("P1", Color::Blue, Size::Short, ProductType::Pant),
        Product::new("P2", Color::Red, Size::Short, ProductType::Belt),
        Product::new("P3", Color::Blue, Size::Long, ProductType::Belt),
        Product::new("P4", Color::Green, Size::Short, ProductType::Belt),
        Product::new("P5", Color::Blue, Size::Short, ProductType::Belt),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!(" Short ".parse::<Size>().unwrap(), Size::Short);
        assert_eq!("t-shirt".parse::<ProductType>().unwrap(), ProductType::TShirt);
        assert_eq!("TSHIRT".parse::<ProductType>().unwrap(), ProductType::TShirt);
    }

    #[test]
    fn test_parse_rejects_unknown_value() {
        let err = "purple".parse::<Color>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'purple' for 'color': Expected one of: RED, GREEN, BLUE"
        );
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let product = Product::new("P9", Color::Green, Size::Medium, ProductType::TShirt);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "P9", "color": "green", "size": "medium", "type": "tshirt"})
        );

        let parsed: Product = serde_json::from_value(
            serde_json::json!({"name": "P9", "color": "green", "size": "medium", "type": "t-shirt"}),
        )
        .unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn test_sample_catalog_order() {
        let names: Vec<_> = sample_catalog().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["P1", "P2", "P3", "P4", "P5"]);
        assert_eq!(Color::ALL.len(), 3);
    }
}
