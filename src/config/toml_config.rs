use crate::domain::product::{sample_catalog, Color, Product, ProductType, Size};
use crate::domain::specification::{
    ColorSpecification, MultiSpecification, SizeSpecification, TypeSpecification,
};
use crate::utils::error::{Result, SamplerError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the demonstrations can be tuned with. Every section is
/// optional; an empty file reproduces the stock walk-throughs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub devices: DevicesConfig,
    pub shapes: ShapesConfig,
    pub catalog: CatalogConfig,
    pub query: QueryConfig,
    pub journal: JournalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicesConfig {
    pub document: String,
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            document: "quarterly-report.pdf".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    pub initial_height: u32,
    pub probe_width: u32,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            initial_height: 5,
            probe_width: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub products: Vec<Product>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: sample_catalog(),
        }
    }
}

/// An extra filter run after the stock ones. Unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub color: Option<Color>,
    pub size: Option<Size>,
    #[serde(rename = "type")]
    pub kind: Option<ProductType>,
}

impl QueryConfig {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.size.is_none() && self.kind.is_none()
    }

    pub fn to_specification(&self) -> Option<MultiSpecification<Product>> {
        if self.is_empty() {
            return None;
        }

        let mut spec = MultiSpecification::default();
        if let Some(color) = self.color {
            spec = spec.with(ColorSpecification::new(color));
        }
        if let Some(size) = self.size {
            spec = spec.with(SizeSpecification::new(size));
        }
        if let Some(kind) = self.kind {
            spec = spec.with(TypeSpecification::new(kind));
        }
        Some(spec)
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(color) = self.color {
            parts.push(format!("Color {}", color));
        }
        if let Some(size) = self.size {
            parts.push(format!("Size {}", size));
        }
        if let Some(kind) = self.kind {
            parts.push(format!("Type {}", kind));
        }
        parts.join(", ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub entries: Vec<String>,
    pub output_path: String,
    pub file_name: String,
    pub overwrite: bool,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            entries: vec!["Woke up late".to_string(), "Went for a ride".to_string()],
            output_path: ".".to_string(),
            file_name: "test123.txt".to_string(),
            overwrite: true,
        }
    }
}

impl SamplerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SamplerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SamplerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SamplerError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("devices.document", &self.devices.document)?;

        validation::validate_positive_number(
            "shapes.initial_height",
            self.shapes.initial_height,
            1,
        )?;
        validation::validate_positive_number("shapes.probe_width", self.shapes.probe_width, 1)?;

        for product in &self.catalog.products {
            validation::validate_non_empty_string("catalog.products.name", &product.name)?;
        }

        validation::validate_path("journal.output_path", &self.journal.output_path)?;
        validation::validate_file_name("journal.file_name", &self.journal.file_name)?;

        Ok(())
    }
}

impl Validate for SamplerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
