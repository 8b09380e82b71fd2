use crate::utils::error::SamplerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Principle {
    #[value(alias = "isp")]
    InterfaceSegregation,
    #[value(alias = "lsp")]
    LiskovSubstitution,
    #[value(alias = "ocp")]
    OpenClosed,
    #[value(alias = "srp")]
    SingleResponsibility,
}

impl Principle {
    pub const ALL: [Principle; 4] = [
        Principle::InterfaceSegregation,
        Principle::LiskovSubstitution,
        Principle::OpenClosed,
        Principle::SingleResponsibility,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Principle::InterfaceSegregation => "interface-segregation",
            Principle::LiskovSubstitution => "liskov-substitution",
            Principle::OpenClosed => "open-closed",
            Principle::SingleResponsibility => "single-responsibility",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Principle::InterfaceSegregation => {
                "Clients should not be forced to implement operations they do not use"
            }
            Principle::LiskovSubstitution => {
                "A subtype must be usable wherever its base type is expected"
            }
            Principle::OpenClosed => "Open for extension, closed for modification",
            Principle::SingleResponsibility => {
                "There should never be more than one reason for a type to change"
            }
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Principle {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interface-segregation" | "isp" => Ok(Principle::InterfaceSegregation),
            "liskov-substitution" | "lsp" => Ok(Principle::LiskovSubstitution),
            "open-closed" | "ocp" => Ok(Principle::OpenClosed),
            "single-responsibility" | "srp" => Ok(Principle::SingleResponsibility),
            _ => Err(SamplerError::UnknownPrinciple {
                name: s.to_string(),
            }),
        }
    }
}

/// What a demonstration printed, line by line, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub principle: Principle,
    pub lines: Vec<String>,
}

impl DemoReport {
    pub fn new(principle: Principle) -> Self {
        Self {
            principle,
            lines: Vec::new(),
        }
    }

    pub fn line(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!("[{}] {}", self.principle, text);
        self.lines.push(text);
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.principle)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
