use crate::domain::model::{DemoReport, Principle};
use crate::domain::ports::Demonstration;
use crate::utils::error::{Result, SamplerError};
use std::time::{Duration, Instant};

/// Runs demonstrations one after another. Nothing is shared between them.
#[derive(Default)]
pub struct DemoRunner {
    demos: Vec<Box<dyn Demonstration>>,
}

#[derive(Debug, Clone)]
pub struct DemoRun {
    pub report: DemoReport,
    pub duration: Duration,
}

impl DemoRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, demo: Box<dyn Demonstration>) {
        self.demos.push(demo);
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    pub fn principles(&self) -> Vec<Principle> {
        self.demos.iter().map(|d| d.principle()).collect()
    }

    /// Runs every demonstration in insertion order, stopping at the first
    /// failure.
    pub async fn run_all(&self) -> Result<Vec<DemoRun>> {
        let mut runs = Vec::with_capacity(self.demos.len());

        for demo in &self.demos {
            runs.push(Self::execute(demo.as_ref()).await?);
        }

        Ok(runs)
    }

    pub async fn run_one(&self, principle: Principle) -> Result<DemoRun> {
        let demo = self
            .demos
            .iter()
            .find(|d| d.principle() == principle)
            .ok_or_else(|| SamplerError::PrincipleNotRegistered {
                principle: principle.to_string(),
            })?;
        Self::execute(demo.as_ref()).await
    }

    async fn execute(demo: &dyn Demonstration) -> Result<DemoRun> {
        let principle = demo.principle();
        tracing::info!("▶️ Running {}: {}", principle, principle.summary());
        let start_time = Instant::now();

        match demo.run().await {
            Ok(report) => {
                let duration = start_time.elapsed();
                tracing::info!(
                    "✅ {} finished ({} lines, {:?})",
                    principle,
                    report.lines.len(),
                    duration
                );
                Ok(DemoRun { report, duration })
            }
            Err(e) => {
                tracing::error!("❌ {} failed: {}", principle, e);
                Err(e)
            }
        }
    }

    pub fn execution_summary(runs: &[DemoRun]) -> serde_json::Value {
        let total_duration: Duration = runs.iter().map(|r| r.duration).sum();
        serde_json::json!({
            "total_demonstrations": runs.len(),
            "total_lines": runs.iter().map(|r| r.report.lines.len()).sum::<usize>(),
            "total_duration_ms": total_duration.as_millis() as u64,
            "principles": runs
                .iter()
                .map(|r| r.report.principle.slug())
                .collect::<Vec<_>>(),
        })
    }
}
