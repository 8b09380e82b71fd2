use crate::domain::model::{DemoReport, Principle};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;

    /// Where `path` ends up, for reporting.
    fn locate(&self, path: &str) -> String;
}

#[async_trait]
pub trait Demonstration: Send + Sync {
    fn principle(&self) -> Principle;
    async fn run(&self) -> Result<DemoReport>;
}
