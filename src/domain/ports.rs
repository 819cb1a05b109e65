use crate::domain::model::{AccountSnapshot, HeaderRender};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn username(&self) -> &str;
    fn token(&self) -> &str;
    fn template_dir(&self) -> &str;
    fn template_file(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<AccountSnapshot>;
    async fn transform(&self, snapshot: AccountSnapshot) -> Result<HeaderRender>;
    async fn load(&self, render: HeaderRender) -> Result<String>;
}
