use async_trait::async_trait;
use zonehost_domain::DomainError;

#[async_trait]
pub trait RecursiveResolver: Send + Sync {
    /// Forwards `query` unmodified and returns the upstream reply bytes.
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError>;

    /// Address used in diagnostics.
    fn upstream(&self) -> String;
}
