//! Use-case contracts
//!
//! Every application-level operation is exposed through one of these three
//! call shapes. A use case is stateless between calls: it holds only the
//! repository reference injected at construction and never caches results.
//! Whatever the repository raises propagates to the caller unmodified.

use async_trait::async_trait;

use crate::domain::result::Result;

/// An operation taking parameters and producing a result
#[async_trait]
pub trait UseCase<Out, Params>: Send + Sync {
    async fn call(&self, params: Params) -> Result<Out>;
}

/// A side-effect-only operation
#[async_trait]
pub trait VoidUseCase<Params>: Send + Sync {
    async fn call(&self, params: Params) -> Result<()>;
}

/// An operation producing a result without input
#[async_trait]
pub trait NoParamsUseCase<Out>: Send + Sync {
    async fn call(&self) -> Result<Out>;
}
