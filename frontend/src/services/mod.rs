//! Storefront capabilities the interactive sections depend on.
//!
//! Sections only ever see a [`StorefrontHandle`], so the mock can be replaced
//! by a real email/checkout client at startup without touching any view code.

use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;
use yew::prelude::*;

pub mod mock;
pub mod models;

pub use mock::MockStorefront;
pub use models::{PurchaseOrder, ServiceError, SubmissionResult};

#[async_trait(?Send)]
pub trait Storefront {
    async fn subscribe_email(&self, email: &str) -> Result<SubmissionResult, ServiceError>;

    async fn purchase_ebook(&self, order: &PurchaseOrder) -> Result<SubmissionResult, ServiceError>;
}

#[derive(Clone)]
pub struct StorefrontHandle(Rc<dyn Storefront>);

impl StorefrontHandle {
    pub fn new<S: Storefront + 'static>(storefront: S) -> Self {
        Self(Rc::new(storefront))
    }
}

impl Default for StorefrontHandle {
    fn default() -> Self {
        Self::new(MockStorefront::default())
    }
}

impl PartialEq for StorefrontHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for StorefrontHandle {
    type Target = dyn Storefront;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[hook]
pub fn use_storefront() -> StorefrontHandle {
    use_context::<StorefrontHandle>().unwrap_or_else(|| {
        log::warn!("No storefront in context, falling back to the mock");
        StorefrontHandle::default()
    })
}
