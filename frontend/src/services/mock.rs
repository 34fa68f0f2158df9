use std::time::Duration;

use async_trait::async_trait;
use log::info;
use rand::Rng;

use super::models::{PurchaseOrder, ServiceError, SubmissionResult};
use super::Storefront;
use crate::config;

pub const SUBSCRIBE_MESSAGE: &str = "Successfully subscribed!";
pub const PURCHASE_MESSAGE: &str = "Purchase successful! Check your email for download link.";

const TXN_PREFIX: &str = "TXN_";
const TXN_SUFFIX_LEN: usize = 9;
const TXN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Storefront that waits a fixed delay and then reports success.
/// Nothing is validated, sent anywhere or stored.
#[derive(Clone, Debug)]
pub struct MockStorefront {
    subscribe_delay: Duration,
    purchase_delay: Duration,
}

impl MockStorefront {
    pub fn new(subscribe_delay: Duration, purchase_delay: Duration) -> Self {
        Self {
            subscribe_delay,
            purchase_delay,
        }
    }
}

impl Default for MockStorefront {
    fn default() -> Self {
        Self::new(config::SUBSCRIBE_DELAY, config::PURCHASE_DELAY)
    }
}

#[async_trait(?Send)]
impl Storefront for MockStorefront {
    async fn subscribe_email(&self, email: &str) -> Result<SubmissionResult, ServiceError> {
        info!("Mock email subscription: {}", email);
        sleep(self.subscribe_delay).await;
        Ok(SubmissionResult::succeeded(SUBSCRIBE_MESSAGE))
    }

    async fn purchase_ebook(&self, order: &PurchaseOrder) -> Result<SubmissionResult, ServiceError> {
        info!(
            "Mock eBook purchase: {}",
            serde_json::to_string(order).unwrap_or_default()
        );
        sleep(self.purchase_delay).await;
        let transaction_id = generate_transaction_id(&mut rand::thread_rng());
        Ok(SubmissionResult::succeeded(PURCHASE_MESSAGE).with_transaction(transaction_id))
    }
}

/// `TXN_` followed by nine lowercase alphanumerics. Well-formed, not unique.
pub fn generate_transaction_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..TXN_SUFFIX_LEN)
        .map(|_| TXN_ALPHABET[rng.gen_range(0..TXN_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", TXN_PREFIX, suffix)
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tokio::time::Instant;

    fn is_well_formed(id: &str) -> bool {
        match id.strip_prefix(TXN_PREFIX) {
            Some(suffix) => {
                suffix.len() == TXN_SUFFIX_LEN
                    && suffix.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            }
            None => false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn subscribe_resolves_after_one_second() {
        let storefront = MockStorefront::default();
        let started = Instant::now();

        let result = storefront.subscribe_email("jane@example.com").await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(1));
        assert!(result.success);
        assert!(result.message.contains("Successfully subscribed!"));
        assert_eq!(result.transaction_id, None);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribe_accepts_anything() {
        let result = MockStorefront::default().subscribe_email("").await.unwrap();
        assert!(result.success);
    }

    #[tokio::test(start_paused = true)]
    async fn purchase_resolves_after_two_seconds_with_transaction() {
        let storefront = MockStorefront::default();
        let order = PurchaseOrder { product: "TikTok 150K Playbook".to_string(), price: 29 };
        let started = Instant::now();

        let result = storefront.purchase_ebook(&order).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert!(result.message.contains("Purchase successful!"));
        let id = result.transaction_id.expect("purchase carries a transaction id");
        assert!(is_well_formed(&id), "malformed transaction id {id}");
    }

    #[tokio::test(start_paused = true)]
    async fn custom_delays_are_respected() {
        let storefront = MockStorefront::new(Duration::from_millis(5), Duration::from_millis(7));
        let started = Instant::now();
        storefront.subscribe_email("a@b.c").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(5));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn transaction_ids_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let id = generate_transaction_id(&mut rng);
            assert!(is_well_formed(&id), "malformed transaction id {id}");
        }
    }

    #[test]
    fn well_formed_check_rejects_bad_ids() {
        assert!(!is_well_formed("TXN_ABCDEFGHI"));
        assert!(!is_well_formed("TXN_abc"));
        assert!(!is_well_formed("abc123xyz"));
    }
}
