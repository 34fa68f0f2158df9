use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use crate::components::notification::{use_toast, ToastMessage};
use crate::components::submission::{Outcome, SubmissionAction, SubmissionState};
use crate::content::EbookCopy;
use crate::services::{use_storefront, PurchaseOrder, Storefront};

pub const PROCESSING_LABEL: &str = "Processing...";
const PURCHASE_TITLE: &str = "Purchase Successful! 🎉";

pub fn order_for(copy: &EbookCopy) -> PurchaseOrder {
    PurchaseOrder {
        product: copy.product.clone(),
        price: copy.order_price,
    }
}

/// Runs the checkout and decides the single notification it produces.
pub async fn purchase(storefront: &dyn Storefront, order: &PurchaseOrder) -> Outcome {
    let result = storefront.purchase_ebook(order).await;
    if let Ok(result) = &result {
        debug!("Checkout returned transaction {:?}", result.transaction_id);
    }
    Outcome::from_result(result, |result| {
        ToastMessage::success(PURCHASE_TITLE, result.message)
    })
}

#[derive(Properties, PartialEq)]
pub struct EbookShowcaseProps {
    pub copy: EbookCopy,
}

#[function_component(EbookShowcase)]
pub fn ebook_showcase(props: &EbookShowcaseProps) -> Html {
    let copy = &props.copy;
    let state = use_reducer(SubmissionState::action);
    let toasts = use_toast();
    let storefront = use_storefront();
    let is_mounted = use_is_mounted();

    let onclick = {
        let state = state.clone();
        let order = order_for(copy);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !state.can_submit() {
                return;
            }
            state.dispatch(SubmissionAction::Begin);

            let state = state.clone();
            let toasts = toasts.clone();
            let storefront = storefront.clone();
            let is_mounted = is_mounted.clone();
            let order = order.clone();
            spawn_local(async move {
                let outcome = purchase(&*storefront, &order).await;
                if !is_mounted() {
                    debug!("Showcase unmounted before checkout finished, dropping result");
                    return;
                }
                toasts.push(outcome.toast.clone());
                state.dispatch(outcome.action());
            });
        })
    };

    html! {
        <section id="ebook" class="section ebook-section fade-in">
            <div class="ebook-inner">
                <div class="ebook-header">
                    <span class="badge">{&copy.badge}</span>
                    <h2 class="display-font ebook-title">{&copy.title}</h2>
                    <p class="ebook-tagline">{&copy.tagline}</p>
                </div>

                <div class="ebook-grid">
                    <div class="ebook-preview">
                        <div class="ebook-cover">
                            <div class="ebook-cover-icon">{"📚"}</div>
                            <h3 class="display-font">{&copy.cover_title}</h3>
                            <p class="ebook-cover-subtitle">{&copy.cover_subtitle}</p>
                            <div class="stars">
                                { for (0..5).map(|_| html! { <span class="star">{"★"}</span> }) }
                            </div>
                            <p class="ebook-cover-note">{&copy.cover_note}</p>
                        </div>
                        <span class="floating floating-top" aria-hidden="true">{"✨"}</span>
                        <span class="floating floating-bottom" aria-hidden="true">{"💎"}</span>
                    </div>

                    <div class="ebook-card">
                        <h3 class="display-font ebook-card-title">{&copy.contents_heading}</h3>
                        <ul class="check-list">
                            { for copy.contents.iter().map(|item| html! {
                                <li><span class="check">{"✓"}</span><span>{item}</span></li>
                            }) }
                        </ul>

                        <div class="ebook-bonus">
                            <p class="ebook-bonus-heading">{&copy.bonus_heading}</p>
                            <ul class="check-list small">
                                { for copy.bonuses.iter().map(|item| html! {
                                    <li><span class="check">{"✓"}</span><span>{item}</span></li>
                                }) }
                            </ul>
                        </div>

                        <div class="ebook-pricing">
                            <p class="ebook-regular-price">{&copy.regular_price}</p>
                            <p class="gradient-text ebook-price">{&copy.price}</p>
                            <p class="ebook-price-note">{&copy.price_note}</p>

                            <button
                                class="btn-sparkle ebook-cta"
                                disabled={state.submitting}
                                {onclick}
                            >
                                {state.label(&copy.cta_text, PROCESSING_LABEL)}
                            </button>

                            <p class="ebook-guarantee">{&copy.guarantee}</p>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .ebook-section {
                        background: linear-gradient(135deg, #faf5ff 0%, #fdf2f8 50%, #ffffff 100%);
                    }
                    .ebook-inner { max-width: 72rem; margin: 0 auto; }
                    .ebook-header { text-align: center; margin-bottom: 4rem; }
                    .ebook-title {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 700;
                        color: #1f2937;
                        margin: 1rem 0 1.5rem;
                    }
                    .ebook-tagline {
                        font-size: 1.4rem;
                        color: #4b5563;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .ebook-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 3rem;
                        align-items: center;
                    }
                    .ebook-preview { position: relative; }
                    .ebook-cover {
                        transform: rotate(3deg);
                        transition: transform 0.5s;
                        background: linear-gradient(135deg, #f472b6, #a855f7);
                        color: #ffffff;
                        text-align: center;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                    }
                    .ebook-cover:hover { transform: rotate(0deg); }
                    .ebook-cover-icon { font-size: 3.75rem; margin-bottom: 1rem; }
                    .ebook-cover-subtitle { opacity: 0.9; }
                    .ebook-cover-note { font-size: 0.875rem; opacity: 0.8; }
                    .stars { display: flex; justify-content: center; gap: 0.25rem; margin-bottom: 1rem; }
                    .star { color: #fde047; font-size: 1.25rem; }
                    .floating { position: absolute; }
                    .floating-top { top: -1rem; right: -1rem; font-size: 2.25rem; animation: spin 3s linear infinite; }
                    .floating-bottom { bottom: -1rem; left: -1rem; font-size: 1.9rem; animation: bounce 1s infinite; }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }
                    .ebook-card {
                        background: rgba(255, 255, 255, 0.8);
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                    }
                    .ebook-card-title { text-align: center; font-size: 1.5rem; color: #1f2937; }
                    .check-list { list-style: none; padding: 0; display: grid; gap: 1rem; color: #374151; }
                    .check-list.small { gap: 0.5rem; font-size: 0.875rem; color: #4b5563; }
                    .check { color: #22c55e; margin-right: 0.75rem; }
                    .ebook-bonus { border-top: 1px solid #e5e7eb; padding-top: 1rem; margin-top: 1.5rem; }
                    .ebook-bonus-heading { font-weight: 600; color: #7e22ce; }
                    .ebook-pricing {
                        background: linear-gradient(90deg, #fce7f3, #f3e8ff);
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        text-align: center;
                        margin-top: 1.5rem;
                    }
                    .ebook-regular-price { font-size: 0.875rem; color: #6b7280; text-decoration: line-through; }
                    .ebook-price { font-size: 1.9rem; font-weight: 700; margin: 0.5rem 0; }
                    .ebook-price-note { font-size: 0.875rem; color: #9333ea; font-weight: 500; }
                    .ebook-cta { width: 100%; margin-top: 1.5rem; font-size: 1.125rem; padding: 0.75rem; }
                    .ebook-guarantee { font-size: 0.75rem; color: #6b7280; margin-top: 0.75rem; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::time::Instant;

    use super::*;
    use crate::components::notification::ToastVariant;
    use crate::content::ContentCatalog;
    use crate::services::{MockStorefront, ServiceError, SubmissionResult};

    struct DownStorefront;

    #[async_trait(?Send)]
    impl Storefront for DownStorefront {
        async fn subscribe_email(&self, _: &str) -> Result<SubmissionResult, ServiceError> {
            Err(ServiceError::Subscription("down".to_string()))
        }

        async fn purchase_ebook(&self, _: &PurchaseOrder) -> Result<SubmissionResult, ServiceError> {
            Err(ServiceError::Checkout("down".to_string()))
        }
    }

    #[test]
    fn order_comes_from_the_catalog() {
        let order = order_for(&ContentCatalog::sammy_sparkle().ebook);
        assert_eq!(order.product, "TikTok 150K Playbook");
        assert_eq!(order.price, 29);
    }

    #[tokio::test(start_paused = true)]
    async fn purchase_reports_success_after_the_delay() {
        let order = order_for(&ContentCatalog::sammy_sparkle().ebook);
        let started = Instant::now();

        let outcome = purchase(&MockStorefront::default(), &order).await;

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert!(outcome.succeeded);
        assert_eq!(outcome.toast.title, "Purchase Successful! 🎉");
        assert!(outcome.toast.description.contains("Purchase successful!"));
        assert_eq!(outcome.toast.variant, ToastVariant::Default);
    }

    #[tokio::test]
    async fn failed_checkout_shows_the_failure_notice() {
        let order = order_for(&ContentCatalog::sammy_sparkle().ebook);
        let outcome = purchase(&DownStorefront, &order).await;
        assert!(!outcome.succeeded);
        assert_eq!(outcome.toast, ToastMessage::submission_failed());
    }

    #[tokio::test(start_paused = true)]
    async fn button_label_during_and_after_checkout() {
        let copy = ContentCatalog::sammy_sparkle().ebook;
        let state = std::rc::Rc::new(SubmissionState::action()).reduce(SubmissionAction::Begin);
        assert_eq!(state.label(&copy.cta_text, PROCESSING_LABEL), "Processing...");

        let outcome = purchase(&MockStorefront::default(), &order_for(&copy)).await;
        let state = state.reduce(outcome.action());
        assert_eq!(state.label(&copy.cta_text, PROCESSING_LABEL), "Get Your Copy ($29 AUD) →");
        assert!(state.can_submit());
    }
}
