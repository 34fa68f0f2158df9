use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use crate::components::notification::{use_toast, ToastMessage};
use crate::components::submission::{Outcome, SubmissionAction, SubmissionState};
use crate::content::LeadMagnetCopy;
use crate::services::{use_storefront, Storefront};

pub const SENDING_LABEL: &str = "Sending...";
const SUBSCRIBED_TITLE: &str = "Success! 🎉";
const CHECKLIST_NOTE: &str = " Check your email for the free checklist!";

pub async fn subscribe(storefront: &dyn Storefront, email: &str) -> Outcome {
    let result = storefront.subscribe_email(email).await;
    Outcome::from_result(result, |result| {
        ToastMessage::success(SUBSCRIBED_TITLE, result.message + CHECKLIST_NOTE)
    })
}

#[derive(Properties, PartialEq)]
pub struct LeadMagnetProps {
    pub copy: LeadMagnetCopy,
}

#[function_component(LeadMagnet)]
pub fn lead_magnet(props: &LeadMagnetProps) -> Html {
    let copy = &props.copy;
    let state = use_reducer(SubmissionState::form);
    let toasts = use_toast();
    let storefront = use_storefront();
    let is_mounted = use_is_mounted();

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(SubmissionAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Empty email is a silent no-op
            if !state.can_submit() {
                return;
            }
            let email = state.input.clone();
            state.dispatch(SubmissionAction::Begin);

            let state = state.clone();
            let toasts = toasts.clone();
            let storefront = storefront.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let outcome = subscribe(&*storefront, &email).await;
                if !is_mounted() {
                    debug!("Lead magnet unmounted before subscription finished, dropping result");
                    return;
                }
                toasts.push(outcome.toast.clone());
                state.dispatch(outcome.action());
            });
        })
    };

    html! {
        <section id="freebie" class="section gradient-bg lead-section fade-in">
            <div class="lead-decor" aria-hidden="true">
                <span class="lead-decor-one">{"✨"}</span>
                <span class="lead-decor-two">{"💫"}</span>
                <span class="lead-decor-three">{"⭐"}</span>
                <span class="lead-decor-four">{"✨"}</span>
            </div>

            <div class="lead-inner">
                <div class="lead-card">
                    <span class="badge badge-yellow">{"⬇ "}{&copy.badge}</span>
                    <h2 class="display-font lead-title">{&copy.title}</h2>
                    <p class="lead-subtitle">{&copy.subtitle}</p>

                    <div class="lead-benefits">
                        { for copy.benefits.iter().map(|benefit| html! {
                            <div class="lead-benefit">
                                <div class="lead-benefit-icon">{&benefit.icon}</div>
                                <h3>{&benefit.title}</h3>
                                <p>{&benefit.text}</p>
                            </div>
                        }) }
                    </div>

                    <form class="lead-form" {onsubmit}>
                        <div class="lead-input-wrap">
                            <span class="lead-input-icon" aria-hidden="true">{"✉"}</span>
                            <input
                                type="email"
                                placeholder={copy.placeholder.clone()}
                                value={state.input.clone()}
                                {oninput}
                                required={true}
                                class="lead-input"
                            />
                        </div>
                        <button
                            type="submit"
                            class="btn-sparkle lead-submit"
                            disabled={!state.can_submit()}
                        >
                            {state.label(&copy.cta_text, SENDING_LABEL)}
                        </button>
                    </form>

                    <div class="lead-assurances">
                        { for copy.assurances.iter().map(|item| html! {
                            <div><span class="check">{"✓"}</span>{item}</div>
                        }) }
                    </div>

                    <p class="lead-community">{&copy.community_note}</p>
                </div>
            </div>

            <style>
                {r#"
                    .lead-section { position: relative; overflow: hidden; }
                    .lead-decor { position: absolute; inset: 0; opacity: 0.1; pointer-events: none; }
                    .lead-decor span { position: absolute; }
                    .lead-decor-one { top: 2.5rem; left: 2.5rem; font-size: 3.75rem; transform: rotate(12deg); }
                    .lead-decor-two { bottom: 2.5rem; right: 2.5rem; font-size: 6rem; transform: rotate(-12deg); }
                    .lead-decor-three { top: 50%; left: 25%; font-size: 2.25rem; transform: rotate(45deg); }
                    .lead-decor-four { top: 25%; right: 33%; font-size: 3rem; transform: rotate(-45deg); }
                    .lead-inner { max-width: 56rem; margin: 0 auto; position: relative; z-index: 2; }
                    .lead-card {
                        background: rgba(255, 255, 255, 0.95);
                        border-radius: 1rem;
                        padding: 2.5rem 2rem;
                        text-align: center;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
                    }
                    .badge-yellow { background: #fef9c3; color: #854d0e; border: 1px solid #fef08a; }
                    .lead-title {
                        font-size: clamp(1.9rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #1f2937;
                        margin: 1rem 0;
                    }
                    .lead-subtitle { font-size: 1.2rem; color: #4b5563; max-width: 42rem; margin: 0 auto; }
                    .lead-benefits {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                        gap: 1.5rem;
                        margin: 2rem 0;
                    }
                    .lead-benefit-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        margin: 0 auto 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        background: linear-gradient(135deg, #f472b6, #c084fc);
                    }
                    .lead-benefit h3 { font-weight: 600; color: #1f2937; margin-bottom: 0.5rem; }
                    .lead-benefit p { font-size: 0.875rem; color: #4b5563; }
                    .lead-form {
                        max-width: 28rem;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .lead-input-wrap { flex: 1; position: relative; min-width: 14rem; }
                    .lead-input-icon {
                        position: absolute;
                        left: 0.9rem;
                        top: 50%;
                        transform: translateY(-50%);
                        color: #9ca3af;
                    }
                    .lead-input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem 0.75rem 2.5rem;
                        border: 2px solid #e9d5ff;
                        border-radius: 9999px;
                        font-size: 1rem;
                    }
                    .lead-input:focus { outline: none; border-color: #c084fc; }
                    .lead-submit { padding: 0.75rem 2rem; }
                    .lead-assurances {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .lead-community { font-size: 0.75rem; color: #9ca3af; margin-top: 1rem; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::time::Instant;

    use super::*;
    use crate::components::notification::ToastVariant;
    use crate::content::ContentCatalog;
    use crate::services::{MockStorefront, PurchaseOrder, ServiceError, SubmissionResult};

    struct RejectingList;

    #[async_trait(?Send)]
    impl Storefront for RejectingList {
        async fn subscribe_email(&self, email: &str) -> Result<SubmissionResult, ServiceError> {
            Err(ServiceError::Subscription(format!("{email} bounced")))
        }

        async fn purchase_ebook(&self, _: &PurchaseOrder) -> Result<SubmissionResult, ServiceError> {
            Err(ServiceError::Checkout("not used".to_string()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn subscribing_jane_succeeds_and_clears_the_field() {
        let state = Rc::new(SubmissionState::form())
            .reduce(SubmissionAction::Input("jane@example.com".to_string()))
            .reduce(SubmissionAction::Begin);
        assert!(state.submitting);
        let started = Instant::now();

        let outcome = subscribe(&MockStorefront::default(), &state.input).await;
        let state = state.reduce(outcome.action());

        assert!(started.elapsed() >= Duration::from_secs(1));
        assert!(outcome.succeeded);
        assert_eq!(outcome.toast.title, "Success! 🎉");
        assert!(outcome.toast.description.contains("Successfully subscribed!"));
        assert_eq!(
            outcome.toast.description,
            "Successfully subscribed! Check your email for the free checklist!"
        );
        assert_eq!(state.input, "");
        assert!(!state.submitting);
    }

    #[test]
    fn empty_email_disables_the_form() {
        let state = SubmissionState::form();
        assert!(!state.can_submit());
    }

    #[test]
    fn submit_label_switches_while_sending() {
        let copy = ContentCatalog::sammy_sparkle().lead_magnet;
        let state = Rc::new(SubmissionState::form())
            .reduce(SubmissionAction::Input("a@b.co".to_string()));
        assert_eq!(state.label(&copy.cta_text, SENDING_LABEL), "Get the Free Checklist →");
        let state = state.reduce(SubmissionAction::Begin);
        assert_eq!(state.label(&copy.cta_text, SENDING_LABEL), "Sending...");
    }

    #[tokio::test]
    async fn rejected_subscription_keeps_the_email() {
        let state = Rc::new(SubmissionState::form())
            .reduce(SubmissionAction::Input("jane@example.com".to_string()))
            .reduce(SubmissionAction::Begin);

        let outcome = subscribe(&RejectingList, &state.input).await;
        let state = state.reduce(outcome.action());

        assert!(!outcome.succeeded);
        assert_eq!(outcome.toast, ToastMessage::submission_failed());
        assert_eq!(outcome.toast.variant, ToastVariant::Destructive);
        assert_eq!(state.input, "jane@example.com");
        assert!(!state.submitting);
        assert!(state.can_submit());
    }

    #[test]
    fn subscription_error_names_the_failure() {
        let error = ServiceError::Subscription("mailbox full".to_string());
        assert_eq!(error.to_string(), "email subscription failed: mailbox full");
    }
}
