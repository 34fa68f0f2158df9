use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    /// The single failure notice shown for any submission that did not go through.
    pub fn submission_failed() -> Self {
        Self {
            title: "Oops! Something went wrong".to_string(),
            description: "Please try again or contact support.".to_string(),
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: ToastMessage,
}

pub enum ToastAction {
    Push(ToastMessage),
    Dismiss(u64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    limit: usize,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            next_id: 1,
            limit,
            toasts: Vec::new(),
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(config::TOAST_LIMIT)
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(message) => {
                let mut next = (*self).clone();
                next.toasts.push(Toast {
                    id: next.next_id,
                    message,
                });
                next.next_id += 1;
                // Oldest toasts go first once the limit is hit
                let overflow = next.toasts.len().saturating_sub(next.limit);
                next.toasts.drain(..overflow);
                Rc::new(next)
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.toasts.retain(|t| t.id != id);
                Rc::new(next)
            }
        }
    }
}

/// Handle sections use to raise notifications.
#[derive(Clone)]
pub struct Toasts(Option<UseReducerHandle<ToastQueue>>);

impl Toasts {
    pub fn push(&self, message: ToastMessage) {
        match &self.0 {
            Some(queue) => queue.dispatch(ToastAction::Push(message)),
            None => log::warn!("Toast dropped, no ToastProvider mounted: {}", message.title),
        }
    }
}

#[hook]
pub fn use_toast() -> Toasts {
    Toasts(use_context::<UseReducerHandle<ToastQueue>>())
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let on_dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u64| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<UseReducerHandle<ToastQueue>> context={queue.clone()}>
            { for props.children.iter() }
            <Toaster toasts={queue.toasts().to_vec()} {on_dismiss} />
        </ContextProvider<UseReducerHandle<ToastQueue>>>
    }
}

#[derive(Properties, PartialEq)]
struct ToasterProps {
    toasts: Vec<Toast>,
    on_dismiss: Callback<u64>,
}

#[function_component(Toaster)]
fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <style>
                {r#"
                    .toast-viewport {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 100;
                        max-width: 360px;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: relative;
                        background: #ffffff;
                        border: 1px solid #e9d5ff;
                        border-radius: 14px;
                        padding: 1rem 2.5rem 1rem 1.25rem;
                        box-shadow: 0 12px 28px rgba(88, 28, 135, 0.15);
                        animation: toastIn 0.3s ease-out forwards;
                        font-family: "Poppins", -apple-system, BlinkMacSystemFont, sans-serif;
                    }
                    .toast.destructive {
                        background: #dc2626;
                        border-color: #dc2626;
                        color: #ffffff;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.9rem;
                        opacity: 0.9;
                    }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: inherit;
                        opacity: 0.6;
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || {
                    on_dismiss.emit(id);
                });
                // Dropping the handle cancels the timer if the toast goes away first
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let message = &props.toast.message;
    let class = classes!(
        "toast",
        (message.variant == ToastVariant::Destructive).then(|| "destructive")
    );

    html! {
        <div {class}>
            <div class="toast-title">{&message.title}</div>
            <div class="toast-description">{&message.description}</div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, title: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push(ToastMessage::success(title, "")))
    }

    #[test]
    fn pushed_toasts_get_increasing_ids() {
        let queue = Rc::new(ToastQueue::with_limit(5));
        let queue = push(push(queue, "first"), "second");
        let ids: Vec<u64> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let queue = push(push(Rc::new(ToastQueue::with_limit(5)), "a"), "b");
        let queue = queue.reduce(ToastAction::Dismiss(1));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message.title, "b");
    }

    #[test]
    fn dismissing_unknown_id_keeps_the_same_queue() {
        let queue = push(Rc::new(ToastQueue::with_limit(5)), "a");
        let after = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &after));
    }

    #[test]
    fn limit_drops_the_oldest() {
        let mut queue = Rc::new(ToastQueue::with_limit(2));
        for title in ["one", "two", "three"] {
            queue = push(queue, title);
        }
        let titles: Vec<&str> = queue.toasts().iter().map(|t| t.message.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
        assert_eq!(queue.toasts()[1].id, 3);
    }

    #[test]
    fn failure_notice_is_destructive() {
        let message = ToastMessage::submission_failed();
        assert_eq!(message.variant, ToastVariant::Destructive);
        assert_eq!(message.title, "Oops! Something went wrong");
        assert_eq!(message.description, "Please try again or contact support.");
    }
}
