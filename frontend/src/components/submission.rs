use std::rc::Rc;

use yew::prelude::*;

use crate::components::notification::ToastMessage;
use crate::services::{ServiceError, SubmissionResult};

/// Local state of a section that submits something to the storefront.
///
/// Moves `Idle -> Submitting -> Idle`. Success and failure take the same
/// transition; success additionally clears the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub input: String,
    pub submitting: bool,
    requires_input: bool,
}

pub enum SubmissionAction {
    Input(String),
    Begin,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// State for a form that may only submit with a non-empty input.
    pub fn form() -> Self {
        Self {
            requires_input: true,
            ..Self::default()
        }
    }

    /// State for a bare action button.
    pub fn action() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !(self.requires_input && self.input.is_empty())
    }

    pub fn label<'a>(&self, idle: &'a str, busy: &'a str) -> &'a str {
        if self.submitting {
            busy
        } else {
            idle
        }
    }
}

impl Reducible for SubmissionState {
    type Action = SubmissionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SubmissionAction::Input(input) => Rc::new(Self {
                input,
                ..(*self).clone()
            }),
            SubmissionAction::Begin if self.can_submit() => Rc::new(Self {
                submitting: true,
                ..(*self).clone()
            }),
            SubmissionAction::Begin => self,
            SubmissionAction::Succeeded => Rc::new(Self {
                input: String::new(),
                submitting: false,
                ..(*self).clone()
            }),
            SubmissionAction::Failed => Rc::new(Self {
                submitting: false,
                ..(*self).clone()
            }),
        }
    }
}

/// How a finished storefront call should be reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub succeeded: bool,
    pub toast: ToastMessage,
}

impl Outcome {
    /// A call counts as successful only when it returned `success: true`;
    /// every other result collapses into the generic failure notice.
    pub fn from_result(
        result: Result<SubmissionResult, ServiceError>,
        on_success: impl FnOnce(SubmissionResult) -> ToastMessage,
    ) -> Self {
        match result {
            Ok(result) if result.success => Self {
                succeeded: true,
                toast: on_success(result),
            },
            Ok(result) => {
                log::warn!("Submission rejected: {}", result.message);
                Self::failed()
            }
            Err(e) => {
                log::warn!("Submission failed: {}", e);
                Self::failed()
            }
        }
    }

    fn failed() -> Self {
        Self {
            succeeded: false,
            toast: ToastMessage::submission_failed(),
        }
    }

    pub fn action(&self) -> SubmissionAction {
        if self.succeeded {
            SubmissionAction::Succeeded
        } else {
            SubmissionAction::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::ToastVariant;

    fn typed(state: Rc<SubmissionState>, text: &str) -> Rc<SubmissionState> {
        state.reduce(SubmissionAction::Input(text.to_string()))
    }

    #[test]
    fn empty_form_cannot_begin() {
        let state = Rc::new(SubmissionState::form());
        let after = state.clone().reduce(SubmissionAction::Begin);
        assert!(Rc::ptr_eq(&state, &after));
        assert!(!after.submitting);
    }

    #[test]
    fn form_round_trip_clears_input_on_success() {
        let state = typed(Rc::new(SubmissionState::form()), "jane@example.com");
        assert!(state.can_submit());

        let state = state.reduce(SubmissionAction::Begin);
        assert!(state.submitting);
        assert!(!state.can_submit());
        assert_eq!(state.input, "jane@example.com");

        let state = state.reduce(SubmissionAction::Succeeded);
        assert!(!state.submitting);
        assert_eq!(state.input, "");
    }

    #[test]
    fn failure_keeps_the_input() {
        let state = typed(Rc::new(SubmissionState::form()), "jane@example.com")
            .reduce(SubmissionAction::Begin)
            .reduce(SubmissionAction::Failed);
        assert!(!state.submitting);
        assert_eq!(state.input, "jane@example.com");
    }

    #[test]
    fn second_begin_while_submitting_is_ignored() {
        let state = Rc::new(SubmissionState::action()).reduce(SubmissionAction::Begin);
        let again = state.clone().reduce(SubmissionAction::Begin);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn action_button_needs_no_input() {
        let state = Rc::new(SubmissionState::action());
        assert!(state.can_submit());
        assert!(state.reduce(SubmissionAction::Begin).submitting);
    }

    #[test]
    fn label_follows_submitting_flag() {
        let idle = SubmissionState::action();
        assert_eq!(idle.label("Buy", "Processing..."), "Buy");
        let busy = Rc::new(idle).reduce(SubmissionAction::Begin);
        assert_eq!(busy.label("Buy", "Processing..."), "Processing...");
    }

    #[test]
    fn unsuccessful_result_is_a_failure() {
        let result = SubmissionResult {
            success: false,
            message: "declined".to_string(),
            transaction_id: None,
        };
        let outcome = Outcome::from_result(Ok(result), |_| unreachable!());
        assert!(!outcome.succeeded);
        assert_eq!(outcome.toast.variant, ToastVariant::Destructive);
        assert!(matches!(outcome.action(), SubmissionAction::Failed));
    }

    #[test]
    fn service_error_is_a_failure() {
        let outcome = Outcome::from_result(
            Err(ServiceError::Subscription("offline".to_string())),
            |_| unreachable!(),
        );
        assert_eq!(outcome.toast, ToastMessage::submission_failed());
    }
}
