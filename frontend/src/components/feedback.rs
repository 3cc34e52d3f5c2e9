use leptos::*;

use crate::api::ApiError;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::SuccessMessage;

/// One success or one error at a time; setting either clears the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

#[component]
pub fn FeedbackBanner(#[prop(into)] message: Signal<MessageState>) -> impl IntoView {
    let error = Signal::derive(move || message.get().error);
    view! {
        {move || {
            message
                .get()
                .success
                .map(|text| view! { <SuccessMessage message=text /> })
        }}
        <InlineErrorMessage error=error />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_error_displace_each_other() {
        let mut message = MessageState::default();

        message.set_success("saved");
        assert_eq!(message.success.as_deref(), Some("saved"));
        assert!(message.error.is_none());

        message.set_error(ApiError::request_failed("boom"));
        assert!(message.success.is_none());
        assert_eq!(message.error.as_ref().unwrap().error, "boom");

        message.clear();
        assert_eq!(message, MessageState::default());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn banner_renders_whichever_side_is_set() {
        let html = render_to_string(move || {
            let mut state = MessageState::default();
            state.set_success("Employee saved");
            let message = create_rw_signal(state);
            view! { <FeedbackBanner message=message /> }
        });
        assert!(html.contains("Employee saved"));

        let html = render_to_string(move || {
            let mut state = MessageState::default();
            state.set_error(ApiError::request_failed("network error"));
            let message = create_rw_signal(state);
            view! { <FeedbackBanner message=message /> }
        });
        assert!(html.contains("network error"));
    }
}
