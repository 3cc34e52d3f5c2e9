use leptos::*;

use crate::state::auth::use_auth;
use crate::utils::navigation;

/// Landing route. Nothing lives here; visitors are forwarded to the
/// dashboard and the guard takes over from there.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();

    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if state.is_authenticated {
            "/dashboard"
        } else {
            "/login"
        };
        navigation::redirect_to(target);
    });

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center">
            <div class="text-center space-y-3">
                <i class="fas fa-people-group text-action-primary-bg text-5xl"></i>
                <h1 class="text-2xl font-bold text-fg">"HRM"</h1>
                <p class="text-sm text-fg-muted">"Redirecting..."</p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn home_renders_the_splash_while_forwarding() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <HomePage /> }
        });
        assert!(html.contains("Redirecting..."));
    }
}
