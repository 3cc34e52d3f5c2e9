use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Like `with_runtime`, but resources created inside never spawn their
/// fetchers; view models can be constructed without a live backend.
pub fn with_suppressed_resources<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

/// Renders a view to HTML with resource loading suppressed, so components
/// backed by `create_resource` can be asserted on without a server.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_suppressed_resources(|| view().into_view().render_to_string().to_string())
}
