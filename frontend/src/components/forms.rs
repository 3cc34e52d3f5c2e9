use leptos::*;

const FIELD_CLASS: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg shadow-sm focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50 disabled:bg-state-disabled-bg";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-medium text-fg-muted">
                {label.clone()}
                {required.then(|| view! { <span class="text-status-error-text ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                class=FIELD_CLASS
                placeholder=placeholder
                required=required
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    options: Vec<(String, String)>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-medium text-fg-muted">{label}</label>
            <select
                class=FIELD_CLASS
                disabled=disabled
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let this_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == this_value
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
) -> impl IntoView {
    let rows = if rows == 0 { 3 } else { rows };
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-medium text-fg-muted">{label}</label>
            <textarea
                class=FIELD_CLASS
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            >
                {move || value.get_untracked()}
            </textarea>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_required_marker() {
        let html = render_to_string(move || {
            let value = create_rw_signal(String::new());
            view! {
                <TextField label="Email" value=value input_type="email" required=true />
            }
        });
        assert!(html.contains("Email"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("*"));
    }

    #[test]
    fn select_field_marks_the_current_value() {
        let html = render_to_string(move || {
            let value = create_rw_signal("hr".to_string());
            view! {
                <SelectField
                    label="Role"
                    value=value
                    options=vec![
                        ("admin".to_string(), "Admin".to_string()),
                        ("hr".to_string(), "HR".to_string()),
                        ("employee".to_string(), "Employee".to_string()),
                    ]
                />
            }
        });
        assert!(html.contains("Role"));
        assert!(html.contains("selected"));
        assert!(html.contains("HR"));
    }

    #[test]
    fn text_area_renders_rows_and_placeholder() {
        let html = render_to_string(move || {
            let value = create_rw_signal(String::new());
            view! {
                <TextAreaField label="Reason" value=value placeholder="Optional note" rows=4 />
            }
        });
        assert!(html.contains("Reason"));
        assert!(html.contains("Optional note"));
        assert!(html.contains("rows=\"4\""));
    }
}
