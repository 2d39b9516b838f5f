use leptos::prelude::*;

/// Date input with native picker and label support.
/// Values are ISO `yyyy-mm-dd` strings; the browser displays them in the
/// user's locale.
#[component]
pub fn DateInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler (receives yyyy-mm-dd)
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                type="date"
                id=input_id
                class="form__input"
                prop:value=value
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
