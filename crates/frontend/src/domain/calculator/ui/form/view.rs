use super::view_model::{self, CalculatorViewModel};
use crate::shared::browser;
use crate::shared::components::ui::{DateInput, Select};
use contracts::domain::FilingRequest;
use leptos::prelude::*;

#[component]
pub fn CalculatorForm(on_submitted: Callback<FilingRequest>) -> impl IntoView {
    let vm = CalculatorViewModel::new();
    let form = vm.form;
    let errors = vm.errors;

    let errors_ref = NodeRef::<leptos::html::Div>::new();

    // Bring the error list into view once it has rendered
    Effect::new(move |_| {
        if !errors.get().is_empty() {
            if let Some(container) = errors_ref.get() {
                browser::scroll_into_view_smooth(&container);
            }
        }
    });

    // Dependent dropdowns stay disabled until a form type is chosen
    let dependents_disabled = Signal::derive(move || form.get().form_number.is_empty());
    let category_options =
        Signal::derive(move || view_model::category_options(&form.get().form_number));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // The page never navigates; the shell owns what follows an accepted
        // submission.
        ev.prevent_default();
        vm.submit_command(|request| on_submitted.run(request));
    };

    view! {
        <div class="details-container calculator-details">
            <div class="details-header">
                <h3>"Estimate Your Processing Time"</h3>
            </div>

            <Show when=move || !errors.get().is_empty()>
                <div id="error-container" class="error-container" node_ref=errors_ref>
                    <For
                        each=move || errors.get()
                        key=|message| message.clone()
                        children=move |message| view! { <div>{message}</div> }
                    />
                </div>
            </Show>

            <form id="calculator-form" on:submit=on_submit>
                <Select
                    label="Form Type"
                    id="form_number"
                    value=Signal::derive(move || form.get().form_number)
                    options=Signal::derive(view_model::form_options)
                    on_change=Callback::new(move |code| vm.select_form(code))
                    required=true
                />

                <Select
                    label="Form Category"
                    id="form_category"
                    value=Signal::derive(move || form.get().form_category)
                    options=category_options
                    on_change=Callback::new(move |category| {
                        form.update(|f| f.form_category = category)
                    })
                    disabled=dependents_disabled
                    required=true
                />

                <Select
                    label="Field Office or Service Center"
                    id="service_center"
                    value=Signal::derive(move || form.get().service_center)
                    options=Signal::derive(view_model::center_options)
                    on_change=Callback::new(move |center| {
                        form.update(|f| f.service_center = center)
                    })
                    disabled=dependents_disabled
                    required=true
                />

                <DateInput
                    label="Filing Date"
                    id="filing_date"
                    value=Signal::derive(move || form.get().filing_date)
                    on_change=Callback::new(move |date| {
                        form.update(|f| f.filing_date = date)
                    })
                    required=true
                />

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary">
                        "Calculate Timeline"
                    </button>
                </div>
            </form>
        </div>
    }
}
