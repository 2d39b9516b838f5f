use crate::shared::browser;
use crate::shared::date_utils;
use contracts::domain::FilingRequest;
use leptos::prelude::*;

/// Warning shown under the chart when the image fails to load
const CHART_LOAD_WARNING: &str = "Chart could not be loaded. Please try refreshing the page.";

#[component]
pub fn ResultsView(request: FilingRequest, on_new_estimate: Callback<()>) -> impl IntoView {
    // One banner is appended per failed load attempt
    let (chart_failures, set_chart_failures) = signal(0u32);

    let form_title = request
        .form()
        .map(|form| format!("{} - {}", form.code(), form.title()))
        .unwrap_or_else(|| request.form_number.clone());
    let filed_on = date_utils::format_long_date(&request.filing_date);
    let chart_url = format!("/charts/timeline_{}.png", request.form_number);

    let on_print = move |_| {
        if let Err(err) = browser::print_page() {
            log::warn!("print dialog unavailable: {}", err);
        }
    };

    view! {
        <div class="details-container results-details">
            <div class="details-header">
                <h3>"Estimated Processing Timeline"</h3>
            </div>

            <div class="results-summary">
                <div class="summary-row">
                    <span class="summary-label">"Form:"</span>
                    <span>{form_title}</span>
                </div>
                <div class="summary-row">
                    <span class="summary-label">"Category:"</span>
                    <span>{request.form_category.clone()}</span>
                </div>
                <div class="summary-row">
                    <span class="summary-label">"Location:"</span>
                    <span>{request.service_center.clone()}</span>
                </div>
                <div class="summary-row">
                    <span class="summary-label">"Filed on:"</span>
                    <span>{filed_on}</span>
                </div>
            </div>

            <div class="chart-container">
                <img
                    id="timeline-chart"
                    src=chart_url
                    alt="Processing timeline chart"
                    on:error=move |_| {
                        log::error!("timeline chart failed to load");
                        set_chart_failures.update(|count| *count += 1);
                    }
                />
                <For
                    each=move || 0..chart_failures.get()
                    key=|attempt| *attempt
                    children=move |_| view! {
                        <div class="alert alert-warning">{CHART_LOAD_WARNING}</div>
                    }
                />
            </div>

            <div class="details-actions">
                <button id="print-button" class="btn btn-primary" on:click=on_print>
                    "Print Results"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_new_estimate.run(())>
                    "New Estimate"
                </button>
            </div>
        </div>
    }
}
