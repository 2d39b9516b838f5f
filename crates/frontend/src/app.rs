use crate::domain::calculator::ui::{CalculatorForm, ResultsView};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    view! {
        <Shell>
            {move || match ctx.submission.get() {
                Some(request) => view! {
                    <ResultsView
                        request=request
                        on_new_estimate=Callback::new(move |_| ctx.back_to_calculator())
                    />
                }
                .into_any(),
                None => view! {
                    <CalculatorForm on_submitted=Callback::new(move |request| {
                        ctx.open_results(request)
                    }) />
                }
                .into_any(),
            }}
        </Shell>
    }
}
