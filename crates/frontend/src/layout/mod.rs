pub mod global_context;

use leptos::prelude::*;

/// Single-column page shell (header, content, footer)
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"USCIS Timeline Calculator"</h1>
                <p class="app-subtitle">
                    "Estimate the processing timeline for your immigration form"
                </p>
            </header>

            <main class="app-main">{children()}</main>

            <footer class="app-footer">
                <p>
                    "Estimates are based on published USCIS processing times and are not legal advice."
                </p>
            </footer>
        </div>
    }
}
