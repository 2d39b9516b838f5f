/// Thin wrappers over browser APIs used by the calculator views.
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

/// Opens the platform print dialog for the current page
pub fn print_page() -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;

    window
        .print()
        .map_err(|e| format!("Failed to open print dialog: {:?}", e))
}

/// Smooth-scrolls an element into the viewport
pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
