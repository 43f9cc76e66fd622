use crate::console::ui::ConsolePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConsolePage />
    }
}
