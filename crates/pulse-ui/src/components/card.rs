use leptos::prelude::*;

/// Bordered, padded container used as the base of every panel.
#[component]
pub fn Card(
    /// Extra classes appended after `card`
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let cardClass = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };

    view! { <div class=cardClass>{children()}</div> }
}
