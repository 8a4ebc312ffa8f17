//! A single posted message.

use leptos::prelude::*;

use crate::state::board::CardView;
use crate::util::markup::RenderMode;

/// Card body is injected as markup so the configured `RenderMode` decides
/// whether author/body text is escaped.
#[component]
pub fn MessageCard(card: CardView, mode: RenderMode) -> impl IntoView {
    let markup = card.markup(mode);
    view! { <div class="message-card" inner_html=markup></div> }
}
