//! Message count, empty placeholder and the card list.

use leptos::prelude::*;

use crate::components::message_card::MessageCard;
use crate::config::PageConfig;
use crate::state::board::{CardView, MessageBoard, count_label};

#[component]
pub fn MessageList() -> impl IntoView {
    let board = expect_context::<RwSignal<MessageBoard>>();
    let mode = expect_context::<PageConfig>().render_mode;

    view! {
        <section class="panel messages">
            <header class="messages__header">
                <h2>"Mensajes"</h2>
                <span id="messageCount" class="messages__count">
                    {move || board.with(|b| count_label(b.count()))}
                </span>
            </header>
            <div id="messagesContainer" class="messages__list">
                <div
                    id="emptyState"
                    class="empty-state"
                    class:hidden=move || !board.with(MessageBoard::empty_state_visible)
                >
                    <p>"Todavía no hay mensajes. ¡Escribe el primero!"</p>
                </div>
                <For
                    each=move || board.with(|b| b.messages().iter().map(CardView::from_message).collect::<Vec<_>>())
                    key=|card| card.id
                    children=move |card| view! { <MessageCard card=card mode=mode/> }
                />
            </div>
        </section>
    }
}
