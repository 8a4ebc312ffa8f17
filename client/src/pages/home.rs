//! The single page: message form, message list and user lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mount is the page-ready hook. It runs only in the browser, after
//! hydration, and reveals the empty placeholder as the initial condition.

use leptos::prelude::*;

use crate::components::message_form::MessageForm;
use crate::components::message_list::MessageList;
use crate::components::user_lookup::UserLookup;
use crate::state::board::MessageBoard;

#[component]
pub fn HomePage() -> impl IntoView {
    let board = expect_context::<RwSignal<MessageBoard>>();

    Effect::new(move || {
        leptos::logging::log!("DOM completamente cargado");
        leptos::logging::log!("Aplicación de registro de mensajes iniciada");
        board.update(MessageBoard::initialize);
    });

    view! {
        <main class="page">
            <header class="page__header">
                <h1>"Registro de mensajes"</h1>
            </header>
            <div class="page__grid">
                <MessageForm/>
                <MessageList/>
                <UserLookup/>
            </div>
        </main>
    }
}
