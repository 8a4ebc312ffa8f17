//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::PageConfig;
use crate::pages::home::HomePage;
use crate::state::board::MessageBoard;
use crate::state::form::MessageFormState;
use crate::state::lookup::LookupState;
use crate::util::timestamp::DISPLAY_LOCALE;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=DISPLAY_LOCALE>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page configuration and one state signal per flow.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(PageConfig::from_build_env());
    provide_context(RwSignal::new(MessageFormState::default()));
    provide_context(RwSignal::new(MessageBoard::default()));
    provide_context(RwSignal::new(LookupState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/message-board.css"/>
        <Title text="Registro de mensajes"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
