//! User lookup form, result banner and detail panel.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::lookup::LookupState;

#[component]
pub fn UserLookup() -> impl IntoView {
    let lookup = expect_context::<RwSignal<LookupState>>();
    let config = expect_context::<PageConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = lookup.try_update(LookupState::begin).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let url = config.data_url.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_user_directory(&url).await;
                lookup.update(|s| s.resolve(&id, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &config);
        }
    };

    view! {
        <section class="panel lookup">
            <h2>"Buscar usuario"</h2>
            <form
                id="usuario"
                class="form"
                aria-busy=move || if lookup.with(LookupState::is_searching) { "true" } else { "false" }
                on:submit=on_submit
            >
                <label class="form__field" for="documento">
                    <span class="form__label">"Documento"</span>
                    <input
                        id="documento"
                        type="text"
                        class="form__input"
                        prop:value=move || lookup.with(|s| s.input.clone())
                        on:input=move |ev| lookup.update(|s| s.input = event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn">"Buscar"</button>
                <Show when=move || lookup.with(LookupState::is_searching)>
                    <span class="lookup__status">"Buscando..."</span>
                </Show>
            </form>

            {move || {
                lookup
                    .with(|s| s.view().banner)
                    .map(|banner| {
                        view! {
                            <div
                                id="searchMessage"
                                class="search-message"
                                style:background-color=banner.tone.background()
                                style:color=banner.tone.color()
                            >
                                {banner.text}
                            </div>
                        }
                    })
            }}

            {move || {
                lookup
                    .with(|s| s.view().detail)
                    .map(|user| {
                        view! {
                            <dl id="userDataDisplay" class="user-data">
                                <dt>"Nombre"</dt>
                                <dd id="displayNombre">{user.first_name}</dd>
                                <dt>"Apellido"</dt>
                                <dd id="displayApellido">{user.last_name}</dd>
                                <dt>"Documento"</dt>
                                <dd id="displayDocumento">{user.id}</dd>
                                <dt>"Email"</dt>
                                <dd id="displayEmail">{user.email}</dd>
                            </dl>
                        }
                    })
            }}
        </section>
    }
}
