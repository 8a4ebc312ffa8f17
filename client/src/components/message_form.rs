//! Message form with inline validation errors.

use leptos::prelude::*;

use crate::state::board::MessageBoard;
use crate::state::form::{Field, MessageFormState};
use crate::util::timestamp::now_local;

#[component]
pub fn MessageForm() -> impl IntoView {
    let form = expect_context::<RwSignal<MessageFormState>>();
    let board = expect_context::<RwSignal<MessageBoard>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            board.update(|b| {
                b.post(f, now_local());
            });
        });
    };

    view! {
        <section class="panel">
            <h2>"Nuevo mensaje"</h2>
            <form id="messageForm" class="form" novalidate=true on:submit=on_submit>
                <RequiredField form=form field=Field::Author input_id="userName" label="Nombre"/>
                <RequiredField form=form field=Field::Body input_id="userMessage" label="Mensaje"/>
                <button id="submitBtn" type="submit" class="btn btn--primary">
                    <span id="btnIcon" aria-hidden="true">"✉"</span>
                    <span id="btnText">"Enviar mensaje"</span>
                </button>
            </form>
        </section>
    }
}

/// Labeled input plus its error slot. Typing clears the field's error.
#[component]
fn RequiredField(
    form: RwSignal<MessageFormState>,
    field: Field,
    input_id: &'static str,
    label: &'static str,
) -> impl IntoView {
    let error_id = format!("{input_id}Error");
    let value = move || form.with(|f| f.field(field).value.clone());
    let invalid = move || form.with(|f| f.field(field).is_invalid());

    let control = match field {
        Field::Author => view! {
            <input
                id=input_id
                type="text"
                class="form__input"
                class:error=invalid
                prop:value=value
                on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
            />
        }
        .into_any(),
        Field::Body => view! {
            <textarea
                id=input_id
                rows="4"
                class="form__input"
                class:error=invalid
                prop:value=value
                on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <label class="form__field" for=input_id>
            <span class="form__label">{label}</span>
            {control}
            <span id=error_id class="form__error">
                {move || form.with(|f| f.view(field).error_text)}
            </span>
        </label>
    }
}
