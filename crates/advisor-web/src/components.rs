//! UI Components

use leptos::prelude::*;

use advisor_core::{IntakeDraft, IntakeField, Message, ValidationErrors};

/// Message bubble component
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = format!("message message-{}", message.role);
    let time = message.timestamp.format("%H:%M").to_string();

    view! {
        <div class=class>
            <p class="content">{message.content}</p>
            <span class="time">{time}</span>
        </div>
    }
}

/// Three pulsing dots while a reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message message-assistant loading">
            <span class="dot"></span>
            <span class="dot"></span>
            <span class="dot"></span>
        </div>
    }
}

/// Labelled input bound to one intake field, with its inline error
#[component]
pub fn IntakeInput(
    field: IntakeField,
    label: &'static str,
    placeholder: &'static str,
    draft: RwSignal<IntakeDraft>,
    errors: RwSignal<ValidationErrors>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    let value = move || draft.with(|d| d.field(field).to_string());
    let on_input = move |ev: leptos::ev::Event| draft.update(|d| d.set(field, event_target_value(&ev)));
    let error = move || errors.with(|e| e.get(field).map(str::to_string));

    let input = if multiline {
        view! { <textarea placeholder=placeholder prop:value=value on:input=on_input /> }.into_any()
    } else {
        view! { <input type="text" placeholder=placeholder prop:value=value on:input=on_input /> }
            .into_any()
    };

    view! {
        <div class="field" class:invalid=move || error().is_some()>
            <label>{label}</label>
            {input}
            {hint.map(|h| view! { <p class="hint">{h}</p> })}
            {move || error().map(|e| view! { <p class="error">{e}</p> })}
        </div>
    }
}
