//! Brainstorm Page

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_router::components::A;

use advisor_core::session::{accepts_access_key, MIN_ACCESS_KEY_CHARS};
use advisor_core::{AdvisorError, Message};

use crate::api;
use crate::app::IntakeContext;
use crate::components::{MessageBubble, TypingIndicator};
use crate::layout::{Background, PageLayout};

/// Take the server's log unless it is older than what is already shown.
/// The displayed conversation only ever grows.
fn adopt_server_log(shown: &mut Vec<Message>, server: Vec<Message>) {
    if server.len() >= shown.len() {
        *shown = server;
    }
}

#[component]
pub fn BrainstormPage() -> impl IntoView {
    let intake = expect_context::<IntakeContext>();

    let (session_id, set_session_id) = signal(None::<String>);
    // Server-confirmed log only
    let (messages, set_messages) = signal(Vec::<Message>::new());
    // Sent but not yet confirmed, drawn after the log
    let (pending, set_pending) = signal(None::<Message>);
    let (input, set_input) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (access_key, set_access_key) = signal(String::new());
    let (unlocked, set_unlocked) = signal(false);
    let (warning, set_warning) = signal(None::<String>);

    // Open a session for this view; closed again on cleanup
    let opened = Arc::new(Mutex::new(None::<String>));
    {
        let opened = Arc::clone(&opened);
        let context = intake.0.get_untracked();
        leptos::task::spawn_local(async move {
            match api::open_session(context.as_ref()).await {
                Ok(view) => {
                    if let Ok(mut slot) = opened.lock() {
                        *slot = Some(view.session_id.clone());
                    }
                    set_messages.set(view.messages);
                    set_session_id.set(Some(view.session_id));
                }
                Err(e) => {
                    leptos::logging::error!("Error opening session: {}", e);
                    set_warning.set(Some(AdvisorError::ProviderUnavailable(e).user_message()));
                }
            }
        });
    }
    on_cleanup(move || {
        let id = opened.lock().ok().and_then(|mut slot| slot.take());
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                let _ = api::close_session(&id).await;
            });
        }
    });

    let submit_key = move |_: leptos::ev::MouseEvent| {
        let key = access_key.get();
        if !accepts_access_key(&key) {
            set_warning.set(Some(AdvisorError::AccessKeyRejected(MIN_ACCESS_KEY_CHARS).user_message()));
            return;
        }
        let Some(id) = session_id.get() else {
            return;
        };

        leptos::task::spawn_local(async move {
            match api::submit_access_key(&id, &key).await {
                Ok(view) => {
                    set_unlocked.set(view.unlocked);
                    set_warning.set(None);
                }
                Err(e) => set_warning.set(Some(e)),
            }
        });
    };

    let send = move || {
        let msg = input.get();
        if msg.trim().is_empty() || loading.get() {
            return;
        }
        if !unlocked.get() {
            set_warning.set(Some(AdvisorError::AccessKeyRequired.user_message()));
            return;
        }
        let Some(id) = session_id.get() else {
            return;
        };

        set_pending.set(Some(Message::user(msg.clone())));
        set_input.set(String::new());
        set_warning.set(None);
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            match api::send_message(&id, &msg).await {
                Ok(response) => {
                    set_messages.update(|shown| adopt_server_log(shown, response.session.messages));
                }
                Err(e) => {
                    leptos::logging::error!("Error fetching AI response: {}", e);
                    set_warning.set(Some(e));
                    // The server may have recorded the exchange anyway
                    match api::get_session(&id).await {
                        Ok(view) => set_messages.update(|shown| adopt_server_log(shown, view.messages)),
                        Err(e) => leptos::logging::error!("Error refreshing session: {}", e),
                    }
                }
            }
            set_pending.set(None);
            set_loading.set(false);
        });
    };

    view! {
        <PageLayout background=Background::Dark>
            <div class="brainstorm">
                <A href="/get-started" attr:class="back-link">"← Back to Get Started"</A>

                <div class="card">
                    <h1><span class="text-gradient">"Startup Brainstorm Forum"</span></h1>
                    <p>"Collaborate with our AI assistant to brainstorm ideas, validate concepts, and develop strategies for your startup. The more details you provide, the more targeted our brainstorming session can be."</p>

                    <Show when=move || !unlocked.get()>
                        <div class="access-key">
                            <h3>"Enter your AI API Key"</h3>
                            <p class="hint">"For this demo, any text with more than 10 characters will work. In a production environment, you would need a valid API key."</p>
                            <div class="row">
                                <input
                                    type="password"
                                    placeholder="Enter your API key"
                                    prop:value=move || access_key.get()
                                    on:input=move |ev| set_access_key.set(event_target_value(&ev))
                                />
                                <button class="btn btn-primary" on:click=submit_key>"Submit"</button>
                            </div>
                        </div>
                    </Show>

                    {move || warning.get().map(|w| view! { <p class="warning">{w}</p> })}

                    <div class="messages">
                        <For
                            each=move || messages.get().into_iter().enumerate()
                            key=|(i, _)| *i
                            children=move |(_, msg)| view! { <MessageBubble message=msg /> }
                        />
                        {move || pending.get().map(|msg| view! { <MessageBubble message=msg /> })}
                        <Show when=move || loading.get()>
                            <TypingIndicator />
                        </Show>
                    </div>

                    <div class="input-area">
                        <textarea
                            placeholder="Type your message..."
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    send();
                                }
                            }
                        />
                        <button
                            on:click=move |_| send()
                            disabled=move || loading.get() || (!unlocked.get() && access_key.get().is_empty())
                        >
                            {move || if loading.get() { "..." } else { "Send" }}
                        </button>
                    </div>

                    <p class="footnote">
                        "Your conversation with the AI assistant will not be saved after you leave this page."
                    </p>
                </div>
            </div>
        </PageLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_log_extends_shown_log() {
        let mut shown = vec![Message::assistant("Welcome")];
        let server = vec![
            Message::assistant("Welcome"),
            Message::user("pricing"),
            Message::assistant("Try a paid pilot"),
        ];

        adopt_server_log(&mut shown, server.clone());
        assert_eq!(shown, server);
    }

    #[test]
    fn test_stale_server_log_never_shrinks_display() {
        let mut shown = vec![
            Message::assistant("Welcome"),
            Message::user("pricing"),
            Message::assistant("Try a paid pilot"),
        ];
        let before = shown.clone();

        adopt_server_log(&mut shown, vec![Message::assistant("Welcome")]);
        assert_eq!(shown, before);
    }
}
