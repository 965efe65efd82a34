//! Get Started Page
//!
//! Intake form. Validates locally with the same rules the server applies,
//! then relays through the API. On success the validated record is stored
//! in [`IntakeContext`] for the brainstorm page.

use leptos::prelude::*;
use leptos_router::components::A;

use advisor_core::{IntakeDraft, IntakeField, ValidationErrors};

use crate::api;
use crate::app::IntakeContext;
use crate::components::IntakeInput;
use crate::layout::{Background, PageLayout};

#[component]
pub fn GetStartedPage() -> impl IntoView {
    let intake = expect_context::<IntakeContext>();

    let draft = RwSignal::new(IntakeDraft::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let record = match draft.with_untracked(IntakeDraft::validate) {
            Ok(record) => record,
            Err(e) => {
                errors.set(e);
                return;
            }
        };

        errors.set(ValidationErrors::default());
        set_submitting.set(true);

        let payload = draft.get_untracked();
        leptos::task::spawn_local(async move {
            match api::submit_intake(&payload).await {
                Ok(response) => {
                    if response.submitted && !response.delivered {
                        leptos::logging::warn!("intake accepted but relay delivery failed");
                    }
                    intake.0.set(Some(response.record));
                }
                Err(e) => {
                    // Same success state either way; keep the locally validated record
                    leptos::logging::error!("Error submitting form: {}", e);
                    intake.0.set(Some(record));
                }
            }
            set_submitting.set(false);
            set_submitted.set(true);
        });
    };

    view! {
        <PageLayout background=Background::Dark>
            <div class="get-started">
                <A href="/" attr:class="back-link">"← Back to home"</A>

                <div class="card">
                    <Show
                        when=move || submitted.get()
                        fallback=move || view! {
                            <div class="card-header">
                                <h1>
                                    <span class="text-gradient">"Get Started"</span>
                                    " with Your AI-Powered Startup Journey"
                                </h1>
                                <p>"Tell us about your startup, and we'll help you validate, optimize, and scale with AI-driven insights."</p>
                            </div>

                            <form class="intake-form" on:submit=on_submit novalidate=true>
                                <h2>"Personal Information"</h2>
                                <div class="grid">
                                    <IntakeInput field=IntakeField::Name label="Full Name" placeholder="John Doe" draft=draft errors=errors />
                                    <IntakeInput field=IntakeField::Email label="Email Address" placeholder="john@example.com" draft=draft errors=errors />
                                </div>

                                <h2>"Startup Information"</h2>
                                <div class="grid">
                                    <IntakeInput field=IntakeField::CompanyName label="Company/Startup Name" placeholder="Acme Inc." draft=draft errors=errors />
                                    <IntakeInput field=IntakeField::Industry label="Industry" placeholder="e.g. FinTech, Healthcare, E-commerce" draft=draft errors=errors />
                                </div>
                                <IntakeInput
                                    field=IntakeField::Description
                                    label="Startup Description"
                                    placeholder="Describe your startup idea, product, or service in a few sentences..."
                                    hint="Tell us what problem you're solving and how your solution works."
                                    multiline=true
                                    draft=draft
                                    errors=errors
                                />
                                <IntakeInput field=IntakeField::Stage label="Current Stage" placeholder="e.g. Idea, MVP, Pre-seed, Seed, Series A" draft=draft errors=errors />
                                <IntakeInput
                                    field=IntakeField::Challenges
                                    label="Current Challenges (Optional)"
                                    placeholder="What challenges are you facing with your startup?"
                                    hint="Share the main obstacles you're encountering in your startup journey."
                                    multiline=true
                                    draft=draft
                                    errors=errors
                                />

                                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Processing..." } else { "Submit and Get Started" }}
                                </button>
                            </form>
                        }
                    >
                        <div class="submitted">
                            <div class="check">"✓"</div>
                            <h2>"Thank You for Your Submission!"</h2>
                            <p>"We've received your startup details and will be analyzing them right away. You'll receive an email with your AI-powered insights shortly."</p>
                            <div class="cta">
                                <A href="/brainstorm" attr:class="btn btn-primary">"Start Brainstorming"</A>
                                <A href="/" attr:class="btn">"Return to Home"</A>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </PageLayout>
    }
}
