//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{CTA_BENEFITS, FEATURES, STEPS, TESTIMONIALS};
use crate::layout::{Background, PageLayout};
use crate::pages::pricing::PricingSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageLayout background=Background::Dark>
            <Hero />
            <FeaturesSection />
            <HowItWorksSection />
            <TestimonialsSection />
            <PricingSection />
            <CallToAction />
        </PageLayout>
    }
}

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <PageLayout background=Background::Dark>
            <FeaturesSection />
        </PageLayout>
    }
}

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <PageLayout background=Background::Dark>
            <HowItWorksSection />
        </PageLayout>
    }
}

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    view! {
        <PageLayout background=Background::Dark>
            <TestimonialsSection />
        </PageLayout>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <p class="eyebrow">"Validate. Optimize. Scale."</p>
            <h1>"Your Startup, " <span class="text-gradient">"Backed by AI."</span></h1>
            <p class="tagline">
                "Get AI-driven insights, test your product, brainstorm business ideas, and build a solid startup foundation, all in one platform."
            </p>
            <div class="cta">
                <A href="/get-started" attr:class="btn btn-primary">"Get Started for Free"</A>
                <a href="#how-it-works" class="btn">"See How It Works"</a>
            </div>
        </header>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <h2>"Everything you need to " <span class="text-gradient">"launch smarter"</span></h2>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|f| view! {
                        <div class="feature">
                            <h3>{f.title}</h3>
                            <p>{f.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <h2>"How It Works"</h2>
            <ol class="steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| view! {
                        <li class="step">
                            <span class="step-number">{i + 1}</span>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <h2>"Trusted by " <span class="text-gradient">"Innovative Startups"</span></h2>
            <div class="testimonial-grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| view! {
                        <figure class="testimonial">
                            <blockquote>{t.quote}</blockquote>
                            <figcaption>
                                <strong>{t.name}</strong>
                                <span>{t.role}</span>
                            </figcaption>
                        </figure>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="call-to-action">
            <h2>"Ready to build your startup with AI?"</h2>
            <p>"Sign up now and take the first step toward data-driven startup success. No credit card required."</p>
            <ul class="benefits">
                {CTA_BENEFITS.iter().map(|b| view! { <li>"✓ " {*b}</li> }).collect_view()}
            </ul>
            <A href="/get-started" attr:class="btn btn-primary">"Get Started"</A>
        </section>
    }
}
