//! Pricing Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{BillingCycle, Plan, ANNUAL_BADGE, PLANS};
use crate::layout::{Background, PageLayout};

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <PageLayout background=Background::Dark>
            <PricingSection />
        </PageLayout>
    }
}

#[component]
pub fn PricingSection() -> impl IntoView {
    let (cycle, set_cycle) = signal(BillingCycle::default());

    view! {
        <section id="pricing" class="pricing">
            <h2>"Simple, " <span class="text-gradient">"Transparent Pricing"</span></h2>
            <p class="subtitle">"Choose the plan that works for your startup's stage and needs."</p>

            <div class="billing-toggle">
                <span class:active=move || !cycle.get().is_annual()>"Monthly"</span>
                <button
                    class="switch"
                    role="switch"
                    aria-checked=move || cycle.get().is_annual().to_string()
                    on:click=move |_| set_cycle.update(|c| *c = c.toggled())
                >
                    <span class="thumb"></span>
                </button>
                <span class:active=move || cycle.get().is_annual()>
                    "Annual " <span class="badge">{ANNUAL_BADGE}</span>
                </span>
            </div>

            <div class="plans">
                {PLANS.iter().map(|plan| view! { <PlanCard plan=plan cycle=cycle /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static Plan, cycle: ReadSignal<BillingCycle>) -> impl IntoView {
    let cta_class = if plan.featured { "btn btn-primary" } else { "btn" };

    view! {
        <div class="plan" class:featured=plan.featured>
            {plan.featured.then(|| view! { <span class="badge">"Most Popular"</span> })}
            <h3>{plan.name}</h3>
            <p class="plan-tagline">{plan.tagline}</p>
            <div class="price">
                "$" {move || plan.price(cycle.get())}
                <span>"/month"</span>
                {move || plan.billing_note(cycle.get()).map(|note| view! { <span class="note">{note}</span> })}
            </div>
            {move || {
                let saving = plan.annual_saving_percent();
                (cycle.get().is_annual() && saving > 0)
                    .then(|| view! { <span class="saving">"Save " {saving} "%"</span> })
            }}
            <A href="/get-started" attr:class=cta_class>{plan.cta}</A>
            <ul>
                {plan
                    .features
                    .iter()
                    .map(|(text, included)| view! {
                        <li class:included=*included>"✓ " {*text}</li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
