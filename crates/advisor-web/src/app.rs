//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use advisor_core::IntakeRecord;

use crate::pages::{
    BrainstormPage, FeaturesPage, GetStartedPage, HomePage, HowItWorksPage, NotFoundPage,
    PricingPage, TestimonialsPage,
};

/// Intake record handed from the get-started page to the brainstorm page.
/// In-memory only; a reload starts the brainstorm without context.
#[derive(Clone, Copy)]
pub struct IntakeContext(pub RwSignal<Option<IntakeRecord>>);

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(IntakeContext(RwSignal::new(None)));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/features") view=FeaturesPage />
                <Route path=path!("/how-it-works") view=HowItWorksPage />
                <Route path=path!("/testimonials") view=TestimonialsPage />
                <Route path=path!("/pricing") view=PricingPage />
                <Route path=path!("/get-started") view=GetStartedPage />
                <Route path=path!("/brainstorm") view=BrainstormPage />
            </Routes>
        </Router>
    }
}
