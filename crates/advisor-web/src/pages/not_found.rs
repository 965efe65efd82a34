//! Not Found Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::PageLayout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageLayout>
            <div class="not-found">
                <h1>"404"</h1>
                <p>"Oops! Page not found"</p>
                <A href="/" attr:class="btn">"Return to Home"</A>
            </div>
        </PageLayout>
    }
}
