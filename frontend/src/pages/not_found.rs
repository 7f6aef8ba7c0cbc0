use leptos::*;
use leptos_router::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
    // set an HTTP status code 404
    // this is feature gated because it can only be done during
    // initial server-side rendering
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_actix::ResponseOptions>();
        resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }

    view! {
        <section class="grow flex flex-col gap-6 items-center justify-center py-20">
            <h1 class="text-6xl font-bold text-slate-300">"Page not found"</h1>
            <A href="/" class="text-purple-400 hover:text-purple-300 transition">
                "Back to contests"
            </A>
        </section>
    }
}
