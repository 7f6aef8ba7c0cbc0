use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::*,
    pages::*,
    utils::{provide_session, LocalSessionStore},
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_session(Rc::new(LocalSessionStore));

    view! {
        <Stylesheet id="leptos" href="/pkg/shodh.css"/>

        // sets the document title
        <Title text="Shodh-a-Code"/>
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <Router>
                <Navbar/>
                <main class="grow">
                    <Routes>
                        <Route path="" view=Home/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
                <Footer/>
            </Router>
        </div>
    }
}
