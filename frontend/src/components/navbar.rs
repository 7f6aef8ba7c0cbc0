use leptos::*;
use leptos_router::*;

use super::{Button, ButtonVariant};
use crate::utils::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let logged_in = session.is_logged_in();

    view! {
        <header class="border-b border-slate-800 bg-slate-950/50 backdrop-blur">
            <div class="max-w-7xl mx-auto px-4 py-6 flex items-center justify-between">
                <A href="/" class="flex items-center gap-3">
                    <div class="w-10 h-10 bg-gradient-to-br from-purple-500 to-cyan-500 rounded-lg flex items-center justify-center">
                        <span class="text-white font-bold">S</span>
                    </div>
                    <h1 class="text-2xl font-bold bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                        "Shodh-a-Code"
                    </h1>
                </A>
                <nav class="flex gap-6 items-center">
                    <a
                        href="/contests"
                        rel="external"
                        class="text-slate-300 hover:text-purple-400 transition"
                    >
                        Contests
                    </a>
                    <Show
                        when=move || logged_in.get()
                        fallback=|| {
                            view! {
                                <a
                                    href="/auth/login"
                                    rel="external"
                                    class="px-4 py-2 text-slate-300 hover:text-purple-400 transition"
                                >
                                    Login
                                </a>
                                <a
                                    href="/auth/signup"
                                    rel="external"
                                    class="px-4 py-2 bg-purple-600 hover:bg-purple-700 text-white rounded-lg transition"
                                >
                                    "Sign Up"
                                </a>
                            }
                        }
                    >
                        <Button variant=ButtonVariant::Danger on:click=move |_| session.logout()>
                            Logout
                        </Button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
