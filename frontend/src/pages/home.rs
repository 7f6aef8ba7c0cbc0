use leptos::*;

use crate::{components::*, utils::*};

#[component]
pub fn Home() -> impl IntoView {
    let feed = create_contest_feed(HttpContestSource);

    view! {
        <section class="max-w-7xl mx-auto px-4 py-20">
            <div class="text-center mb-16">
                <h2 class="text-5xl font-bold mb-4 bg-gradient-to-r from-purple-400 via-pink-400 to-cyan-400 bg-clip-text text-transparent">
                    "Competitive Programming Reimagined"
                </h2>
                <p class="text-xl text-slate-400 max-w-2xl mx-auto">
                    "Join coding contests, solve challenging problems, and compete with developers worldwide. Powered by AI mentorship."
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || feed.with_view(|state| contest_grid(feed, state))}
            </div>
        </section>
    }
}

fn contest_grid(feed: ContestFeed, state: FeedView<'_>) -> View {
    match state {
        FeedView::Spinner => view! {
            <div class="col-span-full text-center py-12">
                <div class="inline-block animate-spin rounded-full h-12 w-12 border-b-2 border-purple-500"></div>
            </div>
        }
        .into_view(),
        FeedView::Failure(msg) => {
            let msg = msg.to_owned();
            view! {
                <div class="col-span-full text-center py-12">
                    <p class="text-red-400 mb-4">{msg}</p>
                    <Button on:click=move |_| feed.reload()>Retry</Button>
                </div>
            }
            .into_view()
        }
        FeedView::Empty => view! {
            <div class="col-span-full text-center py-12 text-slate-400">
                "No contests available"
            </div>
        }
        .into_view(),
        FeedView::Grid(contests) => contests
            .iter()
            .cloned()
            .map(|contest| view! { <ContestCard contest/> })
            .collect_view(),
    }
}
