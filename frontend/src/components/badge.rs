use leptos::*;
use tailwind_fuse::*;

use crate::contest::{ContestStatus, StatusTone};

pub fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Green => "bg-green-500/20 text-green-400",
        StatusTone::Blue => "bg-blue-500/20 text-blue-400",
        StatusTone::Neutral => "bg-slate-500/20 text-slate-400",
    }
}

#[component]
pub fn StatusBadge(status: ContestStatus) -> impl IntoView {
    let style = tone_class(status.tone());

    view! {
        <span class=tw_join!("px-3 py-1 rounded-full text-xs font-semibold", style)>
            {status.to_string()}
        </span>
    }
}
