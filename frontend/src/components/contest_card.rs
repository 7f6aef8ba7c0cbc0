use leptos::*;
use leptos_icons::*;

use super::StatusBadge;
use crate::contest::ContestSummary;

#[component]
pub fn ContestCard(contest: ContestSummary) -> impl IntoView {
    let href = contest.href();
    let ContestSummary {
        title,
        description,
        status,
        total_problems,
        total_participants,
        ..
    } = contest;

    view! {
        <a href=href rel="external">
            <div class="bg-slate-800/50 border border-slate-700 rounded-lg p-6 hover:border-purple-500 hover:shadow-lg hover:shadow-purple-500/20 transition cursor-pointer group">
                <div class="flex items-start justify-between mb-4">
                    <h3 class="text-lg font-bold text-slate-50 group-hover:text-purple-400 transition">
                        {title}
                    </h3>
                    <StatusBadge status/>
                </div>
                <p class="text-slate-400 text-sm mb-4">{description}</p>
                <div class="flex gap-4 text-sm text-slate-400">
                    <span class="flex items-center gap-1">
                        <Icon icon=icondata::AiFileTextOutlined/>
                        {total_problems}
                        " Problems"
                    </span>
                    <span class="flex items-center gap-1">
                        <Icon icon=icondata::AiTeamOutlined/>
                        {total_participants}
                        " Participants"
                    </span>
                </div>
            </div>
        </a>
    }
}
