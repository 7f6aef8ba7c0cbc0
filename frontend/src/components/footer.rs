use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full mt-auto p-4 flex flex-col justify-center items-center border-t border-slate-800">
            <p class="text-slate-500 text-sm">
                "⚡Power⚡ by " <span class="text-purple-400">"Shodh-a-Code"</span>
            </p>
        </footer>
    }
}
