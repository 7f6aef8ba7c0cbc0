use leptos::*;
use tailwind_fuse::*;

#[derive(TwVariant)]
pub enum ButtonVariant {
    #[tw(default, class = "text-white bg-purple-600 hover:bg-purple-700")]
    Primary,
    #[tw(class = "text-white bg-red-600 hover:bg-red-700")]
    Danger,
}

#[component]
pub fn Button(
    #[prop(into, default = "button".to_owned())] type_: String,
    #[prop(into, optional)] variant: ButtonVariant,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into, default = "".into())] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=tw_join!(
                class, variant,
                "px-4 py-2 rounded-lg disabled:cursor-not-allowed disabled:brightness-50 transition",
            )

            type=type_
            disabled=disabled
        >

            {children()}
        </button>
    }
}
