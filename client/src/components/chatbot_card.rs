//! Chat card backed by the keyword advisor.
//!
//! DESIGN
//! ======
//! The reply is computed immediately but, in the browser, shown after a short
//! pause with a "thinking" row so the exchange reads like a conversation.
//! Server renders and native builds append the reply at once.

use leptos::prelude::*;

use crate::util::advisor::AdvisorKind;

#[cfg(feature = "hydrate")]
const REPLY_DELAY_MS: u32 = 1_500;

#[derive(Clone, Debug, PartialEq, Eq)]
struct BotLine {
    id: usize,
    from_user: bool,
    text: String,
}

#[component]
pub fn ChatbotCard(kind: AdvisorKind, title: &'static str, placeholder: &'static str) -> impl IntoView {
    let lines = RwSignal::new(vec![BotLine { id: 0, from_user: false, text: kind.greeting().to_owned() }]);
    let input = RwSignal::new(String::new());
    let thinking = RwSignal::new(false);

    let push = move |from_user: bool, text: String| {
        lines.update(|all| {
            let id = all.len();
            all.push(BotLine { id, from_user, text });
        });
    };

    let submit = move || {
        let text = input.get_untracked().trim().to_owned();
        if text.is_empty() || thinking.get_untracked() {
            return;
        }
        let reply = kind.reply(&text);
        push(true, text);
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            thinking.set(true);
            gloo_timers::callback::Timeout::new(REPLY_DELAY_MS, move || {
                push(false, reply.to_owned());
                thinking.set(false);
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        push(false, reply.to_owned());
    };

    view! {
        <div class="chatbot-card">
            <h3 class="chatbot-card__title">{title}</h3>
            <div class="chatbot-card__messages">
                <For each=move || lines.get() key=|line| line.id let:line>
                    <div class="chatbot-card__line" class:chatbot-card__line--user=line.from_user>
                        {line.text}
                    </div>
                </For>
                <Show when=move || thinking.get()>
                    <div class="chatbot-card__line chatbot-card__line--thinking">"Thinking..."</div>
                </Show>
            </div>
            <form
                class="chatbot-card__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <input
                    class="chatbot-card__input"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || thinking.get()>
                    "Send"
                </button>
            </form>
        </div>
    }
}
