//! One answer on the detail page, with donation form and history.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::net::types::{Answer, DonationCreateDto};
use crate::util::format::{count_label, format_timestamp};

/// Answer body and metadata.
///
/// Signed-in users get a donate form; `on_changed` fires after a donation
/// lands so the parent can reload totals.
#[component]
pub fn AnswerCard(answer: Answer, signed_in: bool, on_changed: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let show_history = RwSignal::new(false);
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let answer_id = answer.answer_id.clone();
    let history_answer_id = answer.answer_id.clone();
    let votes = count_label(i64::from(answer.total_vote), "vote", "votes");
    let donated = format!("{} donated", answer.total_amount_donate);
    let meta = format!("answered by {} on {}", answer.creator_id, format_timestamp(answer.created_time));

    let donate = Callback::new(move |()| {
        let donation = match DonationCreateDto::parse(&answer_id, &amount.get()) {
            Ok(donation) => donation,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        pending.set(true);
        let contract = ctx.contract.clone();
        leptos::task::spawn_local(async move {
            match contract.donate(donation).await {
                Ok(_) => {
                    amount.set(String::new());
                    on_changed.run(());
                }
                Err(e) => {
                    log::error!("{e}");
                    error.set(Some(e.to_string()));
                }
            }
            pending.set(false);
        });
    });

    view! {
        <li class="answer-card">
            <p class="answer-card__content">{answer.content}</p>
            <div class="answer-card__meta">
                <span>{votes}</span>
                <span>{donated}</span>
                <span>{meta}</span>
            </div>

            <Show when=move || signed_in>
                <div class="answer-card__donate">
                    <input
                        class="answer-card__amount"
                        type="number"
                        min="1"
                        placeholder="Amount"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=move |_| donate.run(()) disabled=move || pending.get()>
                        "Donate"
                    </button>
                </div>
            </Show>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <button class="btn btn--link" on:click=move |_| show_history.update(|v| *v = !*v)>
                {move || if show_history.get() { "Hide donations" } else { "Show donations" }}
            </button>
            <Show when=move || show_history.get()>
                <DonationHistory answer_id=history_answer_id.clone()/>
            </Show>
        </li>
    }
}

/// Donations for one answer, loaded when first shown.
#[component]
fn DonationHistory(answer_id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let history = LocalResource::new(move || {
        let contract = ctx.contract.clone();
        let answer_id = answer_id.clone();
        async move { contract.donate_history(&answer_id).await }
    });

    view! {
        <Suspense fallback=move || view! { <p class="answer-card__loading">"Loading donations..."</p> }>
            {move || {
                history
                    .get()
                    .map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="answer-card__empty">"No donations yet."</p> }.into_any()
                        }
                        Ok(list) => {
                            view! {
                                <ul class="answer-card__history">
                                    {list
                                        .into_iter()
                                        .map(|d| {
                                            let line = format!(
                                                "{} donated {} on {}",
                                                d.donate_creator_id,
                                                d.amount,
                                                format_timestamp(d.created_time),
                                            );
                                            view! { <li>{line}</li> }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        Err(e) => view! { <p class="form-error">{e.to_string()}</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}
