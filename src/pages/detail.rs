//! Question detail page: the question, its answers and an answer form.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::answer_card::AnswerCard;
use crate::context::AppContext;
use crate::net::types::AnswerCreateDto;
use crate::routes::{AppRoute, QUESTION_ID_PARAM, question_id_from_query};
use crate::state::session::SessionState;
use crate::util::format::{count_label, format_timestamp};

/// Detail page. The question id comes from `?id=`.
#[component]
pub fn DetailQuestionPage() -> impl IntoView {
    let query = use_query_map();
    let question_id = move || question_id_from_query(query.read().get(QUESTION_ID_PARAM));

    view! {
        <section class="detail-page">
            {move || match question_id() {
                Some(id) => view! { <QuestionDetail question_id=id/> }.into_any(),
                None => {
                    view! {
                        <div class="detail-page__empty">
                            <p>"No question selected."</p>
                            <a href=AppRoute::Home.path()>"Back to questions"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn QuestionDetail(question_id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let signed_in = expect_context::<SessionState>().signed_in;

    let contract = ctx.contract.clone();
    let qid = question_id.clone();
    let question = LocalResource::new(move || {
        let contract = contract.clone();
        let qid = qid.clone();
        async move { contract.question_detail(&qid).await }
    });

    let contract = ctx.contract.clone();
    let qid = question_id.clone();
    let answers = LocalResource::new(move || {
        let contract = contract.clone();
        let qid = qid.clone();
        async move { contract.answers_for_question(&qid).await }
    });

    let reload = Callback::new(move |()| {
        question.refetch();
        answers.refetch();
    });

    view! {
        <Suspense fallback=move || view! { <p class="detail-page__loading">"Loading question..."</p> }>
            {move || {
                question
                    .get()
                    .map(|result| match result {
                        Ok(Some(q)) => {
                            let votes = count_label(i64::from(q.total_vote), "vote", "votes");
                            let answer_count = count_label(i64::from(q.total_answer), "answer", "answers");
                            let meta = format!("asked by {} on {}", q.creator_id, format_timestamp(q.created_time));
                            view! {
                                <article class="detail-page__question">
                                    <h1>{q.title}</h1>
                                    <p class="detail-page__content">{q.content}</p>
                                    <div class="detail-page__meta">
                                        <span>{votes}</span>
                                        <span>{answer_count}</span>
                                        <span>{meta}</span>
                                    </div>
                                </article>
                            }
                                .into_any()
                        }
                        Ok(None) => view! { <p class="detail-page__missing">"Question not found."</p> }.into_any(),
                        Err(e) => view! { <p class="form-error">{e.to_string()}</p> }.into_any(),
                    })
            }}
        </Suspense>

        <Show when=move || signed_in>
            <AnswerForm question_id=question_id.clone() on_created=reload/>
        </Show>

        <Suspense fallback=move || view! { <p class="detail-page__loading">"Loading answers..."</p> }>
            {move || {
                answers
                    .get()
                    .map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="detail-page__empty-answers">"No answers yet."</p> }.into_any()
                        }
                        Ok(list) => {
                            view! {
                                <ul class="detail-page__answers">
                                    {list
                                        .into_iter()
                                        .map(|a| view! { <AnswerCard answer=a signed_in on_changed=reload/> })
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

/// Answer composer calling `create_answer`.
#[component]
fn AnswerForm(question_id: String, on_created: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let answer = match AnswerCreateDto::new(&question_id, &content.get()) {
            Ok(answer) => answer,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        pending.set(true);
        let contract = ctx.contract.clone();
        leptos::task::spawn_local(async move {
            match contract.create_answer(answer).await {
                Ok(_) => {
                    content.set(String::new());
                    on_created.run(());
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
        <div class="answer-form">
            <textarea
                class="answer-form__content"
                placeholder="Write an answer"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button class="btn btn--primary" on:click=move |_| submit.run(()) disabled=move || pending.get()>
                "Post answer"
            </button>
        </div>
    }
}
