//! Home page listing questions, with an ask form for signed-in users.

use leptos::prelude::*;

use crate::components::question_card::QuestionCard;
use crate::context::AppContext;
use crate::net::types::QuestionCreateDto;
use crate::state::session::SessionState;

/// Home page. Loads the question list once per visit.
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session = expect_context::<SessionState>();
    let signed_in = session.signed_in;

    let contract = ctx.contract.clone();
    let questions = LocalResource::new(move || {
        let contract = contract.clone();
        async move { contract.list_questions().await }
    });

    let on_created = Callback::new(move |()| questions.refetch());

    view! {
        <section class="home-page">
            <Show when=move || signed_in>
                <AskQuestionForm on_created=on_created/>
            </Show>

            <Suspense fallback=move || view! { <p class="home-page__loading">"Loading questions..."</p> }>
                {move || {
                    questions
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="home-page__empty">"No questions yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="home-page__list">
                                        {list
                                            .into_iter()
                                            .map(|q| view! { <QuestionCard question=q/> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="form-error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

/// Title + body form calling `create_question`.
#[component]
fn AskQuestionForm(on_created: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let question = match QuestionCreateDto::new(&title.get(), &content.get()) {
            Ok(question) => question,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        pending.set(true);
        let contract = ctx.contract.clone();
        leptos::task::spawn_local(async move {
            match contract.create_question(question).await {
                Ok(_) => {
                    title.set(String::new());
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
        <div class="ask-form">
            <h2>"Ask a question"</h2>
            <input
                class="ask-form__title"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="ask-form__content"
                placeholder="Describe your question"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button class="btn btn--primary" on:click=move |_| submit.run(()) disabled=move || pending.get()>
                "Post question"
            </button>
        </div>
    }
}
