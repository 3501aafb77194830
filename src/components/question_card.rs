//! Summary card for one question in the home listing.

use leptos::prelude::*;

use crate::net::types::Question;
use crate::routes::detail_href;
use crate::util::format::{count_label, excerpt, format_timestamp};

const EXCERPT_CHARS: usize = 180;

#[component]
pub fn QuestionCard(question: Question) -> impl IntoView {
    let href = detail_href(&question.question_id);
    let votes = count_label(i64::from(question.total_vote), "vote", "votes");
    let answers = count_label(i64::from(question.total_answer), "answer", "answers");
    let asked = format!("asked by {} on {}", question.creator_id, format_timestamp(question.created_time));

    view! {
        <li class="question-card">
            <div class="question-card__stats">
                <span>{votes}</span>
                <span>{answers}</span>
            </div>
            <div class="question-card__body">
                <a class="question-card__title" href=href>
                    {question.title}
                </a>
                <p class="question-card__excerpt">{excerpt(&question.content, EXCERPT_CHARS)}</p>
                <span class="question-card__meta">{asked}</span>
            </div>
        </li>
    }
}
