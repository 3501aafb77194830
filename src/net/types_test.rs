use super::*;
use crate::net::contract::decode_result;

// =============================================================
// Decoding contract results
// =============================================================

#[test]
fn question_decodes_from_contract_json() {
    let json = serde_json::json!({
        "question_id": "q-1",
        "title": "How do I stake?",
        "content": "Looking for a walkthrough.",
        "total_vote": 3,
        "total_answer": 1,
        "created_time": 1_650_000_000_000_000_000_i64,
        "creator_id": "alice.testnet"
    });
    let q: Question = decode_result("get_question_detail", Some(&json.to_string())).unwrap();
    assert_eq!(q.question_id, "q-1");
    assert_eq!(q.total_vote, 3);
    assert_eq!(q.created_time, 1_650_000_000_000_000_000);
    assert_eq!(q.creator_id, "alice.testnet");
}

#[test]
fn answer_list_decodes_in_order() {
    let json = serde_json::json!([
        {
            "answer_id": "a-1", "question_id": "q-1", "content": "first",
            "total_vote": 0, "total_amount_donate": 5, "created_time": 10, "creator_id": "bob.testnet"
        },
        {
            "answer_id": "a-2", "question_id": "q-1", "content": "second",
            "total_vote": -1, "total_amount_donate": 0, "created_time": 20, "creator_id": "carol.testnet"
        }
    ]);
    let answers: Vec<Answer> = decode_result("get_list_answer_for_question", Some(&json.to_string())).unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].answer_id, "a-1");
    assert_eq!(answers[1].total_vote, -1);
}

#[test]
fn question_missing_field_is_rejected() {
    let json = serde_json::json!({ "question_id": "q-1", "title": "t" });
    assert!(decode_result::<Question>("get_question_detail", Some(&json.to_string())).is_err());
}

#[test]
fn donate_info_decodes() {
    let json = serde_json::json!({
        "donate_info_id": "d-1", "answer_id": "a-1", "donate_creator_id": "dave.testnet",
        "created_time": 7, "amount": 2
    });
    let d: DonateInfo = decode_result("get_donate_history", Some(&json.to_string())).unwrap();
    assert_eq!(d.amount, 2);
    assert_eq!(d.donate_creator_id, "dave.testnet");
}

// =============================================================
// Create payload validation
// =============================================================

#[test]
fn question_dto_trims_fields() {
    let dto = QuestionCreateDto::new("  Title  ", "\nBody\n").unwrap();
    assert_eq!(dto.title, "Title");
    assert_eq!(dto.content, "Body");
}

#[test]
fn question_dto_rejects_blank_title_before_content() {
    assert_eq!(QuestionCreateDto::new("   ", ""), Err(ValidationError::EmptyTitle));
    assert_eq!(QuestionCreateDto::new("t", "  "), Err(ValidationError::EmptyContent));
}

#[test]
fn question_dto_serializes_as_contract_argument() {
    let dto = QuestionCreateDto::new("t", "c").unwrap();
    assert_eq!(serde_json::to_value(&dto).unwrap(), serde_json::json!({ "title": "t", "content": "c" }));
}

#[test]
fn answer_dto_keeps_question_id() {
    let dto = AnswerCreateDto::new("q-9", " yes ").unwrap();
    assert_eq!(dto.question_id, "q-9");
    assert_eq!(dto.content, "yes");
    assert_eq!(AnswerCreateDto::new("q-9", ""), Err(ValidationError::EmptyContent));
}

#[test]
fn donation_accepts_positive_integer() {
    let dto = DonationCreateDto::parse("a-1", " 25 ").unwrap();
    assert_eq!(dto.amount, 25);
    assert_eq!(dto.answer_id, "a-1");
}

#[test]
fn donation_accepts_largest_js_safe_integer() {
    let dto = DonationCreateDto::parse("a-1", "9007199254740991").unwrap();
    assert_eq!(dto.amount, MAX_DONATION_AMOUNT);
}

#[test]
fn donation_rejects_amounts_beyond_js_safe_range() {
    for raw in ["9007199254740992", "9223372036854775807", "99999999999999999999"] {
        assert!(
            matches!(DonationCreateDto::parse("a-1", raw), Err(ValidationError::InvalidAmount(_))),
            "expected rejection for {raw:?}"
        );
    }
}

#[test]
fn donation_rejects_zero_negative_and_garbage() {
    for raw in ["0", "-3", "abc", "", "1.5"] {
        assert!(
            matches!(DonationCreateDto::parse("a-1", raw), Err(ValidationError::InvalidAmount(_))),
            "expected rejection for {raw:?}"
        );
    }
}
