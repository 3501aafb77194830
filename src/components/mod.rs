pub mod answer_card;
pub mod header;
pub mod question_card;
