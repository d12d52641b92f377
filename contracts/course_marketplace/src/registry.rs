use soroban_sdk::{Address, Env, String, Vec};

use crate::access;
use crate::errors::Error;
use crate::events;
use crate::fees;
use crate::storage;
use crate::types::{Course, Quiz, QuizDraft, POST_THRESHOLD};

pub fn create_course(
    env: &Env,
    creator: &Address,
    metadata_uri: String,
    quizzes: Vec<QuizDraft>,
    attached: i128,
) -> Result<u64, Error> {
    access::require_not_paused(env)?;
    let config = storage::get_config(env)?;
    fees::collect_fee(env, &config, creator, attached)?;
    access::require_reputation(env, creator, POST_THRESHOLD)?;

    let course_id = storage::get_course_count(env);
    storage::set_course(env, course_id, &Course::new(creator.clone(), metadata_uri));

    let mut stored = Vec::new(env);
    for draft in quizzes.iter() {
        stored.push_back(Quiz::from_draft(course_id, draft));
    }
    storage::set_quizzes(env, course_id, &stored);
    storage::set_course_count(env, course_id + 1);

    events::emit_course_created(env, course_id, creator.clone(), stored.len());
    for quiz_index in 0..stored.len() {
        events::emit_quiz_created(env, course_id, quiz_index);
    }
    Ok(course_id)
}

pub fn approve_course(env: &Env, course_id: u64) -> Result<(), Error> {
    let mut course = storage::get_course(env, course_id)?;
    course.approve()?;
    storage::set_course(env, course_id, &course);

    events::emit_course_approved(env, course_id);
    Ok(())
}
