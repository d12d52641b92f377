use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, String, Vec};

use crate::access;
use crate::errors::Error;
use crate::events;
use crate::fees;
use crate::rewards;
use crate::storage;
use crate::types::{Enrollment, Quiz, ENROLL_THRESHOLD, WATCH_THRESHOLD};

pub fn enroll(env: &Env, learner: &Address, course_id: u64, attached: i128) -> Result<(), Error> {
    access::require_not_paused(env)?;
    let config = storage::get_config(env)?;
    fees::collect_fee(env, &config, learner, attached)?;
    access::require_reputation(env, learner, ENROLL_THRESHOLD)?;

    let mut course = storage::get_course(env, course_id)?;
    access::require_approved(&course)?;

    if let Some(existing) = storage::get_enrollment(env, learner, course_id) {
        if existing.is_enrolled {
            return Err(Error::AlreadyEnrolled);
        }
    }

    storage::set_enrollment(env, learner, course_id, &Enrollment::open());
    course.total_enrolled += 1;
    storage::set_course(env, course_id, &course);

    events::emit_user_enrolled(env, course_id, learner.clone());
    Ok(())
}

/// Grades one submission. Free and available while paused.
pub fn attempt_quiz(
    env: &Env,
    learner: &Address,
    course_id: u64,
    answers: Vec<String>,
) -> Result<bool, Error> {
    access::require_reputation(env, learner, WATCH_THRESHOLD)?;

    let mut enrollment = match storage::get_enrollment(env, learner, course_id) {
        Some(e) if e.is_enrolled => e,
        _ => return Err(Error::NotEnrolled),
    };
    enrollment.consume_attempt()?;

    let quizzes = storage::get_quizzes(env, course_id);
    if answers.len() != quizzes.len() {
        return Err(Error::AnswerCountMismatch);
    }

    let passed = grade(env, &quizzes, &answers);
    if passed {
        rewards::credit_pass(env, course_id, &mut enrollment)?;
    }
    storage::set_enrollment(env, learner, course_id, &enrollment);

    events::emit_quiz_attempted(env, course_id, learner.clone(), passed, enrollment.attempts);
    Ok(passed)
}

/// Content digest an answer is graded against: sha256 over its XDR encoding.
pub fn answer_digest(env: &Env, answer: &String) -> BytesN<32> {
    env.crypto().sha256(&answer.clone().to_xdr(env)).into()
}

fn grade(env: &Env, quizzes: &Vec<Quiz>, answers: &Vec<String>) -> bool {
    for (quiz, answer) in quizzes.iter().zip(answers.iter()) {
        if answer_digest(env, &answer) != quiz.answer_digest {
            return false;
        }
    }
    true
}
