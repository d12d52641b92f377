use soroban_sdk::{Address, Env};

use crate::access;
use crate::errors::Error;
use crate::events;
use crate::fees;
use crate::storage;
use crate::types::Enrollment;

/// Credits a passing enrollment and its course. Only the first pass of an
/// enrollment moves any balance; the caller persists `enrollment`.
pub fn credit_pass(env: &Env, course_id: u64, enrollment: &mut Enrollment) -> Result<(), Error> {
    if !enrollment.record_pass() {
        return Ok(());
    }
    let config = storage::get_config(env)?;
    let mut course = storage::get_course(env, course_id)?;

    enrollment.quiz_balance += config.student_reward;
    course.passed_students += 1;
    course.creator_balance += config.creator_reward;
    storage::set_course(env, course_id, &course);
    Ok(())
}

pub fn claim_student_reward(
    env: &Env,
    learner: &Address,
    course_id: u64,
    attached: i128,
) -> Result<i128, Error> {
    access::require_not_paused(env)?;
    let config = storage::get_config(env)?;
    fees::collect_fee(env, &config, learner, attached)?;

    let mut enrollment = storage::get_enrollment(env, learner, course_id)
        .ok_or(Error::NoRewardAvailable)?;
    let amount = enrollment.quiz_balance;
    if amount <= 0 {
        return Err(Error::NoRewardAvailable);
    }

    // zero the balance before value leaves the contract
    enrollment.quiz_balance = 0;
    storage::set_enrollment(env, learner, course_id, &enrollment);
    fees::pay_reward(env, &config, learner, amount)?;

    events::emit_reward_claimed(env, course_id, learner.clone(), amount);
    Ok(amount)
}

pub fn claim_creator_reward(
    env: &Env,
    creator: &Address,
    course_id: u64,
    attached: i128,
) -> Result<i128, Error> {
    access::require_not_paused(env)?;
    let config = storage::get_config(env)?;
    fees::collect_fee(env, &config, creator, attached)?;

    let mut course = storage::get_course(env, course_id)?;
    if course.creator != *creator {
        return Err(Error::OnlyCreator);
    }
    let amount = course.creator_balance;
    if amount <= 0 {
        return Err(Error::NoRewardAvailable);
    }

    course.creator_balance = 0;
    storage::set_course(env, course_id, &course);
    fees::pay_reward(env, &config, creator, amount)?;

    events::emit_creator_reward_claimed(env, course_id, creator.clone(), amount);
    events::emit_creator_withdrawal(env, course_id, creator.clone(), amount);
    Ok(amount)
}
