use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<MarketplaceConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &MarketplaceConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_oracle(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Oracle)
        .ok_or(Error::NotInitialized)
}

pub fn set_oracle(env: &Env, oracle: &Address) {
    env.storage().instance().set(&DataKey::Oracle, oracle);
}

pub fn get_fees_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::FeesCollected)
        .unwrap_or(0)
}

pub fn set_fees_collected(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::FeesCollected, &amount);
}

pub fn get_reward_pool(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RewardPool)
        .unwrap_or(0)
}

pub fn set_reward_pool(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::RewardPool, &amount);
}

pub fn get_course_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CourseCount)
        .unwrap_or(0)
}

pub fn set_course_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::CourseCount, &count);
}

pub fn get_course(env: &Env, course_id: u64) -> Result<Course, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Course(course_id))
        .ok_or(Error::CourseNotFound)
}

pub fn set_course(env: &Env, course_id: u64, course: &Course) {
    env.storage()
        .persistent()
        .set(&DataKey::Course(course_id), course);
}

pub fn get_quizzes(env: &Env, course_id: u64) -> Vec<Quiz> {
    env.storage()
        .persistent()
        .get(&DataKey::Quizzes(course_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_quizzes(env: &Env, course_id: u64, quizzes: &Vec<Quiz>) {
    env.storage()
        .persistent()
        .set(&DataKey::Quizzes(course_id), quizzes);
}

pub fn get_enrollment(env: &Env, learner: &Address, course_id: u64) -> Option<Enrollment> {
    env.storage()
        .persistent()
        .get(&DataKey::Enrollment(learner.clone(), course_id))
}

pub fn set_enrollment(env: &Env, learner: &Address, course_id: u64, enrollment: &Enrollment) {
    env.storage()
        .persistent()
        .set(&DataKey::Enrollment(learner.clone(), course_id), enrollment);
}
