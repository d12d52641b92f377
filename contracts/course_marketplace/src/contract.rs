use soroban_sdk::{contract, contractimpl, contractmeta, Address, BytesN, Env, String, Vec};

use crate::access;
use crate::enrollment;
use crate::errors::Error;
use crate::events;
use crate::fees;
use crate::registry;
use crate::rewards;
use crate::storage;
use crate::types::{Course, Enrollment, MarketplaceConfig, Quiz, QuizDraft};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Reputation-gated course marketplace with quiz rewards"
);

#[contract]
pub struct CourseMarketplace;

#[contractimpl]
impl CourseMarketplace {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Initialise the marketplace. Fee and reward amounts are fixed from here on.
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        reputation_oracle: Address,
        flat_fee: i128,
        student_reward: i128,
        creator_reward: i128,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if flat_fee < 0 || student_reward < 0 || creator_reward < 0 {
            return Err(Error::InvalidConfig);
        }

        let config = MarketplaceConfig {
            payment_token,
            flat_fee,
            student_reward,
            creator_reward,
        };
        storage::set_config(&env, &config);
        storage::set_admin(&env, &admin);
        storage::set_oracle(&env, &reputation_oracle);
        storage::set_paused(&env, false);
        storage::set_fees_collected(&env, 0);
        storage::set_reward_pool(&env, 0);
        storage::set_course_count(&env, 0);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Course Registry
    // ------------------------------------------------------------------

    /// Publish a course with its quizzes. Returns the new course id.
    pub fn create_course(
        env: Env,
        creator: Address,
        metadata_uri: String,
        quizzes: Vec<QuizDraft>,
        attached: i128,
    ) -> Result<u64, Error> {
        access::require_initialized(&env)?;
        creator.require_auth();
        registry::create_course(&env, &creator, metadata_uri, quizzes, attached)
    }

    pub fn approve_course(env: Env, caller: Address, course_id: u64) -> Result<(), Error> {
        access::require_initialized(&env)?;
        access::require_admin(&env, &caller)?;
        registry::approve_course(&env, course_id)
    }

    // ------------------------------------------------------------------
    // Enrollment Ledger
    // ------------------------------------------------------------------

    pub fn enroll(env: Env, learner: Address, course_id: u64, attached: i128) -> Result<(), Error> {
        access::require_initialized(&env)?;
        learner.require_auth();
        enrollment::enroll(&env, &learner, course_id, attached)
    }

    /// Submit one answer per quiz, in quiz order. Returns whether every answer matched.
    pub fn attempt_quiz(
        env: Env,
        learner: Address,
        course_id: u64,
        answers: Vec<String>,
    ) -> Result<bool, Error> {
        access::require_initialized(&env)?;
        learner.require_auth();
        enrollment::attempt_quiz(&env, &learner, course_id, answers)
    }

    pub fn answer_digest(env: Env, answer: String) -> BytesN<32> {
        enrollment::answer_digest(&env, &answer)
    }

    // ------------------------------------------------------------------
    // Reward Accounting
    // ------------------------------------------------------------------

    pub fn claim_student_reward(
        env: Env,
        learner: Address,
        course_id: u64,
        attached: i128,
    ) -> Result<i128, Error> {
        access::require_initialized(&env)?;
        learner.require_auth();
        rewards::claim_student_reward(&env, &learner, course_id, attached)
    }

    pub fn claim_creator_reward(
        env: Env,
        creator: Address,
        course_id: u64,
        attached: i128,
    ) -> Result<i128, Error> {
        access::require_initialized(&env)?;
        creator.require_auth();
        rewards::claim_creator_reward(&env, &creator, course_id, attached)
    }

    pub fn fund_rewards(env: Env, funder: Address, amount: i128) -> Result<(), Error> {
        access::require_initialized(&env)?;
        funder.require_auth();
        fees::fund_rewards(&env, &funder, amount)
    }

    // ------------------------------------------------------------------
    // Fee Treasury & admin controls
    // ------------------------------------------------------------------

    pub fn withdraw_fees(env: Env, caller: Address) -> Result<i128, Error> {
        access::require_initialized(&env)?;
        access::require_admin(&env, &caller)?;
        fees::withdraw_fees(&env, &caller)
    }

    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), Error> {
        access::require_initialized(&env)?;
        access::require_admin(&env, &caller)?;
        storage::set_paused(&env, paused);
        events::emit_pause_changed(&env, caller, paused);
        Ok(())
    }

    pub fn set_reputation_oracle(env: Env, caller: Address, oracle: Address) -> Result<(), Error> {
        access::require_initialized(&env)?;
        access::require_admin(&env, &caller)?;
        storage::set_oracle(&env, &oracle);
        events::emit_oracle_changed(&env, caller, oracle);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<MarketplaceConfig, Error> {
        storage::get_config(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn get_reputation_oracle(env: Env) -> Result<Address, Error> {
        storage::get_oracle(&env)
    }

    pub fn get_fees_collected(env: Env) -> i128 {
        storage::get_fees_collected(&env)
    }

    /// Funded tokens not yet paid out as rewards. Excludes collected fees.
    pub fn get_reward_pool(env: Env) -> i128 {
        storage::get_reward_pool(&env)
    }

    pub fn get_course_count(env: Env) -> u64 {
        storage::get_course_count(&env)
    }

    pub fn get_course(env: Env, course_id: u64) -> Result<Course, Error> {
        storage::get_course(&env, course_id)
    }

    pub fn get_quizzes(env: Env, course_id: u64) -> Result<Vec<Quiz>, Error> {
        storage::get_course(&env, course_id)?;
        Ok(storage::get_quizzes(&env, course_id))
    }

    pub fn get_quiz(env: Env, course_id: u64, quiz_index: u32) -> Result<Quiz, Error> {
        storage::get_course(&env, course_id)?;
        storage::get_quizzes(&env, course_id)
            .get(quiz_index)
            .ok_or(Error::QuizNotFound)
    }

    pub fn get_enrollment(env: Env, learner: Address, course_id: u64) -> Option<Enrollment> {
        storage::get_enrollment(&env, &learner, course_id)
    }
}
