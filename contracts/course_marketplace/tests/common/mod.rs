#![allow(dead_code)]

use course_marketplace::{CourseMarketplace, CourseMarketplaceClient, QuizDraft};
use reputation::{ReputationOracle, ReputationOracleClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String, Vec};

pub const FEE: i128 = 10;
pub const STUDENT_REWARD: i128 = 100;
pub const CREATOR_REWARD: i128 = 50;

pub struct MarketplaceTest<'a> {
    pub client: CourseMarketplaceClient<'a>,
    pub reputation: ReputationOracleClient<'a>,
    pub contract_id: Address,
    pub admin: Address,
    pub creator: Address,
    pub learner: Address,
}

/// Marketplace wired to the reference reputation oracle, paying in `token`.
/// The creator and learner start with exactly enough reputation to post and enroll.
pub fn setup_marketplace<'a>(env: &'a Env, token: &Address) -> MarketplaceTest<'a> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let creator = Address::generate(env);
    let learner = Address::generate(env);

    let reputation_id = env.register_contract(None, ReputationOracle);
    let reputation = ReputationOracleClient::new(env, &reputation_id);
    reputation.initialize(&admin);
    reputation.mint(&creator, &5);
    reputation.mint(&learner, &5);

    let contract_id = env.register_contract(None, CourseMarketplace);
    let client = CourseMarketplaceClient::new(env, &contract_id);
    client.initialize(
        &admin,
        token,
        &reputation_id,
        &FEE,
        &STUDENT_REWARD,
        &CREATOR_REWARD,
    );

    MarketplaceTest {
        client,
        reputation,
        contract_id,
        admin,
        creator,
        learner,
    }
}

pub fn text(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

/// A single-question course whose only correct answer is `correct`.
pub fn single_quiz(env: &Env, client: &CourseMarketplaceClient, correct: &str) -> Vec<QuizDraft> {
    let mut quizzes = Vec::new(env);
    quizzes.push_back(QuizDraft {
        question: text(env, "Pick the right letter"),
        option_a: text(env, "A"),
        option_b: text(env, "B"),
        option_c: text(env, "C"),
        option_d: text(env, "D"),
        answer_digest: client.answer_digest(&text(env, correct)),
    });
    quizzes
}

pub fn answers(env: &Env, picks: &[&str]) -> Vec<String> {
    let mut out = Vec::new(env);
    for pick in picks {
        out.push_back(text(env, pick));
    }
    out
}
