#![allow(clippy::unwrap_used)]

mod common;

use common::{answers, setup_marketplace, single_quiz, text, CREATOR_REWARD, FEE, STUDENT_REWARD};
use course_marketplace::{Error, RewardPaidEvent};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{symbol_short, token, Address, Env, Symbol, TryFromVal};

fn sac(env: &Env) -> (Address, token::Client<'_>, token::StellarAssetClient<'_>) {
    let issuer = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(issuer).address();
    (
        token_id.clone(),
        token::Client::new(env, &token_id),
        token::StellarAssetClient::new(env, &token_id),
    )
}

#[test]
fn test_full_course_lifecycle() {
    let env = Env::default();
    let (token_id, token, token_admin) = sac(&env);
    let t = setup_marketplace(&env, &token_id);

    token_admin.mint(&t.creator, &1_000);
    token_admin.mint(&t.learner, &1_000);
    token_admin.mint(&t.admin, &1_000);
    t.client.fund_rewards(&t.admin, &1_000);

    let course_id = t.client.create_course(
        &t.creator,
        &text(&env, "ipfs://rust-101"),
        &single_quiz(&env, &t.client, "A"),
        &FEE,
    );
    t.client.approve_course(&t.admin, &course_id);
    t.client.enroll(&t.learner, &course_id, &FEE);

    assert!(t
        .client
        .attempt_quiz(&t.learner, &course_id, &answers(&env, &["A"])));

    let enrollment = t.client.get_enrollment(&t.learner, &course_id).unwrap();
    assert!(enrollment.has_passed);
    assert_eq!(enrollment.quiz_balance, STUDENT_REWARD);
    let course = t.client.get_course(&course_id);
    assert_eq!(course.creator_balance, CREATOR_REWARD);
    assert_eq!(course.passed_students, 1);
    assert_eq!(course.total_enrolled, 1);

    assert_eq!(
        t.client.claim_student_reward(&t.learner, &course_id, &FEE),
        STUDENT_REWARD
    );
    assert_eq!(token.balance(&t.learner), 1_000 - 2 * FEE + STUDENT_REWARD);
    assert_eq!(
        t.client
            .get_enrollment(&t.learner, &course_id)
            .unwrap()
            .quiz_balance,
        0
    );

    let (_, topics, data) = env
        .events()
        .all()
        .iter()
        .filter(|(id, _, _)| *id == t.contract_id)
        .last()
        .unwrap();
    let topic = Symbol::try_from_val(&env, &topics.get(1).unwrap()).unwrap();
    assert_eq!(topic, symbol_short!("RWD_CLM"));
    let paid = RewardPaidEvent::try_from_val(&env, &data).unwrap();
    assert_eq!(paid.amount, STUDENT_REWARD);
    assert_eq!(paid.recipient, t.learner);

    assert_eq!(
        t.client.claim_creator_reward(&t.creator, &course_id, &FEE),
        CREATOR_REWARD
    );
    assert_eq!(token.balance(&t.creator), 1_000 - 2 * FEE + CREATOR_REWARD);
    assert_eq!(
        t.client.get_reward_pool(),
        1_000 - STUDENT_REWARD - CREATOR_REWARD
    );

    // create, enroll and both claims each booked one fee
    assert_eq!(t.client.get_fees_collected(), 4 * FEE);
    assert_eq!(t.client.withdraw_fees(&t.admin), 4 * FEE);
    assert_eq!(token.balance(&t.admin), 4 * FEE);
    assert_eq!(t.client.get_fees_collected(), 0);
    assert_eq!(
        token.balance(&t.contract_id),
        1_000 - STUDENT_REWARD - CREATOR_REWARD
    );
}

#[test]
fn test_slashed_learner_cannot_enroll_but_can_still_attempt() {
    let env = Env::default();
    let (token_id, _, token_admin) = sac(&env);
    let t = setup_marketplace(&env, &token_id);
    token_admin.mint(&t.creator, &1_000);
    token_admin.mint(&t.learner, &1_000);

    let first = t.client.create_course(
        &t.creator,
        &text(&env, "ipfs://first"),
        &single_quiz(&env, &t.client, "B"),
        &FEE,
    );
    let second = t.client.create_course(
        &t.creator,
        &text(&env, "ipfs://second"),
        &single_quiz(&env, &t.client, "C"),
        &FEE,
    );
    t.client.approve_course(&t.admin, &first);
    t.client.approve_course(&t.admin, &second);

    t.client.enroll(&t.learner, &first, &FEE);
    t.reputation.slash(&t.learner, &5);

    assert_eq!(
        t.client.try_enroll(&t.learner, &second, &FEE),
        Err(Ok(Error::InsufficientReputation))
    );
    // quiz attempts carry no reputation requirement
    assert!(t
        .client
        .attempt_quiz(&t.learner, &first, &answers(&env, &["B"])));
}

#[test]
fn test_creator_below_threshold_cannot_publish() {
    let env = Env::default();
    let (token_id, _, token_admin) = sac(&env);
    let t = setup_marketplace(&env, &token_id);
    token_admin.mint(&t.creator, &1_000);
    t.reputation.slash(&t.creator, &1);

    assert_eq!(
        t.client.try_create_course(
            &t.creator,
            &text(&env, "ipfs://nope"),
            &single_quiz(&env, &t.client, "A"),
            &FEE,
        ),
        Err(Ok(Error::InsufficientReputation))
    );
    assert_eq!(t.client.get_course_count(), 0);
}

#[test]
fn test_fee_refund_returns_exact_excess() {
    let env = Env::default();
    let (token_id, token, token_admin) = sac(&env);
    let t = setup_marketplace(&env, &token_id);
    token_admin.mint(&t.creator, &1_000);

    for excess in [1i128, 7, 250] {
        let before = token.balance(&t.creator);
        let fees_before = t.client.get_fees_collected();
        t.client.create_course(
            &t.creator,
            &text(&env, "ipfs://x"),
            &single_quiz(&env, &t.client, "A"),
            &(FEE + excess),
        );
        assert_eq!(token.balance(&t.creator), before - FEE);
        assert_eq!(t.client.get_fees_collected(), fees_before + FEE);
    }
}
