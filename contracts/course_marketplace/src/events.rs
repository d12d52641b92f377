use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ==================== Event Payload Structs ====================
// Published under the topic pair ("MKT", symbol_short!("…")).

pub const CRS_NEW: Symbol = symbol_short!("CRS_NEW");
pub const CRS_APRV: Symbol = symbol_short!("CRS_APRV");
pub const QUIZ_NEW: Symbol = symbol_short!("QUIZ_NEW");
pub const ENROLLED: Symbol = symbol_short!("ENROLLED");
pub const ATTEMPTED: Symbol = symbol_short!("ATTEMPTED");
pub const RWD_CLM: Symbol = symbol_short!("RWD_CLM");
pub const CRT_CLM: Symbol = symbol_short!("CRT_CLM");
pub const CRT_WDR: Symbol = symbol_short!("CRT_WDR");
pub const FEE_WDR: Symbol = symbol_short!("FEE_WDR");
pub const FEE_COL: Symbol = symbol_short!("FEE_COL");
pub const PAUSED: Symbol = symbol_short!("PAUSED");
pub const ORACLE: Symbol = symbol_short!("ORACLE");
pub const FUNDED: Symbol = symbol_short!("FUNDED");

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CourseCreatedEvent {
    pub course_id: u64,
    pub creator: Address,
    pub quiz_count: u32,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CourseApprovedEvent {
    pub course_id: u64,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct QuizCreatedEvent {
    pub course_id: u64,
    pub quiz_index: u32,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UserEnrolledEvent {
    pub course_id: u64,
    pub learner: Address,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct QuizAttemptedEvent {
    pub course_id: u64,
    pub learner: Address,
    pub passed: bool,
    /// Attempts consumed so far, including this one.
    pub attempt: u32,
    pub timestamp: u64,
}

/// Shared by learner claims, creator claims and creator withdrawals.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RewardPaidEvent {
    pub course_id: u64,
    pub recipient: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FeeCollectedEvent {
    pub payer: Address,
    pub fee: i128,
    pub refunded: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FeesWithdrawnEvent {
    pub admin: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PauseChangedEvent {
    pub admin: Address,
    pub paused: bool,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct OracleChangedEvent {
    pub admin: Address,
    pub oracle: Address,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RewardsFundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

pub fn emit_course_created(env: &Env, course_id: u64, creator: Address, quiz_count: u32) {
    env.events().publish(
        ("MKT", CRS_NEW),
        CourseCreatedEvent {
            course_id,
            creator,
            quiz_count,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_course_approved(env: &Env, course_id: u64) {
    env.events().publish(
        ("MKT", CRS_APRV),
        CourseApprovedEvent {
            course_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_quiz_created(env: &Env, course_id: u64, quiz_index: u32) {
    env.events().publish(
        ("MKT", QUIZ_NEW),
        QuizCreatedEvent {
            course_id,
            quiz_index,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_user_enrolled(env: &Env, course_id: u64, learner: Address) {
    env.events().publish(
        ("MKT", ENROLLED),
        UserEnrolledEvent {
            course_id,
            learner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_quiz_attempted(env: &Env, course_id: u64, learner: Address, passed: bool, attempt: u32) {
    env.events().publish(
        ("MKT", ATTEMPTED),
        QuizAttemptedEvent {
            course_id,
            learner,
            passed,
            attempt,
            timestamp: env.ledger().timestamp(),
        },
    );
}

fn emit_reward_paid(env: &Env, topic: Symbol, course_id: u64, recipient: Address, amount: i128) {
    env.events().publish(
        ("MKT", topic),
        RewardPaidEvent {
            course_id,
            recipient,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_reward_claimed(env: &Env, course_id: u64, learner: Address, amount: i128) {
    emit_reward_paid(env, RWD_CLM, course_id, learner, amount);
}

pub fn emit_creator_reward_claimed(env: &Env, course_id: u64, creator: Address, amount: i128) {
    emit_reward_paid(env, CRT_CLM, course_id, creator, amount);
}

pub fn emit_creator_withdrawal(env: &Env, course_id: u64, creator: Address, amount: i128) {
    emit_reward_paid(env, CRT_WDR, course_id, creator, amount);
}

pub fn emit_fee_collected(env: &Env, payer: Address, fee: i128, refunded: i128) {
    env.events().publish(
        ("MKT", FEE_COL),
        FeeCollectedEvent {
            payer,
            fee,
            refunded,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_fees_withdrawn(env: &Env, admin: Address, amount: i128) {
    env.events().publish(
        ("MKT", FEE_WDR),
        FeesWithdrawnEvent {
            admin,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_pause_changed(env: &Env, admin: Address, paused: bool) {
    env.events().publish(
        ("MKT", PAUSED),
        PauseChangedEvent {
            admin,
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_oracle_changed(env: &Env, admin: Address, oracle: Address) {
    env.events().publish(
        ("MKT", ORACLE),
        OracleChangedEvent {
            admin,
            oracle,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_rewards_funded(env: &Env, funder: Address, amount: i128) {
    env.events().publish(
        ("MKT", FUNDED),
        RewardsFundedEvent {
            funder,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
