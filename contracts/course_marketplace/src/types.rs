use soroban_sdk::{contracttype, Address, BytesN, String};

use crate::errors::Error;

/// Reputation needed to attempt a quiz.
pub const WATCH_THRESHOLD: u64 = 0;
/// Reputation needed to enroll in a course.
pub const ENROLL_THRESHOLD: u64 = 5;
/// Reputation needed to publish a course.
pub const POST_THRESHOLD: u64 = 5;
/// Attempts available per enrollment, pass or fail.
pub const MAX_ATTEMPTS: u32 = 2;

/// Deployment constants. Written once by `initialize`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MarketplaceConfig {
    pub payment_token: Address,
    pub flat_fee: i128,
    pub student_reward: i128,
    pub creator_reward: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Course {
    pub creator: Address,
    pub metadata_uri: String,
    pub approved: bool,
    pub passed_students: u32,
    pub creator_balance: i128,
    pub total_enrolled: u32,
}

impl Course {
    pub fn new(creator: Address, metadata_uri: String) -> Self {
        Course {
            creator,
            metadata_uri,
            approved: false,
            passed_students: 0,
            creator_balance: 0,
            total_enrolled: 0,
        }
    }

    /// One-way transition; a second approval is an error rather than a no-op.
    pub fn approve(&mut self) -> Result<(), Error> {
        if self.approved {
            return Err(Error::AlreadyApproved);
        }
        self.approved = true;
        Ok(())
    }
}

/// Quiz as submitted by a creator at course creation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct QuizDraft {
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub answer_digest: BytesN<32>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Quiz {
    pub course_id: u64,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub answer_digest: BytesN<32>,
}

impl Quiz {
    pub fn from_draft(course_id: u64, draft: QuizDraft) -> Self {
        Quiz {
            course_id,
            question: draft.question,
            option_a: draft.option_a,
            option_b: draft.option_b,
            option_c: draft.option_c,
            option_d: draft.option_d,
            answer_digest: draft.answer_digest,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Enrollment {
    pub is_enrolled: bool,
    pub attempts: u32,
    pub has_passed: bool,
    pub quiz_balance: i128,
}

impl Enrollment {
    pub fn open() -> Self {
        Enrollment {
            is_enrolled: true,
            attempts: 0,
            has_passed: false,
            quiz_balance: 0,
        }
    }

    pub fn consume_attempt(&mut self) -> Result<(), Error> {
        if self.attempts >= MAX_ATTEMPTS {
            return Err(Error::AttemptLimitReached);
        }
        self.attempts += 1;
        Ok(())
    }

    /// Marks the enrollment as passed. Returns `false` if it had already passed.
    pub fn record_pass(&mut self) -> bool {
        if self.has_passed {
            return false;
        }
        self.has_passed = true;
        true
    }
}

#[contracttype]
pub enum DataKey {
    // Singletons — instance storage
    Admin,
    Config,
    Paused,
    Oracle,
    FeesCollected,
    RewardPool,
    CourseCount,

    // Records — persistent storage
    Course(u64),
    Quizzes(u64),
    Enrollment(Address, u64),
}
