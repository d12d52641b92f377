#![no_std]

mod access;
mod contract;
mod enrollment;
mod errors;
mod events;
mod fees;
mod registry;
mod rewards;
mod storage;
mod types;


pub use access::{ReputationClient, ReputationSource};
pub use contract::{CourseMarketplace, CourseMarketplaceClient};
pub use errors::Error;
pub use events::{
    CourseApprovedEvent, CourseCreatedEvent, FeeCollectedEvent, FeesWithdrawnEvent,
    OracleChangedEvent, PauseChangedEvent, QuizAttemptedEvent, QuizCreatedEvent, RewardPaidEvent,
    RewardsFundedEvent, UserEnrolledEvent,
};
pub use types::{
    Course, Enrollment, MarketplaceConfig, Quiz, QuizDraft, ENROLL_THRESHOLD, MAX_ATTEMPTS,
    POST_THRESHOLD, WATCH_THRESHOLD,
};
