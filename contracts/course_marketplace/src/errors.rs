use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–3) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,

    // --- Gates (4–7) ---
    NotAdmin = 4,
    SystemPaused = 5,
    InsufficientFee = 6,
    InsufficientReputation = 7,

    // --- Courses (8–12) ---
    CourseNotFound = 8,
    CourseNotApproved = 9,
    AlreadyApproved = 10,
    QuizNotFound = 11,
    OnlyCreator = 12,

    // --- Enrollment (13–16) ---
    AlreadyEnrolled = 13,
    NotEnrolled = 14,
    AttemptLimitReached = 15,
    AnswerCountMismatch = 16,

    // --- Balances (17–20) ---
    NoRewardAvailable = 17,
    NoFeesAvailable = 18,
    InvalidAmount = 19,
    TransferFailed = 20,
}
