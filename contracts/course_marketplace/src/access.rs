use soroban_sdk::{contractclient, Address, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::Course;

/// Interface the marketplace expects from its reputation oracle.
#[contractclient(name = "ReputationClient")]
pub trait ReputationSource {
    fn reputation_of(env: Env, identity: Address) -> u64;
}

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !storage::is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != storage::get_admin(env)? {
        return Err(Error::NotAdmin);
    }
    Ok(())
}

pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if storage::is_paused(env) {
        return Err(Error::SystemPaused);
    }
    Ok(())
}

/// Zero thresholds skip the oracle call entirely.
pub fn require_reputation(env: &Env, identity: &Address, threshold: u64) -> Result<(), Error> {
    if threshold == 0 {
        return Ok(());
    }
    let oracle = storage::get_oracle(env)?;
    let score = ReputationClient::new(env, &oracle).reputation_of(identity);
    if score < threshold {
        return Err(Error::InsufficientReputation);
    }
    Ok(())
}

pub fn require_approved(course: &Course) -> Result<(), Error> {
    if !course.approved {
        return Err(Error::CourseNotApproved);
    }
    Ok(())
}
