#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Score(Address),
}

#[contract]
pub struct ReputationOracle;

#[contractimpl]
impl ReputationOracle {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    // Read-only view consumed by gated contracts
    pub fn reputation_of(env: Env, identity: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::Score(identity))
            .unwrap_or(0)
    }

    // Only admin can mint reputation
    pub fn mint(env: Env, identity: Address, amount: u64) -> Result<u64, Error> {
        Self::require_admin(&env)?;

        let updated = Self::reputation_of(env.clone(), identity.clone()).saturating_add(amount);
        env.storage()
            .persistent()
            .set(&DataKey::Score(identity.clone()), &updated);
        env.events()
            .publish(("REPUTE", symbol_short!("MINT")), (identity, amount, updated));
        Ok(updated)
    }

    // Slash reputation for bad behavior, floored at zero
    pub fn slash(env: Env, identity: Address, amount: u64) -> Result<u64, Error> {
        Self::require_admin(&env)?;

        let updated = Self::reputation_of(env.clone(), identity.clone()).saturating_sub(amount);
        env.storage()
            .persistent()
            .set(&DataKey::Score(identity.clone()), &updated);
        env.events()
            .publish(("REPUTE", symbol_short!("SLASH")), (identity, amount, updated));
        Ok(updated)
    }

    fn require_admin(env: &Env) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();
        Ok(())
    }
}
