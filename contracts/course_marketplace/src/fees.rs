use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::events;
use crate::storage;
use crate::types::MarketplaceConfig;

/// Pulls `attached` from `payer`, books the flat fee and hands back the excess.
/// Returns the refunded excess.
pub fn collect_fee(
    env: &Env,
    config: &MarketplaceConfig,
    payer: &Address,
    attached: i128,
) -> Result<i128, Error> {
    if attached < config.flat_fee {
        return Err(Error::InsufficientFee);
    }

    let this = env.current_contract_address();
    if attached > 0 {
        transfer(env, &config.payment_token, payer, &this, attached)?;
    }

    storage::set_fees_collected(env, storage::get_fees_collected(env) + config.flat_fee);

    let excess = attached - config.flat_fee;
    if excess > 0 {
        transfer(env, &config.payment_token, &this, payer, excess)?;
    }

    events::emit_fee_collected(env, payer.clone(), config.flat_fee, excess);
    Ok(excess)
}

/// Pays a reward out of the funded pool. Collected fees never back rewards.
pub fn pay_reward(
    env: &Env,
    config: &MarketplaceConfig,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let pool = storage::get_reward_pool(env);
    if amount > pool {
        return Err(Error::TransferFailed);
    }
    storage::set_reward_pool(env, pool - amount);
    payout(env, config, to, amount)
}

/// Outbound payment from the contract. Callers must have already debited
/// whatever balance backs `amount`.
fn payout(
    env: &Env,
    config: &MarketplaceConfig,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    transfer(
        env,
        &config.payment_token,
        &env.current_contract_address(),
        to,
        amount,
    )
}

/// Drains the fee accumulator to the admin.
pub fn withdraw_fees(env: &Env, admin: &Address) -> Result<i128, Error> {
    let config = storage::get_config(env)?;
    let amount = storage::get_fees_collected(env);
    if amount <= 0 {
        return Err(Error::NoFeesAvailable);
    }

    // effects before interaction
    storage::set_fees_collected(env, 0);
    payout(env, &config, admin, amount)?;

    events::emit_fees_withdrawn(env, admin.clone(), amount);
    Ok(amount)
}

/// Moves payment tokens into the reward pool.
pub fn fund_rewards(env: &Env, funder: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let config = storage::get_config(env)?;
    transfer(
        env,
        &config.payment_token,
        funder,
        &env.current_contract_address(),
        amount,
    )?;
    storage::set_reward_pool(env, storage::get_reward_pool(env) + amount);

    events::emit_rewards_funded(env, funder.clone(), amount);
    Ok(())
}

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
