use crate::{error::ContractError, msg::*, state::*};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, Event, MessageInfo,
    Response, StdError, StdResult, Uint128,
};

fn validate_treasury(deps: Deps, treasury: &str) -> Result<Addr, ContractError> {
    if treasury.is_empty() {
        return Err(ContractError::ZeroTreasury());
    }
    Ok(deps.api.addr_validate(treasury)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let treasury = validate_treasury(deps.as_ref(), &msg.treasury)?;
    let credit_rates = match msg.credit_rates {
        Some(rates) if rates.len() != CREDIT_RATE_COUNT => {
            return Err(ContractError::InvalidRateTable {
                expected: CREDIT_RATE_COUNT,
                got: rates.len(),
            })
        }
        Some(rates) => rates,
        None => default_credit_rates(),
    };

    OWNER.save(deps.storage, &info.sender)?;
    TREASURY.save(deps.storage, &treasury)?;
    DENOM.save(deps.storage, &msg.denom)?;
    PAUSED.save(deps.storage, &false)?;
    TOTAL_CREDITS_MINTED.save(deps.storage, &0)?;
    CREDIT_RATES.save(deps.storage, &credit_rates)?;
    let ruby_tier_price = msg
        .ruby_tier_price
        .unwrap_or(Uint128::new(DEFAULT_RUBY_TIER_PRICE));
    let diamond_tier_price = msg
        .diamond_tier_price
        .unwrap_or(Uint128::new(DEFAULT_DIAMOND_TIER_PRICE));
    RUBY_TIER_PRICE.save(deps.storage, &ruby_tier_price)?;
    DIAMOND_TIER_PRICE.save(deps.storage, &diamond_tier_price)?;

    Ok(Response::new()
        .add_attribute("owner", info.sender)
        .add_attribute("treasury", treasury))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use execute::Tier;
    use ExecuteMsg::*;
    match msg {
        BuyCredits {} => execute::buy_credits(deps, info),
        SpendCredits { amount, reason } => execute::spend_credits(deps, info, amount, reason),
        BuyRubyTier {} => execute::buy_tier(deps, info, Tier::Ruby),
        BuyDiamondTier {} => execute::buy_tier(deps, info, Tier::Diamond),
        SetTreasury { treasury } => execute::set_treasury(deps, info, treasury),
        SetRubyTierPrice { price } => execute::set_tier_price(deps, info, Tier::Ruby, price),
        SetDiamondTierPrice { price } => {
            execute::set_tier_price(deps, info, Tier::Diamond, price)
        }
        SetCreditRate {
            index,
            amount,
            reward,
        } => execute::set_credit_rate(deps, info, index, amount, reward),
        Pause {} => execute::set_paused(deps, info, true),
        Unpause {} => execute::set_paused(deps, info, false),
        TransferOwnership { new_owner } => execute::transfer_ownership(deps, info, new_owner),
        Withdraw {} => execute::withdraw(deps, env, info),
    }
}

mod execute {
    use super::*;

    #[derive(Clone, Copy)]
    pub enum Tier {
        Ruby,
        Diamond,
    }

    impl Tier {
        fn price(self, deps: Deps) -> StdResult<Uint128> {
            match self {
                Tier::Ruby => RUBY_TIER_PRICE.load(deps.storage),
                Tier::Diamond => DIAMOND_TIER_PRICE.load(deps.storage),
            }
        }

        fn reward(self) -> u64 {
            match self {
                Tier::Ruby => RUBY_TIER_REWARD,
                Tier::Diamond => DIAMOND_TIER_REWARD,
            }
        }

        fn event(self) -> &'static str {
            match self {
                Tier::Ruby => "ruby-tier-purchased",
                Tier::Diamond => "diamond-tier-purchased",
            }
        }

        fn price_mismatch(self, expected: Uint128, got: Uint128) -> ContractError {
            match self {
                Tier::Ruby => ContractError::IncorrectRubyPrice { expected, got },
                Tier::Diamond => ContractError::IncorrectDiamondPrice { expected, got },
            }
        }
    }

    fn ensure_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
        if OWNER.load(deps.storage)? != info.sender {
            return Err(ContractError::Unauthorized());
        }
        Ok(())
    }

    fn ensure_active(deps: Deps) -> Result<(), ContractError> {
        if PAUSED.load(deps.storage)? {
            return Err(ContractError::Paused());
        }
        Ok(())
    }

    fn payment(deps: Deps, info: &MessageInfo) -> Result<Uint128, ContractError> {
        let denom = DENOM.load(deps.storage)?;
        Ok(cw_utils::may_pay(info, &denom)?)
    }

    /// Adds `reward` to the account balance and the minted total, returning the new balance.
    fn grant_credits(deps: DepsMut, account: &Addr, reward: u64) -> Result<u64, ContractError> {
        let balance = CREDITS.update(
            deps.storage,
            account,
            |credits| -> Result<u64, ContractError> {
                credits
                    .unwrap_or_default()
                    .checked_add(reward)
                    .ok_or(ContractError::Overflow())
            },
        )?;
        TOTAL_CREDITS_MINTED.update(deps.storage, |total| -> Result<u64, ContractError> {
            total.checked_add(reward).ok_or(ContractError::Overflow())
        })?;
        Ok(balance)
    }

    pub fn buy_credits(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
        ensure_active(deps.as_ref())?;
        let payment = payment(deps.as_ref(), &info)?;
        // First matching row wins if the owner configured duplicate amounts.
        let rate = CREDIT_RATES
            .load(deps.storage)?
            .into_iter()
            .find(|rate| rate.amount == payment)
            .ok_or(ContractError::InvalidAmount(payment))?;

        let balance = grant_credits(deps, &info.sender, rate.reward)?;

        let resp = Response::new().add_event(
            Event::new("credits-purchased")
                .add_attribute("account", &info.sender)
                .add_attribute("payment", payment.to_string())
                .add_attribute("reward", rate.reward.to_string())
                .add_attribute("balance", balance.to_string()),
        );
        Ok(resp)
    }

    pub fn spend_credits(
        deps: DepsMut,
        info: MessageInfo,
        amount: u64,
        reason: String,
    ) -> Result<Response, ContractError> {
        ensure_active(deps.as_ref())?;
        cw_utils::nonpayable(&info)?;
        if amount == 0 {
            return Err(ContractError::ZeroAmount());
        }

        let available = CREDITS
            .may_load(deps.storage, &info.sender)?
            .unwrap_or_default();
        if amount > available {
            return Err(ContractError::InsufficientCredits {
                requested: amount,
                available,
            });
        }
        let remaining = available - amount;
        CREDITS.save(deps.storage, &info.sender, &remaining)?;

        let resp = Response::new().add_event(
            Event::new("credits-spent")
                .add_attribute("account", &info.sender)
                .add_attribute("amount", amount.to_string())
                .add_attribute("reason", reason)
                .add_attribute("balance", remaining.to_string()),
        );
        Ok(resp)
    }

    pub fn buy_tier(deps: DepsMut, info: MessageInfo, tier: Tier) -> Result<Response, ContractError> {
        ensure_active(deps.as_ref())?;
        let payment = payment(deps.as_ref(), &info)?;
        let price = tier.price(deps.as_ref())?;
        if payment != price {
            return Err(tier.price_mismatch(price, payment));
        }

        let reward = tier.reward();
        let balance = grant_credits(deps, &info.sender, reward)?;

        let resp = Response::new().add_event(
            Event::new(tier.event())
                .add_attribute("account", &info.sender)
                .add_attribute("payment", payment.to_string())
                .add_attribute("reward", reward.to_string())
                .add_attribute("balance", balance.to_string()),
        );
        Ok(resp)
    }

    pub fn set_treasury(
        deps: DepsMut,
        info: MessageInfo,
        treasury: String,
    ) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;
        cw_utils::nonpayable(&info)?;
        let treasury = validate_treasury(deps.as_ref(), &treasury)?;
        TREASURY.save(deps.storage, &treasury)?;
        Ok(Response::new()
            .add_attribute("action", "set_treasury")
            .add_attribute("treasury", treasury))
    }

    pub fn set_tier_price(
        deps: DepsMut,
        info: MessageInfo,
        tier: Tier,
        price: Uint128,
    ) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;
        cw_utils::nonpayable(&info)?;
        let action = match tier {
            Tier::Ruby => {
                RUBY_TIER_PRICE.save(deps.storage, &price)?;
                "set_ruby_tier_price"
            }
            Tier::Diamond => {
                DIAMOND_TIER_PRICE.save(deps.storage, &price)?;
                "set_diamond_tier_price"
            }
        };
        Ok(Response::new()
            .add_attribute("action", action)
            .add_attribute("price", price.to_string()))
    }

    pub fn set_credit_rate(
        deps: DepsMut,
        info: MessageInfo,
        index: u32,
        amount: Uint128,
        reward: u64,
    ) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;
        cw_utils::nonpayable(&info)?;
        let mut rates = CREDIT_RATES.load(deps.storage)?;
        let rate = rates
            .get_mut(index as usize)
            .ok_or(ContractError::IndexOutOfRange(index))?;
        *rate = CreditRate { amount, reward };
        CREDIT_RATES.save(deps.storage, &rates)?;
        Ok(Response::new()
            .add_attribute("action", "set_credit_rate")
            .add_attribute("index", index.to_string())
            .add_attribute("amount", amount.to_string())
            .add_attribute("reward", reward.to_string()))
    }

    pub fn set_paused(
        deps: DepsMut,
        info: MessageInfo,
        paused: bool,
    ) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;
        cw_utils::nonpayable(&info)?;
        match (PAUSED.load(deps.storage)?, paused) {
            (true, true) => return Err(ContractError::Paused()),
            (false, false) => return Err(ContractError::NotPaused()),
            _ => {}
        }
        PAUSED.save(deps.storage, &paused)?;
        let event = if paused { "paused" } else { "unpaused" };
        Ok(Response::new().add_event(Event::new(event).add_attribute("by", info.sender)))
    }

    pub fn transfer_ownership(
        deps: DepsMut,
        info: MessageInfo,
        new_owner: String,
    ) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;
        cw_utils::nonpayable(&info)?;
        let new_owner = deps.api.addr_validate(&new_owner)?;
        OWNER.save(deps.storage, &new_owner)?;
        Ok(Response::new().add_event(
            Event::new("ownership-transferred")
                .add_attribute("previous_owner", info.sender)
                .add_attribute("new_owner", new_owner),
        ))
    }

    pub fn withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;
        cw_utils::nonpayable(&info)?;
        let denom = DENOM.load(deps.storage)?;
        let balance = deps
            .querier
            .query_balance(env.contract.address, &denom)?
            .amount;
        if balance.is_zero() {
            return Err(ContractError::NothingToWithdraw());
        }

        // Sent after the state commits; a failed send reverts the whole call.
        let treasury = TREASURY.load(deps.storage)?;
        let message = BankMsg::Send {
            to_address: treasury.to_string(),
            amount: coins(balance.u128(), &denom),
        };
        let event = Event::new("withdraw")
            .add_attribute("treasury", treasury)
            .add_attribute("amount", balance.to_string());
        Ok(Response::new().add_message(message).add_event(event))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use QueryMsg::*;
    match msg {
        Credits { account } | GetCredits { account } => {
            to_json_binary(&query::credits(deps, &account)?)
        }
        TotalCreditsMinted {} => to_json_binary(&TotalCreditsMintedResponse {
            total: TOTAL_CREDITS_MINTED.load(deps.storage)?,
        }),
        RubyTierPrice {} => to_json_binary(&PriceResponse {
            price: RUBY_TIER_PRICE.load(deps.storage)?,
        }),
        DiamondTierPrice {} => to_json_binary(&PriceResponse {
            price: DIAMOND_TIER_PRICE.load(deps.storage)?,
        }),
        CreditAmount { index } => to_json_binary(&CreditAmountResponse {
            amount: query::credit_rate(deps, index)?.amount,
        }),
        CreditReward { index } => to_json_binary(&CreditRewardResponse {
            reward: query::credit_rate(deps, index)?.reward,
        }),
        CreditRates {} => to_json_binary(&CreditRatesResponse {
            rates: CREDIT_RATES.load(deps.storage)?,
        }),
        Owner {} => to_json_binary(&OwnerResponse {
            owner: OWNER.load(deps.storage)?,
        }),
        Treasury {} => to_json_binary(&TreasuryResponse {
            treasury: TREASURY.load(deps.storage)?,
        }),
        Paused {} => to_json_binary(&PausedResponse {
            paused: PAUSED.load(deps.storage)?,
        }),
        Custodied {} => to_json_binary(&query::custodied(deps, env)?),
    }
}

mod query {
    use super::*;

    pub fn credits(deps: Deps, account: &str) -> StdResult<CreditsResponse> {
        let account = deps.api.addr_validate(account)?;
        Ok(CreditsResponse {
            credits: CREDITS.may_load(deps.storage, &account)?.unwrap_or_default(),
        })
    }

    pub fn credit_rate(deps: Deps, index: u32) -> StdResult<CreditRate> {
        CREDIT_RATES
            .load(deps.storage)?
            .into_iter()
            .nth(index as usize)
            .ok_or_else(|| StdError::generic_err(format!("Credit rate index {} out of range", index)))
    }

    pub fn custodied(deps: Deps, env: Env) -> StdResult<CustodiedResponse> {
        let denom = DENOM.load(deps.storage)?;
        let balance = deps.querier.query_balance(env.contract.address, denom)?;
        Ok(CustodiedResponse {
            amount: balance.amount,
        })
    }
}
