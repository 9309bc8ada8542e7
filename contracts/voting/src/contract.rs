use crate::{error::ContractError, msg::*, state::*};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, Event, HexBinary,
    MessageInfo, Order, Response, StdResult, Timestamp, Uint128,
};
use cw_storage_plus::Bound;

const DEFAULT_PAGE_LIMIT: u32 = 10;
const MAX_PAGE_LIMIT: u32 = 30;

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
    let daily_vote_limit = msg.daily_vote_limit.unwrap_or(DEFAULT_DAILY_VOTE_LIMIT);
    if daily_vote_limit == 0 {
        return Err(ContractError::ZeroVoteLimit());
    }
    let vote_fee = msg.vote_fee.unwrap_or(Uint128::new(DEFAULT_VOTE_FEE));

    OWNER.save(deps.storage, &info.sender)?;
    TREASURY.save(deps.storage, &treasury)?;
    DENOM.save(deps.storage, &msg.denom)?;
    PAUSED.save(deps.storage, &false)?;
    VOTE_FEE.save(deps.storage, &vote_fee)?;
    DAILY_VOTE_LIMIT.save(deps.storage, &daily_vote_limit)?;
    TOTAL_VOTES_CAST.save(deps.storage, &0)?;
    VOTED_COINS_COUNT.save(deps.storage, &0)?;

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
    use ExecuteMsg::*;
    match msg {
        Vote { coin_id } => execute::vote(deps, env, info, coin_id),
        SetVoteFee { fee } => execute::set_vote_fee(deps, info, fee),
        SetDailyVoteLimit { limit } => execute::set_daily_vote_limit(deps, info, limit),
        SetTreasury { treasury } => execute::set_treasury(deps, info, treasury),
        Pause {} => execute::set_paused(deps, info, true),
        Unpause {} => execute::set_paused(deps, info, false),
        TransferOwnership { new_owner } => execute::transfer_ownership(deps, info, new_owner),
    }
}

fn validate_coin_id(coin_id: &HexBinary) -> Result<(), ContractError> {
    if coin_id.len() != COIN_ID_LEN {
        return Err(ContractError::InvalidCoinId {
            expected: COIN_ID_LEN,
            got: coin_id.len(),
        });
    }
    if coin_id.iter().all(|byte| *byte == 0) {
        return Err(ContractError::EmptyCoinId());
    }
    Ok(())
}

/// The account's window as of `now`, reset if it was last written on an earlier day.
fn current_window(deps: Deps, account: &Addr, now: Timestamp) -> StdResult<DailyVoteWindow> {
    let window = DAILY_VOTES
        .may_load(deps.storage, account)?
        .unwrap_or_default();
    Ok(window.at_day(day_index(now)))
}

mod execute {
    use super::*;

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

    fn increment(value: u64) -> Result<u64, ContractError> {
        value.checked_add(1).ok_or(ContractError::Overflow())
    }

    pub fn vote(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        coin_id: HexBinary,
    ) -> Result<Response, ContractError> {
        ensure_active(deps.as_ref())?;
        validate_coin_id(&coin_id)?;

        let denom = DENOM.load(deps.storage)?;
        let fee = VOTE_FEE.load(deps.storage)?;
        let payment = cw_utils::may_pay(&info, &denom)?;
        if payment != fee {
            return Err(ContractError::IncorrectFee {
                expected: fee,
                got: payment,
            });
        }

        let limit = DAILY_VOTE_LIMIT.load(deps.storage)?;
        let mut window = current_window(deps.as_ref(), &info.sender, env.block.time)?;
        if window.count >= limit {
            return Err(ContractError::DailyLimitReached { limit });
        }
        window.count = increment(window.count)?;

        let key = coin_id.as_slice();
        let previous = TOTAL_VOTES.may_load(deps.storage, key)?.unwrap_or_default();
        let tally = increment(previous)?;
        let user_votes = increment(
            USER_VOTES
                .may_load(deps.storage, (key, &info.sender))?
                .unwrap_or_default(),
        )?;
        let total_cast = increment(TOTAL_VOTES_CAST.load(deps.storage)?)?;

        DAILY_VOTES.save(deps.storage, &info.sender, &window)?;
        TOTAL_VOTES.save(deps.storage, key, &tally)?;
        USER_VOTES.save(deps.storage, (key, &info.sender), &user_votes)?;
        TOTAL_VOTES_CAST.save(deps.storage, &total_cast)?;
        if previous == 0 {
            let index = VOTED_COINS_COUNT.load(deps.storage)?;
            VOTED_COINS.save(deps.storage, index, &coin_id)?;
            VOTED_COINS_COUNT.save(deps.storage, &increment(index)?)?;
        }

        let event = Event::new("voted")
            .add_attribute("voter", &info.sender)
            .add_attribute("coin_id", coin_id.to_hex())
            .add_attribute("total_votes", tally.to_string());
        let resp = Response::new().add_event(event);
        // The bank module rejects empty sends, so a zero fee forwards nothing.
        if fee.is_zero() {
            return Ok(resp);
        }
        let treasury = TREASURY.load(deps.storage)?;
        Ok(resp.add_message(BankMsg::Send {
            to_address: treasury.to_string(),
            amount: coins(fee.u128(), denom),
        }))
    }

    pub fn set_vote_fee(
        deps: DepsMut,
        info: MessageInfo,
        fee: Uint128,
    ) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;
        cw_utils::nonpayable(&info)?;
        VOTE_FEE.save(deps.storage, &fee)?;
        Ok(Response::new()
            .add_attribute("action", "set_vote_fee")
            .add_attribute("fee", fee.to_string()))
    }

    pub fn set_daily_vote_limit(
        deps: DepsMut,
        info: MessageInfo,
        limit: u64,
    ) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;
        cw_utils::nonpayable(&info)?;
        if limit == 0 {
            return Err(ContractError::ZeroVoteLimit());
        }
        DAILY_VOTE_LIMIT.save(deps.storage, &limit)?;
        Ok(Response::new()
            .add_attribute("action", "set_daily_vote_limit")
            .add_attribute("limit", limit.to_string()))
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
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use QueryMsg::*;
    match msg {
        TotalVotes { coin_id } => to_json_binary(&TotalVotesResponse {
            votes: TOTAL_VOTES
                .may_load(deps.storage, coin_id.as_slice())?
                .unwrap_or_default(),
        }),
        UserVotesForCoin { coin_id, account } => {
            to_json_binary(&query::user_votes_for_coin(deps, coin_id, &account)?)
        }
        TotalVotesCast {} => to_json_binary(&TotalVotesCastResponse {
            total: TOTAL_VOTES_CAST.load(deps.storage)?,
        }),
        VotedCoinsCount {} => to_json_binary(&VotedCoinsCountResponse {
            count: VOTED_COINS_COUNT.load(deps.storage)?,
        }),
        VotedCoins { start_after, limit } => {
            to_json_binary(&query::voted_coins(deps, start_after, limit)?)
        }
        VotesRemainingToday { account } => {
            to_json_binary(&query::votes_remaining_today(deps, env, &account)?)
        }
        DailyVoteLimit {} => to_json_binary(&DailyVoteLimitResponse {
            limit: DAILY_VOTE_LIMIT.load(deps.storage)?,
        }),
        VoteFee {} => to_json_binary(&VoteFeeResponse {
            fee: VOTE_FEE.load(deps.storage)?,
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
    }
}

mod query {
    use super::*;

    pub fn user_votes_for_coin(
        deps: Deps,
        coin_id: HexBinary,
        account: &str,
    ) -> StdResult<UserVotesForCoinResponse> {
        let account = deps.api.addr_validate(account)?;
        let votes = USER_VOTES
            .may_load(deps.storage, (coin_id.as_slice(), &account))?
            .unwrap_or_default();
        Ok(UserVotesForCoinResponse { votes })
    }

    pub fn voted_coins(
        deps: Deps,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<VotedCoinsResponse> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);
        let coins = VOTED_COINS
            .range(deps.storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| -> StdResult<VotedCoin> {
                let (index, coin_id) = item?;
                let votes = TOTAL_VOTES
                    .may_load(deps.storage, coin_id.as_slice())?
                    .unwrap_or_default();
                Ok(VotedCoin {
                    index,
                    coin_id,
                    votes,
                })
            })
            .collect::<StdResult<Vec<_>>>()?;
        Ok(VotedCoinsResponse { coins })
    }

    pub fn votes_remaining_today(
        deps: Deps,
        env: Env,
        account: &str,
    ) -> StdResult<VotesRemainingResponse> {
        let account = deps.api.addr_validate(account)?;
        let limit = DAILY_VOTE_LIMIT.load(deps.storage)?;
        let window = current_window(deps, &account, env.block.time)?;
        Ok(VotesRemainingResponse {
            remaining: window.remaining(limit),
        })
    }
}
