//! Route handlers.
//!
//! Each handler parses its query or path input into a typed value, calls
//! exactly one [`Bank`] operation, and serializes the outcome. All inputs
//! come from the query string or path; request bodies are ignored.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use minibank_core::Bank;
use minibank_types::{
    Account, AccountSeq, Amount, BankError, Credentials, Registration, constants,
};

use crate::dto::{AmountQuery, BalanceResponse, LedgerResponse, MessageResponse};
use crate::error::ApiErrorResponse;

/// Shared application state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub bank: Bank,
}

impl AppState {
    #[must_use]
    pub fn new(bank: Bank) -> Self {
        Self { bank }
    }
}

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Unwrap a query extractor, turning a malformed query string into the
/// operation's own validation error.
fn query_or<T>(query: Result<Query<T>, QueryRejection>, error: BankError) -> ApiResult<T> {
    match query {
        Ok(Query(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(%rejection, "Malformed query string");
            Err(error.into())
        }
    }
}

/// `POST /register?id=&password=&confirmpass=`
pub async fn register(
    State(state): State<AppState>,
    query: Result<Query<Registration>, QueryRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let input = query_or(query, BankError::MissingCredentials)?;
    state.bank.register(&input)?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(constants::MSG_REGISTERED)),
    ))
}

/// `POST /login?id=&password=`
pub async fn login(
    State(state): State<AppState>,
    query: Result<Query<Credentials>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let input = query_or(query, BankError::InvalidCredentials)?;
    state.bank.login(&input)?;
    Ok(Json(MessageResponse::new(constants::MSG_LOGIN_OK)))
}

/// `GET /account`
pub async fn list_accounts(State(state): State<AppState>) -> Json<Vec<Account>> {
    Json(state.bank.accounts())
}

/// `GET /account/{user}`
pub async fn get_account(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> ApiResult<Json<Account>> {
    let seq = AccountSeq::parse(&user).ok_or(BankError::AccountNotFound)?;
    Ok(Json(state.bank.account(seq)?))
}

/// `POST /deposit?amount=`
pub async fn deposit(
    State(state): State<AppState>,
    query: Result<Query<AmountQuery>, QueryRejection>,
) -> ApiResult<Json<LedgerResponse>> {
    let params = query_or(query, BankError::InvalidDepositAmount)?;
    let amount =
        Amount::parse(params.amount.as_deref()).ok_or(BankError::InvalidDepositAmount)?;
    let balance = state.bank.deposit(amount)?;
    Ok(Json(LedgerResponse {
        message: constants::MSG_DEPOSIT_OK.to_string(),
        balance,
    }))
}

/// `POST /withdraw?amount=`
pub async fn withdraw(
    State(state): State<AppState>,
    query: Result<Query<AmountQuery>, QueryRejection>,
) -> ApiResult<Json<LedgerResponse>> {
    let params = query_or(query, BankError::InvalidWithdrawAmount)?;
    let amount =
        Amount::parse(params.amount.as_deref()).ok_or(BankError::InvalidWithdrawAmount)?;
    let balance = state.bank.withdraw(amount)?;
    Ok(Json(LedgerResponse {
        message: constants::MSG_WITHDRAW_OK.to_string(),
        balance,
    }))
}

/// `GET /balance`
pub async fn balance(State(state): State<AppState>) -> Json<BalanceResponse> {
    Json(BalanceResponse {
        balance: state.bank.balance(),
    })
}
