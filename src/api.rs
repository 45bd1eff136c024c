use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::model::{Expense, NewExpense, User};

/// Same-origin by default; the session cookie identifies the user.
pub const API_BASE_URL: &str = "";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server returned status {0}")]
    Status(u16),
}

/// `GET /api/user` — identity for the current session. A non-success status
/// means "not logged in"; callers switch to the login view without retrying.
pub async fn fetch_user() -> Result<User, ApiError> {
    let url = format!("{}/api/user", API_BASE_URL);
    let resp = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<User>().await?)
}

/// `GET /api/expenses` — the full expense list for the session.
pub async fn fetch_expenses() -> Result<Vec<Expense>, ApiError> {
    let url = format!("{}/api/expenses", API_BASE_URL);
    let resp = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<Vec<Expense>>().await?)
}

/// `POST /api/expenses` — returns the created record with its server id.
pub async fn create_expense(fields: &NewExpense) -> Result<Expense, ApiError> {
    let url = format!("{}/api/expenses", API_BASE_URL);
    let resp = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(fields)?
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<Expense>().await?)
}

/// `PUT /api/expenses/{id}` — returns the updated record.
pub async fn update_expense(id: i64, fields: &NewExpense) -> Result<Expense, ApiError> {
    let url = format!("{}/api/expenses/{}", API_BASE_URL, id);
    let resp = Request::put(&url)
        .credentials(RequestCredentials::Include)
        .json(fields)?
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<Expense>().await?)
}

/// `DELETE /api/expenses/{id}`.
pub async fn delete_expense(id: i64) -> Result<(), ApiError> {
    let url = format!("{}/api/expenses/{}", API_BASE_URL, id);
    let resp = Request::delete(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}
