//! Client wrappers for the auth endpoints. The login flow is the only writer
//! of the session store besides logout: a successful login persists the
//! returned token, a failed one leaves the store untouched.

use crate::{
    app_lib::{endpoints, get_json, post_json, AppError},
    features::auth::{
        session,
        types::{LoginRequest, RegisterRequest, TokenResponse, UserAccount},
    },
};

/// Exchanges credentials for a token and persists it. Failures (non-2xx,
/// malformed body) surface unchanged and nothing is stored.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, AppError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response: TokenResponse = post_json(endpoints::LOGIN, &request).await?;
    session::set_credential(&response.auth_token);
    Ok(response)
}

/// Local sign-out only: the backend has no token revocation endpoint, so
/// clearing the persisted credential is the whole operation. Idempotent.
pub fn logout() {
    session::clear_credential();
}

/// Creates an account. Does not sign the new user in; the caller decides
/// whether to send them to the login form.
pub async fn register(
    username: &str,
    password: &str,
    re_password: &str,
    email: &str,
) -> Result<UserAccount, AppError> {
    let request = RegisterRequest::new(username, password, re_password, email);
    post_json(endpoints::REGISTER, &request).await
}

/// Fetches the signed-in account for display.
pub async fn fetch_me() -> Result<UserAccount, AppError> {
    get_json(endpoints::ME).await
}

#[cfg(test)]
mod tests {
    use super::logout;
    use crate::features::auth::session;

    #[test]
    fn logout_clears_and_stays_cleared() {
        session::set_credential("tok");
        logout();
        assert!(!session::has_credential());

        // second call is a no-op, not a failure
        logout();
        assert!(!session::has_credential());
    }
}
