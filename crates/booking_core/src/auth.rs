use shared::domain::{AuthIdentity, AuthState};

/// Auth transitions. Two states only: anonymous and authenticated. Any
/// identity payload is accepted; there is no credential validation.
#[derive(Debug, Clone)]
pub enum AuthIntent {
    Login(AuthIdentity),
    Signup(AuthIdentity),
    Logout,
}

pub fn apply(mut state: AuthState, intent: AuthIntent) -> AuthState {
    match intent {
        AuthIntent::Login(identity) | AuthIntent::Signup(identity) => {
            state.user = Some(identity);
            state.is_authenticated = true;
        }
        AuthIntent::Logout => {
            state.user = None;
            state.is_authenticated = false;
        }
    }
    state
}

#[cfg(test)]
#[path = "tests/auth_tests.rs"]
mod tests;
