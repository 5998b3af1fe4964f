//! Interactive demo driver for the mock login core.
//!
//! Stands in for a login form: reads a username and password from the
//! terminal, then drives the login and user-info exchange and prints the
//! resulting profile. Either step failing stops that submission and
//! prompts again.

use std::io::{self, BufRead, Lines, StdinLock, Write};

use mocklogin::{AuthState, get_user_info, login};

fn prompt(lines: &mut Lines<StdinLock<'static>>, label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok()?;
    lines.next()?.ok()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = AuthState::demo();
    tracing::info!(users = state.users.len(), "mock login ready");

    let mut lines = io::stdin().lock().lines();

    loop {
        let Some(username) = prompt(&mut lines, "username: ") else { break };
        let Some(password) = prompt(&mut lines, "password: ") else { break };

        let Some(response) = login(&state, &username, &password).await else {
            println!("login failed");
            continue;
        };

        let Some(profile) = get_user_info(&state, &response.token).await else {
            println!("login failed");
            continue;
        };

        match serde_json::to_string(&profile) {
            Ok(json) => println!("user info: {json}"),
            Err(e) => tracing::error!(error = %e, "profile display failed"),
        }
    }
}
