use crate::api::backend::{BackendClient, Credentials, Registration};
use crate::config::Config;
use crate::error::Result;
use crate::session::SessionStore;

pub async fn register(config: &Config, name: &str, email: &str, password: &str) -> Result<()> {
    let registration = Registration {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    BackendClient::new(config).register(&registration).await?;
    println!("Account created. Sign in with `donate-cli login`.");
    Ok(())
}

pub async fn login(
    config: &Config,
    session: &mut SessionStore,
    email: &str,
    password: &str,
) -> Result<()> {
    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let token = BackendClient::new(config).login(&credentials).await?;
    let claims = session.establish(&token)?;

    println!("Signed in as {} <{}>.", claims.name, claims.email);
    if claims.is_admin {
        println!("Administrator commands are available.");
    }
    Ok(())
}

pub fn logout(session: &mut SessionStore) -> Result<()> {
    session.clear()?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami(session: &SessionStore) -> Result<()> {
    match session.current_user() {
        Some(claims) => {
            let role = if session.is_administrator() {
                " (administrator)"
            } else {
                ""
            };
            println!("{} <{}>{role}", claims.name, claims.email);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}
