// system-tests/tests/suites/user_admin.rs
// ============================================================================
// Module: User Administration Scenarios
// Description: Auth-console user lifecycle with role mapping.
// Purpose: Cover user creation, password setting, and role changes.
// Dependencies: helpers, waypoint-ui, waypoint-data
// ============================================================================

//! ## Overview
//! Drives the auth console under the planner base URL: create a user, set a
//! password, grant and revoke a built-in realm role, delete the user. The
//! model's role list is asserted against every UI role change.

use helpers::artifacts::TestReporter;
use helpers::browser;
use waypoint_data::random_email;
use waypoint_data::random_word;
use waypoint_ui::Session;
use waypoint_ui::models::User;

use crate::helpers;

/// Built-in realm role present on every deployment.
const BUILTIN_ROLE: &str = "offline_access";

#[tokio::test(flavor = "multi_thread")]
async fn user_lifecycle_with_roles() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("user_lifecycle_with_roles")?;
    let config = browser::load_config()?;
    let console_password = config.require_keycloak_admin_password()?.to_string();
    let session = Session::connect(&config).await.map_err(|err| err.to_string())?;

    User::login_admin(&session, &console_password).await?;

    let mut user = User::new(
        format!("user-{}", random_word(6)),
        format!("pw-{}", random_word(12)),
        random_word(6),
        random_word(8),
        random_email(),
    );
    user.create(&session).await?;
    user.define_password(&session).await?;

    user.add_role(&session, BUILTIN_ROLE).await?;
    require(
        user.roles.iter().any(|role| role == BUILTIN_ROLE),
        "granted role missing from the model",
    )?;

    user.remove_role(&session, BUILTIN_ROLE).await?;
    require(
        !user.roles.iter().any(|role| role == BUILTIN_ROLE),
        "revoked role still on the model",
    )?;

    let mut notes = vec![format!("user {} exercised password and role flows", user.username)];
    if let Err(err) = user.delete(&session).await {
        notes.push(format!("teardown: failed to delete user: {err}"));
    }
    if let Err(err) = session.quit().await {
        notes.push(format!("teardown: failed to quit session: {err}"));
    }

    reporter.finish("pass", notes, vec!["summary.json".to_string(), "summary.md".to_string()])?;
    drop(reporter);
    Ok(())
}

fn require(condition: bool, message: impl Into<String>) -> Result<(), Box<dyn std::error::Error>> {
    if condition { Ok(()) } else { Err(message.into().into()) }
}
