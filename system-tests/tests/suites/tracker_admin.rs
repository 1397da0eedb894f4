// system-tests/tests/suites/tracker_admin.rs
// ============================================================================
// Module: Tracker Administration Scenarios
// Description: Credential and instance lifecycle on the admin screens.
// Purpose: Cover tracker administration without exporting anything.
// Dependencies: helpers, waypoint-ui, waypoint-data
// ============================================================================

//! ## Overview
//! Creates a basic-auth credential, binds a cloud instance to it, waits for
//! the instance to report Connected, then tears down in dependency order:
//! instance first, credential after.

use helpers::artifacts::TestReporter;
use helpers::browser;
use waypoint_data::CredentialKind;
use waypoint_data::random_credential;
use waypoint_data::random_url;
use waypoint_data::random_word;
use waypoint_ui::models::Jira;
use waypoint_ui::models::JiraCredential;
use waypoint_ui::models::JiraKind;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn credential_and_instance_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("credential_and_instance_lifecycle")?;
    let config = browser::load_config()?;
    let session = browser::admin_session(&config).await?;

    let email = config.require_jira_cloud_email()?.to_string();
    let token = config.require_jira_cloud_token()?.to_string();
    let payload = random_credential(CredentialKind::JiraBasic, Some(&email), Some(&token));
    let mut credential = JiraCredential::new(payload.name, payload.email, payload.token);
    credential.create(&session).await?;

    let mut instance = Jira::new(
        format!("jira-{}", random_word(5)),
        config.require_jira_cloud_url()?,
        credential.name.clone(),
        JiraKind::Cloud,
    );
    // create waits for the Connected state, which proves the credential works.
    instance.create(&session).await?;

    credential.update(&session, &email, &token).await?;

    // The Connected probe already passed; a generated URL exercises the edit
    // form without needing a second live tracker.
    let stale_url = random_url();
    instance.edit_url(&session, &stale_url).await?;

    let mut notes = vec!["instance reported Connected with the created credential".to_string()];
    if let Err(err) = instance.delete(&session).await {
        notes.push(format!("teardown: failed to delete instance: {err}"));
    }
    if let Err(err) = credential.delete(&session).await {
        notes.push(format!("teardown: failed to delete credential: {err}"));
    }
    if let Err(err) = session.quit().await {
        notes.push(format!("teardown: failed to quit session: {err}"));
    }

    reporter.finish("pass", notes, vec!["summary.json".to_string(), "summary.md".to_string()])?;
    drop(reporter);
    Ok(())
}
