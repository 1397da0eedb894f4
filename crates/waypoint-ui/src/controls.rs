// crates/waypoint-ui/src/controls.rs
// ============================================================================
// Module: Element Controls
// Description: Locator-based element interaction for page objects.
// Purpose: Click, type, select, and act on table rows with auto-waiting.
// Dependencies: thirtyfour
// ============================================================================

//! ## Overview
//! Every lookup goes through the driver's element query with the session's
//! wait budget, so individual page objects never sleep. Text matching uses
//! XPath with properly quoted literals; generated fixture names may contain
//! any ASCII.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thirtyfour::By;
use thirtyfour::WebElement;
use thirtyfour::components::SelectElement;
use thirtyfour::extensions::query::ElementQueryable;

use crate::error::UiError;
use crate::session::Session;
use crate::views::common;

// ============================================================================
// SECTION: Element Lookup
// ============================================================================

/// Finds one element by CSS selector, waiting up to the session budget.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when no element appears in time.
pub async fn find(session: &Session, css: &str) -> Result<WebElement, UiError> {
    find_by(session, By::Css(css)).await
}

/// Finds one element by locator, waiting up to the session budget.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when no element appears in time.
pub async fn find_by(session: &Session, by: By) -> Result<WebElement, UiError> {
    let element = session
        .driver()
        .query(by)
        .wait(session.timeout(), session.poll())
        .first()
        .await?;
    Ok(element)
}

/// Returns whether any element currently matches, without waiting.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the lookup itself fails.
pub async fn exists_now(session: &Session, by: By) -> Result<bool, UiError> {
    let matches = session.driver().find_all(by).await?;
    Ok(!matches.is_empty())
}

// ============================================================================
// SECTION: Basic Actions
// ============================================================================

/// Clicks the element matching a CSS selector.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the element is missing or unclickable.
pub async fn click(session: &Session, css: &str) -> Result<(), UiError> {
    find(session, css).await?.click().await?;
    Ok(())
}

/// Clicks the first element of `tag` whose text contains `text`.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when no matching element appears in time.
pub async fn click_by_text(session: &Session, tag: &str, text: &str) -> Result<(), UiError> {
    let xpath = text_xpath(tag, text);
    find_by(session, By::XPath(xpath)).await?.click().await?;
    Ok(())
}

/// Clears an input and types the given text.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the input is missing or read-only.
pub async fn input_text(session: &Session, css: &str, text: &str) -> Result<(), UiError> {
    let input = find(session, css).await?;
    input.clear().await?;
    input.send_keys(text).await?;
    Ok(())
}

/// Selects an option in a native `<select>` by its exact visible text.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the select or option is missing.
pub async fn select_by_text(session: &Session, css: &str, label: &str) -> Result<(), UiError> {
    let element = find(session, css).await?;
    let select = SelectElement::new(&element).await?;
    select.select_by_exact_text(label).await?;
    Ok(())
}

/// Fills a typeahead input and clicks the suggested option.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the input or the suggestion is missing.
pub async fn pick_typeahead(session: &Session, css: &str, value: &str) -> Result<(), UiError> {
    let input = find(session, css).await?;
    input.click().await?;
    input.clear().await?;
    input.send_keys(value).await?;
    click_by_text(session, "button", value).await
}

/// Drives a checkbox or switch into the requested state.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the element is missing.
pub async fn set_checkbox(session: &Session, css: &str, on: bool) -> Result<(), UiError> {
    let element = find(session, css).await?;
    if element.is_selected().await? != on {
        element.click().await?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Table Rows
// ============================================================================

/// Finds the table row whose cell text contains `cell_text`.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when no such row appears in time.
pub async fn row_by_cell_text(session: &Session, cell_text: &str) -> Result<WebElement, UiError> {
    let literal = xpath_literal(cell_text);
    let xpath = format!(
        "//{}[{}[contains(normalize-space(.), {literal})]]",
        common::TR_TAG,
        common::TD_TAG
    );
    find_by(session, By::XPath(xpath)).await
}

/// Returns whether a row with the given cell text currently exists.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the lookup itself fails.
pub async fn row_exists_now(session: &Session, cell_text: &str) -> Result<bool, UiError> {
    let literal = xpath_literal(cell_text);
    let xpath = format!(
        "//{}[{}[contains(normalize-space(.), {literal})]]",
        common::TR_TAG,
        common::TD_TAG
    );
    exists_now(session, By::XPath(xpath)).await
}

/// Returns whether a row with the given cell text is currently gone.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the lookup itself fails.
pub async fn row_absent_now(session: &Session, cell_text: &str) -> Result<bool, UiError> {
    Ok(!row_exists_now(session, cell_text).await?)
}

/// Opens a row's kebab menu and clicks the named action.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the row, toggle, or action is missing.
pub async fn row_action(session: &Session, cell_text: &str, action: &str) -> Result<(), UiError> {
    let row = row_by_cell_text(session, cell_text).await?;
    let toggle = row
        .query(By::Css(common::ROW_KEBAB_TOGGLE))
        .wait(session.timeout(), session.poll())
        .first()
        .await?;
    toggle.click().await?;
    click_by_text(session, "button", action).await
}

/// Confirms the destructive-action dialog.
///
/// # Errors
///
/// Returns [`UiError::Driver`] when the confirm button is missing.
pub async fn confirm_danger(session: &Session) -> Result<(), UiError> {
    click(session, common::CONFIRM_DIALOG_BUTTON).await
}

// ============================================================================
// SECTION: XPath Helpers
// ============================================================================

/// Builds the XPath for an element of `tag` containing `text`.
pub(crate) fn text_xpath(tag: &str, text: &str) -> String {
    format!("//{tag}[contains(normalize-space(.), {})]", xpath_literal(text))
}

/// Quotes arbitrary text as an XPath string literal.
///
/// Text with both quote kinds is split into a `concat(...)` expression, so no
/// input can terminate the literal early.
pub(crate) fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        return format!("'{text}'");
    }
    if !text.contains('"') {
        return format!("\"{text}\"");
    }
    let parts: Vec<String> = text
        .split('\'')
        .map(|part| format!("'{part}'"))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}
