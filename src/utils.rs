use crate::objects::JsError;

/// Confirmation capability: answers whether the user approved a destructive
/// action. The console takes one of these as a prop, so a modal dialog or a
/// test double can replace the browser prompt without touching the callers.
pub type ConfirmFn = fn(&str) -> Result<bool, JsError>;

/// [ConfirmFn] backed by the browser's blocking confirm dialog.
pub fn confirm(message: &str) -> Result<bool, JsError> {
    web_sys::window()
        .ok_or("error getting window")?
        .confirm_with_message(message)
        .map_err(Into::into)
}
