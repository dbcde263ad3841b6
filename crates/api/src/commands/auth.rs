use serde_json::{json, Value};

use super::to_json;
use crate::screens::ScreenError;
use crate::AppContext;

pub async fn login(context: &AppContext, username: &str, password: &str) -> Result<Value, ScreenError> {
    let identity = context.auth_controller().login(username, password).await?;
    to_json(&identity)
}

pub async fn logout(context: &AppContext) -> Result<Value, ScreenError> {
    context.auth_controller().logout().await?;
    Ok(json!({ "signed_out": true }))
}
