use serde_json::Value;

use super::render;
use crate::screens::ScreenError;
use crate::AppContext;

pub async fn show(context: &AppContext) -> Result<Value, ScreenError> {
    render(context.profile_controller().load().await)
}
