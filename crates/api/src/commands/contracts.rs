use serde_json::Value;

use super::render;
use crate::screens::ScreenError;
use crate::AppContext;

pub async fn list(context: &AppContext) -> Result<Value, ScreenError> {
    let controller = context.contracts_controller();
    controller.refresh().await;
    render(controller.state())
}
