use vital_cache::ConfiguredSource;
use vital_server::AppState;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `vital serve`.
pub async fn handle(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let addr = args
        .addr
        .clone()
        .unwrap_or_else(|| ctx.config.server.bind_addr());
    let state = AppState::new(ConfiguredSource::from_config(&ctx.config.artifacts)?);
    vital_server::serve(state, &addr).await
}
