use agro_auth::SessionState;
use agro_config::AgroConfig;
use agro_db::AgroService;

/// Resources for record commands, opened once the route guard has passed.
pub struct AppContext {
    pub service: AgroService,
    pub config: AgroConfig,
    pub session: SessionState,
}

impl AppContext {
    /// Open the record store stamped with the session's identity.
    pub async fn open(config: AgroConfig, session: SessionState) -> anyhow::Result<Self> {
        let service = AgroService::open(&config.database, session.identity.clone()).await?;
        Ok(Self {
            service,
            config,
            session,
        })
    }
}
