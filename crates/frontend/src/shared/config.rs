//! Display settings fetched once at startup

use contracts::shared::remote_config::{RemoteConfig, REMOTE_CONFIG_KEYS};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::{post_envelope, ApiError};
use crate::shared::notifications::Notifications;

pub async fn fetch_remote_config() -> Result<RemoteConfig, ApiError> {
    let data: Option<RemoteConfig> = post_envelope("get/cfg", &REMOTE_CONFIG_KEYS).await?;
    Ok(data.unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct ConfigContext(RwSignal<RemoteConfig>);

impl ConfigContext {
    /// Put defaults in context and start loading the real values
    pub fn provide(notifications: Notifications) -> Self {
        let signal = RwSignal::new(RemoteConfig::default());
        spawn_local(async move {
            match fetch_remote_config().await {
                Ok(config) => {
                    log::debug!("remote config loaded: {:?}", config);
                    signal.set(config);
                }
                Err(e) => {
                    log::error!("failed to load remote config: {}", e);
                    notifications.error(format!("Настройки не загружены: {}", e));
                }
            }
        });
        let ctx = Self(signal);
        provide_context(ctx);
        ctx
    }

    pub fn with<T>(&self, f: impl FnOnce(&RemoteConfig) -> T) -> T {
        self.0.with(f)
    }
}

pub fn use_config() -> ConfigContext {
    expect_context::<ConfigContext>()
}
