use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_DISPATCH_DELAY_MS: u64 = 1000;
pub const DEFAULT_VERIFY_DELAY_MS: u64 = 1000;
pub const DEFAULT_MASKED_MOBILE: &str = "******0176";
pub const DEFAULT_OTP_VALIDITY_MINUTES: i64 = 10;

const WINDOW_CONFIG_KEY: &str = "__UDYAM_CONFIG";
const CONFIG_JSON_PATH: &str = "./config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub otp_dispatch_delay_ms: u64,
    pub otp_verify_delay_ms: u64,
    pub masked_mobile: String,
    pub otp_validity_minutes: i64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            otp_dispatch_delay_ms: DEFAULT_DISPATCH_DELAY_MS,
            otp_verify_delay_ms: DEFAULT_VERIFY_DELAY_MS,
            masked_mobile: DEFAULT_MASKED_MOBILE.to_string(),
            otp_validity_minutes: DEFAULT_OTP_VALIDITY_MINUTES,
        }
    }
}

impl RuntimeConfig {
    pub fn dispatch_delay(&self) -> Duration {
        Duration::from_millis(self.otp_dispatch_delay_ms)
    }

    pub fn verify_delay(&self) -> Duration {
        Duration::from_millis(self.otp_verify_delay_ms)
    }

    pub fn otp_validity(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.otp_validity_minutes.max(1))
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn config_from_window() -> anyhow::Result<Option<RuntimeConfig>> {
    // Optional global object: window.__UDYAM_CONFIG = { otp_dispatch_delay_ms: 500, ... }
    let Some(w) = web_sys::window() else {
        return Ok(None);
    };
    let any = js_sys::Reflect::get(&w, &WINDOW_CONFIG_KEY.into())
        .map_err(|_| anyhow!("failed to read window.{WINDOW_CONFIG_KEY}"))?;
    if any.is_undefined() || any.is_null() {
        return Ok(None);
    }
    let raw = js_sys::JSON::stringify(&any)
        .map_err(|_| anyhow!("window.{WINDOW_CONFIG_KEY} is not serializable"))?;
    let raw: String = raw.into();
    let cfg = serde_json::from_str(&raw)
        .with_context(|| format!("window.{WINDOW_CONFIG_KEY} has an invalid shape"))?;
    Ok(Some(cfg))
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let href = web_sys::window()
        .ok_or_else(|| anyhow!("no window"))?
        .location()
        .href()
        .map_err(|_| anyhow!("failed to read window.location"))?;
    let resp = reqwest::get(config_json_url(&href)?).await?;
    if !resp.status().is_success() {
        return Err(anyhow!("{CONFIG_JSON_PATH} responded with {}", resp.status()));
    }
    Ok(resp.json::<RuntimeConfig>().await?)
}

// The wasm client needs an absolute URL, so resolve relative to the page.
fn config_json_url(page: &str) -> anyhow::Result<reqwest::Url> {
    let base = reqwest::Url::parse(page).with_context(|| format!("invalid page url {page}"))?;
    Ok(base.join(CONFIG_JSON_PATH)?)
}

async fn resolve() -> RuntimeConfig {
    match config_from_window() {
        Ok(Some(cfg)) => return cfg,
        Ok(None) => {}
        Err(err) => log::warn!("Ignoring window config: {err:#}"),
    }
    match fetch_runtime_config().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::debug!("Using default runtime config: {err:#}");
            RuntimeConfig::default()
        }
    }
}

pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let cfg = resolve().await;
    RUNTIME_CONFIG.get_or_init(|| cfg).clone()
}

/// Snapshot of the resolved config, or the defaults before `init` has run.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}
