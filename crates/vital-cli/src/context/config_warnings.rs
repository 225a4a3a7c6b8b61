use vital_config::VitalConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &VitalConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VitalConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.warehouse.is_configured() && has_env_prefix(&env_keys, "VITAL_WAREHOUSE") {
        warnings.push(
            "Warehouse config appears default while VITAL_WAREHOUSE* env vars exist. Use double underscores (example: VITAL_WAREHOUSE__ACCESS_TOKEN)."
                .to_string(),
        );
    }

    if !config.artifacts.is_remote() && has_env_prefix(&env_keys, "VITAL_ARTIFACTS_") {
        warnings.push(
            "Artifacts config appears default while VITAL_ARTIFACTS_* env vars exist. Use double underscores (example: VITAL_ARTIFACTS__BASE_URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key[prefix.len()..].starts_with("__"))
}
