use std::path::PathBuf;

const APP_FOLDER: &str = "lexo";

/// Default data directory for persisted records, under the platform
/// data dir. Deployments usually override this via configuration.
pub fn compute_default_base() -> Option<PathBuf> {
    let data_dir = dirs::data_dir()?;
    Some(data_dir.join(APP_FOLDER))
}
