use finapi_accounts::AccountDirectory;

/// Application context shared by every handler.
///
/// Owns the process-wide account directory; nothing outlives the process.
#[derive(Debug, Default)]
pub struct AppServices {
    directory: AccountDirectory,
}

impl AppServices {
    pub fn new(directory: AccountDirectory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }
}

pub fn build_services() -> AppServices {
    tracing::info!("using in-memory account directory");
    AppServices::new(AccountDirectory::new())
}
