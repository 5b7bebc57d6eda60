use thiserror::Error;

use crate::output::errors::OutputError;
use crate::scan::errors::ScanError;
use crate::settings::errors::SettingsError;

#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
