// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Encode, create and read, the three shapes of a sample

use args::{LogArgs, exit_on_error};
use config::YangEntity;
use provider::{
    CodecService, CodecServiceProvider, CrudService, DeviceUrl, EncodingFormat,
    NetconfServiceProvider, ProviderError,
};
use std::process::ExitCode;
use tracing::{error, info};

/// Sets up logging from the command line. Bad logging options end the process.
pub fn init(log: &LogArgs) {
    exit_on_error(log.init_logging());
}

/// XML payload of `entity`
pub fn encode<T: YangEntity>(entity: &T) -> Result<String, ProviderError> {
    let provider = CodecServiceProvider::new(EncodingFormat::Xml);
    CodecService::new().encode(&provider, entity)
}

/// Pushes `entity` to the device and closes the session.
pub fn create<T: YangEntity>(device: &DeviceUrl, entity: &T) -> Result<(), ProviderError> {
    let mut provider = NetconfServiceProvider::connect(device)?;
    CrudService::new().create(&mut provider, entity)?;
    info!("Created {} on {device}", T::NAME);
    provider.close()
}

/// Reads the whole model `T` from the device.
pub fn read<T: YangEntity>(device: &DeviceUrl) -> Result<T, ProviderError> {
    let mut provider = NetconfServiceProvider::connect(device)?;
    let entity = CrudService::new().read(&mut provider, &T::default())?;
    provider.close()?;
    Ok(entity)
}

/// Exit status of a sample. Failures of the device collaborators are logged.
#[must_use]
pub fn exit_with(result: Result<(), ProviderError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
