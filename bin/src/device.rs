//! Device transport for the text frontend.

use async_trait::async_trait;
use devterm_device::{ConnectError, DeviceFilter, DeviceInfo, DeviceTransport};

/// Transport for platforms without a device channel.
///
/// The text frontend has no chooser and no bus access, so every connect
/// attempt fails the same recoverable way and ends up as one console error
/// line. A frontend with real hardware access supplies its own transport.
pub struct UnavailableTransport;

#[async_trait]
impl DeviceTransport for UnavailableTransport {
    async fn connect(&self, _filter: &DeviceFilter) -> Result<DeviceInfo, ConnectError> {
        Err(ConnectError::OpenFailed(
            "no device channel in the text frontend".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_fails_recoverably() {
        let err = UnavailableTransport
            .connect(&DeviceFilter::any())
            .await
            .expect_err("no channel");
        assert!(matches!(err, ConnectError::OpenFailed(_)));
    }
}
