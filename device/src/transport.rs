//! Device transport abstraction.
//!
//! Connecting walks the same three steps regardless of transport: open the
//! device, select a configuration, claim the interface. Each step has its own
//! failure in [`ConnectError`] so the console line names what went wrong.
//! All failures are recoverable; a new attempt requires a fresh user action.

use async_trait::async_trait;
use thiserror::Error;

/// Identity of a connected device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Human-readable product name reported by the device
    pub product_name: String,
    /// USB vendor id
    pub vendor_id: u16,
    /// USB product id
    pub product_id: u16,
}

impl std::fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:04x}:{:04x})",
            self.product_name, self.vendor_id, self.product_id
        )
    }
}

/// Constraints handed to the platform device chooser.
///
/// An empty allowlist offers every device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    /// Acceptable vendor ids
    pub vendor_ids: Vec<u16>,
}

impl DeviceFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn vendors(vendor_ids: Vec<u16>) -> Self {
        Self { vendor_ids }
    }

    /// Whether a device with the given vendor id passes the filter.
    pub fn matches(&self, vendor_id: u16) -> bool {
        self.vendor_ids.is_empty() || self.vendor_ids.contains(&vendor_id)
    }
}

/// Errors that can occur while opening the device channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectError {
    /// The chooser was dismissed without picking a device
    #[error("no device selected")]
    NoDeviceSelected,

    /// The platform refused access to the device
    #[error("permission denied by platform")]
    PermissionDenied,

    /// The device could not be opened
    #[error("failed to open device: {0}")]
    OpenFailed(String),

    /// The device rejected the requested configuration
    #[error("device rejected configuration {0}")]
    ConfigurationRejected(u8),

    /// The interface could not be claimed
    #[error("failed to claim interface {0}")]
    InterfaceClaimFailed(u8),
}

/// Abstraction over the hardware channel.
///
/// Production frontends wrap whatever the platform offers; tests use
/// [`FakeDevice`](crate::test::FakeDevice). The terminal core treats the
/// channel as opaque: it connects, logs the outcome, and nothing more.
#[async_trait]
pub trait DeviceTransport: Send + Sync {
    /// Ask the platform to choose, open, configure, and claim a device.
    ///
    /// Resolves with the device identity on success. Every failure mode maps
    /// to a [`ConnectError`]; none are fatal to the caller.
    async fn connect(&self, filter: &DeviceFilter) -> Result<DeviceInfo, ConnectError>;
}
