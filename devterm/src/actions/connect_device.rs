//! Connect to the development device
//!
//! The one asynchronous action. The transport does the platform work
//! (chooser, open, configuration, interface claim); the terminal only logs
//! the outcome. Failure is always recoverable and never propagates -- a new
//! attempt requires a fresh user action, there is no retry and no cancel.

use crate::Terminal;
use devterm_device::DeviceTransport;
use tracing::{debug, warn};

impl Terminal {
    /// Ask the transport for a device and log the result.
    ///
    /// Success logs one `sys` console entry naming the device; failure logs
    /// exactly one `error` entry with the reason. Editor state -- store,
    /// mode, panel -- is unchanged either way.
    pub async fn connect_device(&mut self, transport: &dyn DeviceTransport) {
        match transport.connect(&self.device_filter).await {
            Ok(info) => {
                debug!(device = %info, "device connected");
                self.console.sys(format!("Device connected: {info}"));
            }
            Err(err) => {
                warn!(%err, "device connection failed");
                self.console
                    .error(format!("Device connection failed: {err}"));
            }
        }
    }
}
