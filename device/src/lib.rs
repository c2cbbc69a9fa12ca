//! Hardware device channel for devterm.
//!
//! The terminal core only ever asks the channel to connect; no data-plane
//! protocol is defined yet. The [`DeviceTransport`] trait enables dependency
//! injection: a frontend supplies the platform transport, while tests use
//! [`FakeDevice`](test::FakeDevice).

mod transport;


pub use transport::{ConnectError, DeviceFilter, DeviceInfo, DeviceTransport};
