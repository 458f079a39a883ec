//! Device emulation profiles.
//!
//! Exactly two profiles exist, one per [`Device`], each a fixed
//! constant record of viewport and network/CPU throttling parameters.
//! The values are policy constants, not computed.

use serde::{Deserialize, Serialize};

use crate::request::Device;

/// Screen emulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenEmulation {
    /// Emulate a mobile layout
    pub mobile: bool,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Device pixel ratio
    pub device_scale_factor: f64,
    /// Disable screen emulation entirely
    pub disabled: bool,
}

/// Network and CPU throttling parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkThrottling {
    /// Simulated round-trip time in milliseconds
    pub rtt_ms: u32,
    /// Simulated throughput in kilobits per second
    pub throughput_kbps: f64,
    /// CPU slowdown multiplier
    pub cpu_slowdown_multiplier: f64,
    /// Extra per-request latency in milliseconds
    pub request_latency_ms: u32,
    /// Download throughput override; 0 leaves `throughput_kbps` in effect
    pub download_throughput_kbps: f64,
    /// Upload throughput override; 0 leaves `throughput_kbps` in effect
    pub upload_throughput_kbps: f64,
}

/// The combination of form factor, viewport, and throttling simulating
/// a device class for one audit run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmulationProfile {
    /// Device class this profile simulates
    pub form_factor: Device,
    /// Viewport emulation
    pub screen: ScreenEmulation,
    /// Network and CPU throttling
    pub throttling: NetworkThrottling,
}

impl EmulationProfile {
    /// Resolve the emulation profile for a device class
    #[must_use]
    pub const fn resolve(device: Device) -> Self {
        match device {
            Device::Desktop => Self::desktop(),
            Device::Mobile => Self::mobile(),
        }
    }

    /// Desktop profile: 1350x940 viewport, 40ms RTT, ~10Mbps, no CPU slowdown
    #[must_use]
    pub const fn desktop() -> Self {
        Self {
            form_factor: Device::Desktop,
            screen: ScreenEmulation {
                mobile: false,
                width: 1350,
                height: 940,
                device_scale_factor: 1.0,
                disabled: false,
            },
            throttling: NetworkThrottling {
                rtt_ms: 40,
                throughput_kbps: 10_240.0,
                cpu_slowdown_multiplier: 1.0,
                request_latency_ms: 0,
                download_throughput_kbps: 0.0,
                upload_throughput_kbps: 0.0,
            },
        }
    }

    /// Mobile profile: 412x823 viewport at 1.75 dpr, 150ms RTT,
    /// ~1.6Mbps, 4x CPU slowdown
    #[must_use]
    pub const fn mobile() -> Self {
        Self {
            form_factor: Device::Mobile,
            screen: ScreenEmulation {
                mobile: true,
                width: 412,
                height: 823,
                device_scale_factor: 1.75,
                disabled: false,
            },
            throttling: NetworkThrottling {
                rtt_ms: 150,
                throughput_kbps: 1_638.4,
                cpu_slowdown_multiplier: 4.0,
                request_latency_ms: 0,
                download_throughput_kbps: 0.0,
                upload_throughput_kbps: 0.0,
            },
        }
    }
}
