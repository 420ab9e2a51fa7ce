//!
//! Per-direction totals of an iperf3 run.
//!

///
/// Per-direction totals of an iperf3 run.
///
/// Only the fields the record needs are read; the rest of the iperf3 output
/// is ignored.
///
#[derive(Debug, serde::Deserialize)]
pub struct Sum {
    /// Measured throughput in bits per second.
    pub bits_per_second: f64,
    /// Transferred bytes.
    #[serde(default)]
    pub bytes: u64,
    /// Duration of the measurement in seconds.
    #[serde(default)]
    pub seconds: f64,
}

///
/// CPU utilization percentages reported by iperf3.
///
#[derive(Debug, serde::Deserialize)]
pub struct CpuUtilization {
    /// Total CPU utilization on the sending host.
    pub host_total: f64,
    /// Total CPU utilization on the receiving host.
    pub remote_total: f64,
}
