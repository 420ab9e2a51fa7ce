//!
//! The unmodified `iperf3 --json` output.
//!

pub mod sum;

use crate::model::record::sample::metric::Metric;

use self::sum::CpuUtilization;
use self::sum::Sum;

/// Scale factor from bits per second to Mbits per second.
const BITS_PER_MEGABIT: f64 = 1e6;

///
/// The unmodified `iperf3 --json` output.
///
#[derive(Debug, serde::Deserialize)]
pub struct Iperf3Report {
    /// The end-of-run section with the totals.
    pub end: End,
}

///
/// The end-of-run section of the iperf3 output.
///
#[derive(Debug, serde::Deserialize)]
pub struct End {
    /// Totals over all streams on the sending side.
    pub sum_sent: Sum,
    /// Totals over all streams on the receiving side.
    pub sum_received: Sum,
    /// CPU utilization on both hosts.
    #[serde(default)]
    pub cpu_utilization_percent: Option<CpuUtilization>,
}

impl Iperf3Report {
    ///
    /// Distills the report into the record's metric form.
    ///
    pub fn into_metrics(self) -> Vec<Metric> {
        let End {
            sum_sent,
            sum_received,
            cpu_utilization_percent,
        } = self.end;

        let sender_extra = cpu_utilization_percent
            .as_ref()
            .map(|cpu| format!("host CPU: {:.1} %", cpu.host_total));
        let receiver_extra = cpu_utilization_percent
            .as_ref()
            .map(|cpu| format!("remote CPU: {:.1} %", cpu.remote_total));

        vec![
            Metric::new(
                "sender throughput".to_owned(),
                sum_sent.bits_per_second / BITS_PER_MEGABIT,
                "Mbits/sec".to_owned(),
                sender_extra,
            ),
            Metric::new(
                "receiver throughput".to_owned(),
                sum_received.bits_per_second / BITS_PER_MEGABIT,
                "Mbits/sec".to_owned(),
                receiver_extra,
            ),
        ]
    }
}
