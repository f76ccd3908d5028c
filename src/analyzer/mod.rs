pub mod aggregate;
pub mod filter;
pub mod funnel;
pub mod kpi;
pub mod options;
pub mod overlap;

pub use aggregate::{aggregate, AggregateResult, MESES_ORDENADOS};
pub use filter::{filter_records, FilterCriteria};
pub use funnel::{simulate_funnel, FunnelStage};
pub use kpi::{compute_kpis, Kpis};
pub use options::{filter_options, FilterOptions};
pub use overlap::{compute_overlap, top_zone, OverlapMode, OverlapRegion, OverlapResult, SetId};
