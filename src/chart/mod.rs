pub mod dispatcher;
pub mod kind;
pub mod palette;
pub mod spec;

pub use dispatcher::{ChartRegistry, RenderBackend, RenderHandle};
pub use kind::{resolve_chart_type, ChartKind, Orientation, ResolvedChart, SlotContext};
pub use palette::{Hsl, PaletteSettings};
pub use spec::{ChartData, ChartSpec, Slot};
