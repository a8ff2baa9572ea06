/// Global Tokio runtime for async HTTP operations
///
/// egui's update loop is synchronous, but the price fetch and the simulated
/// settlement run on tokio. This static runtime bridges the two: `main`
/// enters the runtime before starting the GUI loop so that handlers can
/// call `tokio::spawn`, and tasks report back through the event channel.
///
/// Usage:
/// ```rust,no_run
/// use swapdesk::utils::runtime::TOKIO_RT;
///
/// let _enter = TOKIO_RT.enter();
/// // tokio::spawn is now available on this thread
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
