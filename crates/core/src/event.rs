/// Everything that can end the controller's idle wait between two cycles.
///
/// Sources:
/// - Delay timer          → `Tick`
/// - Config watcher task  → `ConfigReloaded`
/// - Ctrl-C signal        → `Shutdown`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The inter-cycle delay elapsed; start the next cycle.
    Tick,
    /// Config file changed on disk; reload before the next cycle.
    ConfigReloaded,
    /// Graceful shutdown requested.
    Shutdown,
}
