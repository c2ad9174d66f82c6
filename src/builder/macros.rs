//! Macros for ergonomic configuration literals.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a literal table.
///
/// States appear in the configuration in the order they are written.
///
/// # Example
///
/// ```
/// use fsmkit::machine_config;
///
/// let config = machine_config! {
///     initial: "idle",
///     "idle" => { "go" => "running" },
///     "running" => { "stop" => "idle", "finish" => "done" },
///     "done" => {},
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.target("running", "finish"), Some("done"));
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        $(
            $state:expr => { $($event:expr => $target:expr),* $(,)? }
        ),* $(,)?
    ) => {{
        let config = $crate::core::MachineConfig::new($initial);
        $(
            let config = config.with_state(
                $state,
                $crate::core::StateDef::new() $(.on($event, $target))*,
            );
        )*
        config
    }};
}
