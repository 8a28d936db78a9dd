//! Macros for ergonomic configuration construction.

/// Build a [`Configuration`](crate::core::Configuration) from identifiers.
///
/// Expands to a [`ConfigurationBuilder`](crate::builder::ConfigurationBuilder)
/// chain and evaluates to `Result<Configuration, BuildError>`.
///
/// # Example
///
/// ```
/// use undo_fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: idle,
///     states: {
///         idle => { start => running },
///         running => { pause => idle, finish => done },
///         done => {},
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.target("running", "finish"), Some("done"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => {
                    $( $event:ident => $target:ident ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::builder::ConfigurationBuilder::new()
            .initial(stringify!($initial))
            $(
                .state(stringify!($state), |state| {
                    state $( .on(stringify!($event), stringify!($target)) )*
                })
            )*
            .build()
    };
}
