// Controller logging. Events go to the `vpager_adapter` target when `feature = "tracing"` is
// enabled and vanish otherwise.

macro_rules! controller_event {
    ($level:ident, $($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::$level!(target: "vpager_adapter", $($tt)*);
    }};
}

macro_rules! atrace {
    ($($tt:tt)*) => {
        controller_event!(trace, $($tt)*)
    };
}

macro_rules! adebug {
    ($($tt:tt)*) => {
        controller_event!(debug, $($tt)*)
    };
}
