// Logging shims. With `feature = "tracing"` these emit `tracing` events under the `vpager`
// target; without it they expand to an empty block and their arguments are never evaluated.

macro_rules! pager_event {
    ($level:ident, $($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::$level!(target: "vpager", $($tt)*);
    }};
}

macro_rules! vtrace {
    ($($tt:tt)*) => {
        pager_event!(trace, $($tt)*)
    };
}

macro_rules! vdebug {
    ($($tt:tt)*) => {
        pager_event!(debug, $($tt)*)
    };
}

macro_rules! vwarn {
    ($($tt:tt)*) => {
        pager_event!(warn, $($tt)*)
    };
}
