// Level-gated wrappers around `tracing`. The gate is checked first so that
// argument formatting is skipped entirely when the level is below threshold.

#[macro_export]
macro_rules! bridge_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debugger::debugger::should_log($level) {
            let component = $component;
            match $level {
                $crate::debugger::debugger::DebugLevel::Error => {
                    ::tracing::error!(component = %component, $($arg)*)
                }
                $crate::debugger::debugger::DebugLevel::Warn => {
                    ::tracing::warn!(component = %component, $($arg)*)
                }
                $crate::debugger::debugger::DebugLevel::Info => {
                    ::tracing::info!(component = %component, $($arg)*)
                }
                $crate::debugger::debugger::DebugLevel::Debug => {
                    ::tracing::debug!(component = %component, $($arg)*)
                }
                _ => ::tracing::trace!(component = %component, $($arg)*),
            }
        }
    };
}

#[macro_export]
macro_rules! bridge_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::bridge_log!($crate::debugger::debugger::DebugLevel::Error, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! bridge_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::bridge_log!($crate::debugger::debugger::DebugLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! bridge_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::bridge_log!($crate::debugger::debugger::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! bridge_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::bridge_log!($crate::debugger::debugger::DebugLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! bridge_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::bridge_log!($crate::debugger::debugger::DebugLevel::Trace, $component, $($arg)*)
    };
}
