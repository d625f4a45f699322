use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl DebugLevel {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Warn,
            3 => DebugLevel::Info,
            4 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }
}

/// Subsystem an event originates from. Recorded as the `component` field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Component {
    Identifier,
    Parser,
    Column,
    Query,
    Storage,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Identifier => "identifier",
            Component::Parser => "parser",
            Component::Column => "column",
            Component::Query => "query",
            Component::Storage => "storage",
        };
        f.write_str(name)
    }
}

static DEBUG_LEVEL: AtomicU8 = AtomicU8::new(DebugLevel::Warn as u8);

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn get_debug_level() -> DebugLevel {
    DebugLevel::from_u8(DEBUG_LEVEL.load(Ordering::Relaxed))
}

#[inline]
pub fn should_log(level: DebugLevel) -> bool {
    level != DebugLevel::Off && level <= get_debug_level()
}
