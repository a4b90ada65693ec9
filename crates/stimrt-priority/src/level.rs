//! Typed priority classes and thread priority levels.
//!
//! Both types keep a `Raw` variant so values the host hands over that have
//! no name here still reach the OS unchanged.

use serde::{Deserialize, Serialize};

/// Process priority class, as accepted by `SetPriorityClass`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessPriority {
    /// `IDLE_PRIORITY_CLASS`
    Idle,
    /// `BELOW_NORMAL_PRIORITY_CLASS`
    BelowNormal,
    /// `NORMAL_PRIORITY_CLASS`
    Normal,
    /// `ABOVE_NORMAL_PRIORITY_CLASS`
    AboveNormal,
    /// `HIGH_PRIORITY_CLASS`
    High,
    /// `REALTIME_PRIORITY_CLASS`
    Realtime,
    /// Any other value, forwarded as-is.
    Raw(u32),
}

impl ProcessPriority {
    const IDLE: u32 = 0x0000_0040;
    const BELOW_NORMAL: u32 = 0x0000_4000;
    const NORMAL: u32 = 0x0000_0020;
    const ABOVE_NORMAL: u32 = 0x0000_8000;
    const HIGH: u32 = 0x0000_0080;
    const REALTIME: u32 = 0x0000_0100;

    /// The Win32 priority-class value.
    pub fn value(self) -> u32 {
        match self {
            ProcessPriority::Idle => Self::IDLE,
            ProcessPriority::BelowNormal => Self::BELOW_NORMAL,
            ProcessPriority::Normal => Self::NORMAL,
            ProcessPriority::AboveNormal => Self::ABOVE_NORMAL,
            ProcessPriority::High => Self::HIGH,
            ProcessPriority::Realtime => Self::REALTIME,
            ProcessPriority::Raw(value) => value,
        }
    }
}

impl From<u32> for ProcessPriority {
    fn from(value: u32) -> Self {
        match value {
            Self::IDLE => ProcessPriority::Idle,
            Self::BELOW_NORMAL => ProcessPriority::BelowNormal,
            Self::NORMAL => ProcessPriority::Normal,
            Self::ABOVE_NORMAL => ProcessPriority::AboveNormal,
            Self::HIGH => ProcessPriority::High,
            Self::REALTIME => ProcessPriority::Realtime,
            other => ProcessPriority::Raw(other),
        }
    }
}

/// Host environments hand over a C `int`; the bit pattern is kept.
impl From<i32> for ProcessPriority {
    fn from(value: i32) -> Self {
        Self::from(value.cast_unsigned())
    }
}

/// Thread priority level, as accepted by `SetThreadPriority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadPriority {
    /// `THREAD_PRIORITY_IDLE`
    Idle,
    /// `THREAD_PRIORITY_LOWEST`
    Lowest,
    /// `THREAD_PRIORITY_BELOW_NORMAL`
    BelowNormal,
    /// `THREAD_PRIORITY_NORMAL`
    Normal,
    /// `THREAD_PRIORITY_ABOVE_NORMAL`
    AboveNormal,
    /// `THREAD_PRIORITY_HIGHEST`
    Highest,
    /// `THREAD_PRIORITY_TIME_CRITICAL`
    TimeCritical,
    /// Any other value, forwarded as-is.
    Raw(i32),
}

impl ThreadPriority {
    /// The Win32 thread priority value.
    pub fn value(self) -> i32 {
        match self {
            ThreadPriority::Idle => -15,
            ThreadPriority::Lowest => -2,
            ThreadPriority::BelowNormal => -1,
            ThreadPriority::Normal => 0,
            ThreadPriority::AboveNormal => 1,
            ThreadPriority::Highest => 2,
            ThreadPriority::TimeCritical => 15,
            ThreadPriority::Raw(value) => value,
        }
    }
}

impl From<i32> for ThreadPriority {
    fn from(value: i32) -> Self {
        match value {
            -15 => ThreadPriority::Idle,
            -2 => ThreadPriority::Lowest,
            -1 => ThreadPriority::BelowNormal,
            0 => ThreadPriority::Normal,
            1 => ThreadPriority::AboveNormal,
            2 => ThreadPriority::Highest,
            15 => ThreadPriority::TimeCritical,
            other => ThreadPriority::Raw(other),
        }
    }
}
