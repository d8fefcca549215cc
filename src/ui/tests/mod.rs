//! UI module tests
//!
//! Widget-free test suites: the Controller, the clipboard bridge (over a
//! mock sink), and the toast state machine all run without a display
//! server.

#[cfg(test)]
mod clipboard_tests;
#[cfg(test)]
mod controller_tests;
