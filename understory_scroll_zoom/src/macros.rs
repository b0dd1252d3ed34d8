// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "tracing")]
macro_rules! sz_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "understory_scroll_zoom", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sz_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sz_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "understory_scroll_zoom", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sz_debug {
    ($($tt:tt)*) => {};
}
