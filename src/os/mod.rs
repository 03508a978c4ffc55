//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! single operating system service the draw engine depends on: the kernel's
//! cryptographically secure random byte source.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same
//! `sys_random(&mut [u8])` function, so the rest of the crate never names a
//! platform.
//!
//! The OS source is assumed to be safe for concurrent use. It is never
//! configured or reseeded from here.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
