//! Sidepanes: layout and interaction state for two collapsible side panes.
//!
//! Two side panes (left, right) flank a central content region inside a
//! viewport of limited width. This crate decides, for each pane:
//! - whether it is pinned open, hover-revealed (temporary) or closed
//! - how wide it is, within fixed bounds, including drag-to-resize
//! - which pane gives way when the viewport cannot hold everything
//! - what survives a restart, through a pluggable persistence adapter
//!
//! Rendering is left to the host. The host reports viewport widths, pointer
//! samples with element bounding boxes, toggle clicks and drag gestures, and
//! reads back plain [`LayoutSnapshot`] values.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Replay binary (main.rs)                            │  ← JSON-lines driver
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Public surface
//! │  - SidepanesProvider / Sidepanes handle             │
//! │  - SidepanesCoordinator                             │
//! │  - Event dispatch                                   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Interaction   │   │ Layout        │   │ Storage       │
//! │ (interaction/)│   │ (layout/)     │   │ (storage/)    │
//! │ - Hover intent│   │ - Pane store  │   │ - Adapter API │
//! │ - Resize drag │   │ - Arbitration │   │ - JSON file   │
//! │ - Geometry    │   │ - Viewport    │   │ - Bridge      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Timing & Infrastructure                    │
//! │  - Pane model, constants, errors (domain/)          │
//! │  - Clocks and timer slots (timing/)                 │
//! │  - Data directory resolution (infrastructure/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based span export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Coordinator, provider/handle and event dispatch
//! - [`domain`]: Pane model, constants and errors
//! - [`layout`]: Pane store, space arbitration, viewport debounce, derived views
//! - [`interaction`]: Hover intent, resize drag, pointer geometry
//! - [`storage`]: Persistence adapters and the bridge
//! - [`timing`]: Clocks and cancellable timer slots
//! - [`infrastructure`]: Data directory resolution
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! [`Config`] can be built in code or read from TOML:
//!
//! ```toml
//! trace_level = "info"
//! persistence_file = "~/.local/share/sidepanes/panes.json"
//!
//! [left]
//! open_state = "pinned"
//! closed_style = "compact"
//!
//! [right]
//! width = 360
//!
//! [timing]
//! open_delay_ms = 500
//! viewport_debounce_ms = 100
//!
//! [sensors.right]
//! inner = 16.0
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sidepanes::domain::OpenState;
//! use sidepanes::{initialize, Config};
//!
//! let provider = initialize(Config::default(), 1000);
//! let panes = provider.handle();
//!
//! // 1000px cannot hold both panes plus the central minimum:
//! // pinning the right pane closes the left one.
//! panes.open_right_pane()?;
//! assert_eq!(panes.left_pane()?.open_state, OpenState::Closed);
//! assert_eq!(panes.right_pane()?.open_state, OpenState::Pinned);
//! # Ok::<(), sidepanes::SidepanesError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pull-driven timers
//!
//! Hover delays and the viewport debounce are deadlines, not threads. The host
//! calls [`SidepanesCoordinator::tick`] when [`SidepanesCoordinator::next_deadline`]
//! is reached, and tests drive time with a [`timing::ManualClock`].
//!
//! ## Failures stop at the edges
//!
//! Persistence failures are logged and replaced by defaults. The only errors a
//! caller of the handle can see are programmer errors: using a handle without a
//! provider, or re-entering from an observer.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod interaction;
pub mod layout;
pub mod storage;
pub mod timing;

pub mod observability;

pub use app::{handle_event, Event, Sidepanes, SidepanesCoordinator, SidepanesProvider};
pub use domain::{OpenState, PaneConfig, PaneState, Result, Side, SidepanesError};
pub use layout::{LayoutSnapshot, PaneView};

use crate::domain::{LEAVE_DEBOUNCE_MS, OPEN_DELAY_MS, REOPEN_COOLDOWN_MS, VIEWPORT_DEBOUNCE_MS};
use crate::interaction::{HoverTiming, SensorGeometry};
use crate::storage::{JsonFilePersistence, MemoryPersistence, PersistenceAdapter};
use crate::timing::Millis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Every delay the crate uses, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Trigger-zone dwell before a hover reveal.
    pub open_delay_ms: Millis,
    /// Grace period after the pointer leaves a temporary pane.
    pub leave_debounce_ms: Millis,
    /// Window after a temporary close during which hover cannot reopen.
    pub reopen_cooldown_ms: Millis,
    /// Trailing debounce on viewport width samples. Zero applies immediately.
    pub viewport_debounce_ms: Millis,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            open_delay_ms: OPEN_DELAY_MS,
            leave_debounce_ms: LEAVE_DEBOUNCE_MS,
            reopen_cooldown_ms: REOPEN_COOLDOWN_MS,
            viewport_debounce_ms: VIEWPORT_DEBOUNCE_MS,
        }
    }
}

impl Timing {
    /// The hover subset.
    #[must_use]
    pub const fn hover(&self) -> HoverTiming {
        HoverTiming {
            open_delay_ms: self.open_delay_ms,
            leave_debounce_ms: self.leave_debounce_ms,
            reopen_cooldown_ms: self.reopen_cooldown_ms,
        }
    }
}

/// Mount configuration.
///
/// # Example
///
/// ```rust
/// use sidepanes::domain::{ClosedStyle, PaneConfig};
/// use sidepanes::storage::MemoryPersistence;
/// use sidepanes::Config;
///
/// let config = Config {
///     persistence: Some(Box::new(MemoryPersistence::new())),
///     default_right_pane: PaneConfig::with_closed_style(ClosedStyle::Compact),
///     ..Default::default()
/// };
/// assert!(config.persistence.is_some());
/// ```
#[derive(Default)]
pub struct Config {
    /// Persistence backend. `None` disables persistence.
    pub persistence: Option<Box<dyn PersistenceAdapter>>,

    /// Left pane overrides. Unset fields fall back to persisted values, then
    /// to the built-in defaults (pinned, compact, 320px).
    pub default_left_pane: PaneConfig,

    /// Right pane overrides. Built-in defaults: closed, hidden, 320px.
    pub default_right_pane: PaneConfig,

    /// Hover and debounce delays.
    pub timing: Timing,

    /// Sensor dead zones.
    pub sensors: SensorGeometry,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. `None` leaves
    /// tracing uninitialized.
    pub trace_level: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("persistence", &self.persistence.is_some())
            .field("default_left_pane", &self.default_left_pane)
            .field("default_right_pane", &self.default_right_pane)
            .field("timing", &self.timing)
            .field("sensors", &self.sensors)
            .field("trace_level", &self.trace_level)
            .finish()
    }
}

/// Serializable form of [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Backend: `"none"`, `"memory"` or `"json"`. Defaults to `"json"` when
    /// `persistence_file` is set and to `"none"` otherwise.
    pub persistence: Option<String>,

    /// JSON persistence file. A leading `~` expands to `$HOME`.
    pub persistence_file: Option<String>,

    /// Left pane overrides.
    pub left: PaneConfig,

    /// Right pane overrides.
    pub right: PaneConfig,

    /// Delays.
    pub timing: Timing,

    /// Sensor dead zones.
    pub sensors: SensorGeometry,

    /// Tracing level.
    pub trace_level: Option<String>,
}

impl Config {
    /// Builds a configuration from parsed settings, opening the selected
    /// persistence backend.
    ///
    /// # Errors
    ///
    /// Returns [`SidepanesError::Config`] for an unknown or contradictory
    /// backend selection, and an I/O error if the JSON file's directory cannot
    /// be created.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let home = std::env::var("HOME").ok();
        let file = settings
            .persistence_file
            .as_deref()
            .map(|path| PathBuf::from(infrastructure::expand_tilde(path, home.as_deref())));

        let persistence: Option<Box<dyn PersistenceAdapter>> =
            match (settings.persistence.as_deref(), file) {
                (None | Some("none"), None) => None,
                (Some("memory"), None) => Some(Box::new(MemoryPersistence::new())),
                (Some("json"), None) => Some(Box::new(JsonFilePersistence::new(
                    infrastructure::default_persistence_file(),
                )?)),
                (None | Some("json"), Some(path)) => Some(Box::new(JsonFilePersistence::new(path)?)),
                (Some(backend @ ("none" | "memory")), Some(_)) => {
                    return Err(SidepanesError::Config(format!(
                        "persistence_file is set but persistence is \"{backend}\""
                    )));
                }
                (Some(other), _) => {
                    return Err(SidepanesError::Config(format!(
                        "unknown persistence backend \"{other}\""
                    )));
                }
            };

        Ok(Self {
            persistence,
            default_left_pane: settings.left,
            default_right_pane: settings.right,
            timing: settings.timing,
            sensors: settings.sensors,
            trace_level: settings.trace_level,
        })
    }

    /// Parses a TOML settings document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sidepanes::domain::OpenState;
    /// use sidepanes::Config;
    ///
    /// let config = Config::from_toml_str(
    ///     r#"
    ///     [right]
    ///     open_state = "pinned"
    ///     width = 9000
    ///
    ///     [timing]
    ///     open_delay_ms = 250
    ///     "#,
    /// )?;
    /// assert_eq!(config.default_right_pane.open_state, Some(OpenState::Pinned));
    /// assert_eq!(config.timing.open_delay_ms, 250);
    /// assert_eq!(config.timing.leave_debounce_ms, 100);
    /// assert!(config.persistence.is_none());
    /// # Ok::<(), sidepanes::SidepanesError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SidepanesError::Config`] if the document is malformed, plus
    /// the errors of [`from_settings`](Self::from_settings).
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)
            .map_err(|e| SidepanesError::Config(format!("failed to parse settings: {e}")))?;
        Self::from_settings(settings)
    }

    /// Reads and parses a TOML settings file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, plus the errors of
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading settings");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Mounts the side panes with the system clock.
///
/// Initializes tracing first when `config.trace_level` is set.
///
/// # Example
///
/// ```rust
/// use sidepanes::{initialize, Config};
///
/// let provider = initialize(Config::default(), 1440);
/// let panes = provider.handle();
/// assert!(panes.left_pane()?.is_expanded);
/// # Ok::<(), sidepanes::SidepanesError>(())
/// ```
#[must_use]
pub fn initialize(config: Config, viewport_width: u32) -> SidepanesProvider {
    if config.trace_level.is_some() {
        observability::init_tracing(&config);
    }
    tracing::debug!(viewport_width = viewport_width, "initializing sidepanes");
    SidepanesProvider::new(config, viewport_width)
}
