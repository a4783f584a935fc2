//! Type definitions for the plugin
//!
//! Plugin metadata, the outcome of a successful activation and the states an
//! activation moves through.

use serde::Serialize;

/// Plugin metadata information
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub api_version: u32,
    /// Manifest section the plugin reads its configuration from
    pub config_section: String,
}

/// The version an activation produced and the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    pub version: String,
    pub source: &'static str,
}

/// Activation lifecycle
///
/// `Idle → ConfigLoaded → {InitResolved | GitResolved | FileResolved | Failed} → Terminal`.
/// An absent configuration section goes straight from `Idle` to `Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    Idle,
    ConfigLoaded,
    InitResolved,
    GitResolved,
    FileResolved,
    Failed,
    Terminal,
}

impl ActivationState {
    pub fn can_transition_to(self, next: ActivationState) -> bool {
        use ActivationState::*;
        matches!(
            (self, next),
            (Idle, ConfigLoaded)
                | (Idle, Failed)
                | (Idle, Terminal)
                | (ConfigLoaded, InitResolved)
                | (ConfigLoaded, GitResolved)
                | (ConfigLoaded, FileResolved)
                | (ConfigLoaded, Failed)
                | (InitResolved, Terminal)
                | (GitResolved, Terminal)
                | (FileResolved, Terminal)
                | (Failed, Terminal)
        )
    }

    pub fn is_terminal(self) -> bool {
        self == ActivationState::Terminal
    }
}
