//! Plugin activation: configuration dispatch to exactly one strategy
//!
//! One activation per build. The configured strategy either yields a version,
//! which is written to the host package model, or fails; failures are
//! reported on the host's output channel and returned to abort the build.

use crate::config::manifest::Manifest;
use crate::config::version_config::{VersionSource, CONFIG_SECTION};
use crate::core::styles::StyleRole;
use crate::plugin::error::{VersionError, VersionResult};
use crate::plugin::traits::{PackageHost, Plugin, PluginIo};
use crate::plugin::types::{ActivationState, PluginInfo, ResolvedVersion};
use crate::strategy::file::resolve_file_version;
use crate::strategy::git_tag::{resolve_git_tag_version, GitCommand, SystemGit};
use crate::strategy::init::{locate_init_file, read_init_version};

/// Prefix of every line the plugin writes
pub const PLUGIN_NAME: &str = "poetry-version";

/// The dynamic version plugin
pub struct VersionPlugin {
    git: Box<dyn GitCommand>,
}

impl VersionPlugin {
    pub fn new() -> Self {
        Self::with_git_command(Box::new(SystemGit))
    }

    /// Use a custom git runner for the git-tag strategy
    pub fn with_git_command(git: Box<dyn GitCommand>) -> Self {
        Self { git }
    }

    /// Resolve the project's version and record it on `host`.
    pub fn resolve(
        &self,
        manifest: &Manifest,
        host: &mut dyn PackageHost,
        io: &mut dyn PluginIo,
    ) -> VersionResult<Option<ResolvedVersion>> {
        let mut state = StateTracker::new();
        let mut reporter = Reporter::new(io);

        let config = match manifest.version_config() {
            Ok(Some(config)) => config,
            Ok(None) => {
                let section = reporter.emphasis(&format!("[tool.{}]", CONFIG_SECTION));
                reporter.line(&format!(
                    "No section {} found in pyproject.toml, not extracting dynamic version",
                    section
                ));
                state.advance(ActivationState::Terminal);
                return Ok(None);
            }
            Err(e) => return Err(fail(&mut state, &mut reporter, e)),
        };
        state.advance(ActivationState::ConfigLoaded);
        log::debug!("Dynamic version source: {}", config.source);

        match self.run_strategy(&config.source, manifest, host, &mut reporter) {
            Ok(version) => {
                state.advance(resolved_state(&config.source));
                host.set_version(&version);
                state.advance(ActivationState::Terminal);
                Ok(Some(ResolvedVersion {
                    version,
                    source: config.source.name(),
                }))
            }
            Err(e) => Err(fail(&mut state, &mut reporter, e)),
        }
    }

    fn run_strategy(
        &self,
        source: &VersionSource,
        manifest: &Manifest,
        host: &dyn PackageHost,
        reporter: &mut Reporter<'_>,
    ) -> VersionResult<String> {
        let root = manifest.project_root();

        match source {
            VersionSource::Init => {
                let mut facts = manifest.package_facts()?;
                if let Some(name) = host.package_name() {
                    facts.name = Some(name.to_string());
                }
                let init_path = locate_init_file(&root, &facts)?;
                reporter.line(&format!(
                    "Using __init__.py file at {} for dynamic version",
                    init_path.display()
                ));

                let version = read_init_version(&root.join(&init_path), &init_path)?;
                let shown = reporter.emphasis(&version);
                reporter.line(&format!(
                    "Setting package dynamic version to __version__ variable from __init__.py: {}",
                    shown
                ));
                Ok(version)
            }
            VersionSource::GitTag => {
                let tag = resolve_git_tag_version(self.git.as_ref(), &root)?;
                let shown = reporter.emphasis(&tag);
                reporter.line(&format!("Git tag found, setting dynamic version to: {}", shown));
                Ok(tag)
            }
            VersionSource::File { path, pattern } => {
                let version = resolve_file_version(&root, path, pattern.as_deref())?;
                let shown = reporter.emphasis(&version);
                reporter.line(&format!(
                    "Setting package dynamic version from file {}: {}",
                    path.display(),
                    shown
                ));
                Ok(version)
            }
        }
    }
}

impl Default for VersionPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for VersionPlugin {
    fn plugin_info(&self) -> PluginInfo {
        PluginInfo {
            name: PLUGIN_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Dynamic package version from __init__.py, git tag or file".to_string(),
            api_version: crate::core::version::get_api_version(),
            config_section: format!("tool.{}", CONFIG_SECTION),
        }
    }

    fn activate(
        &self,
        manifest: &Manifest,
        host: &mut dyn PackageHost,
        io: &mut dyn PluginIo,
    ) -> VersionResult<Option<ResolvedVersion>> {
        self.resolve(manifest, host, io)
    }
}

fn resolved_state(source: &VersionSource) -> ActivationState {
    match source {
        VersionSource::Init => ActivationState::InitResolved,
        VersionSource::GitTag => ActivationState::GitResolved,
        VersionSource::File { .. } => ActivationState::FileResolved,
    }
}

fn fail(
    state: &mut StateTracker,
    reporter: &mut Reporter<'_>,
    error: VersionError,
) -> VersionError {
    state.advance(ActivationState::Failed);
    reporter.error(&error.to_string());
    state.advance(ActivationState::Terminal);
    error
}

struct StateTracker {
    state: ActivationState,
}

impl StateTracker {
    fn new() -> Self {
        Self {
            state: ActivationState::Idle,
        }
    }

    fn advance(&mut self, next: ActivationState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid activation transition {:?} -> {:?}",
            self.state,
            next
        );
        log::debug!("Activation state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

impl Drop for StateTracker {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            debug_assert!(
                self.state.is_terminal(),
                "activation ended in state {:?}",
                self.state
            );
        }
    }
}

/// Prefixes lines with the plugin name and applies styling when allowed
struct Reporter<'a> {
    io: &'a mut dyn PluginIo,
}

impl<'a> Reporter<'a> {
    fn new(io: &'a mut dyn PluginIo) -> Self {
        Self { io }
    }

    fn emphasis(&self, text: &str) -> String {
        StyleRole::Emphasis.paint(text, self.io.is_decorated())
    }

    fn prefix(&self) -> String {
        StyleRole::Prefix.paint(PLUGIN_NAME, self.io.is_decorated())
    }

    fn line(&mut self, message: &str) {
        let line = format!("{}: {}", self.prefix(), message);
        self.io.write_line(&line);
    }

    fn error(&mut self, message: &str) {
        let line = format!(
            "{}: {}",
            self.prefix(),
            StyleRole::Error.paint(message, self.io.is_decorated())
        );
        self.io.write_error_line(&line);
    }
}
