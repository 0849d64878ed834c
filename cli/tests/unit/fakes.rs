//! In-memory host used by the service tests.
//!
//! `FakeHost` implements every port behind `HostSystem` against a small
//! simulated package database, unit table and filesystem. Every mutating
//! call is recorded together with the elevation it was given.

#![allow(dead_code, clippy::expect_used)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use zbx_provision::application::ports::{
    Download, Downloader, PackageManager, PrivilegeProbe, ProgressReporter, ServiceManager,
    SystemFiles, ToolProbe,
};
use zbx_provision::domain::{Elevation, PackageState};

/// A mutating (or fetching) call observed by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Stop(String),
    Disable(String),
    Purge(String),
    RemoveFile(PathBuf),
    RemoveDir(PathBuf),
    Fetch(String),
    InstallFile(String),
    RefreshIndex,
    Install(Vec<String>),
    Place(PathBuf),
    Enable(String),
    Restart(String),
}

#[derive(Default)]
struct State {
    packages: HashMap<String, PackageState>,
    registered: HashSet<String>,
    files: HashMap<PathBuf, u64>,
    staged: HashMap<PathBuf, u64>,
    enabled: HashSet<String>,
    active: HashSet<String>,
    calls: Vec<Call>,
    elevations: Vec<Elevation>,
}

pub struct FakeHost {
    superuser: bool,
    tools: HashSet<String>,
    downloads: HashMap<String, u64>,
    failing: HashSet<&'static str>,
    release_package: String,
    placed_target_missing: bool,
    placed_target_truncated: bool,
    state: Mutex<State>,
}

impl FakeHost {
    /// A root host with nothing installed and no downloads available.
    pub fn new() -> Self {
        Self {
            superuser: true,
            tools: HashSet::new(),
            downloads: HashMap::new(),
            failing: HashSet::new(),
            release_package: "zabbix-release".to_owned(),
            placed_target_missing: false,
            placed_target_truncated: false,
            state: Mutex::new(State::default()),
        }
    }

    pub fn not_root(mut self) -> Self {
        self.superuser = false;
        self
    }

    pub fn with_tool(mut self, tool: &str) -> Self {
        self.tools.insert(tool.to_owned());
        self
    }

    pub fn with_package(self, name: &str, state: PackageState) -> Self {
        self.lock().packages.insert(name.to_owned(), state);
        self
    }

    pub fn with_registered(self, name: &str) -> Self {
        self.lock().registered.insert(name.to_owned());
        self
    }

    pub fn with_file(self, path: &str, bytes: u64) -> Self {
        self.lock().files.insert(PathBuf::from(path), bytes);
        self
    }

    pub fn with_unit(self, unit: &str, enabled: bool, active: bool) -> Self {
        {
            let mut state = self.lock();
            if enabled {
                state.enabled.insert(unit.to_owned());
            }
            if active {
                state.active.insert(unit.to_owned());
            }
        }
        self
    }

    /// Serve `bytes` bytes for `url`. Unknown URLs fail like an HTTP 404.
    pub fn with_download(mut self, url: &str, bytes: u64) -> Self {
        self.downloads.insert(url.to_owned(), bytes);
        self
    }

    /// Make the named operation fail, e.g. `"purge"` or `"restart"`.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    /// `place_file` succeeds but the target does not exist afterwards.
    pub fn losing_placed_files(mut self) -> Self {
        self.placed_target_missing = true;
        self
    }

    /// `place_file` succeeds but leaves a zero-length target.
    pub fn truncating_placed_files(mut self) -> Self {
        self.placed_target_truncated = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn elevations(&self) -> Vec<Elevation> {
        self.lock().elevations.clone()
    }

    pub fn package(&self, name: &str) -> PackageState {
        self.lock()
            .packages
            .get(name)
            .cloned()
            .unwrap_or(PackageState::NotInstalled)
    }

    pub fn file(&self, path: &str) -> Option<u64> {
        self.lock().files.get(Path::new(path)).copied()
    }

    pub fn is_unit_active(&self, unit: &str) -> bool {
        self.lock().active.contains(unit)
    }

    pub fn is_unit_enabled(&self, unit: &str) -> bool {
        self.lock().enabled.contains(unit)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake host state poisoned")
    }

    fn record(&self, elevation: Option<&Elevation>, call: Call) -> Result<()> {
        let mut state = self.lock();
        if let Some(e) = elevation {
            state.elevations.push(e.clone());
        }
        state.calls.push(call);
        Ok(())
    }

    fn check(&self, operation: &'static str) -> Result<()> {
        if self.failing.contains(operation) {
            anyhow::bail!("{operation} failed on fake host");
        }
        Ok(())
    }
}

impl PrivilegeProbe for FakeHost {
    fn is_superuser(&self) -> bool {
        self.superuser
    }
}

impl ToolProbe for FakeHost {
    fn is_available(&self, command: &str) -> bool {
        self.tools.contains(command)
    }
}

impl PackageManager for FakeHost {
    async fn state(&self, package: &str) -> Result<PackageState> {
        self.check("state")?;
        Ok(self.package(package))
    }

    async fn is_registered(&self, package: &str) -> Result<bool> {
        self.check("is_registered")?;
        Ok(self.lock().registered.contains(package))
    }

    async fn install_file(&self, elevation: &Elevation, path: &Path) -> Result<()> {
        self.record(Some(elevation), Call::InstallFile(path.display().to_string()))?;
        self.check("install_file")?;
        let mut state = self.lock();
        state.registered.insert(self.release_package.clone());
        state
            .packages
            .insert(self.release_package.clone(), PackageState::Installed);
        Ok(())
    }

    async fn refresh_index(&self, elevation: &Elevation) -> Result<()> {
        self.record(Some(elevation), Call::RefreshIndex)?;
        self.check("refresh_index")
    }

    async fn install(&self, elevation: &Elevation, packages: &[&str]) -> Result<()> {
        let names: Vec<String> = packages.iter().map(|p| (*p).to_owned()).collect();
        self.record(Some(elevation), Call::Install(names.clone()))?;
        self.check("install")?;
        let mut state = self.lock();
        for name in names {
            state.packages.insert(name, PackageState::Installed);
        }
        Ok(())
    }

    async fn purge(&self, elevation: &Elevation, package: &str) -> Result<()> {
        self.record(Some(elevation), Call::Purge(package.to_owned()))?;
        self.check("purge")?;
        self.lock().packages.remove(package);
        Ok(())
    }
}

impl ServiceManager for FakeHost {
    async fn stop(&self, elevation: &Elevation, unit: &str) -> Result<()> {
        self.record(Some(elevation), Call::Stop(unit.to_owned()))?;
        self.check("stop")?;
        self.lock().active.remove(unit);
        Ok(())
    }

    async fn disable(&self, elevation: &Elevation, unit: &str) -> Result<()> {
        self.record(Some(elevation), Call::Disable(unit.to_owned()))?;
        self.check("disable")?;
        self.lock().enabled.remove(unit);
        Ok(())
    }

    async fn enable(&self, elevation: &Elevation, unit: &str) -> Result<()> {
        self.record(Some(elevation), Call::Enable(unit.to_owned()))?;
        self.check("enable")?;
        self.lock().enabled.insert(unit.to_owned());
        Ok(())
    }

    async fn restart(&self, elevation: &Elevation, unit: &str) -> Result<()> {
        self.record(Some(elevation), Call::Restart(unit.to_owned()))?;
        self.check("restart")?;
        self.lock().active.insert(unit.to_owned());
        Ok(())
    }

    async fn is_enabled(&self, unit: &str) -> Result<bool> {
        Ok(self.lock().enabled.contains(unit))
    }

    async fn is_active(&self, unit: &str) -> Result<bool> {
        Ok(self.lock().active.contains(unit))
    }
}

impl Downloader for FakeHost {
    async fn fetch(&self, url: &str, file_name: &str) -> Result<Download> {
        self.record(None, Call::Fetch(url.to_owned()))?;
        self.check("fetch")?;
        let Some(&bytes) = self.downloads.get(url) else {
            anyhow::bail!("Download failed: HTTP 404");
        };
        let path = PathBuf::from("/fake-tmp").join(file_name);
        self.lock().staged.insert(path.clone(), bytes);
        Ok(Download {
            path,
            bytes,
            guard: Box::new(()),
        })
    }
}

impl SystemFiles for FakeHost {
    async fn place_file(&self, elevation: &Elevation, source: &Path, target: &Path) -> Result<()> {
        self.record(Some(elevation), Call::Place(target.to_path_buf()))?;
        self.check("place_file")?;
        let mut state = self.lock();
        let bytes = state.staged.get(source).copied().unwrap_or(0);
        if self.placed_target_missing {
            state.files.remove(target);
        } else if self.placed_target_truncated {
            state.files.insert(target.to_path_buf(), 0);
        } else {
            state.files.insert(target.to_path_buf(), bytes);
        }
        Ok(())
    }

    async fn remove_file(&self, elevation: &Elevation, path: &Path) -> Result<()> {
        self.record(Some(elevation), Call::RemoveFile(path.to_path_buf()))?;
        self.check("remove_file")?;
        self.lock().files.remove(path);
        Ok(())
    }

    async fn remove_dir_all(&self, elevation: &Elevation, path: &Path) -> Result<()> {
        self.record(Some(elevation), Call::RemoveDir(path.to_path_buf()))?;
        self.check("remove_dir_all")
    }

    fn file_size(&self, path: &Path) -> Result<Option<u64>> {
        self.check("file_size")?;
        Ok(self.lock().files.get(path).copied())
    }
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Progress event captured by `RecordingReporter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Step(String),
    Success(String),
    Skip(String),
    Warn(String),
}

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("reporter poisoned").clone()
    }

    pub fn skips(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Skip(_)))
            .count()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Warn(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().expect("reporter poisoned").push(event);
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.push(Event::Step(message.to_owned()));
    }

    fn success(&self, message: &str) {
        self.push(Event::Success(message.to_owned()));
    }

    fn skip(&self, message: &str) {
        self.push(Event::Skip(message.to_owned()));
    }

    fn warn(&self, message: &str) {
        self.push(Event::Warn(message.to_owned()));
    }
}
