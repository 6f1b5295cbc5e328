//! Media subsystem on top of the host's mount tools and a player process.

use super::discovery::find_media_files;
use super::{MediaError, MediaSubsystem};
use car_common::config::MediaConfig;
use nix::fcntl::{FcntlArg, OFlag, fcntl};
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const MOUNT: &str = "/bin/mount";
const UMOUNT: &str = "/bin/umount";
const MOUNT_OPTIONS: &str = "defaults,noexec,ro,errors=continue";

/// Poll interval while waiting for a child to exit.
const WAIT_POLL: Duration = Duration::from_millis(5);

/// A running player.
pub struct PlayerProcess {
    child: Child,
    stdin: Option<ChildStdin>,
}

impl PlayerProcess {
    /// OS process id.
    pub fn id(&self) -> u32 {
        self.child.id()
    }
}

/// [`MediaSubsystem`] backed by `mount`/`umount` and an mplayer-style
/// player reading key presses on stdin.
pub struct SystemMedia {
    config: MediaConfig,
}

impl SystemMedia {
    /// Create the subsystem and its mount directory.
    pub fn new(config: MediaConfig) -> Result<Self, MediaError> {
        fs::create_dir_all(&config.mount_dir).map_err(|source| MediaError::Setup {
            path: config.mount_dir.clone(),
            source,
        })?;
        info!(
            "Media: device={}, mount_dir={}, player={}",
            config.device.display(),
            config.mount_dir.display(),
            config.player.display()
        );
        Ok(Self { config })
    }

    /// Build a privileged command, prefixed with `sudo` when configured.
    fn privileged(&self, program: &str) -> Command {
        if self.config.use_sudo {
            let mut cmd = Command::new("sudo");
            cmd.arg(program);
            cmd
        } else {
            Command::new(program)
        }
    }
}

impl MediaSubsystem for SystemMedia {
    type Player = PlayerProcess;

    fn probe(&self) -> bool {
        self.config.device.exists()
    }

    fn mount(&mut self) -> bool {
        let mut cmd = self.privileged(MOUNT);
        cmd.args([OsStr::new("-o"), OsStr::new(MOUNT_OPTIONS)])
            .arg(&self.config.device)
            .arg(&self.config.mount_dir);
        run_with_timeout(cmd, self.config.command_timeout())
    }

    fn unmount(&mut self) -> bool {
        let mut cmd = self.privileged(UMOUNT);
        cmd.arg("-f").arg(&self.config.mount_dir);
        run_with_timeout(cmd, self.config.command_timeout())
    }

    fn media_files(&self) -> Vec<PathBuf> {
        find_media_files(&self.config.mount_dir)
    }

    fn launch(&mut self, files: &[PathBuf]) -> Result<PlayerProcess, MediaError> {
        let mut cmd = Command::new(&self.config.player);
        cmd.args(["-loop", "0"])
            .args(files)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        debug!("Executing in background: {:?}", cmd);

        let mut child = cmd.spawn().map_err(|source| MediaError::Spawn {
            program: self.config.player.display().to_string(),
            source,
        })?;

        let stdin = child.stdin.take();
        if let Some(pipe) = &stdin {
            if let Err(e) = set_nonblocking(pipe) {
                warn!("Cannot make player stdin non-blocking, stopping pid {}", child.id());
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        }

        debug!("Player started (pid {}, {} files)", child.id(), files.len());
        Ok(PlayerProcess { child, stdin })
    }

    fn has_exited(&mut self, player: &mut PlayerProcess) -> bool {
        match player.child.try_wait() {
            Ok(Some(status)) => {
                debug!("Player {} exited: {}", player.id(), status);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Cannot poll player {}: {}", player.id(), e);
                true
            }
        }
    }

    fn write(&mut self, player: &mut PlayerProcess, text: &str) -> Result<(), MediaError> {
        if text.is_empty() {
            return Ok(());
        }
        let stdin = player.stdin.as_mut().ok_or(MediaError::ChannelClosed)?;
        stdin.write_all(text.as_bytes()).map_err(MediaError::Write)?;
        stdin.flush().map_err(MediaError::Write)
    }

    fn terminate(&mut self, mut player: PlayerProcess) {
        let pid = player.id();
        drop(player.stdin.take());

        if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
            debug!("SIGTERM to player {} failed: {}", pid, e);
        }
        if wait_timeout(&mut player.child, self.config.command_timeout()).is_none() {
            warn!("Player {} ignored SIGTERM, killing", pid);
            if let Err(e) = player.child.kill() {
                debug!("Kill of player {} failed: {}", pid, e);
            }
            if let Err(e) = player.child.wait() {
                warn!("Cannot reap player {}: {}", pid, e);
            }
        }
        debug!("Player {} stopped", pid);
    }
}

/// Make writes to `pipe` fail instead of blocking when it is full.
fn set_nonblocking(pipe: &ChildStdin) -> Result<(), MediaError> {
    let flags = OFlag::from_bits_truncate(fcntl(pipe, FcntlArg::F_GETFL)?);
    fcntl(pipe, FcntlArg::F_SETFL(flags | OFlag::O_NONBLOCK))?;
    Ok(())
}

/// Run `cmd` to completion within `timeout`. `true` on exit status 0.
///
/// On timeout the child is killed and reaped.
fn run_with_timeout(mut cmd: Command, timeout: Duration) -> bool {
    cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
    debug!("Executing in foreground: {:?}", cmd);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            warn!("Cannot execute {:?}: {}", cmd.get_program(), e);
            return false;
        }
    };

    match wait_timeout(&mut child, timeout) {
        Some(status) => status.success(),
        None => {
            warn!("{:?} timed out after {:?}", cmd.get_program(), timeout);
            let _ = child.kill();
            let _ = child.wait();
            false
        }
    }
}

/// Poll `child` until it exits or `timeout` elapses.
fn wait_timeout(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => {}
            Err(e) => {
                warn!("Cannot wait for child {}: {}", child.id(), e);
                return None;
            }
        }
        if Instant::now() >= deadline {
            return None;
        }
        std::thread::sleep(WAIT_POLL);
    }
}
