//! Constants of the reference installation.
//!
//! Single source of truth for defaults; the configuration layer falls back
//! to these when a value is omitted.

/// Default simulation frequency (ticks per second).
pub const DEFAULT_SIMULATION_FREQUENCY_HZ: u32 = 50;

/// Block device of the USB stick slot on the reference board.
pub const DEFAULT_MEDIA_DEVICE: &str =
    "/dev/disk/by-path/platform-3f980000.usb-usb-0:1.4:1.0-scsi-0:0:0:0-part1";

/// Mount point for the media device, relative to the install directory.
pub const DEFAULT_MOUNT_DIR: &str = "media";

/// External media player binary.
pub const DEFAULT_PLAYER: &str = "/usr/bin/mplayer";

/// Upper bound for every external command (mount, umount, process stop).
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 1000;

/// Root of the audio assets, relative to the install directory.
pub const DEFAULT_SOUNDS_DIR: &str = "sounds";

/// Service name used in logs.
pub const DEFAULT_SERVICE_NAME: &str = "car_console";

/// Root of the Linux sysfs GPIO interface.
pub const SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";

/// File extensions (lowercase) the media player is fed.
pub const MEDIA_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_consistent() {
        assert!(DEFAULT_SIMULATION_FREQUENCY_HZ > 0);
        assert!(DEFAULT_COMMAND_TIMEOUT_MS > 0);
        assert!(DEFAULT_MEDIA_DEVICE.starts_with("/dev/"));
        assert!(MEDIA_EXTENSIONS.iter().all(|e| e.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())));
    }
}
