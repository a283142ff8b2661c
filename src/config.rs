use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

/// Binarization threshold used when none is given explicitly
pub const DEFAULT_THRESHOLD: u8 = 128;

const MAX_MODULE_WIDTH: usize = 32;
const MAX_QUIET_ZONE: usize = 1024;
const MAX_BAR_HEIGHT: usize = 4096;

// Threshold 0 would classify every pixel as light.
fn clamp_threshold(value: u8) -> u8 {
    value.max(1)
}

fn clamp_module_width(value: usize) -> usize {
    value.clamp(1, MAX_MODULE_WIDTH)
}

fn clamp_quiet_zone(value: usize) -> usize {
    value.min(MAX_QUIET_ZONE)
}

fn clamp_bar_height(value: usize) -> usize {
    value.clamp(1, MAX_BAR_HEIGHT)
}

static THRESHOLD: OnceLock<u8> = OnceLock::new();

pub(crate) fn threshold() -> u8 {
    *THRESHOLD.get_or_init(|| clamp_threshold(parse_env_u8("EAN_THRESHOLD", DEFAULT_THRESHOLD)))
}

static MODULE_WIDTH: OnceLock<usize> = OnceLock::new();

pub(crate) fn module_width() -> usize {
    *MODULE_WIDTH.get_or_init(|| clamp_module_width(parse_env_usize("EAN_MODULE_WIDTH", 3)))
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

pub(crate) fn quiet_zone() -> usize {
    *QUIET_ZONE.get_or_init(|| clamp_quiet_zone(parse_env_usize("EAN_QUIET_ZONE", 30)))
}

static BAR_HEIGHT: OnceLock<usize> = OnceLock::new();

pub(crate) fn bar_height() -> usize {
    *BAR_HEIGHT.get_or_init(|| clamp_bar_height(parse_env_usize("EAN_BAR_HEIGHT", 100)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns its variable so parallel tests never race on the same name.
    fn with_var<T>(name: &str, value: &str, f: impl FnOnce() -> T) -> T {
        // SAFETY: the variable name is unique to one test and read only by it.
        unsafe { std::env::set_var(name, value) };
        let out = f();
        unsafe { std::env::remove_var(name) };
        out
    }

    #[test]
    fn test_parse_env_usize() {
        assert_eq!(parse_env_usize("RUST_EAN_TEST_UNSET_USIZE", 7), 7);
        assert_eq!(
            with_var("RUST_EAN_TEST_USIZE_OK", " 12 ", || {
                parse_env_usize("RUST_EAN_TEST_USIZE_OK", 7)
            }),
            12
        );
        assert_eq!(
            with_var("RUST_EAN_TEST_USIZE_GARBAGE", "wide", || {
                parse_env_usize("RUST_EAN_TEST_USIZE_GARBAGE", 7)
            }),
            7
        );
        assert_eq!(
            with_var("RUST_EAN_TEST_USIZE_NEG", "-3", || {
                parse_env_usize("RUST_EAN_TEST_USIZE_NEG", 7)
            }),
            7
        );
    }

    #[test]
    fn test_parse_env_u8() {
        assert_eq!(
            with_var("RUST_EAN_TEST_U8_OK", "90", || parse_env_u8("RUST_EAN_TEST_U8_OK", 128)),
            90
        );
        assert_eq!(
            with_var("RUST_EAN_TEST_U8_OVERFLOW", "256", || {
                parse_env_u8("RUST_EAN_TEST_U8_OVERFLOW", 128)
            }),
            128
        );
        assert_eq!(
            with_var("RUST_EAN_TEST_U8_GARBAGE", "dark", || {
                parse_env_u8("RUST_EAN_TEST_U8_GARBAGE", 128)
            }),
            128
        );
    }

    #[test]
    fn test_threshold_floor() {
        assert_eq!(clamp_threshold(0), 1);
        assert_eq!(clamp_threshold(1), 1);
        assert_eq!(clamp_threshold(255), 255);
    }

    #[test]
    fn test_render_clamps() {
        assert_eq!(clamp_module_width(0), 1);
        assert_eq!(clamp_module_width(32), 32);
        assert_eq!(clamp_module_width(33), 32);

        assert_eq!(clamp_quiet_zone(0), 0);
        assert_eq!(clamp_quiet_zone(1024), 1024);
        assert_eq!(clamp_quiet_zone(1025), 1024);

        assert_eq!(clamp_bar_height(0), 1);
        assert_eq!(clamp_bar_height(4096), 4096);
        assert_eq!(clamp_bar_height(4097), 4096);
    }

    #[test]
    fn test_garbage_module_width_falls_back_to_default() {
        let width = with_var("RUST_EAN_TEST_MODULE_WIDTH", "0x10", || {
            clamp_module_width(parse_env_usize("RUST_EAN_TEST_MODULE_WIDTH", 3))
        });
        assert_eq!(width, 3);
        let width = with_var("RUST_EAN_TEST_MODULE_WIDTH_ZERO", "0", || {
            clamp_module_width(parse_env_usize("RUST_EAN_TEST_MODULE_WIDTH_ZERO", 3))
        });
        assert_eq!(width, 1);
    }
}
