//! Compression tunables built from bounded settings.
//!
//! Each tunable is a [`BoundedSetting`] with the range the corresponding encoder accepts. A
//! complete configuration is assembled in layers: start from [`CompressConfig::default`] (or a
//! preset), then [`CompressConfig::merge_from`] a configuration file layer, then the command line
//! layer. Only values a layer explicitly set override earlier layers.
//!
//! # Examples
//!
//! ```rust
//! use endiscope::config::CompressConfig;
//!
//! let mut effective = CompressConfig::default();
//!
//! let mut cli = CompressConfig::default();
//! cli.lzma.dict_size.set(1 << 24);
//!
//! effective.merge_from(&cli);
//! assert_eq!(effective.lzma.dict_size.get(), 1 << 24);
//! assert_eq!(effective.zlib.mem_level.get(), 8);
//! ```

use log::debug;

use crate::utils::BoundedSetting;

/// Copies every set field of `$src` into `$dst`, logging each override.
macro_rules! merge_fields {
    ($dst:expr, $src:expr, $section:literal: $($field:ident),+ $(,)?) => {{
        let mut changed = 0_usize;
        $(
            if $dst.$field.assign_from(&$src.$field) {
                debug!(
                    "config override {}.{} = {}",
                    $section,
                    stringify!($field),
                    $dst.$field
                );
                changed += 1;
            }
        )+
        changed
    }};
}

/// LZMA encoder parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LzmaConfig {
    /// Number of low position bits used as context (`pb`).
    pub pos_bits: BoundedSetting<2, 0, 4>,
    /// Number of low position bits used for literal coding (`lp`).
    pub lit_pos_bits: BoundedSetting<0, 0, 4>,
    /// Number of high bits of the previous byte used for literal coding (`lc`).
    pub lit_context_bits: BoundedSetting<3, 0, 8>,
    /// Dictionary size in bytes.
    pub dict_size: BoundedSetting<{ 1 << 22 }, 1, { 1 << 30 }>,
    /// Match finder "nice length".
    pub num_fast_bytes: BoundedSetting<64, 5, 273>,
}

impl LzmaConfig {
    /// Returns every field to its unset default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Layers `other` on top of `self`. Returns the number of overridden fields.
    pub fn merge_from(&mut self, other: &Self) -> usize {
        merge_fields!(self, other, "lzma":
            pos_bits, lit_pos_bits, lit_context_bits, dict_size, num_fast_bytes)
    }
}

/// Deflate encoder parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZlibConfig {
    /// Memory used for internal compression state.
    pub mem_level: BoundedSetting<8, 1, 9>,
    /// Base-two logarithm of the window size.
    pub window_bits: BoundedSetting<15, 9, 15>,
    /// Deflate strategy (0 default, 1 filtered, 2 huffman only, 3 rle, 4 fixed).
    pub strategy: BoundedSetting<0, 0, 4>,
}

impl ZlibConfig {
    /// Returns every field to its unset default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Layers `other` on top of `self`. Returns the number of overridden fields.
    pub fn merge_from(&mut self, other: &Self) -> usize {
        merge_fields!(self, other, "zlib": mem_level, window_bits, strategy)
    }
}

/// All compression tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressConfig {
    /// LZMA parameters.
    pub lzma: LzmaConfig,
    /// Deflate parameters.
    pub zlib: ZlibConfig,
}

impl CompressConfig {
    /// Creates a configuration tuned for speed over ratio.
    #[must_use]
    pub fn fast() -> Self {
        let mut config = Self::default();
        config.lzma.dict_size.set(1 << 16);
        config.lzma.num_fast_bytes.set(16);
        config.zlib.mem_level.set(8);
        config.zlib.window_bits.set(12);
        config
    }

    /// Creates a configuration tuned for ratio over speed.
    #[must_use]
    pub fn best() -> Self {
        let mut config = Self::default();
        config.lzma.dict_size.set(1 << 26);
        config.lzma.num_fast_bytes.set(273);
        config.zlib.mem_level.set(9);
        config.zlib.window_bits.set(15);
        config
    }

    /// Returns every field to its unset default.
    pub fn reset(&mut self) {
        self.lzma.reset();
        self.zlib.reset();
    }

    /// Layers `other` on top of `self`. Returns the number of overridden fields.
    pub fn merge_from(&mut self, other: &Self) -> usize {
        self.lzma.merge_from(&other.lzma) + self.zlib.merge_from(&other.zlib)
    }

    /// Folds several layers, lowest priority first, on top of the defaults.
    #[must_use]
    pub fn layered<'a>(layers: impl IntoIterator<Item = &'a CompressConfig>) -> Self {
        let mut config = Self::default();
        for layer in layers {
            config.merge_from(layer);
        }
        config
    }
}
