//! Configuration structures and loading logic.

mod io;

pub use io::{config_dir, config_path};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use fontpreview_core::SCALABLE_SIZES;

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sizes: SizeConfig,
    pub samples: SampleConfig,
    pub shaping: ShapingConfig,
    pub layout: LayoutConfig,
    pub fonts: FontsConfig,
}

/// Preview size selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeConfig {
    /// Reference sizes shown for scalable fonts (points).
    pub scalable: Vec<u32>,
    /// Device DPI used to convert `scalable` to pixels. Unset when the
    /// surface is already pixel-exact.
    pub dpi: Option<u32>,
    /// Body text size. The default zoom position is the largest preview size
    /// not exceeding it; curated strings are shaped at that size.
    pub body_size: u32,
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            scalable: SCALABLE_SIZES.to_vec(),
            dpi: None,
            body_size: 12,
        }
    }
}

/// Sample text used by the preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Per-script samples, tried in order when building the derived sample.
    pub scripts: Vec<ScriptSample>,
    /// Fixed strings shown at the body size (alphabet, digits, punctuation).
    pub curated: Vec<String>,
    /// Sentence shown at every preview size.
    pub pangram: String,
}

/// A sample string for one writing system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSample {
    /// OpenType script tag (`latn`, `grek`, `cyrl`, ...).
    pub script: String,
    pub sample: String,
}

impl ScriptSample {
    fn new(script: &str, sample: &str) -> Self {
        Self {
            script: script.to_owned(),
            sample: sample.to_owned(),
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            scripts: default_script_samples(),
            curated: vec![
                "abcdefghijklmnopqrstuvwxyz".to_owned(),
                "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_owned(),
                "0123456789.:,;(\"*!?')".to_owned(),
            ],
            pangram: "The quick brown fox jumps over the lazy dog".to_owned(),
        }
    }
}

fn default_script_samples() -> Vec<ScriptSample> {
    vec![
        ScriptSample::new(
            "latn",
            "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZz\
             0123456789ÀàÁáÂâÃãÄäÅåÆæÇçÈèÉéÑñÖöØøÜüß.,;:!?&@",
        ),
        ScriptSample::new(
            "grek",
            "ΑαΒβΓγΔδΕεΖζΗηΘθΙιΚκΛλΜμΝνΞξΟοΠπΡρΣσςΤτΥυΦφΧχΨψΩω",
        ),
        ScriptSample::new(
            "cyrl",
            "АаБбВвГгДдЕеЁёЖжЗзИиЙйКкЛлМмНнОоПпРрСсТтУуФфХхЦцЧчШшЩщЪъЫыЬьЭэЮюЯя",
        ),
        ScriptSample::new("armn", "ԱաԲբԳգԴդԵեԶզԷէԸըԹթԺժԻիԼլ"),
        ScriptSample::new("hebr", "אבגדהוזחטיכלמנסעפצקרשת"),
        ScriptSample::new("arab", "ابتثجحخدذرزسشصضطظعغفقكلمنهوي"),
        ScriptSample::new("deva", "अआइईउऊऋएऐओऔकखगघचछजझटठडढणतथदधनपफबभमयरलवशषसह"),
        ScriptSample::new("thai", "กขฃคฅฆงจฉชซฌญฎฏฐฑฒณดตถทธนบปผฝพฟภมยรลวศษสหฬอฮ"),
        ScriptSample::new("geor", "აბგდევზთიკლმნოპჟრსტუფქღყშჩცძწჭხჯჰ"),
        ScriptSample::new("hang", "가나다라마바사아자차카타파하"),
        ScriptSample::new("hani", "永和九年岁在癸丑暮春之初会于稽山阴兰亭"),
        ScriptSample::new("kana", "あいうえおかきくけこアイウエオカキクケコ"),
    ]
}

/// Text shaping options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingConfig {
    /// OpenType features to enable/disable during shaping.
    ///
    /// Each string is a 4-character feature tag, optionally prefixed with `-`
    /// to disable. Examples: `"kern"`, `"-liga"`.
    pub features: Vec<String>,
    /// Font files consulted for characters the previewed face cannot render.
    /// Runs attributed to these faces are never exposed.
    pub fallback_fonts: Vec<PathBuf>,
}

/// Geometry of the stacked preview layout (pixels).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub border: f32,
    pub step: f32,
    /// Width change below which a resize is ignored.
    pub resize_threshold: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            border: 4.0,
            step: 16.0,
            resize_threshold: 16,
        }
    }
}

impl LayoutConfig {
    /// Horizontal space consumed by margins on both sides.
    pub fn horizontal_margin(&self) -> f32 {
        self.border * 4.0
    }
}

/// Font lookup locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Directories searched in addition to the platform font directories.
    pub extra_dirs: Vec<PathBuf>,
}
