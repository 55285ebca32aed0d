//! Built-in configuration and its process-wide accessor.

use crate::domain::{AppConfig, Mode, VideoTypeEntry};
use once_cell::sync::Lazy;

/// Shipped mode.
pub const DEFAULT_MODE: Mode = Mode::Simple;

/// Shipped categories as `(value, label)`, in display order.
pub const DEFAULT_VIDEO_TYPES: &[(&str, &str)] = &[
    ("jk", "JK制服"),
    ("YuMeng", "远梦"),
    ("NvDa", "女大"),
    ("NvGao", "女高"),
    ("ReWu", "热舞"),
    ("QingCun", "清纯"),
    ("YuZu", "玉足"),
    ("SheJie", "蛇姐"),
    ("ChuanDa", "穿搭"),
    ("GaoZhiLiangXiaoJieJie", "高质量"),
    ("HanFu", "汉服"),
    ("HeiSi", "黑丝"),
    ("BianZhuang", "变装"),
    ("LuoLi", "萝莉"),
    ("TianMei", "甜妹"),
    ("BaiSi", "白丝"),
];

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let video_types = DEFAULT_VIDEO_TYPES
        .iter()
        .map(|(value, label)| VideoTypeEntry::new(*value, *label))
        .collect();
    AppConfig::new(DEFAULT_MODE, video_types)
});

/// The built-in configuration. Initialised on first call, then shared read-only.
pub fn get_config() -> &'static AppConfig {
    &CONFIG
}
