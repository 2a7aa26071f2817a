//! 商品列表过滤参数

use std::collections::HashMap;

/// 商品列表过滤条件
///
/// `pid` 与 `name` 过滤商品行；`vid` 不过滤商品，只决定每个商品挂载哪一个变体。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub pid: Option<String>,
    pub name: Option<String>,
    pub vid: Option<String>,
}

impl ProductFilter {
    pub const PID: &'static str = "pid";
    pub const NAME: &'static str = "name";
    pub const VID: &'static str = "vid";

    /// 从查询参数构建，未识别的键和空值被忽略
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let take = |key: &str| {
            params
                .get(key)
                .filter(|value| !value.is_empty())
                .cloned()
        };

        Self {
            pid: take(Self::PID),
            name: take(Self::NAME),
            vid: take(Self::VID),
        }
    }

    pub fn with_pid(mut self, pid: impl Into<String>) -> Self {
        self.pid = Some(pid.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_vid(mut self, vid: impl Into<String>) -> Self {
        self.vid = Some(vid.into());
        self
    }

    /// 按参数名取值
    pub fn value(&self, key: &str) -> Option<&str> {
        match key {
            Self::PID => self.pid.as_deref(),
            Self::NAME => self.name.as_deref(),
            Self::VID => self.vid.as_deref(),
            _ => None,
        }
    }
}
