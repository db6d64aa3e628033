//! 时间戳序列化工具
//!
//! - 序列化: `Option<DateTime<Utc>>` -> RFC3339 字符串（秒精度，`Z` 结尾）
//! - 反序列化: RFC3339 字符串或 Unix 秒级时间戳 -> `Option<DateTime<Utc>>`
//!
//! 对象存储的时间戳统一按 UTC 处理，展示层负责本地化。

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 序列化为 RFC3339 字符串
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&to_rfc3339(dt)),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：RFC3339 字符串或 Unix 秒级时间戳
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OptionalTimestamp {
        String(String),
        Seconds(i64),
    }

    match Option::<OptionalTimestamp>::deserialize(deserializer)? {
        Some(OptionalTimestamp::String(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        Some(OptionalTimestamp::Seconds(secs)) => DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
        None => Ok(None),
    }
}

/// 构造 UTC 时间（秒 + 纳秒），越界时返回 `None`
pub fn from_epoch_parts(secs: i64, nanos: u32) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, nanos)
}

/// 统一的 RFC3339 输出格式
pub fn to_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
